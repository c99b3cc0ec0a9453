//! Azoth duel engine
//!
//! Authoritative model of a two-player card duel: zones, azoth accrual,
//! turn/phase progression, card resolution, combat, and win evaluation.
//! The presentation layer supplies a static card catalog, submits commands,
//! and reads state snapshots plus the append-only event log.

pub mod core;
pub mod error;
pub mod game;
pub mod zones;

pub use error::{EngineError, Result};
