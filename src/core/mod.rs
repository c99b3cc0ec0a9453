//! Core game types and entities

pub mod card;
pub mod catalog;
pub mod effects;
pub mod player;
pub mod store;
pub mod types;

pub use card::{CardInstance, Posture};
pub use catalog::{Catalog, CardKind, CardRecord};
pub use effects::{EffectTag, EffectTarget};
pub use player::Player;
pub use store::InstanceStore;
pub use types::{CardId, CardName, CatalogId, PlayerId, PlayerName};
