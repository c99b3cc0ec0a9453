//! Game state, turn structure, and the command protocol

pub mod actions;
pub mod combat;
pub mod config;
pub mod engine;
pub mod events;
pub mod logger;
pub mod phase;
pub mod setup;
pub mod state;

pub use combat::CombatState;
pub use config::{LifeModel, MatchConfig};
pub use engine::{Command, DuelEngine};
pub use events::{EventKind, GameEvent, GameLog, MatchOutcome};
pub use logger::{GameLogger, OutputMode, VerbosityLevel};
pub use phase::{Phase, TurnStructure};
pub use setup::{start_match, DeckEntry, DeckList};
pub use state::GameState;
