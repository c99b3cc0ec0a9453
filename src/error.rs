//! Error types for the duel engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid deck: {0}")]
    InvalidDeck(String),

    #[error("Card instance not found: {0}")]
    CardNotFound(u32),

    #[error("Player not found: {0}")]
    PlayerNotFound(u32),

    #[error("Invalid zone: {0}")]
    InvalidZone(String),

    #[error("Not player {0}'s turn")]
    NotYourTurn(u32),

    #[error("Wrong phase: expected {expected}, currently {actual}")]
    WrongPhase { expected: String, actual: String },

    #[error("Insufficient azoth: need {need}, have {have}")]
    InsufficientAzoth { need: u8, have: u8 },

    #[error("Illegal attacker: {0}")]
    IllegalAttacker(String),

    #[error("Match is already finished")]
    MatchFinished,

    #[error("Stale command: submitted against version {submitted}, state is at {current}")]
    StaleVersion { submitted: u64, current: u64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
