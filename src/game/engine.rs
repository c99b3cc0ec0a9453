//! Engine facade: the command/result protocol
//!
//! One `DuelEngine` owns the only mutable `GameState` for a match. The
//! presentation layer submits commands and reads snapshots or the event
//! log; it can never alias the live state. Each successful command bumps
//! the state version, which `submit_at` checks for optimistic concurrency
//! when several surfaces drive the same match.

use crate::core::{CardId, Catalog, PlayerId};
use crate::game::logger::GameLogger;
use crate::game::setup::{self, DeckList};
use crate::game::{EventKind, GameEvent, GameState, MatchConfig};
use crate::{EngineError, Result};

/// A player-issued command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PlayCard { player: PlayerId, card: CardId },
    DeclareAttacker { player: PlayerId, card: CardId },
    AdvancePhase { player: PlayerId },
    EndTurn { player: PlayerId },
}

/// Authoritative engine for one match
#[derive(Debug)]
pub struct DuelEngine {
    state: GameState,
    logger: GameLogger,
}

impl DuelEngine {
    /// Initialize a match from two deck lists and a seed
    pub fn start_match(
        catalog: &Catalog,
        deck1: &DeckList,
        deck2: &DeckList,
        seed: u64,
        config: MatchConfig,
    ) -> Result<Self> {
        let state = setup::start_match(catalog, deck1, deck2, seed, config)?;
        Ok(DuelEngine {
            state,
            logger: GameLogger::new(),
        })
    }

    pub fn with_logger(mut self, logger: GameLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn logger(&self) -> &GameLogger {
        &self.logger
    }

    pub fn logger_mut(&mut self) -> &mut GameLogger {
        &mut self.logger
    }

    /// Submit a command; returns the new state snapshot on success
    ///
    /// A rejected command leaves state (and the version counter) untouched.
    pub fn submit(&mut self, command: Command) -> Result<GameState> {
        let log_mark = self.state.log.len();
        let result = match command {
            Command::PlayCard { player, card } => self.state.play_card(player, card),
            Command::DeclareAttacker { player, card } => {
                self.state.declare_attacker(player, card)
            }
            Command::AdvancePhase { player } => self.state.advance_phase(player),
            Command::EndTurn { player } => self.state.end_turn(player),
        };
        match result {
            Ok(()) => {
                self.state.version += 1;
                self.trace_events_from(log_mark);
                Ok(self.state.clone())
            }
            Err(err) => {
                self.logger.minimal(&format!("command rejected: {err}"));
                Err(err)
            }
        }
    }

    /// Submit only if no other command has advanced state since
    /// `expected_version` was read
    pub fn submit_at(&mut self, expected_version: u64, command: Command) -> Result<GameState> {
        if expected_version != self.state.version {
            return Err(EngineError::StaleVersion {
                submitted: expected_version,
                current: self.state.version,
            });
        }
        self.submit(command)
    }

    pub fn play_card(&mut self, player: PlayerId, card: CardId) -> Result<GameState> {
        self.submit(Command::PlayCard { player, card })
    }

    pub fn declare_attacker(&mut self, player: PlayerId, card: CardId) -> Result<GameState> {
        self.submit(Command::DeclareAttacker { player, card })
    }

    pub fn advance_phase(&mut self, player: PlayerId) -> Result<GameState> {
        self.submit(Command::AdvancePhase { player })
    }

    pub fn end_turn(&mut self, player: PlayerId) -> Result<GameState> {
        self.submit(Command::EndTurn { player })
    }

    /// Read-only view of the live state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Detached state snapshot for the presentation layer
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn version(&self) -> u64 {
        self.state.version
    }

    /// Events strictly after `since`; `None` returns the full log
    pub fn log_since(&self, since: Option<u64>) -> &[GameEvent] {
        self.state.log.since(since)
    }

    /// Re-drive the command-level events of a finished (or partial) log
    /// through a fresh engine; with the same seed and config, the result
    /// equals the state the log was taken from.
    pub fn replay(
        catalog: &Catalog,
        deck1: &DeckList,
        deck2: &DeckList,
        seed: u64,
        config: MatchConfig,
        events: &[GameEvent],
    ) -> Result<GameState> {
        let mut engine = Self::start_match(catalog, deck1, deck2, seed, config)?;
        engine
            .logger
            .set_verbosity(crate::game::VerbosityLevel::Silent);
        for event in events {
            match &event.kind {
                EventKind::CardPlayed { player, card, .. } => {
                    engine.play_card(*player, *card)?;
                }
                EventKind::AttackResolved {
                    attacker,
                    attacking_player,
                    ..
                } => {
                    engine.declare_attacker(*attacking_player, *attacker)?;
                }
                EventKind::PhaseAdvanced { player, .. } => {
                    engine.advance_phase(*player)?;
                }
                EventKind::TurnEnded { player } => {
                    engine.end_turn(*player)?;
                }
                _ => {} // resolution records regenerate from the commands
            }
        }
        Ok(engine.snapshot())
    }

    fn trace_events_from(&self, mark: usize) {
        for event in &self.state.log.all()[mark..] {
            match &event.kind {
                EventKind::UnhandledEffect { .. } | EventKind::MatchFinished { .. } => {
                    self.logger.minimal(&event.kind.to_string())
                }
                EventKind::LifeBufferBroken { .. }
                | EventKind::LifeLost { .. }
                | EventKind::LifeGained { .. }
                | EventKind::CardDrawn { .. }
                | EventKind::AzothRefreshed { .. } => {
                    self.logger.verbose(&event.kind.to_string())
                }
                _ => self.logger.normal(&event.kind.to_string()),
            }
        }
    }
}
