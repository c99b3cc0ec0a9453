//! Append-only event log
//!
//! The authoritative history of the match. Each successfully resolved
//! command appends exactly one command-level event (`CardPlayed`,
//! `AttackResolved`, `PhaseAdvanced`, `TurnEnded`); engine-driven
//! resolution appends its own records (draws, azoth refresh, broken
//! life-buffer cards, deck-out, finish). Events are never mutated or
//! reordered after insertion; replay re-drives the command-level events.

use crate::core::{CardId, PlayerId};
use crate::game::Phase;
use serde::{Deserialize, Serialize};

/// How a finished match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Winner(PlayerId),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    MatchStarted {
        seed: u64,
    },
    TurnBegan {
        player: PlayerId,
        turn_number: u32,
    },
    CardDrawn {
        player: PlayerId,
        card: CardId,
    },
    AzothRefreshed {
        player: PlayerId,
        cap: u8,
    },
    CardPlayed {
        player: PlayerId,
        card: CardId,
        cost: u8,
    },
    PhaseAdvanced {
        player: PlayerId,
        from: Phase,
        to: Phase,
    },
    AttackResolved {
        attacker: CardId,
        attacking_player: PlayerId,
        defending_player: PlayerId,
        damage: i32,
    },
    TurnEnded {
        player: PlayerId,
    },
    LifeBufferBroken {
        player: PlayerId,
        card: CardId,
    },
    LifeLost {
        player: PlayerId,
        amount: i32,
        remaining: i32,
    },
    LifeGained {
        player: PlayerId,
        amount: i32,
    },
    UnhandledEffect {
        card: CardId,
        tag: String,
    },
    DeckOut {
        player: PlayerId,
    },
    MatchFinished {
        outcome: MatchOutcome,
    },
}

impl EventKind {
    /// Command-level events are the ones replay re-drives; resolution
    /// records regenerate from them deterministically.
    pub fn is_command(&self) -> bool {
        matches!(
            self,
            EventKind::CardPlayed { .. }
                | EventKind::PhaseAdvanced { .. }
                | EventKind::AttackResolved { .. }
                | EventKind::TurnEnded { .. }
        )
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::MatchStarted { seed } => write!(f, "match started (seed {seed})"),
            EventKind::TurnBegan {
                player,
                turn_number,
            } => write!(f, "turn {turn_number} begins for player {player}"),
            EventKind::CardDrawn { player, card } => {
                write!(f, "player {player} draws card {card}")
            }
            EventKind::AzothRefreshed { player, cap } => {
                write!(f, "player {player} refreshes azoth to {cap}")
            }
            EventKind::CardPlayed { player, card, cost } => {
                write!(f, "player {player} plays card {card} for {cost} azoth")
            }
            EventKind::PhaseAdvanced { player, from, to } => {
                write!(f, "player {player} advances {from} -> {to}")
            }
            EventKind::AttackResolved {
                attacker,
                attacking_player,
                defending_player,
                damage,
            } => write!(
                f,
                "card {attacker} of player {attacking_player} hits player {defending_player} for {damage}"
            ),
            EventKind::TurnEnded { player } => write!(f, "player {player} ends the turn"),
            EventKind::LifeBufferBroken { player, card } => {
                write!(f, "player {player}'s life buffer breaks (card {card})")
            }
            EventKind::LifeLost {
                player,
                amount,
                remaining,
            } => write!(f, "player {player} loses {amount} life ({remaining} left)"),
            EventKind::LifeGained { player, amount } => {
                write!(f, "player {player} gains {amount} life")
            }
            EventKind::UnhandledEffect { card, tag } => {
                write!(f, "unhandled effect tag '{tag}' on card {card} ignored")
            }
            EventKind::DeckOut { player } => write!(f, "player {player} decks out"),
            EventKind::MatchFinished { outcome } => match outcome {
                MatchOutcome::Winner(id) => write!(f, "match finished: player {id} wins"),
                MatchOutcome::Draw => write!(f, "match finished: draw"),
            },
        }
    }
}

/// One entry in the log, stamped with its insertion sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    pub seq: u64,
    pub kind: EventKind,
}

/// Ordered, append-only record of resolved events
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameLog {
    events: Vec<GameEvent>,
}

impl GameLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, assigning the next sequence number
    pub fn push(&mut self, kind: EventKind) -> u64 {
        let seq = self.events.len() as u64;
        self.events.push(GameEvent { seq, kind });
        seq
    }

    pub fn all(&self) -> &[GameEvent] {
        &self.events
    }

    /// Events strictly after `seq`; `None` returns the full log
    pub fn since(&self, seq: Option<u64>) -> &[GameEvent] {
        match seq {
            None => &self.events,
            Some(seq) => {
                let start = (seq + 1).min(self.events.len() as u64) as usize;
                &self.events[start..]
            }
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }
}
