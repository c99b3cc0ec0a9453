//! Turn phases and rotation

use crate::core::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phases of a turn
///
/// `Setup` exists only while decks are being initialized; `Finished` is
/// terminal and can be forced from any phase by the win evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    Draw,
    Main,
    Combat,
    End,
    Finished,
}

impl Phase {
    /// The next phase within a single turn (`End` hands over to rotation)
    pub fn next(&self) -> Option<Phase> {
        match self {
            Phase::Setup => Some(Phase::Draw),
            Phase::Draw => Some(Phase::Main),
            Phase::Main => Some(Phase::Combat),
            Phase::Combat => Some(Phase::End),
            Phase::End => None,
            Phase::Finished => None,
        }
    }

    /// Can cards be played from hand in this phase?
    pub fn allows_plays(&self) -> bool {
        matches!(self, Phase::Main)
    }

    /// Can attackers be declared in this phase?
    pub fn allows_attacks(&self) -> bool {
        matches!(self, Phase::Combat)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Current turn position: number, phase, and whose turn it is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnStructure {
    /// Starts at 1; increments only when rotation returns to the first player
    pub turn_number: u32,

    pub phase: Phase,

    pub active_player: PlayerId,

    /// Index of the active player in `GameState::players`
    pub active_player_idx: usize,
}

impl TurnStructure {
    pub fn new(starting_player: PlayerId, starting_idx: usize) -> Self {
        TurnStructure {
            turn_number: 1,
            phase: Phase::Setup,
            active_player: starting_player,
            active_player_idx: starting_idx,
        }
    }

    /// Advance within the turn; false once at `End` (rotation takes over)
    pub fn advance_phase(&mut self) -> bool {
        if let Some(next) = self.phase.next() {
            self.phase = next;
            true
        } else {
            false
        }
    }

    /// Rotate to the next player and restart at `Draw`
    pub fn rotate(&mut self, next_player: PlayerId, next_idx: usize) {
        if next_idx == 0 {
            self.turn_number += 1;
        }
        self.active_player = next_player;
        self.active_player_idx = next_idx;
        self.phase = Phase::Draw;
    }
}
