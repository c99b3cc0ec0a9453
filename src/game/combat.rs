//! Combat bookkeeping for the current combat phase
//!
//! There is no blocking model: attacks resolve directly against the
//! defending player as each attacker is declared. This struct just tracks
//! which cards have attacked; damage application lives with `GameState`.

use crate::core::CardId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CombatState {
    /// Attackers declared this combat, in declaration order
    pub attackers: SmallVec<[CardId; 8]>,

    /// Whether any attack has been declared this combat
    pub combat_active: bool,
}

impl CombatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, attacker: CardId) {
        self.attackers.push(attacker);
        self.combat_active = true;
    }

    pub fn is_attacking(&self, card_id: CardId) -> bool {
        self.attackers.contains(&card_id)
    }

    /// Reset at the end of combat
    pub fn clear(&mut self) {
        self.attackers.clear();
        self.combat_active = false;
    }
}
