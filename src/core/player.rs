//! Player representation

use crate::core::{PlayerId, PlayerName};
use serde::{Deserialize, Serialize};

/// One player in a match
///
/// `life` is only meaningful under the point-life model; under the buffer
/// model the life resource is the `LifeBuffer` zone and `life` stays 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,

    pub name: PlayerName,

    /// Azoth available to spend this turn
    pub azoth_pool: u8,

    /// Azoth refreshed to at the start of each turn; monotone up to the
    /// configured ceiling
    pub azoth_cap: u8,

    /// Life total (point-life model only)
    pub life: i32,

    /// Set once a loss condition hits; never cleared
    pub has_lost: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<PlayerName>, starting_life: i32) -> Self {
        Player {
            id,
            name: name.into(),
            azoth_pool: 0,
            azoth_cap: 0,
            life: starting_life,
            has_lost: false,
        }
    }

    /// Turn-start accrual: cap grows by one up to `ceiling`, pool refills
    pub fn refresh_azoth(&mut self, ceiling: u8) {
        self.azoth_cap = (self.azoth_cap + 1).min(ceiling);
        self.azoth_pool = self.azoth_cap;
    }

    /// Raise the cap without refilling the pool (resource-row permanents)
    pub fn raise_azoth_cap(&mut self, ceiling: u8) {
        self.azoth_cap = (self.azoth_cap + 1).min(ceiling);
    }

    /// Debit the pool; callers validate affordability first
    pub fn spend_azoth(&mut self, cost: u8) {
        debug_assert!(self.azoth_pool >= cost);
        self.azoth_pool -= cost;
    }

    pub fn gain_life(&mut self, amount: i32) {
        self.life += amount;
    }

    pub fn lose_life(&mut self, amount: i32) {
        self.life -= amount;
        if self.life <= 0 {
            self.has_lost = true;
        }
    }
}
