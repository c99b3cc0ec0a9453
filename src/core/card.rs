//! Card instances: per-match copies of catalog templates

use crate::core::effects::EffectTag;
use crate::core::{CardId, CardKind, CardName, CatalogId, PlayerId};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Transient battle posture of a permanent
///
/// A small closed enum instead of independent `tapped`/`summoning_sick`
/// booleans: a card is either fresh from the hand (cannot attack this
/// turn), spent (attacked or was otherwise tapped), or ready. The untap
/// step collapses both restricted states back to `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Posture {
    #[default]
    Ready,
    Tapped,
    SummoningSick,
}

impl Posture {
    pub fn can_attack(&self) -> bool {
        matches!(self, Posture::Ready)
    }
}

/// One physical card copy during a match
///
/// Gameplay-relevant template fields (kind, cost, power, effects) are
/// copied from the catalog record at deck build time, so state mutation
/// never needs to reach back into the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique id of this copy
    pub id: CardId,

    /// Template this copy was stamped from
    pub catalog_id: CatalogId,

    pub name: CardName,

    pub kind: CardKind,

    /// Azoth cost to play
    pub cost: u8,

    /// Attack power (0 for non-units)
    pub power: i32,

    pub effects: SmallVec<[EffectTag; 2]>,

    pub owner: PlayerId,

    pub posture: Posture,
}

impl CardInstance {
    pub fn is_unit(&self) -> bool {
        self.kind == CardKind::Unit
    }

    pub fn tap(&mut self) {
        self.posture = Posture::Tapped;
    }

    /// Clear tapped/summoning-sick state (untap step)
    pub fn ready(&mut self) {
        self.posture = Posture::Ready;
    }

    /// Mark as freshly played (cannot attack this turn)
    pub fn enter_play(&mut self) {
        self.posture = Posture::SummoningSick;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wisp() -> CardInstance {
        CardInstance {
            id: CardId::new(1),
            catalog_id: CatalogId::from("flame-wisp"),
            name: CardName::new("Flame Wisp"),
            kind: CardKind::Unit,
            cost: 1,
            power: 2,
            effects: SmallVec::new(),
            owner: PlayerId::new(0),
            posture: Posture::Ready,
        }
    }

    #[test]
    fn test_posture_transitions() {
        let mut card = wisp();
        assert!(card.posture.can_attack());

        card.enter_play();
        assert_eq!(card.posture, Posture::SummoningSick);
        assert!(!card.posture.can_attack());

        card.ready();
        assert!(card.posture.can_attack());

        card.tap();
        assert_eq!(card.posture, Posture::Tapped);
        assert!(!card.posture.can_attack());

        card.ready();
        assert!(card.posture.can_attack());
    }
}
