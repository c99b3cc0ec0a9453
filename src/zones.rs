//! Game zones (Library, Hand, Field, CombatRow, ResourceRow, LifeBuffer, ...)

use crate::core::{CardId, PlayerId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of zone a card instance can sit in
///
/// Every zone is scoped to one player. A card id lives in exactly one
/// zone at a time; the union of a player's zones equals their deck pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    /// Ordered, hidden; drawn from the top
    Library,
    /// Owner-visible
    Hand,
    /// Public; units live here
    Field,
    /// Public; declared attackers for the current combat
    CombatRow,
    /// Public; azoth-generating permanents
    ResourceRow,
    /// Ordered stack, hidden; consumed one card per point of damage
    LifeBuffer,
    /// Terminal, public
    RemovedFromPlay,
    /// Ordered, public
    Graveyard,
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A zone containing card ids (order matters for Library, LifeBuffer, Graveyard)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardZone {
    pub kind: ZoneKind,

    pub owner: PlayerId,

    pub cards: Vec<CardId>,
}

impl CardZone {
    pub fn new(kind: ZoneKind, owner: PlayerId) -> Self {
        CardZone {
            kind,
            owner,
            cards: Vec::new(),
        }
    }

    pub fn add(&mut self, card_id: CardId) {
        self.cards.push(card_id);
    }

    pub fn remove(&mut self, card_id: CardId) -> bool {
        if let Some(pos) = self.cards.iter().position(|&id| id == card_id) {
            // Keep insertion order even for semantically unordered zones;
            // iteration order feeds deterministic replay.
            self.cards.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, card_id: CardId) -> bool {
        self.cards.contains(&card_id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Take the top card (Library, LifeBuffer)
    pub fn take_top(&mut self) -> Option<CardId> {
        self.cards.pop()
    }

    pub fn peek_top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Fisher-Yates shuffle via the injected RNG
    pub fn shuffle(&mut self, rng: &mut impl rand::Rng) {
        use rand::seq::SliceRandom;
        self.cards.shuffle(rng);
    }
}

/// All zones belonging to one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerZones {
    pub library: CardZone,
    pub hand: CardZone,
    pub field: CardZone,
    pub combat_row: CardZone,
    pub resource_row: CardZone,
    pub life_buffer: CardZone,
    pub removed: CardZone,
    pub graveyard: CardZone,
}

impl PlayerZones {
    pub fn new(owner: PlayerId) -> Self {
        PlayerZones {
            library: CardZone::new(ZoneKind::Library, owner),
            hand: CardZone::new(ZoneKind::Hand, owner),
            field: CardZone::new(ZoneKind::Field, owner),
            combat_row: CardZone::new(ZoneKind::CombatRow, owner),
            resource_row: CardZone::new(ZoneKind::ResourceRow, owner),
            life_buffer: CardZone::new(ZoneKind::LifeBuffer, owner),
            removed: CardZone::new(ZoneKind::RemovedFromPlay, owner),
            graveyard: CardZone::new(ZoneKind::Graveyard, owner),
        }
    }

    pub fn zone(&self, kind: ZoneKind) -> &CardZone {
        match kind {
            ZoneKind::Library => &self.library,
            ZoneKind::Hand => &self.hand,
            ZoneKind::Field => &self.field,
            ZoneKind::CombatRow => &self.combat_row,
            ZoneKind::ResourceRow => &self.resource_row,
            ZoneKind::LifeBuffer => &self.life_buffer,
            ZoneKind::RemovedFromPlay => &self.removed,
            ZoneKind::Graveyard => &self.graveyard,
        }
    }

    pub fn zone_mut(&mut self, kind: ZoneKind) -> &mut CardZone {
        match kind {
            ZoneKind::Library => &mut self.library,
            ZoneKind::Hand => &mut self.hand,
            ZoneKind::Field => &mut self.field,
            ZoneKind::CombatRow => &mut self.combat_row,
            ZoneKind::ResourceRow => &mut self.resource_row,
            ZoneKind::LifeBuffer => &mut self.life_buffer,
            ZoneKind::RemovedFromPlay => &mut self.removed,
            ZoneKind::Graveyard => &mut self.graveyard,
        }
    }

    /// Which zone a card is currently in, if any
    pub fn locate(&self, card_id: CardId) -> Option<ZoneKind> {
        ALL_ZONE_KINDS
            .iter()
            .copied()
            .find(|&kind| self.zone(kind).contains(card_id))
    }

    /// Total cards across all zones; must always equal the deck pool size
    pub fn total_cards(&self) -> usize {
        ALL_ZONE_KINDS
            .iter()
            .map(|&kind| self.zone(kind).len())
            .sum()
    }
}

pub const ALL_ZONE_KINDS: [ZoneKind; 8] = [
    ZoneKind::Library,
    ZoneKind::Hand,
    ZoneKind::Field,
    ZoneKind::CombatRow,
    ZoneKind::ResourceRow,
    ZoneKind::LifeBuffer,
    ZoneKind::RemovedFromPlay,
    ZoneKind::Graveyard,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_zone() {
        let owner = PlayerId::new(0);
        let mut zone = CardZone::new(ZoneKind::Hand, owner);

        assert!(zone.is_empty());

        let card1 = CardId::new(10);
        let card2 = CardId::new(11);
        zone.add(card1);
        zone.add(card2);

        assert_eq!(zone.len(), 2);
        assert!(zone.contains(card1));

        assert!(zone.remove(card1));
        assert!(!zone.contains(card1));
        assert!(!zone.remove(card1));
    }

    #[test]
    fn test_ordered_zone_operations() {
        let owner = PlayerId::new(0);
        let mut library = CardZone::new(ZoneKind::Library, owner);

        let card1 = CardId::new(10);
        let card2 = CardId::new(11);
        let card3 = CardId::new(12);

        library.add(card1); // bottom
        library.add(card2);
        library.add(card3); // top

        assert_eq!(library.peek_top(), Some(card3));
        assert_eq!(library.take_top(), Some(card3));
        assert_eq!(library.take_top(), Some(card2));
        assert_eq!(library.take_top(), Some(card1));
        assert_eq!(library.take_top(), None);
    }

    #[test]
    fn test_locate_and_totals() {
        let owner = PlayerId::new(0);
        let mut zones = PlayerZones::new(owner);

        let card = CardId::new(3);
        zones.library.add(card);
        assert_eq!(zones.locate(card), Some(ZoneKind::Library));
        assert_eq!(zones.total_cards(), 1);

        zones.library.remove(card);
        zones.life_buffer.add(card);
        assert_eq!(zones.locate(card), Some(ZoneKind::LifeBuffer));
        assert_eq!(zones.total_cards(), 1);

        assert_eq!(zones.locate(CardId::new(99)), None);
    }
}
