//! Deck lists and match initialization
//!
//! Expands deck lists into card instances, shuffles deterministically from
//! the match seed, and partitions each pool into starting zones. Pure
//! function of (decklists, catalog, seed, config).

use crate::core::{Catalog, CatalogId, PlayerId};
use crate::game::{EventKind, GameState, LifeModel, MatchConfig};
use crate::{EngineError, Result};
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One deck-list line: a catalog id and how many copies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub catalog_id: CatalogId,
    pub count: u8,
}

/// A complete deck list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeckList {
    pub entries: Vec<DeckEntry>,
}

impl DeckList {
    /// Build from `(catalog id, count)` pairs; test and CLI convenience
    pub fn from_pairs(pairs: &[(&str, u8)]) -> Self {
        DeckList {
            entries: pairs
                .iter()
                .map(|(id, count)| DeckEntry {
                    catalog_id: CatalogId::from(*id),
                    count: *count,
                })
                .collect(),
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn total_cards(&self) -> usize {
        self.entries.iter().map(|e| e.count as usize).sum()
    }
}

/// Check a deck list against the catalog and configured legal range
fn validate_deck(catalog: &Catalog, deck: &DeckList, config: &MatchConfig) -> Result<()> {
    let total = deck.total_cards();
    if total < config.deck_size_min || total > config.deck_size_max {
        return Err(EngineError::InvalidDeck(format!(
            "deck has {total} cards, legal range is {}-{}",
            config.deck_size_min, config.deck_size_max
        )));
    }

    let mut copies: FxHashMap<&CatalogId, u32> = FxHashMap::default();
    for entry in &deck.entries {
        if entry.count == 0 {
            return Err(EngineError::InvalidDeck(format!(
                "zero copies of {}",
                entry.catalog_id
            )));
        }
        if !catalog.contains(&entry.catalog_id) {
            return Err(EngineError::InvalidDeck(format!(
                "unknown catalog id: {}",
                entry.catalog_id
            )));
        }
        *copies.entry(&entry.catalog_id).or_default() += entry.count as u32;
    }
    for (id, count) in copies {
        if count > config.max_copies as u32 {
            return Err(EngineError::InvalidDeck(format!(
                "{count} copies of {id}, limit is {}",
                config.max_copies
            )));
        }
    }

    let reserved = config.life_buffer_size + config.opening_hand_size;
    if total <= reserved {
        return Err(EngineError::InvalidDeck(format!(
            "deck of {total} cards cannot cover life buffer + opening hand ({reserved})"
        )));
    }

    Ok(())
}

/// Build the initial match state from two deck lists
///
/// After this returns the starting player is in their `Main` phase with
/// azoth refreshed. The starting player skips the very first card draw as
/// first-turn compensation; every later draw step draws.
pub fn start_match(
    catalog: &Catalog,
    deck1: &DeckList,
    deck2: &DeckList,
    seed: u64,
    config: MatchConfig,
) -> Result<GameState> {
    validate_deck(catalog, deck1, &config)?;
    validate_deck(catalog, deck2, &config)?;

    let mut state = GameState::new_two_player("Player 1", "Player 2", config, seed);
    state.log.push(EventKind::MatchStarted { seed });

    let p1 = state.players[0].id;
    let p2 = state.players[1].id;

    for (player_id, deck) in [(p1, deck1), (p2, deck2)] {
        build_pool(&mut state, catalog, player_id, deck)?;
        shuffle_library(&mut state, player_id)?;
        partition_zones(&mut state, player_id)?;
    }

    state.turn.advance_phase(); // Setup -> Draw
    state.begin_turn_step(true)?;
    Ok(state)
}

/// Instantiate every deck entry into the player's library
fn build_pool(
    state: &mut GameState,
    catalog: &Catalog,
    player_id: PlayerId,
    deck: &DeckList,
) -> Result<()> {
    for entry in &deck.entries {
        let record = catalog.get(&entry.catalog_id).ok_or_else(|| {
            EngineError::InvalidDeck(format!("unknown catalog id: {}", entry.catalog_id))
        })?;
        for _ in 0..entry.count {
            let card_id = state.cards.next_id();
            state.cards.insert(record.instantiate(card_id, player_id));
            state.zones_mut(player_id)?.library.add(card_id);
        }
    }
    Ok(())
}

fn shuffle_library(state: &mut GameState, player_id: PlayerId) -> Result<()> {
    // Field-level split borrow: zones and rng are disjoint parts of state
    let zones = state
        .player_zones
        .iter_mut()
        .find(|(id, _)| *id == player_id)
        .map(|(_, zones)| zones)
        .ok_or(EngineError::PlayerNotFound(player_id.as_u32()))?;
    zones.library.cards.shuffle(&mut state.rng);
    Ok(())
}

/// Reserve the life buffer (buffer model only) and deal the opening hand
fn partition_zones(state: &mut GameState, player_id: PlayerId) -> Result<()> {
    let buffer_size = match state.config.life_model {
        LifeModel::Buffer => state.config.life_buffer_size,
        LifeModel::Points { .. } => 0,
    };
    let hand_size = state.config.opening_hand_size;

    let zones = state.zones_mut(player_id)?;
    for _ in 0..buffer_size {
        if let Some(card) = zones.library.take_top() {
            zones.life_buffer.add(card);
        }
    }
    for _ in 0..hand_size {
        if let Some(card) = zones.library.take_top() {
            zones.hand.add(card);
        }
    }
    Ok(())
}
