//! Card catalog: immutable reference data loaded once per process
//!
//! The catalog holds card templates; the deck initializer stamps them into
//! per-match [`CardInstance`](crate::core::CardInstance)s. The engine never
//! mutates catalog data.

use crate::core::effects::EffectTag;
use crate::core::{CardId, CardInstance, CardName, CatalogId, PlayerId};
use crate::{EngineError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::path::Path;

/// Broad gameplay classification of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    /// Permanent that fights from the field
    Unit,
    /// One-shot effect card, resolves then goes to the graveyard
    Spell,
    /// Azoth-generating permanent, sits in the resource row
    Source,
}

/// One card template in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: CatalogId,
    pub name: CardName,
    pub cost: u8,

    #[serde(rename = "type")]
    pub kind: CardKind,

    /// Element tags (e.g. "fire", "void"); flavor data for the UI
    #[serde(default)]
    pub elements: Vec<String>,

    /// Keyword strings; not interpreted by this engine
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Attack power (units)
    #[serde(default)]
    pub power: Option<i32>,

    /// Toughness (units); carried for the UI, unused by direct-attack combat
    #[serde(default)]
    pub toughness: Option<i32>,

    #[serde(default)]
    pub effects: Vec<EffectTag>,
}

impl CardRecord {
    /// Stamp this template into a playable instance owned by `owner`
    pub fn instantiate(&self, id: CardId, owner: PlayerId) -> CardInstance {
        CardInstance {
            id,
            catalog_id: self.id.clone(),
            name: self.name.clone(),
            kind: self.kind,
            cost: self.cost,
            power: self.power.unwrap_or(0),
            effects: SmallVec::from_vec(self.effects.clone()),
            owner,
            posture: crate::core::Posture::Ready,
        }
    }
}

/// Read-only card catalog with fast id lookup
#[derive(Debug, Clone)]
pub struct Catalog {
    records: FxHashMap<CatalogId, CardRecord>,
}

impl Catalog {
    /// Build a catalog from records, rejecting duplicate ids
    pub fn from_records(records: Vec<CardRecord>) -> Result<Self> {
        let mut map = FxHashMap::default();
        for record in records {
            if map.insert(record.id.clone(), record).is_some() {
                return Err(EngineError::InvalidCatalog(
                    "duplicate catalog id".to_string(),
                ));
            }
        }
        Ok(Catalog { records: map })
    }

    /// Parse a catalog from its JSON representation (an array of records)
    pub fn from_json(content: &str) -> Result<Self> {
        let records: Vec<CardRecord> = serde_json::from_str(content)?;
        Self::from_records(records)
    }

    /// Load a catalog from a JSON file on disk
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn get(&self, id: &CatalogId) -> Option<&CardRecord> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &CatalogId) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_json() {
        let content = r#"[
            {
                "id": "flame-wisp",
                "name": "Flame Wisp",
                "cost": 1,
                "type": "Unit",
                "elements": ["fire"],
                "power": 2,
                "toughness": 1
            },
            {
                "id": "ember-bolt",
                "name": "Ember Bolt",
                "cost": 2,
                "type": "Spell",
                "effects": [{"type": "Damage", "amount": 3}]
            }
        ]"#;

        let catalog = Catalog::from_json(content).unwrap();
        assert_eq!(catalog.len(), 2);

        let wisp = catalog.get(&CatalogId::from("flame-wisp")).unwrap();
        assert_eq!(wisp.kind, CardKind::Unit);
        assert_eq!(wisp.power, Some(2));
        assert!(wisp.effects.is_empty());

        let bolt = catalog.get(&CatalogId::from("ember-bolt")).unwrap();
        assert_eq!(bolt.kind, CardKind::Spell);
        assert_eq!(bolt.effects.len(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let record = CardRecord {
            id: CatalogId::from("dup"),
            name: CardName::new("Dup"),
            cost: 0,
            kind: CardKind::Spell,
            elements: vec![],
            keywords: vec![],
            power: None,
            toughness: None,
            effects: vec![],
        };
        let result = Catalog::from_records(vec![record.clone(), record]);
        assert!(matches!(result, Err(EngineError::InvalidCatalog(_))));
    }

    #[test]
    fn test_instantiate() {
        let record = CardRecord {
            id: CatalogId::from("flame-wisp"),
            name: CardName::new("Flame Wisp"),
            cost: 1,
            kind: CardKind::Unit,
            elements: vec!["fire".to_string()],
            keywords: vec![],
            power: Some(2),
            toughness: Some(1),
            effects: vec![],
        };

        let instance = record.instantiate(CardId::new(5), PlayerId::new(0));
        assert_eq!(instance.id, CardId::new(5));
        assert_eq!(instance.catalog_id, record.id);
        assert_eq!(instance.power, 2);
        assert_eq!(instance.owner, PlayerId::new(0));
    }
}
