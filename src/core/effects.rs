//! Structured effect tags
//!
//! Card behavior is described by tagged variants on the catalog record,
//! not by scanning free text. The resolver matches on the variant;
//! anything it does not recognize is preserved as raw JSON and resolved
//! as a logged no-op.

use serde::{Deserialize, Serialize};

/// Who an effect applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EffectTarget {
    /// The opponent of the card's controller
    #[default]
    Opponent,
    /// Any target; with no targeting input this defaults to the opponent
    Any,
}

/// One effect on a catalog card
///
/// Internally tagged by `type` so catalog JSON reads
/// `{"type": "Damage", "amount": 3, "target": "Opponent"}`.
/// Unknown tags fall through to [`EffectTag::Other`] instead of failing
/// deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EffectTag {
    /// Deal damage to a player's life resource
    Damage {
        amount: i32,
        #[serde(default)]
        target: EffectTarget,
    },

    /// The controller gains life (or refills the life buffer)
    GainLife { amount: i32 },

    /// The controller draws cards
    DrawCards { count: u8 },

    /// Unrecognized effect, kept verbatim for observability
    #[serde(untagged)]
    Other(serde_json::Value),
}

impl EffectTag {
    /// Tag name for log output; `Other` reports its raw `type` field
    pub fn tag_name(&self) -> &str {
        match self {
            EffectTag::Damage { .. } => "Damage",
            EffectTag::GainLife { .. } => "GainLife",
            EffectTag::DrawCards { .. } => "DrawCards",
            EffectTag::Other(value) => value
                .get("type")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown"),
        }
    }
}
