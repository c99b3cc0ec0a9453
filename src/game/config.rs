//! Match configuration

use serde::{Deserialize, Serialize};

/// How a player's life resource is tracked
///
/// The two variants are alternative combat-resolver strategies, selected
/// at match start. They are never mixed within one match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LifeModel {
    /// Face-down buffer of cards; each point of damage breaks the top
    /// card, and a point arriving with the buffer empty is lethal
    Buffer,
    /// Numeric life total; zero or less is lethal
    Points { starting_life: i32 },
}

/// Tunable match rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub deck_size_min: usize,
    pub deck_size_max: usize,

    /// Max copies of one catalog id per deck
    pub max_copies: u8,

    /// Cards reserved face-down at match start (buffer model)
    pub life_buffer_size: usize,

    pub opening_hand_size: usize,

    /// Hard ceiling on the azoth cap
    pub azoth_ceiling: u8,

    pub life_model: LifeModel,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            deck_size_min: 40,
            deck_size_max: 60,
            max_copies: 4,
            life_buffer_size: 4,
            opening_hand_size: 5,
            azoth_ceiling: 10,
            life_model: LifeModel::Buffer,
        }
    }
}

impl MatchConfig {
    /// Point-life configuration with the given starting total
    pub fn with_point_life(starting_life: i32) -> Self {
        MatchConfig {
            life_model: LifeModel::Points { starting_life },
            ..Default::default()
        }
    }

    pub fn starting_life(&self) -> i32 {
        match self.life_model {
            LifeModel::Buffer => 0,
            LifeModel::Points { starting_life } => starting_life,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.deck_size_min, 40);
        assert_eq!(config.life_buffer_size, 4);
        assert_eq!(config.opening_hand_size, 5);
        assert_eq!(config.azoth_ceiling, 10);
        assert_eq!(config.life_model, LifeModel::Buffer);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config: MatchConfig =
            serde_json::from_str(r#"{"life_model": {"Points": {"starting_life": 20}}}"#).unwrap();
        assert_eq!(config.life_model, LifeModel::Points { starting_life: 20 });
        assert_eq!(config.deck_size_min, 40);
        assert_eq!(config.starting_life(), 20);
    }
}
