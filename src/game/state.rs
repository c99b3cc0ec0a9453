//! Main game state structure

use crate::core::{CardId, InstanceStore, Player, PlayerId, PlayerName};
use crate::game::{
    CombatState, EventKind, GameLog, LifeModel, MatchConfig, MatchOutcome, Phase, TurnStructure,
};
use crate::zones::{PlayerZones, ZoneKind};
use crate::{EngineError, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};

/// Complete match state
///
/// Owned exclusively by one engine instance; the presentation layer only
/// ever sees clones. Cloneable, comparable, and serializable so replay
/// tests can diff whole states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// All card instances in the match
    pub cards: InstanceStore,

    /// Both players, in turn order
    pub players: Vec<Player>,

    /// Zones for each player
    pub player_zones: Vec<(PlayerId, PlayerZones)>,

    pub turn: TurnStructure,

    pub combat: CombatState,

    /// Append-only authoritative event history
    pub log: GameLog,

    /// Seeded RNG; the only source of randomness in the engine
    pub rng: ChaCha12Rng,

    pub config: MatchConfig,

    /// Bumped once per successful command (optimistic concurrency)
    pub version: u64,

    /// Set exactly once, when the match finishes
    pub outcome: Option<MatchOutcome>,
}

impl GameState {
    /// Create an empty two-player match in the `Setup` phase
    pub fn new_two_player(
        player1_name: impl Into<PlayerName>,
        player2_name: impl Into<PlayerName>,
        config: MatchConfig,
        seed: u64,
    ) -> Self {
        let p1_id = PlayerId::new(0);
        let p2_id = PlayerId::new(1);
        let starting_life = config.starting_life();

        GameState {
            cards: InstanceStore::new(),
            players: vec![
                Player::new(p1_id, player1_name, starting_life),
                Player::new(p2_id, player2_name, starting_life),
            ],
            player_zones: vec![(p1_id, PlayerZones::new(p1_id)), (p2_id, PlayerZones::new(p2_id))],
            turn: TurnStructure::new(p1_id, 0),
            combat: CombatState::new(),
            log: GameLog::new(),
            rng: ChaCha12Rng::seed_from_u64(seed),
            config,
            version: 0,
            outcome: None,
        }
    }

    pub fn get_player(&self, id: PlayerId) -> Result<&Player> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or(EngineError::PlayerNotFound(id.as_u32()))
    }

    pub fn get_player_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(EngineError::PlayerNotFound(id.as_u32()))
    }

    /// The other player in a two-player match
    pub fn other_player_id(&self, id: PlayerId) -> Result<PlayerId> {
        self.players
            .iter()
            .find(|p| p.id != id)
            .map(|p| p.id)
            .ok_or(EngineError::PlayerNotFound(id.as_u32()))
    }

    pub fn active_player_id(&self) -> PlayerId {
        self.turn.active_player
    }

    pub fn zones(&self, player_id: PlayerId) -> Result<&PlayerZones> {
        self.player_zones
            .iter()
            .find(|(id, _)| *id == player_id)
            .map(|(_, zones)| zones)
            .ok_or(EngineError::PlayerNotFound(player_id.as_u32()))
    }

    pub fn zones_mut(&mut self, player_id: PlayerId) -> Result<&mut PlayerZones> {
        self.player_zones
            .iter_mut()
            .find(|(id, _)| *id == player_id)
            .map(|(_, zones)| zones)
            .ok_or(EngineError::PlayerNotFound(player_id.as_u32()))
    }

    /// Move a card between two zones of its owner
    ///
    /// Fails without mutating anything when the card is not in `from`.
    pub fn move_card(
        &mut self,
        card_id: CardId,
        from: ZoneKind,
        to: ZoneKind,
        owner: PlayerId,
    ) -> Result<()> {
        let zones = self.zones_mut(owner)?;
        if !zones.zone_mut(from).remove(card_id) {
            return Err(EngineError::InvalidZone(format!(
                "card {card_id} is not in {from}"
            )));
        }
        zones.zone_mut(to).add(card_id);
        Ok(())
    }

    /// Apply damage to a player's life resource per the configured model
    ///
    /// Buffer model: breaks one life-buffer card per point (broken cards
    /// go to the graveyard); a point with the buffer already empty is
    /// lethal. Point model: direct subtraction. Re-checks the win
    /// condition afterwards.
    pub fn apply_damage(&mut self, defender: PlayerId, amount: i32) -> Result<()> {
        if amount <= 0 {
            return Ok(());
        }
        match self.config.life_model {
            LifeModel::Buffer => {
                for _ in 0..amount {
                    let broken = self.zones_mut(defender)?.life_buffer.take_top();
                    match broken {
                        Some(card) => {
                            self.zones_mut(defender)?.graveyard.add(card);
                            self.log.push(EventKind::LifeBufferBroken {
                                player: defender,
                                card,
                            });
                        }
                        None => {
                            self.get_player_mut(defender)?.has_lost = true;
                            break;
                        }
                    }
                }
            }
            LifeModel::Points { .. } => {
                let player = self.get_player_mut(defender)?;
                player.lose_life(amount);
                let remaining = player.life;
                self.log.push(EventKind::LifeLost {
                    player: defender,
                    amount,
                    remaining,
                });
            }
        }
        self.check_win();
        Ok(())
    }

    /// Life gain per the configured model
    ///
    /// Buffer model: refills the buffer with up to `amount` cards from the
    /// top of the library (a thin library caps the refill).
    pub fn apply_life_gain(&mut self, player_id: PlayerId, amount: i32) -> Result<()> {
        if amount <= 0 {
            return Ok(());
        }
        match self.config.life_model {
            LifeModel::Buffer => {
                let mut moved = 0;
                for _ in 0..amount {
                    let card = self.zones_mut(player_id)?.library.take_top();
                    match card {
                        Some(card) => {
                            self.zones_mut(player_id)?.life_buffer.add(card);
                            moved += 1;
                        }
                        None => break,
                    }
                }
                if moved > 0 {
                    self.log.push(EventKind::LifeGained {
                        player: player_id,
                        amount: moved,
                    });
                }
            }
            LifeModel::Points { .. } => {
                self.get_player_mut(player_id)?.gain_life(amount);
                self.log.push(EventKind::LifeGained {
                    player: player_id,
                    amount,
                });
            }
        }
        Ok(())
    }

    /// A required draw could not be satisfied: legal terminal transition
    pub fn deck_out(&mut self, player_id: PlayerId) -> Result<()> {
        self.get_player_mut(player_id)?.has_lost = true;
        self.log.push(EventKind::DeckOut { player: player_id });
        self.check_win();
        Ok(())
    }

    /// Return declared attackers to the field and clear combat state
    pub fn end_combat(&mut self) -> Result<()> {
        let active = self.active_player_id();
        let attackers: Vec<CardId> = self.zones(active)?.combat_row.cards.clone();
        for card in attackers {
            self.move_card(card, ZoneKind::CombatRow, ZoneKind::Field, active)?;
        }
        self.combat.clear();
        Ok(())
    }

    /// Win evaluator: runs after every life-deducting or draw-requiring
    /// mutation. Transitions to `Finished` exactly once; simultaneous loss
    /// is a draw.
    pub fn check_win(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        let losers: Vec<PlayerId> = self
            .players
            .iter()
            .filter(|p| p.has_lost)
            .map(|p| p.id)
            .collect();
        if losers.is_empty() {
            return;
        }
        let outcome = if losers.len() == self.players.len() {
            MatchOutcome::Draw
        } else {
            let winner = self
                .players
                .iter()
                .find(|p| !p.has_lost)
                .map(|p| p.id)
                .expect("at least one player has not lost");
            MatchOutcome::Winner(winner)
        };
        self.outcome = Some(outcome);
        self.turn.phase = Phase::Finished;
        self.log.push(EventKind::MatchFinished { outcome });
    }

    pub fn is_finished(&self) -> bool {
        self.turn.phase == Phase::Finished
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.outcome {
            Some(MatchOutcome::Winner(id)) => Some(id),
            _ => None,
        }
    }
}
