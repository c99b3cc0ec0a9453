//! Command validation and resolution
//!
//! Each operation validates fully against current state before mutating
//! anything (check-then-act): a rejected command leaves `GameState`
//! untouched. Every successful operation appends its command-level event
//! before returning.

use crate::core::{CardId, CardKind, EffectTag, EffectTarget, PlayerId, Posture};
use crate::game::{EventKind, GameState, Phase};
use crate::zones::ZoneKind;
use crate::{EngineError, Result};

impl GameState {
    /// Shared preamble: match still live, caller is the active player
    fn ensure_command_legal(&self, player_id: PlayerId) -> Result<()> {
        if self.is_finished() {
            return Err(EngineError::MatchFinished);
        }
        if self.active_player_id() != player_id {
            return Err(EngineError::NotYourTurn(player_id.as_u32()));
        }
        Ok(())
    }

    fn wrong_phase(&self, expected: &str) -> EngineError {
        EngineError::WrongPhase {
            expected: expected.to_string(),
            actual: self.turn.phase.to_string(),
        }
    }

    /// Play a card from hand, charging its azoth cost
    ///
    /// Units enter the field summoning-sick; sources sit in the resource
    /// row and raise the azoth cap by one; spells resolve their effects
    /// and go straight to the graveyard.
    pub fn play_card(&mut self, player_id: PlayerId, card_id: CardId) -> Result<()> {
        self.ensure_command_legal(player_id)?;
        if !self.turn.phase.allows_plays() {
            return Err(self.wrong_phase("Main"));
        }

        let card = self.cards.get(card_id)?;
        let (kind, cost) = (card.kind, card.cost);
        let effects: Vec<EffectTag> = card.effects.to_vec();
        if card.owner != player_id || !self.zones(player_id)?.hand.contains(card_id) {
            return Err(EngineError::InvalidZone(format!(
                "card {card_id} is not in player {player_id}'s hand"
            )));
        }
        let pool = self.get_player(player_id)?.azoth_pool;
        if pool < cost {
            return Err(EngineError::InsufficientAzoth {
                need: cost,
                have: pool,
            });
        }

        // Validation complete; mutate
        self.get_player_mut(player_id)?.spend_azoth(cost);
        match kind {
            CardKind::Unit => {
                self.move_card(card_id, ZoneKind::Hand, ZoneKind::Field, player_id)?;
                self.cards.get_mut(card_id)?.enter_play();
                self.log.push(EventKind::CardPlayed {
                    player: player_id,
                    card: card_id,
                    cost,
                });
            }
            CardKind::Source => {
                self.move_card(card_id, ZoneKind::Hand, ZoneKind::ResourceRow, player_id)?;
                let ceiling = self.config.azoth_ceiling;
                self.get_player_mut(player_id)?.raise_azoth_cap(ceiling);
                self.log.push(EventKind::CardPlayed {
                    player: player_id,
                    card: card_id,
                    cost,
                });
            }
            CardKind::Spell => {
                self.move_card(card_id, ZoneKind::Hand, ZoneKind::Graveyard, player_id)?;
                self.log.push(EventKind::CardPlayed {
                    player: player_id,
                    card: card_id,
                    cost,
                });
                self.resolve_effects(card_id, player_id, &effects)?;
            }
        }
        Ok(())
    }

    /// Declare one attacker; with no blocking model the attack resolves
    /// immediately against the defending player
    pub fn declare_attacker(&mut self, player_id: PlayerId, card_id: CardId) -> Result<()> {
        self.ensure_command_legal(player_id)?;
        if !self.turn.phase.allows_attacks() {
            return Err(self.wrong_phase("Combat"));
        }

        let card = self.cards.get(card_id)?;
        if card.owner != player_id {
            return Err(EngineError::IllegalAttacker(format!(
                "card {card_id} is not controlled by player {player_id}"
            )));
        }
        if !card.is_unit() {
            return Err(EngineError::IllegalAttacker(format!(
                "card {card_id} is not a unit"
            )));
        }
        let (posture, power) = (card.posture, card.power);
        let zones = self.zones(player_id)?;
        let in_field = zones.field.contains(card_id);
        if !in_field && !zones.combat_row.contains(card_id) {
            return Err(EngineError::InvalidZone(format!(
                "attacker {card_id} is not on the field"
            )));
        }
        match posture {
            Posture::SummoningSick => {
                return Err(EngineError::IllegalAttacker(format!(
                    "card {card_id} is summoning sick"
                )))
            }
            Posture::Tapped => {
                return Err(EngineError::IllegalAttacker(format!(
                    "card {card_id} is tapped"
                )))
            }
            Posture::Ready => {}
        }

        // Validation complete; mutate
        if in_field {
            self.move_card(card_id, ZoneKind::Field, ZoneKind::CombatRow, player_id)?;
        }
        self.cards.get_mut(card_id)?.tap();
        self.combat.declare(card_id);

        let defender = self.other_player_id(player_id)?;
        let damage = power.max(0);
        self.log.push(EventKind::AttackResolved {
            attacker: card_id,
            attacking_player: player_id,
            defending_player: defender,
            damage,
        });
        self.apply_damage(defender, damage)?;
        Ok(())
    }

    /// Explicit phase advance: `Main -> Combat -> End -> Draw(next)`
    pub fn advance_phase(&mut self, player_id: PlayerId) -> Result<()> {
        self.ensure_command_legal(player_id)?;
        match self.turn.phase {
            Phase::Main => {
                self.turn.phase = Phase::Combat;
                self.log.push(EventKind::PhaseAdvanced {
                    player: player_id,
                    from: Phase::Main,
                    to: Phase::Combat,
                });
                Ok(())
            }
            Phase::Combat => {
                self.end_combat()?;
                self.turn.phase = Phase::End;
                self.log.push(EventKind::PhaseAdvanced {
                    player: player_id,
                    from: Phase::Combat,
                    to: Phase::End,
                });
                Ok(())
            }
            Phase::End => {
                self.log.push(EventKind::PhaseAdvanced {
                    player: player_id,
                    from: Phase::End,
                    to: Phase::Draw,
                });
                self.rotate_and_begin()
            }
            _ => Err(self.wrong_phase("Main, Combat or End")),
        }
    }

    /// Finish the turn from `Main`, `Combat`, or `End` and hand over
    pub fn end_turn(&mut self, player_id: PlayerId) -> Result<()> {
        self.ensure_command_legal(player_id)?;
        match self.turn.phase {
            Phase::Main | Phase::Combat | Phase::End => {}
            _ => return Err(self.wrong_phase("Main, Combat or End")),
        }
        if self.turn.phase == Phase::Combat {
            self.end_combat()?;
        }
        self.log.push(EventKind::TurnEnded { player: player_id });
        self.rotate_and_begin()
    }

    fn rotate_and_begin(&mut self) -> Result<()> {
        let next_idx = (self.turn.active_player_idx + 1) % self.players.len();
        let next_player = self.players[next_idx].id;
        self.turn.rotate(next_player, next_idx);
        self.begin_turn_step(false)
    }

    /// Draw step for the player becoming active: untap, draw, refresh
    ///
    /// `skip_draw` applies only to the starting player's first turn
    /// (first-turn compensation). An empty library on a required draw is
    /// the deck-out loss, not an error.
    pub(crate) fn begin_turn_step(&mut self, skip_draw: bool) -> Result<()> {
        let active = self.active_player_id();
        self.turn.phase = Phase::Draw;

        // Untap and clear summoning sickness across the active player's board
        let mut board: Vec<CardId> = Vec::new();
        {
            let zones = self.zones(active)?;
            board.extend(&zones.field.cards);
            board.extend(&zones.combat_row.cards);
            board.extend(&zones.resource_row.cards);
        }
        for card_id in board {
            self.cards.get_mut(card_id)?.ready();
        }

        self.log.push(EventKind::TurnBegan {
            player: active,
            turn_number: self.turn.turn_number,
        });

        if !skip_draw {
            match self.zones_mut(active)?.library.take_top() {
                Some(card) => {
                    self.zones_mut(active)?.hand.add(card);
                    self.log.push(EventKind::CardDrawn {
                        player: active,
                        card,
                    });
                }
                None => {
                    // Deck-out: the turn never reaches Main
                    self.deck_out(active)?;
                    return Ok(());
                }
            }
        }

        let ceiling = self.config.azoth_ceiling;
        let player = self.get_player_mut(active)?;
        player.refresh_azoth(ceiling);
        let cap = player.azoth_cap;
        self.log.push(EventKind::AzothRefreshed {
            player: active,
            cap,
        });

        self.turn.phase = Phase::Main; // Draw -> Main is automatic
        Ok(())
    }

    /// Minimal interpreter over structured effect tags
    ///
    /// Unrecognized tags are a logged no-op, never a failure.
    fn resolve_effects(
        &mut self,
        source: CardId,
        controller: PlayerId,
        effects: &[EffectTag],
    ) -> Result<()> {
        for effect in effects {
            match effect {
                EffectTag::Damage { amount, target } => {
                    // Without a targeting input, Any falls back to the opponent
                    let defender = match target {
                        EffectTarget::Opponent | EffectTarget::Any => {
                            self.other_player_id(controller)?
                        }
                    };
                    self.apply_damage(defender, *amount)?;
                }
                EffectTag::GainLife { amount } => {
                    self.apply_life_gain(controller, *amount)?;
                }
                EffectTag::DrawCards { count } => {
                    for _ in 0..*count {
                        match self.zones_mut(controller)?.library.take_top() {
                            Some(card) => {
                                self.zones_mut(controller)?.hand.add(card);
                                self.log.push(EventKind::CardDrawn {
                                    player: controller,
                                    card,
                                });
                            }
                            None => {
                                self.deck_out(controller)?;
                                break;
                            }
                        }
                    }
                }
                EffectTag::Other(_) => {
                    self.log.push(EventKind::UnhandledEffect {
                        card: source,
                        tag: effect.tag_name().to_string(),
                    });
                }
            }
            if self.is_finished() {
                break;
            }
        }
        Ok(())
    }
}
