//! `azoth` CLI: run a seeded random playout of a full match
//!
//! Loads a card catalog and two deck lists from JSON, then drives the
//! engine with a simple random agent until the match finishes or the
//! turn limit is hit. Useful for smoke-testing catalogs and for
//! eyeballing determinism (same seed, same transcript).

use anyhow::{Context, Result};
use azoth_engine::core::{CardId, Catalog};
use azoth_engine::game::{
    DuelEngine, GameLogger, LifeModel, MatchConfig, MatchOutcome, VerbosityLevel,
};
use azoth_engine::game::DeckList;
use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LifeModelArg {
    /// Face-down life buffer consumed by damage
    Buffer,
    /// Numeric life total
    Points,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VerbosityArg {
    Silent,
    Minimal,
    Normal,
    Verbose,
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        match arg {
            VerbosityArg::Silent => VerbosityLevel::Silent,
            VerbosityArg::Minimal => VerbosityLevel::Minimal,
            VerbosityArg::Normal => VerbosityLevel::Normal,
            VerbosityArg::Verbose => VerbosityLevel::Verbose,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "azoth", about = "Run a seeded random duel")]
struct Args {
    /// Card catalog JSON (array of card records)
    catalog: PathBuf,

    /// Player 1 deck list JSON
    deck1: PathBuf,

    /// Player 2 deck list JSON
    deck2: PathBuf,

    /// Match seed (shuffles and agent choices)
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many turns without a result
    #[arg(long, default_value_t = 100)]
    max_turns: u32,

    #[arg(long, value_enum, default_value_t = LifeModelArg::Buffer)]
    life_model: LifeModelArg,

    /// Starting life total (points model only)
    #[arg(long, default_value_t = 20)]
    starting_life: i32,

    #[arg(long, value_enum, default_value_t = VerbosityArg::Normal)]
    verbosity: VerbosityArg,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let catalog = Catalog::load_from_file(&args.catalog)
        .with_context(|| format!("loading catalog {}", args.catalog.display()))?;
    let deck1 = DeckList::load_from_file(&args.deck1)
        .with_context(|| format!("loading deck {}", args.deck1.display()))?;
    let deck2 = DeckList::load_from_file(&args.deck2)
        .with_context(|| format!("loading deck {}", args.deck2.display()))?;

    let config = MatchConfig {
        life_model: match args.life_model {
            LifeModelArg::Buffer => LifeModel::Buffer,
            LifeModelArg::Points => LifeModel::Points {
                starting_life: args.starting_life,
            },
        },
        ..Default::default()
    };

    let logger = GameLogger::with_verbosity(args.verbosity.into());
    let mut engine = DuelEngine::start_match(&catalog, &deck1, &deck2, args.seed, config)
        .context("starting match")?
        .with_logger(logger);

    // Agent randomness is decorrelated from the in-engine shuffle seed
    let mut rng = ChaCha12Rng::seed_from_u64(args.seed ^ 0x9e37_79b9_7f4a_7c15);

    while !engine.state().is_finished() && engine.state().turn.turn_number <= args.max_turns {
        run_turn(&mut engine, &mut rng)?;
    }

    match engine.state().outcome {
        Some(MatchOutcome::Winner(id)) => {
            let name = engine.state().get_player(id)?.name.clone();
            println!(
                "{name} wins on turn {} ({} events)",
                engine.state().turn.turn_number,
                engine.log_since(None).len()
            );
        }
        Some(MatchOutcome::Draw) => println!("draw"),
        None => println!("no result after {} turns", args.max_turns),
    }
    Ok(())
}

/// One active-player turn: random affordable plays, attack with
/// everything ready, end the turn.
fn run_turn(engine: &mut DuelEngine, rng: &mut ChaCha12Rng) -> Result<()> {
    let active = engine.state().active_player_id();

    loop {
        let playable = affordable_hand(engine, active)?;
        if playable.is_empty() || engine.state().is_finished() {
            break;
        }
        let pick = playable[rng.gen_range(0..playable.len())];
        engine.play_card(active, pick)?;
    }
    if engine.state().is_finished() {
        return Ok(());
    }

    engine.advance_phase(active)?; // Main -> Combat

    let attackers: Vec<CardId> = engine
        .state()
        .zones(active)?
        .field
        .cards
        .iter()
        .copied()
        .filter(|&id| {
            engine
                .state()
                .cards
                .get(id)
                .map(|card| card.posture.can_attack())
                .unwrap_or(false)
        })
        .collect();
    for attacker in attackers {
        if engine.state().is_finished() {
            return Ok(());
        }
        engine.declare_attacker(active, attacker)?;
    }
    if engine.state().is_finished() {
        return Ok(());
    }

    engine.end_turn(active)?;
    Ok(())
}

/// Hand cards the active player can currently pay for
fn affordable_hand(
    engine: &DuelEngine,
    player: azoth_engine::core::PlayerId,
) -> Result<Vec<CardId>> {
    let state = engine.state();
    let pool = state.get_player(player)?.azoth_pool;
    Ok(state
        .zones(player)?
        .hand
        .cards
        .iter()
        .copied()
        .filter(|&id| {
            state
                .cards
                .get(id)
                .map(|card| card.cost <= pool)
                .unwrap_or(false)
        })
        .collect())
}
