//! Sim command handler: batch rounds with counting and a bet progression.
//!
//! Runs advisor-driven rounds where each wager is sized by the configured
//! progression from the outcome history, optionally writing one JSONL
//! record per round for later analysis.

use std::io::Write;
use std::path::Path;

use pitboss_advisor::create_advisor;
use pitboss_engine::betting::{next_bet, BetInputs, BettingStrategy};
use pitboss_engine::counting::CountingSystem;
use pitboss_engine::logger::{RoundLogger, RoundRecord};
use pitboss_engine::round::RoundOutcome;
use pitboss_engine::rules::create_variant;
use pitboss_engine::table::Table;

use crate::config::Config;
use crate::error::CliError;

use super::play_round;

#[allow(clippy::too_many_arguments)]
pub fn handle_sim_command(
    rounds: u32,
    seed: Option<u64>,
    variant: &str,
    counting: &str,
    betting: &str,
    output: Option<&Path>,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let system = CountingSystem::from_label(counting)
        .ok_or_else(|| CliError::InvalidInput(format!("unknown counting system: {}", counting)))?;
    let strategy = BettingStrategy::from_label(betting)
        .ok_or_else(|| CliError::InvalidInput(format!("unknown betting strategy: {}", betting)))?;
    let seed = seed.unwrap_or_else(rand::random);
    let variant = create_variant(variant)?;
    let name = variant.name().to_string();
    let (min_bet, max_bet) = (variant.rules().min_bet, variant.rules().max_bet);

    let mut table = Table::new(variant, cfg.bankroll, seed);
    table.set_counting_system(system);
    let advisor = create_advisor("basic");
    let mut logger = match output {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    let mut history: Vec<RoundOutcome> = Vec::new();
    let mut current_bet = cfg.base_unit;
    let mut played = 0u32;
    let mut wins = 0u32;
    let mut losses = 0u32;
    let mut pushes = 0u32;
    for _ in 0..rounds {
        let inputs = BetInputs {
            current_bet,
            base_unit: cfg.base_unit,
            max_bet,
            available_balance: table.bankroll(),
            true_count: table.counter().true_count(),
        };
        let bet = next_bet(strategy, &history, &inputs).max(min_bet);
        if table.bankroll() < bet {
            break;
        }
        table.place_bet(bet)?;
        let report = play_round(&mut table, advisor.as_ref())?;
        played += 1;
        current_bet = bet;

        // The first hand drives the progression; split hands ride along
        let primary = report
            .summary
            .outcomes
            .first()
            .copied()
            .unwrap_or(RoundOutcome::Push);
        history.push(primary);
        for outcome in &report.summary.outcomes {
            if outcome.is_win() {
                wins += 1;
            } else if outcome.is_loss() {
                losses += 1;
            } else {
                pushes += 1;
            }
        }

        if let Some(logger) = logger.as_mut() {
            let record = RoundRecord {
                round_id: logger.next_id(),
                seed: Some(seed),
                variant: name.clone(),
                wager: bet,
                actions: report.actions.clone(),
                player_cards: report.player_cards.clone(),
                dealer_cards: report.dealer_cards.clone(),
                outcomes: report.summary.outcomes.clone(),
                payout: report.summary.total_payout,
                ending_balance: report.summary.ending_balance,
                ts: None,
                meta: None,
            };
            logger.write(&record)?;
        }
        table.reset_round()?;
    }

    let net = table.bankroll() as i64 - cfg.bankroll as i64;
    writeln!(
        out,
        "Simulated {} rounds at {} (seed {}, {} count, {} betting)",
        played,
        name,
        seed,
        system.label(),
        strategy.label()
    )?;
    writeln!(
        out,
        "Hands: {} won, {} lost, {} pushed",
        wins, losses, pushes
    )?;
    writeln!(
        out,
        "Running count {:+.1}, true count {:+.2}, penetration {:.0}%",
        table.counter().running_count(),
        table.counter().true_count(),
        table.penetration_used() * 100.0
    )?;
    writeln!(out, "Final balance: {} (net {:+})", table.bankroll(), net)?;
    if let Some(path) = output {
        writeln!(out, "Round history: {}", path.display())?;
    }
    Ok(())
}
