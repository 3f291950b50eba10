//! Play command handler: advisor-driven rounds with a per-round report.

use std::io::Write;

use pitboss_advisor::create_advisor;
use pitboss_engine::round::RoundOutcome;
use pitboss_engine::rules::create_variant;
use pitboss_engine::table::Table;

use crate::config::Config;
use crate::error::CliError;

use super::play_round;

pub fn handle_play_command(
    rounds: u32,
    seed: Option<u64>,
    variant: &str,
    advisor_name: &str,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let variant = create_variant(variant)?;
    let name = variant.name();
    let min_bet = variant.rules().min_bet;
    let bet = cfg.base_unit.max(min_bet);
    let mut table = Table::new(variant, cfg.bankroll, seed);
    let advisor = create_advisor(advisor_name);

    writeln!(
        out,
        "Playing {} rounds at {} (seed {}, advisor {})",
        rounds,
        name,
        seed,
        advisor.name()
    )?;

    let mut wins = 0u32;
    let mut losses = 0u32;
    let mut pushes = 0u32;
    let mut blackjacks = 0u32;
    for round in 1..=rounds {
        if table.bankroll() < bet {
            writeln!(out, "Bankroll below table minimum, stopping early")?;
            break;
        }
        table.place_bet(bet)?;
        let report = play_round(&mut table, advisor.as_ref())?;
        for outcome in &report.summary.outcomes {
            match outcome {
                RoundOutcome::Blackjack => blackjacks += 1,
                o if o.is_win() => wins += 1,
                RoundOutcome::Push => pushes += 1,
                _ => losses += 1,
            }
        }
        let outcomes: Vec<&str> = report.summary.outcomes.iter().map(|o| o.label()).collect();
        writeln!(
            out,
            "Round {:>3}: {:<12} payout {:>4}  balance {:>6}",
            round,
            outcomes.join("+"),
            report.summary.total_payout,
            report.summary.ending_balance
        )?;
        table.reset_round()?;
    }

    let net = table.bankroll() as i64 - cfg.bankroll as i64;
    writeln!(
        out,
        "Result: {} wins ({} blackjack), {} losses, {} pushes, net {:+}",
        wins + blackjacks,
        blackjacks,
        losses,
        pushes,
        net
    )?;
    Ok(())
}
