//! Deal command handler: one round, dealt and resolved, for inspection.

use std::io::Write;

use pitboss_advisor::create_advisor;
use pitboss_engine::rules::create_variant;
use pitboss_engine::table::Table;

use crate::config::Config;
use crate::error::CliError;

use super::{fmt_cards, play_round};

/// Deals a single round at the chosen variant and prints both hands, the
/// outcome, and the payout. Seeded deals reproduce exactly.
pub fn handle_deal_command(
    seed: Option<u64>,
    variant: &str,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let variant = create_variant(variant)?;
    let name = variant.name();
    let min_bet = variant.rules().min_bet;
    let mut table = Table::new(variant, cfg.bankroll, seed);
    table.place_bet(cfg.base_unit.max(min_bet))?;

    let advisor = create_advisor("basic");
    let report = play_round(&mut table, advisor.as_ref())?;

    writeln!(out, "Variant: {}  Seed: {}", name, seed)?;
    writeln!(out, "Player: {}", fmt_cards(&report.player_cards))?;
    writeln!(out, "Dealer: {}", fmt_cards(&report.dealer_cards))?;
    writeln!(out, "Actions: {}", report.actions.join(", "))?;
    let outcomes: Vec<&str> = report.summary.outcomes.iter().map(|o| o.label()).collect();
    writeln!(out, "Outcome: {}", outcomes.join(", "))?;
    writeln!(
        out,
        "Payout: {}  Balance: {}",
        report.summary.total_payout, report.summary.ending_balance
    )?;
    Ok(())
}
