//! Variants command handler: prints the rule preset matrix.

use std::io::Write;

use pitboss_engine::rules::{create_variant, variant_names, SurrenderMode};

use crate::error::CliError;

pub fn handle_variants_command(out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(
        out,
        "{:<12} {:>5} {:>8} {:>7} {:>4} {:>9} {:>8}",
        "variant", "decks", "hit-s17", "payout", "das", "surrender", "resplit"
    )?;
    for name in variant_names() {
        let variant = create_variant(name)?;
        let rules = variant.rules();
        let surrender = match rules.surrender {
            SurrenderMode::None => "none",
            SurrenderMode::Late => "late",
            SurrenderMode::Early => "early",
        };
        writeln!(
            out,
            "{:<12} {:>5} {:>8} {:>7} {:>4} {:>9} {:>8}",
            variant.name(),
            rules.deck_count,
            if rules.dealer_hits_soft_17 { "yes" } else { "no" },
            format!("{}:1", rules.blackjack_payout),
            if rules.double_after_split { "yes" } else { "no" },
            surrender,
            if rules.resplit_aces { "yes" } else { "no" },
        )?;
    }
    Ok(())
}
