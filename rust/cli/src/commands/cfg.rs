//! Cfg command handler: shows resolved configuration and value sources.

use std::io::Write;

use crate::config::{ConfigResolved, ValueSource};
use crate::error::CliError;

fn source_label(source: ValueSource) -> &'static str {
    match source {
        ValueSource::Default => "default",
        ValueSource::File => "file",
        ValueSource::Env => "env",
    }
}

pub fn handle_cfg_command(cfg: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(
        out,
        "variant = {:?}  ({})",
        cfg.config.variant,
        source_label(cfg.sources.variant)
    )?;
    writeln!(
        out,
        "bankroll = {}  ({})",
        cfg.config.bankroll,
        source_label(cfg.sources.bankroll)
    )?;
    writeln!(
        out,
        "base_unit = {}  ({})",
        cfg.config.base_unit,
        source_label(cfg.sources.base_unit)
    )?;
    match cfg.config.seed {
        Some(seed) => writeln!(
            out,
            "seed = {}  ({})",
            seed,
            source_label(cfg.sources.seed)
        )?,
        None => writeln!(out, "seed = (random)  ({})", source_label(cfg.sources.seed))?,
    }
    writeln!(
        out,
        "counting = {:?}  ({})",
        cfg.config.counting,
        source_label(cfg.sources.counting)
    )?;
    Ok(())
}
