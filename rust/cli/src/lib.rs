//! # Pitboss CLI Library
//!
//! Command-line interface for the pitboss blackjack engine. It exposes
//! subcommands for dealing, playing, and simulating rounds, and for
//! inspecting rule presets and configuration.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["pitboss", "deal", "--seed", "42"];
//! let code = pitboss_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Deal and resolve a single round for inspection
//! - `play`: Play rounds with the strategy advisor choosing actions
//! - `sim`: Run simulations with counting and bet progressions, JSONL output
//! - `variants`: Print the rule-variant preset matrix
//! - `cfg`: Display current configuration settings and their sources

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

mod commands;
pub mod config;
mod error;
mod exit_code;

use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command,
    handle_variants_command,
};
pub use error::CliError;

/// Pitboss: blackjack rules and resolution engine.
#[derive(Debug, Parser)]
#[command(name = "pitboss", version, about = "Blackjack rules & resolution engine")]
pub struct PitbossCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Deal and resolve a single round
    Deal {
        /// RNG seed for a reproducible shoe
        #[arg(long)]
        seed: Option<u64>,
        /// Rule variant preset name
        #[arg(long)]
        variant: Option<String>,
    },
    /// Play rounds with the advisor choosing actions
    Play {
        /// Number of rounds to play
        #[arg(long, default_value_t = 10)]
        rounds: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        variant: Option<String>,
        /// Advisor used to pick actions
        #[arg(long, default_value = "basic")]
        advisor: String,
    },
    /// Simulate rounds with counting and a bet progression
    Sim {
        #[arg(long, default_value_t = 100)]
        rounds: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        variant: Option<String>,
        /// Counting system (hi-lo, ko, omega2, zen, halves)
        #[arg(long, default_value = "hi-lo")]
        counting: String,
        /// Bet progression (flat, martingale, paroli, 1-3-2-6, dalembert,
        /// fibonacci, count)
        #[arg(long, default_value = "flat")]
        betting: String,
        /// Write per-round JSONL records to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the rule-variant preset matrix
    Variants,
    /// Display configuration settings and their sources
    Cfg,
}

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand
/// handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["pitboss", "variants"];
/// let code = pitboss_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let cli = match PitbossCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            // clap renders help/version on stdout with a zero exit code
            if e.use_stderr() {
                let _ = writeln!(err, "{}", e);
                return exit_code::ERROR;
            }
            let _ = write!(out, "{}", e);
            return exit_code::SUCCESS;
        }
    };

    let cfg = match config::load_with_sources() {
        Ok(resolved) => resolved,
        Err(e) => {
            let _ = writeln!(err, "Configuration error: {}", e);
            return exit_code::ERROR;
        }
    };

    let result = match cli.command {
        Commands::Deal { seed, variant } => {
            let variant = variant.unwrap_or_else(|| cfg.config.variant.clone());
            handle_deal_command(seed.or(cfg.config.seed), &variant, &cfg.config, out)
        }
        Commands::Play {
            rounds,
            seed,
            variant,
            advisor,
        } => {
            let variant = variant.unwrap_or_else(|| cfg.config.variant.clone());
            handle_play_command(
                rounds,
                seed.or(cfg.config.seed),
                &variant,
                &advisor,
                &cfg.config,
                out,
            )
        }
        Commands::Sim {
            rounds,
            seed,
            variant,
            counting,
            betting,
            output,
        } => {
            let variant = variant.unwrap_or_else(|| cfg.config.variant.clone());
            handle_sim_command(
                rounds,
                seed.or(cfg.config.seed),
                &variant,
                &counting,
                &betting,
                output.as_deref(),
                &cfg.config,
                out,
            )
        }
        Commands::Variants => handle_variants_command(out),
        Commands::Cfg => handle_cfg_command(&cfg, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            let _ = writeln!(err, "Interrupted: {}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
