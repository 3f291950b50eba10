//! Buffer-driven tests for the CLI entry point: exit codes, output routing,
//! and seeded reproducibility.

use std::sync::Mutex;

use pitboss_cli::run;

// Every test locks this: the config loader reads PITBOSS_* variables and the
// process environment is shared across test threads.
static ENV_GUARD: Mutex<()> = Mutex::new(());

struct TempEnvVar {
    key: &'static str,
    previous: Option<String>,
}

impl TempEnvVar {
    fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe { std::env::set_var(key, value) };
        Self { key, previous }
    }
}

impl Drop for TempEnvVar {
    fn drop(&mut self) {
        unsafe {
            match &self.previous {
                Some(prev) => std::env::set_var(self.key, prev),
                None => std::env::remove_var(self.key),
            }
        }
    }
}

/// Points the config loader at a path that never exists, so ambient
/// pitboss.toml files cannot leak into assertions.
fn isolated_config() -> TempEnvVar {
    TempEnvVar::set("PITBOSS_CONFIG", "/nonexistent/pitboss.toml")
}

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn help_goes_to_stdout_with_code_zero() {
    let _env = ENV_GUARD.lock().unwrap();
    let (code, out, err) = run_cli(&["pitboss", "--help"]);
    assert_eq!(code, 0);
    assert!(err.is_empty());
    for command in ["deal", "play", "sim", "variants", "cfg"] {
        assert!(out.contains(command), "help should list {}", command);
    }
}

#[test]
fn unknown_subcommand_goes_to_stderr_with_code_two() {
    let _env = ENV_GUARD.lock().unwrap();
    let (code, out, err) = run_cli(&["pitboss", "shuffle-up"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(!err.is_empty());
}

#[test]
fn variants_prints_every_preset() {
    let _env = ENV_GUARD.lock().unwrap();
    let _cfg = isolated_config();
    let (code, out, _) = run_cli(&["pitboss", "variants"]);
    assert_eq!(code, 0);
    for name in ["classic", "european", "vegas-strip", "single-deck", "6:5"] {
        assert!(out.contains(name), "missing {} in:\n{}", name, out);
    }
    assert!(out.contains("1.5:1"));
    assert!(out.contains("1.2:1"));
}

#[test]
fn cfg_shows_defaults_and_their_source() {
    let _env = ENV_GUARD.lock().unwrap();
    let _cfg = isolated_config();
    let (code, out, _) = run_cli(&["pitboss", "cfg"]);
    assert_eq!(code, 0);
    assert!(out.contains("variant = \"classic\"  (default)"));
    assert!(out.contains("bankroll = 1000  (default)"));
    assert!(out.contains("seed = (random)  (default)"));
}

#[test]
fn cfg_reports_file_and_env_sources() {
    let _env = ENV_GUARD.lock().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pitboss.toml");
    std::fs::write(&path, "variant = \"european\"\nbankroll = 5000\n").unwrap();
    let _cfg = TempEnvVar::set("PITBOSS_CONFIG", path.to_str().unwrap());
    let _variant = TempEnvVar::set("PITBOSS_VARIANT", "single-deck");

    let (code, out, _) = run_cli(&["pitboss", "cfg"]);
    assert_eq!(code, 0);
    // env beats file, file beats default
    assert!(out.contains("variant = \"single-deck\"  (env)"), "{}", out);
    assert!(out.contains("bankroll = 5000  (file)"), "{}", out);
    assert!(out.contains("base_unit = 10  (default)"), "{}", out);
}

#[test]
fn malformed_env_value_is_a_config_error() {
    let _env = ENV_GUARD.lock().unwrap();
    let _cfg = isolated_config();
    let _bankroll = TempEnvVar::set("PITBOSS_BANKROLL", "a-lot");
    let (code, out, err) = run_cli(&["pitboss", "cfg"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Configuration error"));
}

#[test]
fn deal_is_reproducible_for_a_seed() {
    let _env = ENV_GUARD.lock().unwrap();
    let _cfg = isolated_config();
    let (code_a, out_a, _) = run_cli(&["pitboss", "deal", "--seed", "42"]);
    let (code_b, out_b, _) = run_cli(&["pitboss", "deal", "--seed", "42"]);
    assert_eq!(code_a, 0);
    assert_eq!(code_b, 0);
    assert_eq!(out_a, out_b);
    assert!(out_a.contains("Seed: 42"));
    assert!(out_a.contains("Player: "));
    assert!(out_a.contains("Dealer: "));
    assert!(out_a.contains("Payout: "));
}

#[test]
fn deal_rejects_an_unknown_variant() {
    let _env = ENV_GUARD.lock().unwrap();
    let _cfg = isolated_config();
    let (code, _, err) = run_cli(&["pitboss", "deal", "--seed", "1", "--variant", "pontoon"]);
    assert_eq!(code, 2);
    assert!(err.contains("Error:"));
    assert!(err.contains("pontoon"));
}

#[test]
fn play_reports_a_session_summary() {
    let _env = ENV_GUARD.lock().unwrap();
    let _cfg = isolated_config();
    let (code, out, err) = run_cli(&["pitboss", "play", "--rounds", "5", "--seed", "7"]);
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("Playing 5 rounds at classic (seed 7, advisor basic)"));
    assert!(out.contains("Result: "));
}

#[test]
fn sim_runs_seeded_with_counting_and_progression() {
    let _env = ENV_GUARD.lock().unwrap();
    let _cfg = isolated_config();
    let (code, out, err) = run_cli(&[
        "pitboss", "sim", "--rounds", "20", "--seed", "9", "--counting", "zen", "--betting",
        "martingale",
    ]);
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("zen count"));
    assert!(out.contains("martingale betting"));
    assert!(out.contains("Final balance:"));
}

#[test]
fn sim_rejects_unknown_counting_system() {
    let _env = ENV_GUARD.lock().unwrap();
    let _cfg = isolated_config();
    let (code, _, err) = run_cli(&["pitboss", "sim", "--seed", "1", "--counting", "red7"]);
    assert_eq!(code, 2);
    assert!(err.contains("unknown counting system"));
}

#[test]
fn sim_rejects_unknown_betting_strategy() {
    let _env = ENV_GUARD.lock().unwrap();
    let _cfg = isolated_config();
    let (code, _, err) = run_cli(&["pitboss", "sim", "--seed", "1", "--betting", "labouchere"]);
    assert_eq!(code, 2);
    assert!(err.contains("unknown betting strategy"));
}
