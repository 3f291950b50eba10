use serde::{Deserialize, Serialize};
use std::fs;

/// Resolved CLI configuration.
///
/// Precedence: environment variables over config file over defaults. The
/// config file is read from `PITBOSS_CONFIG` when set, else `pitboss.toml`
/// in the working directory when present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub variant: String,
    pub bankroll: u32,
    pub base_unit: u32,
    pub seed: Option<u64>,
    pub counting: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub variant: ValueSource,
    pub bankroll: ValueSource,
    pub base_unit: ValueSource,
    pub seed: ValueSource,
    pub counting: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            variant: ValueSource::Default,
            bankroll: ValueSource::Default,
            base_unit: ValueSource::Default,
            seed: ValueSource::Default,
            counting: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: "classic".into(),
            bankroll: 1_000,
            base_unit: 10,
            seed: None,
            counting: "hi-lo".into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "io: {}", e),
            ConfigError::Parse(e) => write!(f, "parse: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid: {}", msg),
        }
    }
}

/// Partial view of the config file; absent keys keep their defaults.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    variant: Option<String>,
    bankroll: Option<u32>,
    base_unit: Option<u32>,
    seed: Option<u64>,
    counting: Option<String>,
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut config = Config::default();
    let mut sources = ConfigSources::default();

    let path = std::env::var("PITBOSS_CONFIG").unwrap_or_else(|_| "pitboss.toml".to_string());
    if let Ok(raw) = fs::read_to_string(&path) {
        let file: FileConfig = toml::from_str(&raw)?;
        if let Some(v) = file.variant {
            config.variant = v;
            sources.variant = ValueSource::File;
        }
        if let Some(v) = file.bankroll {
            config.bankroll = v;
            sources.bankroll = ValueSource::File;
        }
        if let Some(v) = file.base_unit {
            config.base_unit = v;
            sources.base_unit = ValueSource::File;
        }
        if let Some(v) = file.seed {
            config.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = file.counting {
            config.counting = v;
            sources.counting = ValueSource::File;
        }
    }

    if let Ok(v) = std::env::var("PITBOSS_VARIANT") {
        config.variant = v;
        sources.variant = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("PITBOSS_BANKROLL") {
        config.bankroll = v
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("PITBOSS_BANKROLL: {}", v)))?;
        sources.bankroll = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("PITBOSS_BASE_UNIT") {
        config.base_unit = v
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("PITBOSS_BASE_UNIT: {}", v)))?;
        sources.base_unit = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("PITBOSS_SEED") {
        config.seed = Some(
            v.parse()
                .map_err(|_| ConfigError::Invalid(format!("PITBOSS_SEED: {}", v)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("PITBOSS_COUNTING") {
        config.counting = v;
        sources.counting = ValueSource::Env;
    }

    if config.base_unit == 0 {
        return Err(ConfigError::Invalid("base_unit must be positive".into()));
    }
    if config.bankroll < config.base_unit {
        return Err(ConfigError::Invalid(
            "bankroll must cover at least one base unit".into(),
        ));
    }

    Ok(ConfigResolved { config, sources })
}
