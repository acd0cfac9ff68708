use serde::{Deserialize, Serialize};
use std::fs;

use uno_ai::AI_KINDS;

/// Largest table the CLI will set up.
pub const MAX_PLAYERS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: usize,
    pub seed: Option<u64>,
    pub ai: String,
    pub max_turns: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub seed: ValueSource,
    pub ai: ValueSource,
    pub max_turns: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            seed: ValueSource::Default,
            ai: ValueSource::Default,
            max_turns: ValueSource::Default,
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
            players: 2,
            seed: None,
            ai: "baseline".into(),
            max_turns: 1_000,
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
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Resolves and validates the configuration. See [`load_layers`].
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let resolved = load_layers()?;
    validate(&resolved.config)?;
    Ok(resolved)
}

/// Layers defaults, then the TOML file named by `UNO_CONFIG`, then
/// `UNO_SEED`, `UNO_PLAYERS`, `UNO_AI` and `UNO_MAX_TURNS`. Empty variables
/// are ignored. Values are parsed but not range-checked, so command-line
/// flags can still replace them before validation.
pub fn load_layers() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("UNO_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
        if let Some(v) = f.max_turns {
            cfg.max_turns = v;
            sources.max_turns = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("UNO_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(players) = std::env::var("UNO_PLAYERS")
        && !players.is_empty()
    {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid players".into()))?;
        sources.players = ValueSource::Env;
    }
    if let Ok(ai) = std::env::var("UNO_AI")
        && !ai.is_empty()
    {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }
    if let Ok(turns) = std::env::var("UNO_MAX_TURNS")
        && !turns.is_empty()
    {
        cfg.max_turns = turns
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid max_turns".into()))?;
        sources.max_turns = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ai: Option<String>,
    #[serde(default)]
    max_turns: Option<u32>,
}

pub fn validate_players(players: usize) -> Result<(), ConfigError> {
    if !(2..=MAX_PLAYERS).contains(&players) {
        return Err(ConfigError::Invalid(format!(
            "players must be between 2 and {}",
            MAX_PLAYERS
        )));
    }
    Ok(())
}

pub fn validate_ai(kind: &str) -> Result<(), ConfigError> {
    if !AI_KINDS.contains(&kind) {
        return Err(ConfigError::Invalid(format!(
            "ai must be one of {}",
            AI_KINDS.join(", ")
        )));
    }
    Ok(())
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    validate_players(cfg.players)?;
    validate_ai(&cfg.ai)?;
    if cfg.max_turns == 0 {
        return Err(ConfigError::Invalid(
            "max_turns must be >0".into(),
        ));
    }
    Ok(())
}
