use serde::{Deserialize, Serialize};
use shoggoth_ai::AiConfig;
use shoggoth_engine::game::TableConfig;
use std::fs;

/// Session settings, resolved from defaults, then the TOML file named by
/// `SHOGGOTH_CONFIG`, then environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub ante: u32,
    pub starting_sanity: u32,
    pub reveal_on_fold: bool,
    pub ai_type: String,
    pub courage: f64,
    pub simulations: u32,
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
    pub seed: ValueSource,
    pub ante: ValueSource,
    pub starting_sanity: ValueSource,
    pub reveal_on_fold: ValueSource,
    pub ai_type: ValueSource,
    pub courage: ValueSource,
    pub simulations: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            ante: ValueSource::Default,
            starting_sanity: ValueSource::Default,
            reveal_on_fold: ValueSource::Default,
            ai_type: ValueSource::Default,
            courage: ValueSource::Default,
            simulations: ValueSource::Default,
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
        let ai = AiConfig::default();
        let table = TableConfig::default();
        Self {
            seed: None,
            ante: 10,
            starting_sanity: table.starting_sanity,
            reveal_on_fold: table.reveal_on_fold,
            ai_type: "shoggoth".into(),
            courage: ai.courage,
            simulations: ai.discard_simulations,
        }
    }
}

impl Config {
    pub fn table_config(&self) -> TableConfig {
        TableConfig {
            starting_sanity: self.starting_sanity,
            reveal_on_fold: self.reveal_on_fold,
            ..TableConfig::default()
        }
    }

    pub fn ai_config(&self) -> AiConfig {
        AiConfig {
            discard_simulations: self.simulations,
            courage: self.courage,
            ..AiConfig::default()
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

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("SHOGGOTH_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ante {
            cfg.ante = v;
            sources.ante = ValueSource::File;
        }
        if let Some(v) = f.starting_sanity {
            cfg.starting_sanity = v;
            sources.starting_sanity = ValueSource::File;
        }
        if let Some(v) = f.reveal_on_fold {
            cfg.reveal_on_fold = v;
            sources.reveal_on_fold = ValueSource::File;
        }
        if let Some(v) = f.ai_type {
            cfg.ai_type = v;
            sources.ai_type = ValueSource::File;
        }
        if let Some(v) = f.courage {
            cfg.courage = v;
            sources.courage = ValueSource::File;
        }
        if let Some(v) = f.simulations {
            cfg.simulations = v;
            sources.simulations = ValueSource::File;
        }
    }

    if let Some(seed) = env_value("SHOGGOTH_SEED") {
        cfg.seed = Some(parse_env("SHOGGOTH_SEED", &seed)?);
        sources.seed = ValueSource::Env;
    }
    if let Some(ante) = env_value("SHOGGOTH_ANTE") {
        cfg.ante = parse_env("SHOGGOTH_ANTE", &ante)?;
        sources.ante = ValueSource::Env;
    }
    if let Some(sanity) = env_value("SHOGGOTH_STARTING_SANITY") {
        cfg.starting_sanity = parse_env("SHOGGOTH_STARTING_SANITY", &sanity)?;
        sources.starting_sanity = ValueSource::Env;
    }
    // Unprefixed names are older spellings; the prefixed ones win.
    for key in ["REVEAL_ON_FOLD", "SHOGGOTH_REVEAL_ON_FOLD"] {
        if let Some(reveal) = env_value(key) {
            cfg.reveal_on_fold = parse_bool(&reveal)
                .ok_or_else(|| ConfigError::Invalid(format!("Invalid {}: {}", key, reveal)))?;
            sources.reveal_on_fold = ValueSource::Env;
        }
    }
    if let Some(ai) = env_value("SHOGGOTH_AI") {
        cfg.ai_type = ai;
        sources.ai_type = ValueSource::Env;
    }
    for key in ["AI_COURAGE", "SHOGGOTH_COURAGE"] {
        if let Some(courage) = env_value(key) {
            cfg.courage = parse_env(key, &courage)?;
            sources.courage = ValueSource::Env;
        }
    }
    if let Some(sims) = env_value("SHOGGOTH_SIMULATIONS") {
        cfg.simulations = parse_env("SHOGGOTH_SIMULATIONS", &sims)?;
        sources.simulations = ValueSource::Env;
    }

    validate(&cfg)?;
    tracing::debug!(?cfg, "configuration resolved");
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ante: Option<u32>,
    #[serde(default)]
    starting_sanity: Option<u32>,
    #[serde(default)]
    reveal_on_fold: Option<bool>,
    #[serde(default)]
    ai_type: Option<String>,
    #[serde(default)]
    courage: Option<f64>,
    #[serde(default)]
    simulations: Option<u32>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.ante == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: ante must be >0".into(),
        ));
    }
    if cfg.starting_sanity == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_sanity must be >0".into(),
        ));
    }
    cfg.ai_config()
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", key, raw)))
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
