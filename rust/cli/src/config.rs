use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

use crate::cli::ReportFormat;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub ignore_case: bool,
    pub allow_duplicates: bool,
    pub format: ReportFormat,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub ignore_case: ValueSource,
    pub allow_duplicates: ValueSource,
    pub format: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            ignore_case: ValueSource::Default,
            allow_duplicates: ValueSource::Default,
            format: ValueSource::Default,
            seed: ValueSource::Default,
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
            ignore_case: false,
            allow_duplicates: false,
            format: ReportFormat::Text,
            seed: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

/// Every variable `load` consults.
#[cfg(test)]
pub(crate) const ENV_VARS: [&str; 5] = [
    "SHOWDOWN_CONFIG",
    "SHOWDOWN_IGNORE_CASE",
    "SHOWDOWN_ALLOW_DUPLICATES",
    "SHOWDOWN_FORMAT",
    "SHOWDOWN_SEED",
];

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves defaults, then `$SHOWDOWN_CONFIG` (TOML), then `SHOWDOWN_*` variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("SHOWDOWN_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.ignore_case {
            cfg.ignore_case = v;
            sources.ignore_case = ValueSource::File;
        }
        if let Some(v) = f.allow_duplicates {
            cfg.allow_duplicates = v;
            sources.allow_duplicates = ValueSource::File;
        }
        if let Some(v) = f.format {
            cfg.format = v;
            sources.format = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(v) = std::env::var("SHOWDOWN_IGNORE_CASE")
        && !v.is_empty()
    {
        cfg.ignore_case =
            parse_bool(&v).ok_or_else(|| ConfigError::Invalid("Invalid ignore_case".into()))?;
        sources.ignore_case = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("SHOWDOWN_ALLOW_DUPLICATES")
        && !v.is_empty()
    {
        cfg.allow_duplicates = parse_bool(&v)
            .ok_or_else(|| ConfigError::Invalid("Invalid allow_duplicates".into()))?;
        sources.allow_duplicates = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("SHOWDOWN_FORMAT")
        && !v.is_empty()
    {
        cfg.format = parse_format(&v).ok_or_else(|| ConfigError::Invalid("Invalid format".into()))?;
        sources.format = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("SHOWDOWN_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
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
    ignore_case: Option<bool>,
    #[serde(default)]
    allow_duplicates: Option<bool>,
    #[serde(default)]
    format: Option<ReportFormat>,
    #[serde(default)]
    seed: Option<u64>,
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn parse_format(s: &str) -> Option<ReportFormat> {
    match s.to_ascii_lowercase().as_str() {
        "text" => Some(ReportFormat::Text),
        "json" => Some(ReportFormat::Json),
        _ => None,
    }
}
