use std::path::PathBuf;

use crate::dialogue::RandomPicker;
use crate::error::{ConfigError, KnowledgeError};
use crate::knowledge::{self, HealthKnowledge};

pub const ENV_KNOWLEDGE: &str = "HEALTHBOT_KNOWLEDGE";
pub const ENV_SIGNED_IN: &str = "HEALTHBOT_SIGNED_IN";
pub const ENV_SEED: &str = "HEALTHBOT_SEED";
pub const ENV_HISTORY_LIMIT: &str = "HEALTHBOT_HISTORY_LIMIT";

pub const DEFAULT_HISTORY_LIMIT: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    /// JSON knowledge file; the built-in tables are used when absent.
    pub knowledge_path: Option<PathBuf>,
    /// Initial value of the session's signed-in flag.
    pub signed_in: bool,
    /// Fixes the fallback reply sequence.
    pub fallback_seed: Option<u64>,
    pub history_limit: usize,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            knowledge_path: None,
            signed_in: false,
            fallback_seed: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source; unset variables keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_KNOWLEDGE).filter(|v| !v.trim().is_empty()) {
            config.knowledge_path = Some(PathBuf::from(path.trim()));
        }
        if let Some(value) = lookup(ENV_SIGNED_IN) {
            config.signed_in = parse_bool(ENV_SIGNED_IN, &value)?;
        }
        if let Some(value) = lookup(ENV_SEED) {
            let seed = value.trim().parse().map_err(|_| invalid(ENV_SEED, &value))?;
            config.fallback_seed = Some(seed);
        }
        if let Some(value) = lookup(ENV_HISTORY_LIMIT) {
            let limit: usize = value
                .trim()
                .parse()
                .map_err(|_| invalid(ENV_HISTORY_LIMIT, &value))?;
            if limit == 0 {
                return Err(invalid(ENV_HISTORY_LIMIT, &value));
            }
            config.history_limit = limit;
        }

        Ok(config)
    }

    pub fn load_knowledge(&self) -> Result<HealthKnowledge, KnowledgeError> {
        knowledge::load(self.knowledge_path.as_deref())
    }

    pub fn picker(&self) -> RandomPicker {
        match self.fallback_seed {
            Some(seed) => RandomPicker::seeded(seed),
            None => RandomPicker::new(),
        }
    }
}

fn invalid(var: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        var,
        value: value.to_string(),
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(invalid(var, value)),
    }
}
