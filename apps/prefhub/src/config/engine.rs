use std::env;
use std::path::PathBuf;

use crate::domain::rules::DEFAULT_VARIANT;
use crate::errors::ConfigError;

pub const ENV_DEFAULT_RULES: &str = "PREFHUB_DEFAULT_RULES";
pub const ENV_DEAL_SEED: &str = "PREFHUB_DEAL_SEED";
pub const ENV_RULES_DIR: &str = "PREFHUB_RULES_DIR";

/// Engine settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Variant used when `create_game` is given no explicit rules id.
    pub default_rules: String,
    /// Fixed seed for every new game. Random when unset.
    pub deal_seed: Option<u64>,
    /// Directory of `<variant>.json` files layered over the built-ins.
    pub rules_dir: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_rules: DEFAULT_VARIANT.to_string(),
            deal_seed: None,
            rules_dir: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let default_rules = non_empty(ENV_DEFAULT_RULES)
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or_else(|| DEFAULT_VARIANT.to_string());

        let deal_seed = match non_empty(ENV_DEAL_SEED) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                ConfigError::invalid(format!("{ENV_DEAL_SEED} must be a u64, got '{raw}': {e}"))
            })?),
            None => None,
        };

        let rules_dir = non_empty(ENV_RULES_DIR).map(PathBuf::from);

        Ok(Self {
            default_rules,
            deal_seed,
            rules_dir,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.deal_seed = Some(seed);
        self
    }
}
