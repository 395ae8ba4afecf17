use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::domain::rules::GameRules;
use crate::errors::{ConfigError, RepoError};
use crate::repos::{RulesRepository, RulesSummary};

/// Rule variants compiled into the engine, optionally overlaid with JSON
/// files from a directory (`<variant>.json`; a file named after a built-in
/// replaces it).
#[derive(Debug, Clone)]
pub struct BuiltinRulesCatalog {
    variants: BTreeMap<String, GameRules>,
    default_variant: String,
}

impl Default for BuiltinRulesCatalog {
    fn default() -> Self {
        Self {
            variants: GameRules::builtin()
                .into_iter()
                .map(|(id, rules)| (id.to_string(), rules))
                .collect(),
            default_variant: crate::domain::rules::DEFAULT_VARIANT.to_string(),
        }
    }
}

impl BuiltinRulesCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        let mut catalog = Self::default();
        if let Some(dir) = &config.rules_dir {
            catalog.load_dir(dir)?;
        }
        catalog.set_default(&config.default_rules)?;
        Ok(catalog)
    }

    pub fn set_default(&mut self, id: &str) -> Result<(), ConfigError> {
        if !self.variants.contains_key(id) {
            return Err(ConfigError::invalid(format!(
                "Default rules variant '{id}' is not in the catalog"
            )));
        }
        self.default_variant = id.to_string();
        Ok(())
    }

    /// Load every `*.json` file in `dir`. Invalid files fail the whole load.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, ConfigError> {
        let rules_file_err = |path: &Path, source: RepoError| ConfigError::RulesFile {
            path: path.display().to_string(),
            source,
        };

        let entries = fs::read_dir(dir).map_err(|e| rules_file_err(dir, e.into()))?;
        let mut loaded = 0;
        for entry in entries {
            let path = entry.map_err(|e| rules_file_err(dir, e.into()))?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()).map(str::to_ascii_lowercase)
            else {
                warn!(path = %path.display(), "Skipping rules file with non UTF-8 name");
                continue;
            };

            let raw = fs::read_to_string(&path).map_err(|e| rules_file_err(&path, e.into()))?;
            let rules: GameRules =
                serde_json::from_str(&raw).map_err(|e| rules_file_err(&path, e.into()))?;
            rules
                .validate()
                .map_err(|e| ConfigError::invalid(format!("{}: {e}", path.display())))?;

            info!(variant = %id, path = %path.display(), "Loaded rules variant");
            self.variants.insert(id, rules);
            loaded += 1;
        }
        Ok(loaded)
    }
}

impl RulesRepository for BuiltinRulesCatalog {
    fn find(&self, id: &str) -> Option<GameRules> {
        self.variants.get(&id.to_ascii_lowercase()).cloned()
    }

    fn default_variant(&self) -> &str {
        &self.default_variant
    }

    fn list(&self) -> Vec<RulesSummary> {
        self.variants
            .iter()
            .map(|(id, rules)| RulesSummary {
                id: id.clone(),
                name: rules.name.clone(),
                description: rules.description.clone(),
            })
            .collect()
    }
}
