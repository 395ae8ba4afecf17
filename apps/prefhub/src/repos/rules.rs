use serde::Serialize;

use crate::domain::rules::GameRules;

/// Catalog entry returned by `available_rules`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RulesSummary {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Lookup of rule variants by id.
pub trait RulesRepository: Send + Sync {
    fn find(&self, id: &str) -> Option<GameRules>;

    /// Variant used when a caller does not name one.
    fn default_variant(&self) -> &str;

    fn list(&self) -> Vec<RulesSummary>;
}
