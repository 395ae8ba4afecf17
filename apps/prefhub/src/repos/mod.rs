//! Repository traits for the engine's collaborators.

pub mod games;
pub mod identity;
pub mod rules;

pub use games::GameRepository;
pub use identity::IdentityResolver;
pub use rules::{RulesRepository, RulesSummary};
