#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! PrefHub: a three-player Preferans engine.
//!
//! The domain layer holds pure game logic over [`domain::GameState`]; the
//! [`services::GameFlowService`] owns the game registry, per-game locking and
//! the repository ports.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod repos;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use config::EngineConfig;
pub use domain::player_view::{AllowedAction, PlayerView};
pub use domain::{Card, Contract, GameRules, GameState, Phase, Username, WhistDecision};
pub use errors::{ConfigError, DomainError, ErrorCode, RepoError};
pub use services::{GameFlowMutationResult, GameFlowService};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    prefhub_test_support::logging::init();
}
