//! Error handling for the PrefHub engine.

pub mod domain;
pub mod error_code;
pub mod infra;

pub use domain::DomainError;
pub use error_code::ErrorCode;
pub use infra::{ConfigError, RepoError};
