//! Shared helpers for PrefHub tests: quiet logging setup and unique ids.

pub mod logging;
pub mod unique;

pub use unique::{unique_game_id, unique_username};
