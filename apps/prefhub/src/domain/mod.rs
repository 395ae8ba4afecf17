//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod contract;
pub mod dealing;
pub mod game_transition;
pub mod player_view;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod tricks;
pub mod validation;
pub mod whist;
pub mod widow;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_player_view;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;
#[cfg(test)]
mod tests_validation;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_types::{Card, Rank, Suit, Trump};
pub use contract::{Contract, Level};
pub use dealing::{deal_round, derive_dealing_seed, Deck};
pub use rules::{describe_rules, GameRules};
pub use state::{GameState, Phase, Player, Username, WhistDecision};
