pub mod game_flow;
pub mod game_registry;

pub use game_flow::{GameFlowMutationResult, GameFlowService};
pub use game_registry::GameRegistry;
