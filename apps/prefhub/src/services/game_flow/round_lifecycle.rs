use tracing::info;

use crate::domain::round;
use crate::services::game_flow::{GameFlowMutationResult, GameFlowService};
use crate::errors::domain::DomainError;

impl GameFlowService {
    /// Leave ROUND_COMPLETE: rotate the dealer, bump the round and deal.
    pub fn start_next_round(&self, game_id: &str) -> Result<GameFlowMutationResult, DomainError> {
        let result = self.run_mutation(game_id, "start_next_round", |state| {
            round::start_next_round(state)?;
            Ok(Vec::new())
        })?;

        info!(
            game_id,
            round_no = result.final_game.round_no,
            dealer = result.final_game.dealer,
            version = result.final_version(),
            "Round started"
        );
        Ok(result)
    }
}
