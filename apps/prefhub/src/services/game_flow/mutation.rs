use tracing::debug;

use crate::domain::game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
use crate::domain::state::GameState;
use crate::errors::domain::DomainError;
use crate::services::game_flow::GameFlowService;

#[derive(Debug, Clone)]
pub struct GameFlowMutationResult {
    pub final_game: GameState,
    pub old_version: u64,
    pub transitions: Vec<GameTransition>,
}

impl GameFlowMutationResult {
    pub fn final_version(&self) -> u64 {
        self.final_game.version
    }
}

impl GameFlowService {
    /// Apply `mutation` to a copy of the game under its exclusive lock.
    ///
    /// On error the stored state is untouched. On success the version is
    /// bumped, transitions are derived from the before/after lifecycle views
    /// plus whatever the mutation reported, and the snapshot is saved after
    /// the lock is released.
    pub(super) fn run_mutation<F>(
        &self,
        game_id: &str,
        action: &'static str,
        mutation: F,
    ) -> Result<GameFlowMutationResult, DomainError>
    where
        F: FnOnce(&mut GameState) -> Result<Vec<GameTransition>, DomainError>,
    {
        let handle = self.registry.get(game_id)?;

        let result = {
            let mut guard = handle.write();
            let before = GameLifecycleView::of(&guard);
            let old_version = guard.version;

            let mut working = guard.clone();
            let mut explicit_transitions = mutation(&mut working).inspect_err(|e| {
                debug!(game_id, action, code = %e.code(), error = %e, "Mutation rejected");
            })?;
            working.version = old_version + 1;

            let after = GameLifecycleView::of(&working);
            let mut transitions = derive_game_transitions(&before, &after);
            transitions.append(&mut explicit_transitions);

            *guard = working;
            GameFlowMutationResult {
                final_game: guard.clone(),
                old_version,
                transitions,
            }
        };

        debug!(
            game_id,
            action,
            version = result.final_version(),
            phase = ?result.final_game.phase,
            transitions = result.transitions.len(),
            "Mutation committed"
        );
        self.persist(&result.final_game);
        Ok(result)
    }
}
