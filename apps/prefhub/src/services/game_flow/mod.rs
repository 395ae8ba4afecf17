//! Game flow orchestration: bridges the pure domain functions with the
//! registry, per-game locking and the persistence port.
//!
//! Every mutation goes through [`GameFlowService::run_mutation`], which works
//! on a copy of the state and only swaps it in when the domain call succeeds.

mod mutation;
mod player_actions;
mod queries;
mod round_lifecycle;
mod seats;

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::domain::state::GameState;
use crate::repos::{GameRepository, IdentityResolver, RulesRepository};
use crate::services::game_registry::GameRegistry;

pub use mutation::GameFlowMutationResult;

pub struct GameFlowService {
    registry: GameRegistry,
    games: Arc<dyn GameRepository>,
    rules: Arc<dyn RulesRepository>,
    identity: Arc<dyn IdentityResolver>,
    config: EngineConfig,
    /// Per game: highest version handed to `games.save`. Saves for one game
    /// run one at a time and never go backwards.
    save_order: DashMap<String, Arc<Mutex<Option<u64>>>>,
}

impl GameFlowService {
    /// Build the engine and reload every game the repository knows about.
    pub fn new(
        games: Arc<dyn GameRepository>,
        rules: Arc<dyn RulesRepository>,
        identity: Arc<dyn IdentityResolver>,
        config: EngineConfig,
    ) -> Self {
        let service = Self {
            registry: GameRegistry::new(),
            games,
            rules,
            identity,
            config,
            save_order: DashMap::new(),
        };
        service.reload();
        service
    }

    fn reload(&self) {
        match self.games.find_all() {
            Ok(games) => {
                let count = games.len();
                for game in games {
                    self.registry.restore(game);
                }
                if count > 0 {
                    info!(count, "Reloaded persisted games");
                }
            }
            Err(e) => warn!(error = %e, "Failed to load persisted games; starting empty"),
        }
    }

    /// Hand a committed snapshot to the repository. Failures are logged only.
    ///
    /// Runs after the game lock is released, so two commits can race here; a
    /// snapshot older than one already saved is dropped.
    fn persist(&self, snapshot: &GameState) {
        let slot = self
            .save_order
            .entry(snapshot.game_id.clone())
            .or_default()
            .clone();
        let mut last_saved = slot.lock();
        if last_saved.is_some_and(|v| v >= snapshot.version) {
            debug!(
                game_id = %snapshot.game_id,
                version = snapshot.version,
                "Skipping stale save"
            );
            return;
        }
        *last_saved = Some(snapshot.version);

        if let Err(e) = self.games.save(snapshot) {
            warn!(
                game_id = %snapshot.game_id,
                version = snapshot.version,
                error = %e,
                "Failed to save game"
            );
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
