use tracing::{debug, warn};

use crate::domain::player_view::{project, PlayerView};
use crate::domain::state::{GameState, Phase, Username};
use crate::domain::validation;
use crate::domain::Contract;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::repos::RulesSummary;
use crate::services::game_flow::GameFlowService;

impl GameFlowService {
    /// Per-player projection under the game's shared lock.
    pub fn get_player_view(&self, game_id: &str, username: &str) -> Result<PlayerView, DomainError> {
        let username = Username::parse(username)?;
        let handle = self.registry.get(game_id)?;
        let state = handle.read();
        project(&state, &username)
    }

    /// Bids the current bidder could legally make right now.
    pub fn available_bids(&self, game_id: &str) -> Result<Vec<Contract>, DomainError> {
        let handle = self.registry.get(game_id)?;
        let state = handle.read();
        state.require_phase(Phase::Bidding, "available_bids")?;
        Ok(validation::available_bids(&state))
    }

    pub fn available_rules(&self) -> Vec<RulesSummary> {
        self.rules.list()
    }

    /// Full snapshot of one game.
    pub fn get_game(&self, game_id: &str) -> Result<GameState, DomainError> {
        let handle = self.registry.get(game_id)?;
        let snapshot = handle.read().clone();
        Ok(snapshot)
    }

    /// Snapshots of every game, ordered by id.
    pub fn list_games(&self) -> Vec<GameState> {
        self.registry
            .ids()
            .into_iter()
            .filter_map(|id| self.registry.get(&id).ok())
            .map(|handle| handle.read().clone())
            .collect()
    }

    /// Map a session credential to a username via the identity port.
    pub fn resolve_actor(&self, credential: &str) -> Result<Username, DomainError> {
        match self.identity.resolve(credential) {
            Some(username) => {
                debug!(credential = %Redacted(credential), username = %username, "Resolved actor");
                Ok(username)
            }
            None => {
                warn!(credential = %Redacted(credential), "Unknown session credential");
                Err(DomainError::not_found(
                    NotFoundKind::Session,
                    "Unknown or expired session",
                ))
            }
        }
    }
}
