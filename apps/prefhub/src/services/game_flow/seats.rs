use rand::Rng;
use tracing::info;

use crate::domain::game_transition::GameTransition;
use crate::domain::round::start_game;
use crate::domain::state::{GameState, Player, Username};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::services::game_flow::{GameFlowMutationResult, GameFlowService};

impl GameFlowService {
    /// Register an empty game. `rules_variant` falls back to the catalog's
    /// default variant.
    pub fn create_game(
        &self,
        game_id: &str,
        rules_variant: Option<&str>,
    ) -> Result<GameState, DomainError> {
        let game_id = game_id.trim();
        if game_id.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::Other("EMPTY_GAME_ID".into()),
                "Game id must not be empty",
            ));
        }

        let variant = rules_variant.unwrap_or_else(|| self.rules.default_variant());
        let rules = self.rules.find(variant).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Rules, format!("Unknown rules variant {variant}"))
        })?;

        let seed = self
            .config
            .deal_seed
            .unwrap_or_else(|| rand::rng().random());
        let state = GameState::new(game_id, rules, seed);
        let snapshot = state.clone();
        self.registry.insert_new(state)?;

        info!(game_id, variant, "Game created");
        self.persist(&snapshot);
        Ok(snapshot)
    }

    /// Seat a player. The third join deals the first hand.
    pub fn join_game(
        &self,
        game_id: &str,
        username: &str,
    ) -> Result<GameFlowMutationResult, DomainError> {
        let username = Username::parse(username)?;
        let result = self.run_mutation(game_id, "join_game", |state| {
            if state.is_full() {
                return Err(DomainError::capacity(format!(
                    "Game {} already has three players",
                    state.game_id
                )));
            }
            if state.player_index(&username).is_some() {
                return Err(DomainError::conflict(
                    ConflictKind::DuplicatePlayer,
                    format!("{username} is already seated"),
                ));
            }
            state.players.push(Player::new(username.clone()));
            if state.is_full() {
                start_game(state)?;
            }
            Ok(vec![GameTransition::PlayerJoined {
                username: username.clone(),
            }])
        })?;

        info!(
            game_id,
            username = %username,
            seats = result.final_game.players.len(),
            version = result.final_version(),
            "Player joined"
        );
        Ok(result)
    }
}
