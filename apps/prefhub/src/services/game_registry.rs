use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::RwLock;

use crate::domain::state::GameState;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

pub type GameHandle = Arc<RwLock<GameState>>;

/// Concurrent id → game map. Each game sits behind its own lock so games
/// never contend with each other.
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: DashMap<String, GameHandle>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new game. Fails if the id is taken.
    pub fn insert_new(&self, state: GameState) -> Result<GameHandle, DomainError> {
        match self.games.entry(state.game_id.clone()) {
            Entry::Occupied(_) => Err(DomainError::conflict(
                ConflictKind::GameExists,
                format!("Game {} already exists", state.game_id),
            )),
            Entry::Vacant(slot) => {
                let handle = Arc::new(RwLock::new(state));
                slot.insert(handle.clone());
                Ok(handle)
            }
        }
    }

    /// Insert or replace, used when reloading persisted games.
    pub fn restore(&self, state: GameState) {
        self.games
            .insert(state.game_id.clone(), Arc::new(RwLock::new(state)));
    }

    pub fn get(&self, game_id: &str) -> Result<GameHandle, DomainError> {
        self.games
            .get(game_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
            })
    }

    /// Sorted ids of every registered game.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.games.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
