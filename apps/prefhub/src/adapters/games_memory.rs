use std::collections::BTreeMap;

use parking_lot::Mutex;
use tracing::debug;

use crate::domain::state::GameState;
use crate::errors::RepoError;
use crate::repos::GameRepository;

/// Keeps each game as its serialized JSON snapshot, the same form a durable
/// store would hold.
#[derive(Debug, Default)]
pub struct InMemoryGameRepository {
    games: Mutex<BTreeMap<String, String>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored snapshot, mostly for tests.
    pub fn snapshot_json(&self, game_id: &str) -> Option<String> {
        self.games.lock().get(game_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.games.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.lock().is_empty()
    }
}

impl GameRepository for InMemoryGameRepository {
    fn save(&self, game: &GameState) -> Result<(), RepoError> {
        let json = serde_json::to_string(game)?;
        debug!(game_id = %game.game_id, version = game.version, bytes = json.len(), "Saved game snapshot");
        self.games.lock().insert(game.game_id.clone(), json);
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<GameState>, RepoError> {
        let games = self.games.lock();
        games
            .values()
            .map(|json| serde_json::from_str(json).map_err(RepoError::from))
            .collect()
    }
}
