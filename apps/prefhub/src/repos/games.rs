use crate::domain::state::GameState;
use crate::errors::RepoError;

/// Persistence port for whole-game snapshots.
///
/// `save` runs after every committed mutation with the lock already released.
/// Calls for one game arrive one at a time with strictly increasing versions.
/// The engine logs failures from either method and carries on.
pub trait GameRepository: Send + Sync {
    fn save(&self, game: &GameState) -> Result<(), RepoError>;

    fn find_all(&self) -> Result<Vec<GameState>, RepoError>;
}
