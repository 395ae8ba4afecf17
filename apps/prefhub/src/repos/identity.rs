use crate::domain::state::Username;

/// Maps an opaque session credential to the player it belongs to.
/// The engine never stores credentials.
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, credential: &str) -> Option<Username>;
}
