use dashmap::DashMap;
use rand::distr::Alphanumeric;
use rand::Rng;
use tracing::debug;

use crate::domain::state::Username;
use crate::logging::pii::Redacted;
use crate::repos::IdentityResolver;

const TOKEN_LEN: usize = 32;

/// Session credentials held in memory. Issue a token per login and resolve it
/// on every request.
#[derive(Debug, Default)]
pub struct InMemorySessions {
    sessions: DashMap<String, Username>,
}

impl InMemorySessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self, username: Username) -> String {
        let token: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();
        debug!(username = %username, token = %Redacted(&token), "Issued session");
        self.sessions.insert(token.clone(), username);
        token
    }

    pub fn revoke(&self, credential: &str) -> bool {
        self.sessions.remove(credential).is_some()
    }
}

impl IdentityResolver for InMemorySessions {
    fn resolve(&self, credential: &str) -> Option<Username> {
        self.sessions.get(credential).map(|entry| entry.value().clone())
    }
}
