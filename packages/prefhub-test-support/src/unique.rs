use ulid::Ulid;

/// A game id no other test will use, e.g. `table-01J...`.
pub fn unique_game_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A username unique per call. Lowercased so it sorts like a real login.
pub fn unique_username(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new().to_string().to_lowercase())
}
