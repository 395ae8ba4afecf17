//! In-process implementations of the repository ports.

pub mod games_memory;
pub mod rules_builtin;
pub mod sessions_memory;

pub use games_memory::InMemoryGameRepository;
pub use rules_builtin::BuiltinRulesCatalog;
pub use sessions_memory::InMemorySessions;
