use std::fmt;

const VISIBLE_PREFIX: usize = 4;

/// Masks a credential, keeping at most the first four characters so log lines
/// can still be correlated. Short values are masked entirely.
pub fn redact(input: &str) -> String {
    let len = input.chars().count();
    if len <= VISIBLE_PREFIX * 2 {
        return "[REDACTED]".to_string();
    }
    let prefix: String = input.chars().take(VISIBLE_PREFIX).collect();
    format!("{prefix}…[REDACTED]")
}

/// Wrapper that redacts its contents in both Display and Debug.
pub struct Redacted<'a>(pub &'a str);

impl<'a> fmt::Display for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl<'a> fmt::Debug for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}
