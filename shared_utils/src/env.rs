//! Environment variable helpers with sensible defaults.

/// Reads an environment variable, falling back to `default` when the
/// variable is unset or blank.
pub fn env_str(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Reads an environment variable as a `u16`, falling back to `default`
/// when the variable is unset or does not parse.
pub fn env_u16(name: &str, default: u16) -> u16 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
