//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => parse_or_default(var, &v, default),
        Err(_) => default,
    }
}

/// Read a string environment variable, falling back to `default` when unset.
pub fn env_string_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_owned())
}

fn parse_or_default<T: std::str::FromStr + std::fmt::Display>(var: &str, raw: &str, default: T) -> T {
    match raw.parse() {
        Ok(n) => n,
        Err(_) => {
            tracing::warn!(
                var,
                value = %raw,
                default = %default,
                "invalid env var value, using default"
            );
            default
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_value() {
        let result: u64 = parse_or_default("BANKDASH_TEST", "1500", 10);
        assert_eq!(result, 1500);
    }

    #[test]
    fn test_parse_invalid_value_falls_back() {
        let result: u64 = parse_or_default("BANKDASH_TEST", "banana", 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_parse_empty_value_falls_back() {
        let result: bool = parse_or_default("BANKDASH_TEST", "", false);
        assert!(!result);
    }

    #[test]
    fn test_env_missing_var() {
        let result: u32 = env_parse_with_default("BANKDASH_TEST_MISSING_55123", 7);
        assert_eq!(result, 7);
        assert_eq!(env_string_or("BANKDASH_TEST_MISSING_55124", "fallback"), "fallback");
    }
}
