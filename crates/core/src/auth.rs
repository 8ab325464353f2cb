//! Fixed-credential login check and its configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PASSWORD, DEFAULT_USERNAME, MAX_SESSION_TTL_SECS, SESSION_TTL_SECS};
use crate::env_config::{env_parse_with_default, env_string_or};

/// Injected login configuration: the one accepted credential pair plus
/// session cookie options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
    /// Adds the `Secure` attribute to the session cookie.
    pub secure_cookies: bool,
    pub session_ttl_secs: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_owned(),
            password: DEFAULT_PASSWORD.to_owned(),
            secure_cookies: false,
            session_ttl_secs: SESSION_TTL_SECS,
        }
    }
}

impl AuthConfig {
    /// Build from `BANKDASH_USERNAME`, `BANKDASH_PASSWORD`, `BANKDASH_PRODUCTION`
    /// and `BANKDASH_SESSION_TTL_SECS`, falling back to the demo defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            username: env_string_or("BANKDASH_USERNAME", &defaults.username),
            password: env_string_or("BANKDASH_PASSWORD", &defaults.password),
            secure_cookies: env_parse_with_default("BANKDASH_PRODUCTION", defaults.secure_cookies),
            session_ttl_secs: session_ttl_or_default(env_parse_with_default(
                "BANKDASH_SESSION_TTL_SECS",
                defaults.session_ttl_secs,
            )),
        }
    }

    /// Whether the configured pair is still the published demo pair.
    #[must_use]
    pub fn uses_demo_credentials(&self) -> bool {
        self.username == DEFAULT_USERNAME && self.password == DEFAULT_PASSWORD
    }

    /// Exact, case-sensitive match against the configured pair.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Keep a session lifetime inside `1..=MAX_SESSION_TTL_SECS`, falling back
/// to the default with a warning otherwise.
fn session_ttl_or_default(ttl_secs: i64) -> i64 {
    if (1..=MAX_SESSION_TTL_SECS).contains(&ttl_secs) {
        ttl_secs
    } else {
        tracing::warn!(
            var = "BANKDASH_SESSION_TTL_SECS",
            value = ttl_secs,
            default = SESSION_TTL_SECS,
            "session lifetime out of range, using default"
        );
        SESSION_TTL_SECS
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Both fields, when present and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let username = self.username.as_deref().filter(|s| !s.is_empty())?;
        let password = self.password.as_deref().filter(|s| !s.is_empty())?;
        Some((username, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pair_verifies() {
        let config = AuthConfig::default();
        assert!(config.verify("user123", "password123"));
    }

    #[test]
    fn test_any_other_pair_is_rejected() {
        let config = AuthConfig::default();
        assert!(!config.verify("user123", "password"));
        assert!(!config.verify("USER123", "password123"));
        assert!(!config.verify("user123 ", "password123"));
        assert!(!config.verify("", ""));
        assert!(!config.verify("password123", "user123"));
    }

    #[test]
    fn test_injected_pair_replaces_default() {
        let config = AuthConfig {
            username: "alice".to_owned(),
            password: "s3cret".to_owned(),
            ..AuthConfig::default()
        };
        assert!(config.verify("alice", "s3cret"));
        assert!(!config.verify("user123", "password123"));
    }

    #[test]
    fn test_demo_credentials_detection() {
        assert!(AuthConfig::default().uses_demo_credentials());
        let config = AuthConfig { password: "Pr0d-Secret!".to_owned(), ..AuthConfig::default() };
        assert!(!config.uses_demo_credentials());
    }

    #[test]
    fn test_session_ttl_range() {
        assert_eq!(session_ttl_or_default(1), 1);
        assert_eq!(session_ttl_or_default(3600), 3600);
        assert_eq!(session_ttl_or_default(MAX_SESSION_TTL_SECS), MAX_SESSION_TTL_SECS);
        assert_eq!(session_ttl_or_default(0), SESSION_TTL_SECS);
        assert_eq!(session_ttl_or_default(-60), SESSION_TTL_SECS);
        assert_eq!(session_ttl_or_default(MAX_SESSION_TTL_SECS + 1), SESSION_TTL_SECS);
        assert_eq!(session_ttl_or_default(i64::MAX), SESSION_TTL_SECS);
    }

    #[test]
    fn test_login_request_requires_both_fields() {
        let req: LoginRequest = serde_json::from_str(r#"{"username":"user123"}"#).unwrap();
        assert!(req.credentials().is_none());

        let req: LoginRequest =
            serde_json::from_str(r#"{"username":"","password":"password123"}"#).unwrap();
        assert!(req.credentials().is_none());

        let req: LoginRequest =
            serde_json::from_str(r#"{"username":"user123","password":"password123"}"#).unwrap();
        assert_eq!(req.credentials(), Some(("user123", "password123")));
    }
}
