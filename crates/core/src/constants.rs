//! Shared constants for bankdash.
//!
//! Paths, cookie attributes and storage keys that the server, the pages and
//! the CLI must agree on.

/// Name of the session flag cookie.
pub const SESSION_COOKIE_NAME: &str = "app_session";

/// Value written into the session cookie. Only presence is ever checked.
pub const SESSION_COOKIE_VALUE: &str = "user_session_token_example";

/// Session lifetime in seconds (24 hours).
pub const SESSION_TTL_SECS: i64 = 24 * 60 * 60;

/// Longest accepted session lifetime (400 days, the browser cap on `Max-Age`).
pub const MAX_SESSION_TTL_SECS: i64 = 400 * 24 * 60 * 60;

/// Local storage key holding the bank details record.
pub const BANK_DETAILS_STORAGE_KEY: &str = "bankDetailsData";

/// Login page path. Matched exactly.
pub const LOGIN_PATH: &str = "/";

/// Where an authenticated visitor to the login page is sent.
pub const DEFAULT_PROTECTED_PATH: &str = "/bank-form";

/// Dashboard page path.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Path prefixes that require the session flag.
pub const PROTECTED_PATH_PREFIXES: &[&str] = &[DASHBOARD_PATH, DEFAULT_PROTECTED_PATH];

/// Prefix of API routes; the guard never touches these.
pub const API_PREFIX: &str = "/api";

/// Prefix of embedded static assets.
pub const STATIC_PREFIX: &str = "/static/";

/// Browser favicon path.
pub const FAVICON_PATH: &str = "/favicon.ico";

/// The brand logo shown on the login page.
pub const BRAND_LOGO_PATH: &str = "/brand_logo.svg";

/// Query parameter carrying the originally requested path on a login redirect.
pub const FROM_QUERY_PARAM: &str = "from";

/// Delay before the form navigates to the dashboard after a successful save.
pub const FORM_REDIRECT_DELAY_MS: u64 = 1500;

/// Delay before the login page navigates to the form after a successful login.
pub const LOGIN_REDIRECT_DELAY_MS: u64 = 1000;

/// Upper bound of the credit score gauge.
pub const CREDIT_SCORE_MAX: f64 = 850.0;

/// Default demo username.
pub const DEFAULT_USERNAME: &str = "user123";

/// Default demo password.
pub const DEFAULT_PASSWORD: &str = "password123";
