//! Route guard decision.
//!
//! A pure function of (session flag present, request path). The HTTP layer
//! turns the decision into a redirect or lets the request through.

use crate::constants::{
    API_PREFIX, BRAND_LOGO_PATH, DEFAULT_PROTECTED_PATH, FAVICON_PATH, FROM_QUERY_PARAM,
    LOGIN_PATH, PROTECTED_PATH_PREFIXES, STATIC_PREFIX,
};

/// How the guard sees a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Static assets, the favicon and the brand logo. Never evaluated.
    Exempt,
    /// `/api...`. Always passed through untouched.
    Api,
    /// The login page, matched exactly.
    Login,
    /// Anything under a protected prefix.
    Protected,
    /// Everything else.
    Public,
}

impl PathClass {
    pub fn of(path: &str) -> Self {
        if path.starts_with(STATIC_PREFIX) || path == FAVICON_PATH || path == BRAND_LOGO_PATH {
            Self::Exempt
        } else if path.starts_with(API_PREFIX) {
            Self::Api
        } else if PROTECTED_PATH_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
            Self::Protected
        } else if path == LOGIN_PATH {
            Self::Login
        } else {
            Self::Public
        }
    }
}

/// Outcome of evaluating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Temporary redirect to the given location.
    Redirect(String),
}

/// Decide what to do with a navigation to `path`.
pub fn decide(has_session_flag: bool, path: &str) -> GuardDecision {
    match (PathClass::of(path), has_session_flag) {
        (PathClass::Protected, false) => GuardDecision::Redirect(login_redirect_location(path)),
        (PathClass::Login, true) => GuardDecision::Redirect(DEFAULT_PROTECTED_PATH.to_owned()),
        _ => GuardDecision::Allow,
    }
}

/// `/?from=<path>` with the path form-urlencoded.
pub fn login_redirect_location(from: &str) -> String {
    format!("{LOGIN_PATH}?{FROM_QUERY_PARAM}={}", form_urlencode(from))
}

fn form_urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'*' | b'-' | b'.' | b'_' => {
                out.push(char::from(byte));
            },
            b' ' => out.push('+'),
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROTECTED: &[&str] = &["/dashboard", "/bank-form", "/dashboard/extra", "/bank-form?x=1"];

    #[test]
    fn test_protected_without_flag_redirects_with_from() {
        assert_eq!(
            decide(false, "/dashboard"),
            GuardDecision::Redirect("/?from=%2Fdashboard".to_owned())
        );
        assert_eq!(
            decide(false, "/bank-form"),
            GuardDecision::Redirect("/?from=%2Fbank-form".to_owned())
        );
        for path in PROTECTED {
            assert!(matches!(decide(false, path), GuardDecision::Redirect(loc) if loc.starts_with("/?from=")));
        }
    }

    #[test]
    fn test_protected_with_flag_is_allowed() {
        for path in PROTECTED {
            assert_eq!(decide(true, path), GuardDecision::Allow, "{path}");
        }
    }

    #[test]
    fn test_login_with_flag_goes_to_form() {
        assert_eq!(decide(true, "/"), GuardDecision::Redirect("/bank-form".to_owned()));
        assert_eq!(decide(false, "/"), GuardDecision::Allow);
    }

    #[test]
    fn test_api_paths_untouched() {
        for flag in [true, false] {
            assert_eq!(decide(flag, "/api/auth/login"), GuardDecision::Allow);
            assert_eq!(decide(flag, "/api/dashboard/charts"), GuardDecision::Allow);
        }
    }

    #[test]
    fn test_exempt_assets() {
        assert_eq!(PathClass::of("/static/app.css"), PathClass::Exempt);
        assert_eq!(PathClass::of("/favicon.ico"), PathClass::Exempt);
        assert_eq!(PathClass::of("/brand_logo.svg"), PathClass::Exempt);
        assert_eq!(decide(false, "/static/app.js"), GuardDecision::Allow);
    }

    #[test]
    fn test_public_paths_allowed() {
        assert_eq!(PathClass::of("/about"), PathClass::Public);
        assert_eq!(decide(false, "/about"), GuardDecision::Allow);
        assert_eq!(decide(true, "/about"), GuardDecision::Allow);
    }

    #[test]
    fn test_from_value_encoding() {
        assert_eq!(login_redirect_location("/dashboard/a b"), "/?from=%2Fdashboard%2Fa+b");
        assert_eq!(login_redirect_location("/bank-form/ü"), "/?from=%2Fbank-form%2F%C3%BC");
    }
}
