//! The session flag cookie: how it is issued, cleared and detected.
//!
//! The cookie carries no meaning beyond its presence. Nothing on the server
//! remembers that it was issued.

use chrono::{DateTime, TimeDelta, Utc};

use crate::auth::AuthConfig;
use crate::constants::{SESSION_COOKIE_NAME, SESSION_COOKIE_VALUE};
use crate::error::{CoreError, Result};

const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// A `Set-Cookie` directive for the session flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub value: String,
    pub max_age_secs: i64,
    pub expires: DateTime<Utc>,
    pub secure: bool,
}

impl SessionCookie {
    /// Cookie set on a successful login, valid for the configured lifetime.
    ///
    /// Fails when the lifetime is not positive or `now + ttl` leaves the
    /// representable date range.
    pub fn issue(config: &AuthConfig, now: DateTime<Utc>) -> Result<Self> {
        let ttl = config.session_ttl_secs;
        if ttl <= 0 {
            return Err(CoreError::InvalidInput(format!("session lifetime must be positive, got {ttl}s")));
        }
        let expires = TimeDelta::try_seconds(ttl)
            .and_then(|delta| now.checked_add_signed(delta))
            .ok_or_else(|| CoreError::InvalidInput(format!("session lifetime {ttl}s is out of range")))?;
        Ok(Self {
            value: SESSION_COOKIE_VALUE.to_owned(),
            max_age_secs: ttl,
            expires,
            secure: config.secure_cookies,
        })
    }

    /// Immediate-expiry cookie that makes the browser drop the flag.
    pub fn cleared(secure: bool) -> Self {
        Self { value: String::new(), max_age_secs: 0, expires: DateTime::<Utc>::UNIX_EPOCH, secure }
    }

    pub fn is_cleared(&self) -> bool {
        self.max_age_secs <= 0
    }

    /// Render as a `Set-Cookie` header value.
    pub fn to_header_value(&self) -> String {
        let mut out = format!(
            "{SESSION_COOKIE_NAME}={}; Path=/; Expires={}; Max-Age={}; HttpOnly; SameSite=Lax",
            self.value,
            self.expires.format(HTTP_DATE_FORMAT),
            self.max_age_secs.max(0),
        );
        if self.secure {
            out.push_str("; Secure");
        }
        out
    }
}

/// Whether any `Cookie` header line names the session flag.
///
/// Presence is all that counts; the value is never inspected.
pub fn has_session_flag<'a, I>(cookie_headers: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    cookie_headers.into_iter().flat_map(|line| line.split(';')).any(|pair| {
        let name = pair.split_once('=').map_or(pair, |(name, _)| name);
        name.trim() == SESSION_COOKIE_NAME
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_issued_cookie_attributes() {
        let cookie = SessionCookie::issue(&AuthConfig::default(), fixed_now()).unwrap();
        let header = cookie.to_header_value();
        assert_eq!(
            header,
            "app_session=user_session_token_example; Path=/; \
             Expires=Sat, 02 Mar 2024 12:00:00 GMT; Max-Age=86400; HttpOnly; SameSite=Lax"
        );
        assert!(!cookie.is_cleared());
    }

    #[test]
    fn test_secure_flag_in_production() {
        let config = AuthConfig { secure_cookies: true, ..AuthConfig::default() };
        let header = SessionCookie::issue(&config, fixed_now()).unwrap().to_header_value();
        assert!(header.ends_with("; Secure"));
    }

    #[test]
    fn test_out_of_range_lifetime_is_an_error() {
        for ttl in [0, -1, i64::MAX] {
            let config = AuthConfig { session_ttl_secs: ttl, ..AuthConfig::default() };
            let err = SessionCookie::issue(&config, fixed_now()).unwrap_err();
            assert!(matches!(err, CoreError::InvalidInput(_)), "ttl {ttl}: {err:?}");
        }
    }

    #[test]
    fn test_shortest_lifetime_is_accepted() {
        let config = AuthConfig { session_ttl_secs: 1, ..AuthConfig::default() };
        let cookie = SessionCookie::issue(&config, fixed_now()).unwrap();
        assert_eq!(cookie.max_age_secs, 1);
        assert!(cookie.to_header_value().contains("Expires=Fri, 01 Mar 2024 12:00:01 GMT; Max-Age=1;"));
    }

    #[test]
    fn test_cleared_cookie_expires_immediately() {
        let cookie = SessionCookie::cleared(false);
        assert!(cookie.is_cleared());
        assert_eq!(
            cookie.to_header_value(),
            "app_session=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0; HttpOnly; SameSite=Lax"
        );
    }

    #[test]
    fn test_flag_detection() {
        assert!(has_session_flag(["app_session=abc"]));
        assert!(has_session_flag(["theme=dark; app_session=abc; lang=en"]));
        assert!(has_session_flag(["theme=dark", "app_session="]));
        assert!(has_session_flag(["app_session"]));
        assert!(!has_session_flag(["app_sessionx=abc"]));
        assert!(!has_session_flag(["theme=app_session"]));
        assert!(!has_session_flag(Vec::<&str>::new()));
    }
}
