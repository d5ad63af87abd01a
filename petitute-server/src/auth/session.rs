//! Session cookie and admin credential helpers

use http::HeaderMap;
use http::header::{AUTHORIZATION, COOKIE};

use super::JwtService;
use crate::core::AdminCredential;

/// Cookie carrying the session token
pub const SESSION_COOKIE: &str = "petitute_session";

/// Where unauthenticated users are sent
pub const LOGIN_PATH: &str = "/login";

/// Compare submitted credentials against the configured admin account.
///
/// Both sides are always compared so the check does not short-circuit on
/// the username.
pub fn verify_admin(admin: &AdminCredential, username: &str, password: &str) -> bool {
    let user_ok = constant_time_eq(admin.username.as_bytes(), username.as_bytes());
    let pass_ok = constant_time_eq(admin.password.as_bytes(), password.as_bytes());
    user_ok & pass_ok
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Only local paths are accepted as post-login redirects
pub fn safe_redirect(next: Option<&str>) -> String {
    match next.map(str::trim) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path.to_string()
        }
        _ => "/".to_string(),
    }
}

/// Login URL that returns to `path` afterwards (percent-encoded)
pub fn login_url(path: &str) -> String {
    format!("{LOGIN_PATH}?next={}", urlencoding::encode(path))
}

/// `Set-Cookie` value for a new session
pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie =
        format!("{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age_secs}");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that removes the session
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

/// Session token from `Authorization: Bearer` or the session cookie
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    if let Some(token) = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(JwtService::extract_from_header)
    {
        return Some(token);
    }

    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn admin() -> AdminCredential {
        AdminCredential {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }

    #[test]
    fn test_verify_admin() {
        assert!(verify_admin(&admin(), "admin", "admin123"));
        assert!(!verify_admin(&admin(), "admin", "admin124"));
        assert!(!verify_admin(&admin(), "root", "admin123"));
        assert!(!verify_admin(&admin(), "", ""));
    }

    #[test]
    fn test_safe_redirect() {
        assert_eq!(safe_redirect(Some("/admin")), "/admin");
        assert_eq!(safe_redirect(Some("/checkout/5?x=1")), "/checkout/5?x=1");
        assert_eq!(safe_redirect(Some("//evil.example")), "/");
        assert_eq!(safe_redirect(Some("https://evil.example")), "/");
        assert_eq!(safe_redirect(Some("/\\evil.example")), "/");
        assert_eq!(safe_redirect(None), "/");
    }

    #[test]
    fn test_login_url_encodes_next() {
        assert_eq!(login_url("/api/bookings"), "/login?next=%2Fapi%2Fbookings");
        assert_eq!(
            login_url("/api/bookings?a=1&b=2"),
            "/login?next=%2Fapi%2Fbookings%3Fa%3D1%26b%3D2"
        );
        let decoded = urlencoding::decode("%2Fapi%2Fbookings%3Fa%3D1%26b%3D2").unwrap();
        assert_eq!(safe_redirect(Some(&*decoded)), "/api/bookings?a=1&b=2");
    }

    #[test]
    fn test_session_cookie() {
        let cookie = session_cookie("abc", 60, false);
        assert!(cookie.starts_with("petitute_session=abc;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(!cookie.contains("Secure"));
        assert!(session_cookie("abc", 60, true).ends_with("; Secure"));
        assert!(clear_session_cookie().contains("Max-Age=0"));
    }

    #[test]
    fn test_extract_token_prefers_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer tok-a"));
        headers.insert(COOKIE, HeaderValue::from_static("petitute_session=tok-b"));
        assert_eq!(extract_token(&headers), Some("tok-a"));
    }

    #[test]
    fn test_extract_token_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; petitute_session=tok-b; lang=th"),
        );
        assert_eq!(extract_token(&headers), Some("tok-b"));
    }

    #[test]
    fn test_extract_token_missing() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_token(&headers), None);
        headers.insert(COOKIE, HeaderValue::from_static("petitute_session="));
        assert_eq!(extract_token(&headers), None);
    }
}
