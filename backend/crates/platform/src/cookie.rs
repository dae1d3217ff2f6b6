//! Cookie Management Infrastructure
//!
//! Building `Set-Cookie` values and reading the request `Cookie` header.

use axum::http::header::InvalidHeaderValue;
use axum::http::{HeaderMap, HeaderValue, header};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Cookie attributes shared by the set and clear variants
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    pub max_age_secs: Option<u64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}

impl CookieConfig {
    /// `Set-Cookie` value carrying `value`
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut cookie = format!("{}={}; Path={}", self.name, value, self.path);

        if let Some(max_age) = self.max_age_secs {
            cookie.push_str(&format!("; Max-Age={}", max_age));
        }
        self.push_flags(&mut cookie);

        cookie
    }

    /// `Set-Cookie` value that makes the browser drop the cookie
    ///
    /// Attributes other than the lifetime must match the original cookie or
    /// some browsers keep it.
    pub fn build_delete_cookie(&self) -> String {
        let mut cookie = format!(
            "{}=; Path={}; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT",
            self.name, self.path
        );
        self.push_flags(&mut cookie);
        cookie
    }

    fn push_flags(&self, cookie: &mut String) {
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", self.same_site.as_str()));
    }
}

/// Extract a cookie value from headers
///
/// Every `Cookie` header is searched; the first matching pair wins.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key == name).then(|| value.to_string())
        })
}

/// Whether `name` is a valid cookie name (an RFC 6265 `token`)
///
/// ## Examples
/// ```rust
/// use platform::cookie::is_valid_cookie_name;
///
/// assert!(is_valid_cookie_name("qid"));
/// assert!(!is_valid_cookie_name("q id"));
/// assert!(!is_valid_cookie_name(""));
/// ```
pub fn is_valid_cookie_name(name: &str) -> bool {
    const SEPARATORS: &[u8] = b"()<>@,;:\\\"/[]?={}";

    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_graphic() && !SEPARATORS.contains(&b))
}

/// Header value for a `Set-Cookie` string
///
/// ## Returns
/// `Err` when the cookie contains bytes that are not valid header text.
pub fn to_header_value(cookie: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(cookie)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_cookie() -> CookieConfig {
        CookieConfig {
            name: "qid".to_string(),
            secure: false,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age_secs: Some(315_360_000),
        }
    }

    #[test]
    fn test_build_set_cookie() {
        let cookie = session_cookie().build_set_cookie("abc.sig");
        assert_eq!(
            cookie,
            "qid=abc.sig; Path=/; Max-Age=315360000; HttpOnly; SameSite=Lax"
        );
    }

    #[test]
    fn test_secure_flag() {
        let config = CookieConfig {
            secure: true,
            ..session_cookie()
        };
        assert!(config.build_set_cookie("v").contains("; Secure"));
        assert!(config.build_delete_cookie().contains("; Secure"));
    }

    #[test]
    fn test_build_delete_cookie() {
        let cookie = session_cookie().build_delete_cookie();
        assert!(cookie.starts_with("qid=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
    }

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; qid=abc123.sig; other=xyz"),
        );

        assert_eq!(extract_cookie(&headers, "qid"), Some("abc123.sig".to_string()));
        assert_eq!(extract_cookie(&headers, "foo"), Some("bar".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_extract_cookie_across_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("foo=bar"));
        headers.append(header::COOKIE, HeaderValue::from_static("qid=second"));
        assert_eq!(extract_cookie(&headers, "qid"), Some("second".to_string()));
    }

    #[test]
    fn test_cookie_name_token_rules() {
        assert!(is_valid_cookie_name("qid"));
        assert!(is_valid_cookie_name("__Host-session"));
        assert!(!is_valid_cookie_name("q\x7fid"));
        assert!(!is_valid_cookie_name("q;id"));
        assert!(!is_valid_cookie_name("q=id"));
        assert!(!is_valid_cookie_name("quid\t"));
        assert!(!is_valid_cookie_name("qïd"));
    }

    #[test]
    fn test_to_header_value_rejects_control_bytes() {
        assert!(to_header_value("qid=abc; Path=/").is_ok());
        assert!(to_header_value("q\x7fid=abc").is_err());
    }
}
