//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env` has been
//! loaded).

use std::env;

use anyhow::{Context, bail};
use auth::AuthConfig;
use platform::cookie::is_valid_cookie_name;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:3000";

/// Deployment environment, from `APP_ENV`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub environment: Environment,
    pub database_url: String,
    pub port: u16,
    pub frontend_origin: String,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    ///
    /// ## Arguments
    /// * `lookup` - Returns the value of a variable, `None` when unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let environment = Environment::parse(lookup("APP_ENV").as_deref());

        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {port}"))?,
            None => DEFAULT_PORT,
        };

        let frontend_origin =
            lookup("FRONTEND_ORIGIN").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGIN.to_string());

        let mut auth = match lookup("SESSION_SECRET") {
            Some(secret_b64) => AuthConfig {
                session_secret: decode_secret(&secret_b64)?,
                ..AuthConfig::default()
            },
            None if environment.is_production() => {
                bail!("SESSION_SECRET must be set in production")
            }
            None => {
                tracing::warn!("SESSION_SECRET not set, using a random secret for this process");
                AuthConfig::with_random_secret()
            }
        };
        auth.cookie_secure = environment.is_production();
        if let Some(name) = lookup("SESSION_COOKIE_NAME") {
            if !is_valid_cookie_name(&name) {
                bail!("SESSION_COOKIE_NAME is not a valid cookie name: {name:?}");
            }
            auth.session_cookie_name = name;
        }

        Ok(Self {
            environment,
            database_url,
            port,
            frontend_origin,
            auth,
        })
    }
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = platform::crypto::from_base64(secret_b64.trim())
        .context("SESSION_SECRET is not valid base64")?;

    let Ok(secret) = <[u8; 32]>::try_from(bytes.as_slice()) else {
        bail!("SESSION_SECRET must decode to 32 bytes, got {}", bytes.len());
    };
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    // base64 of 32 bytes of 0x07
    const SECRET: &str = "BwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwc=";

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://db")])).unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.port, 4000);
        assert_eq!(config.frontend_origin, "http://localhost:3000");
        assert_eq!(config.auth.session_cookie_name, "qid");
        assert!(!config.auth.cookie_secure);
    }

    #[test]
    fn test_database_url_is_required() {
        assert!(ServerConfig::from_lookup(lookup(&[])).is_err());
    }

    #[test]
    fn test_production_requires_secret() {
        let result = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db"),
            ("APP_ENV", "production"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_production_config() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db"),
            ("APP_ENV", "production"),
            ("SESSION_SECRET", SECRET),
            ("PORT", "8080"),
            ("SESSION_COOKIE_NAME", "sid"),
        ]))
        .unwrap();

        assert!(config.auth.cookie_secure);
        assert_eq!(config.auth.session_secret, [7u8; 32]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.auth.session_cookie_name, "sid");
    }

    #[test]
    fn test_short_secret_is_rejected() {
        let result = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db"),
            ("SESSION_SECRET", "c2hvcnQ="),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_port_is_rejected() {
        let result = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db"),
            ("PORT", "http"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_cookie_name_is_rejected() {
        for name in ["q\x7fid", "q id", "q;id", ""] {
            let result = ServerConfig::from_lookup(lookup(&[
                ("DATABASE_URL", "postgres://db"),
                ("SESSION_COOKIE_NAME", name),
            ]));
            assert!(result.is_err(), "accepted {name:?}");
        }
    }
}
