//! Environment resolution for [`AppConfig`].
//!
//! # Design
//! - Parsing is pure: each helper takes the raw value so unit tests never
//!   touch process env.
//! - Absent optional values fall back to the development defaults the
//!   original deployment shipped with.

use std::net::IpAddr;

use tracing::info;

use crate::error::{ConfigError, ConfigResult};
use crate::model::{
    AppConfig, DEFAULT_ALLOWED_ORIGINS, DEFAULT_HTTP_PORT, DEFAULT_LOG_LEVEL, default_bind_addr,
};

/// Load the full application configuration from process environment.
///
/// # Errors
///
/// Returns an error if `DATABASE_URL` is absent or any provided value fails
/// to parse.
pub fn load_from_env() -> ConfigResult<AppConfig> {
    let config = resolve(
        env_var("BIND_ADDR"),
        env_var("HTTP_PORT"),
        env_var("DATABASE_URL"),
        env_var("ALLOWED_ORIGINS"),
        env_var("RUST_LOG"),
    )?;
    info!(
        bind_addr = %config.bind_addr,
        http_port = config.http_port,
        origins = config.allowed_origins.len(),
        "configuration resolved"
    );
    Ok(config)
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

pub(crate) fn resolve(
    bind_addr: Option<String>,
    http_port: Option<String>,
    database_url: Option<String>,
    allowed_origins: Option<String>,
    log_level: Option<String>,
) -> ConfigResult<AppConfig> {
    let bind_addr = parse_bind_addr(bind_addr)?;
    let http_port = parse_http_port(http_port)?;
    let database_url = database_url.ok_or(ConfigError::MissingVar {
        name: "DATABASE_URL",
    })?;
    let allowed_origins = parse_allowed_origins(allowed_origins.as_deref());
    let log_level = log_level.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    Ok(AppConfig {
        bind_addr,
        http_port,
        database_url,
        allowed_origins,
        log_level,
    })
}

fn parse_bind_addr(value: Option<String>) -> ConfigResult<IpAddr> {
    value.map_or_else(
        || Ok(default_bind_addr()),
        |raw| {
            raw.parse().map_err(|_| ConfigError::InvalidVar {
                name: "BIND_ADDR",
                value: raw,
                reason: "not an IP address",
            })
        },
    )
}

fn parse_http_port(value: Option<String>) -> ConfigResult<u16> {
    value.map_or(Ok(DEFAULT_HTTP_PORT), |raw| {
        raw.parse().map_err(|_| ConfigError::InvalidVar {
            name: "HTTP_PORT",
            value: raw,
            reason: "not a port number",
        })
    })
}

/// Split a comma-separated origin list, trimming whitespace and dropping
/// empty segments. Unset input yields the development defaults.
pub(crate) fn parse_allowed_origins(value: Option<&str>) -> Vec<String> {
    value.map_or_else(
        || {
            DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(ToString::to_string)
                .collect()
        },
        |raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(ToString::to_string)
                .collect()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> Option<String> {
        Some("postgres://localhost/magicstream".to_string())
    }

    #[test]
    fn database_url_is_required() {
        let err = resolve(None, None, None, None, None).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingVar {
                name: "DATABASE_URL"
            }
        ));
    }

    #[test]
    fn defaults_apply_when_optionals_are_unset() {
        let config = resolve(None, None, minimal(), None, None).unwrap();
        assert_eq!(config.http_port, DEFAULT_HTTP_PORT);
        assert_eq!(config.bind_addr, default_bind_addr());
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.allowed_origins.len(), DEFAULT_ALLOWED_ORIGINS.len());
        assert_eq!(config.allowed_origins[0], "http://localhost:5173");
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let origins = parse_allowed_origins(Some(
            "https://app.magicstream.dev , http://localhost:5173,,",
        ));
        assert_eq!(
            origins,
            ["https://app.magicstream.dev", "http://localhost:5173"]
        );
    }

    #[test]
    fn invalid_port_is_rejected_with_context() {
        let err = resolve(None, Some("eighty".to_string()), minimal(), None, None).unwrap_err();
        match err {
            ConfigError::InvalidVar { name, value, .. } => {
                assert_eq!(name, "HTTP_PORT");
                assert_eq!(value, "eighty");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let err = resolve(
            Some("not-an-ip".to_string()),
            None,
            minimal(),
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidVar {
                name: "BIND_ADDR",
                ..
            }
        ));
    }
}
