//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

/// Report the outcome of loading a `.env` file. Returns `true` when one was applied.
///
/// A missing file is the normal production case and stays quiet; any other
/// failure is logged and otherwise ignored.
pub fn report_env_file(loaded: Result<PathBuf, dotenvy::Error>) -> bool {
    match loaded {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded .env");
            true
        }
        Err(err) if err.not_found() => false,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring .env");
            false
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Compress SSR and asset responses.
    pub compress: bool,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `COMPRESS`: `true` (default) or `false`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_var(&lookup, "HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED), |v| v.parse().ok())?;
        let port = parse_var(&lookup, "PORT", DEFAULT_PORT, |v| v.parse().ok())?;
        let compress = parse_var(&lookup, "COMPRESS", true, parse_bool)?;
        Ok(Self { host, port, compress })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => parse(raw.trim()).ok_or(ConfigError::Invalid { var, value: raw }),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
