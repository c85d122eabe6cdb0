//! Host configuration parsed from environment variables.
//!
//! | Variable             | Default                         |
//! |----------------------|---------------------------------|
//! | `EDGERISK_HOST`      | `0.0.0.0`                       |
//! | `PORT`               | `3000`                          |
//! | `EDGERISK_SITE_ROOT` | Leptos `site-root` (`target/site`) |
//!
//! The analysis service origin is a client build-time setting and is not
//! read here.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Overrides the Leptos site root used for `/pkg` assets.
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build config from the process environment (after `.env` loading).
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when `PORT` or `EDGERISK_HOST` is set
    /// but unparseable.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let host = match non_blank(lookup("EDGERISK_HOST")) {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|e| ServerError::Config(format!("EDGERISK_HOST '{raw}': {e}")))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match non_blank(lookup("PORT")) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ServerError::Config(format!("PORT '{raw}': {e}")))?,
            None => DEFAULT_PORT,
        };
        let site_root = non_blank(lookup("EDGERISK_SITE_ROOT")).map(PathBuf::from);
        Ok(Self { host, port, site_root })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
