//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read process environment at runtime, so every
//! knob here is captured with `option_env!` when the client crate is
//! compiled. Values that fail to parse fall back to their defaults instead
//! of aborting hydration.
//!
//! | Variable                        | Default                  |
//! |---------------------------------|--------------------------|
//! | `EDGERISK_API_ORIGIN`           | `http://localhost:8000`  |
//! | `EDGERISK_DASHBOARD_FALLBACK`   | `placeholder`            |
//! | `EDGERISK_DASHBOARD_TIMEOUT_MS` | `10000`                  |
//! | `EDGERISK_ANALYZE_TIMEOUT_MS`   | `120000`                 |

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::Arc;

use riskmetrics::DashboardMetrics;

pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";
pub const DEFAULT_DASHBOARD_TIMEOUT_MS: u32 = 10_000;
pub const DEFAULT_ANALYZE_TIMEOUT_MS: u32 = 120_000;

/// What the dashboard shows when `/dashboard_data` cannot be loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Substitute the canned placeholder snapshot.
    #[default]
    Placeholder,
    /// Leave the dashboard empty and show the "no data" panel.
    Empty,
}

impl FallbackPolicy {
    /// Parse a policy name; unknown or missing values use the default.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
            Some("empty" | "none") => Self::Empty,
            _ => Self::Placeholder,
        }
    }

    /// Snapshot installed after a failed dashboard load.
    #[must_use]
    pub fn fallback_snapshot(self) -> Option<Arc<DashboardMetrics>> {
        match self {
            Self::Placeholder => Some(Arc::new(DashboardMetrics::placeholder())),
            Self::Empty => None,
        }
    }
}

/// Base URL of the remote analysis service, without a trailing slash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOrigin(String);

impl ApiOrigin {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            Self(DEFAULT_API_ORIGIN.to_owned())
        } else {
            Self(trimmed.to_owned())
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full URL for a service endpoint such as `/analyze`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        join(&self.0, path)
    }

    /// Qualify a server-relative asset path against this origin.
    ///
    /// Absolute URLs (with a scheme or protocol-relative `//`) are returned
    /// unchanged; blank references resolve to `None`.
    #[must_use]
    pub fn resolve(&self, reference: &str) -> Option<String> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }
        if reference.starts_with("//") || has_scheme(reference) {
            return Some(reference.to_owned());
        }
        Some(join(&self.0, reference))
    }
}

impl Default for ApiOrigin {
    fn default() -> Self {
        Self(DEFAULT_API_ORIGIN.to_owned())
    }
}

/// Everything the client needs to reach the analysis service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_origin: ApiOrigin,
    pub fallback: FallbackPolicy,
    pub dashboard_timeout_ms: u32,
    pub analyze_timeout_ms: u32,
}

impl ClientConfig {
    /// Configuration baked in when this crate was compiled.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("EDGERISK_API_ORIGIN"),
            option_env!("EDGERISK_DASHBOARD_FALLBACK"),
            option_env!("EDGERISK_DASHBOARD_TIMEOUT_MS"),
            option_env!("EDGERISK_ANALYZE_TIMEOUT_MS"),
        )
    }

    #[must_use]
    pub fn from_values(
        api_origin: Option<&str>,
        fallback: Option<&str>,
        dashboard_timeout_ms: Option<&str>,
        analyze_timeout_ms: Option<&str>,
    ) -> Self {
        Self {
            api_origin: api_origin.map_or_else(ApiOrigin::default, ApiOrigin::new),
            fallback: FallbackPolicy::parse(fallback),
            dashboard_timeout_ms: parse_timeout(dashboard_timeout_ms, DEFAULT_DASHBOARD_TIMEOUT_MS),
            analyze_timeout_ms: parse_timeout(analyze_timeout_ms, DEFAULT_ANALYZE_TIMEOUT_MS),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None, None, None)
    }
}

fn parse_timeout(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(default)
}

fn join(origin: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{origin}{path}")
    } else {
        format!("{origin}/{path}")
    }
}

/// RFC 3986 scheme: a letter followed by letters, digits, `+`, `-`, `.`, then `:`.
pub(crate) fn has_scheme(reference: &str) -> bool {
    let Some((scheme, _)) = reference.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
