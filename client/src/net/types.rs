//! Wire DTOs for the analysis service and the client-side error type.
//!
//! DESIGN
//! ======
//! Request/response shapes mirror the service's JSON exactly. Optional asset
//! paths are `Option<String>`; blank strings are treated as absent by the
//! result builder, not here, so decoding stays a faithful view of the wire.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use riskmetrics::DashboardMetrics;

/// Body of `POST /analyze`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub query: String,
}

/// Successful `/analyze` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Markdown narrative of the analysis.
    pub analysis: String,
    /// Server-relative path of a rendered chart image.
    #[serde(default)]
    pub image_path: Option<String>,
    /// Server-relative path of a downloadable data extract.
    #[serde(default)]
    pub download_path: Option<String>,
    /// Filesystem path of the generated analysis notebook on the service host.
    #[serde(default)]
    pub notebook_path: Option<String>,
}

/// Error envelope returned with non-2xx statuses.
///
/// `detail` is usually a string but validation failures carry a list of
/// objects, so it is kept as raw JSON.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Human-readable detail text, if the service supplied any.
    #[must_use]
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) => {
                let text = text.trim();
                (!text.is_empty()).then(|| text.to_owned())
            }
            other => Some(other.to_string()),
        }
    }
}

/// Failure modes of a call to the analysis service.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {after_ms} ms")]
    Timeout { after_ms: u32 },
    #[error("service responded with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available during server rendering")]
    Unavailable,
}
