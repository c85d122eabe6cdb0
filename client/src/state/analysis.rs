//! Rendered outcome of one `/analyze` call.
//!
//! DESIGN
//! ======
//! Every outcome, success or failure, becomes an [`AnalysisResult`] so the
//! result slot always has something renderable. Error variants carry only a
//! synthesized Markdown message; asset links exist only on success.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use crate::config::ApiOrigin;
use crate::net::types::{AnalyzeResponse, ApiError};
use crate::util::markdown::is_safe_url;

pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Which path produced a result; drives styling only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultKind {
    #[default]
    Success,
    ServerError,
    NetworkError,
    Timeout,
}

/// One analysis answer ready for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    pub kind: ResultKind,
    pub markdown: String,
    /// Absolute chart image URL.
    pub chart_image_url: Option<String>,
    /// Absolute data-extract URL.
    pub download_url: Option<String>,
    /// Service-host path of the generated notebook, passed through verbatim.
    /// A blank path counts as absent.
    pub artifact_path: Option<String>,
}

impl AnalysisResult {
    pub fn from_outcome(outcome: Result<AnalyzeResponse, ApiError>, origin: &ApiOrigin) -> Self {
        match outcome {
            Ok(response) => Self::from_response(response, origin),
            Err(err) => Self::from_error(&err),
        }
    }

    pub fn from_response(response: AnalyzeResponse, origin: &ApiOrigin) -> Self {
        let resolve = |path: Option<String>| {
            path.as_deref()
                .and_then(|p| origin.resolve(p))
                .filter(|url| is_safe_url(url))
        };
        Self {
            kind: ResultKind::Success,
            markdown: response.analysis,
            chart_image_url: resolve(response.image_path),
            download_url: resolve(response.download_path),
            artifact_path: response.notebook_path.filter(|p| !p.trim().is_empty()),
        }
    }

    pub fn from_error(err: &ApiError) -> Self {
        let (kind, markdown) = match err {
            ApiError::Status { detail, .. } => (
                ResultKind::ServerError,
                format!("### Error\n{}", detail.as_deref().unwrap_or(UNKNOWN_ERROR)),
            ),
            ApiError::Decode(reason) => (
                ResultKind::ServerError,
                format!("### Error\nMalformed response from the analysis service: {reason}"),
            ),
            ApiError::Timeout { after_ms } => (
                ResultKind::Timeout,
                format!(
                    "### Request Timed Out\nThe analysis service did not answer within {}. Try again or narrow the query.",
                    timeout_label(*after_ms)
                ),
            ),
            ApiError::Network(_) | ApiError::Unavailable => (
                ResultKind::NetworkError,
                "### Network Error\nNo response reached the analysis service. Check that it is running and reachable (authentication or server issue).".to_owned(),
            ),
        };
        Self { kind, markdown, ..Self::default() }
    }

    pub fn is_error(&self) -> bool {
        self.kind != ResultKind::Success
    }
}

/// Whole seconds rounded up, or milliseconds below one second.
fn timeout_label(after_ms: u32) -> String {
    if after_ms < 1000 {
        format!("{after_ms} ms")
    } else {
        format!("{} seconds", after_ms.div_ceil(1000))
    }
}
