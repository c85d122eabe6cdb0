//! HTTP calls to the remote analysis service.
//!
//! Client-side (hydrate): real requests via `gloo-net`, each raced against a
//! `gloo-timers` timeout. Server-side (SSR): stubs returning
//! [`ApiError::Unavailable`], since the service is only called from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into [`ApiError`] so the shell state machine can
//! map it to a fallback snapshot or a formatted error result. Body decoding
//! is split into pure helpers so status and payload handling is testable
//! without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use super::types::{AnalyzeResponse, ApiError, DashboardMetrics};
use crate::config::ClientConfig;

pub const DASHBOARD_PATH: &str = "/dashboard_data";
pub const ANALYZE_PATH: &str = "/analyze";

/// Fetch the current aggregate snapshot from `GET /dashboard_data`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, timeout, non-2xx status, or
/// an undecodable body.
pub async fn fetch_dashboard(config: &ClientConfig) -> Result<DashboardMetrics, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.api_origin.endpoint(DASHBOARD_PATH);
        with_timeout(config.dashboard_timeout_ms, async move {
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(status_error(status, &body));
            }
            decode_dashboard(&body)
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Submit a natural-language query to `POST /analyze`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, timeout, non-2xx status
/// (carrying the service's `detail`), or an undecodable body.
pub async fn analyze(config: &ClientConfig, query: &str) -> Result<AnalyzeResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.api_origin.endpoint(ANALYZE_PATH);
        let payload = super::types::AnalyzeRequest { query: query.to_owned() };
        with_timeout(config.analyze_timeout_ms, async move {
            let resp = gloo_net::http::Request::post(&url)
                .json(&payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(status_error(status, &body));
            }
            decode_analysis(&body)
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, query);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn with_timeout<T>(
    timeout_ms: u32,
    request: impl std::future::Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    use futures::future::{Either, select};

    let request = std::pin::pin!(request);
    let timer = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(timeout_ms));
    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout { after_ms: timeout_ms }),
    }
}

/// Build the error for a non-2xx response, extracting `detail` when the body
/// is the service's JSON error envelope.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|envelope| envelope.detail_text());
    ApiError::Status { status, detail }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_dashboard(body: &str) -> Result<DashboardMetrics, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_analysis(body: &str) -> Result<AnalyzeResponse, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
