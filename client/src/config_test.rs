use super::*;

// =============================================================
// ApiOrigin
// =============================================================

#[test]
fn origin_strips_trailing_slashes() {
    assert_eq!(ApiOrigin::new("https://risk.example.com//").as_str(), "https://risk.example.com");
}

#[test]
fn blank_origin_uses_default() {
    assert_eq!(ApiOrigin::new("   ").as_str(), DEFAULT_API_ORIGIN);
}

#[test]
fn endpoint_joins_with_single_slash() {
    let origin = ApiOrigin::new("http://svc:8000/");
    assert_eq!(origin.endpoint("/analyze"), "http://svc:8000/analyze");
    assert_eq!(origin.endpoint("dashboard_data"), "http://svc:8000/dashboard_data");
}

#[test]
fn resolve_prefixes_relative_paths() {
    let origin = ApiOrigin::default();
    assert_eq!(
        origin.resolve("/static/chart.png").as_deref(),
        Some("http://localhost:8000/static/chart.png")
    );
    assert_eq!(
        origin.resolve("static/data.csv").as_deref(),
        Some("http://localhost:8000/static/data.csv")
    );
}

#[test]
fn resolve_keeps_absolute_urls() {
    let origin = ApiOrigin::default();
    assert_eq!(
        origin.resolve("https://cdn.example.com/a.png").as_deref(),
        Some("https://cdn.example.com/a.png")
    );
    assert_eq!(origin.resolve("//cdn.example.com/a.png").as_deref(), Some("//cdn.example.com/a.png"));
}

#[test]
fn resolve_treats_blank_as_absent() {
    assert_eq!(ApiOrigin::default().resolve("  "), None);
}

#[test]
fn scheme_detection_ignores_colons_after_path_separators() {
    assert!(has_scheme("mailto:ops@example.com"));
    assert!(has_scheme("data:image/png;base64,AAAA"));
    assert!(!has_scheme("static/a:b.png"));
    assert!(!has_scheme("1http://x"));
    assert!(!has_scheme("plain"));
}

// =============================================================
// ClientConfig
// =============================================================

#[test]
fn defaults_when_nothing_is_set() {
    let config = ClientConfig::default();
    assert_eq!(config.api_origin.as_str(), DEFAULT_API_ORIGIN);
    assert_eq!(config.fallback, FallbackPolicy::Placeholder);
    assert_eq!(config.dashboard_timeout_ms, DEFAULT_DASHBOARD_TIMEOUT_MS);
    assert_eq!(config.analyze_timeout_ms, DEFAULT_ANALYZE_TIMEOUT_MS);
}

#[test]
fn from_values_parses_every_field() {
    let config = ClientConfig::from_values(Some("https://api.bank/"), Some("EMPTY"), Some("2500"), Some("60000"));
    assert_eq!(config.api_origin.as_str(), "https://api.bank");
    assert_eq!(config.fallback, FallbackPolicy::Empty);
    assert_eq!(config.dashboard_timeout_ms, 2_500);
    assert_eq!(config.analyze_timeout_ms, 60_000);
}

#[test]
fn invalid_timeouts_fall_back_to_defaults() {
    let config = ClientConfig::from_values(None, Some("bogus"), Some("soon"), Some("0"));
    assert_eq!(config.fallback, FallbackPolicy::Placeholder);
    assert_eq!(config.dashboard_timeout_ms, DEFAULT_DASHBOARD_TIMEOUT_MS);
    assert_eq!(config.analyze_timeout_ms, DEFAULT_ANALYZE_TIMEOUT_MS);
}

#[test]
fn fallback_snapshot_follows_policy() {
    let placeholder = FallbackPolicy::Placeholder.fallback_snapshot().unwrap();
    assert!(placeholder.is_renderable());
    assert!(FallbackPolicy::Empty.fallback_snapshot().is_none());
}
