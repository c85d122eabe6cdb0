use super::*;

fn ok_response(analysis: &str) -> Result<AnalyzeResponse, ApiError> {
    Ok(AnalyzeResponse { analysis: analysis.to_owned(), ..AnalyzeResponse::default() })
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn starts_on_dashboard_and_loading() {
    let state = ShellState::default();
    assert_eq!(state.view, ActiveView::Dashboard);
    assert!(state.dashboard_loading);
    assert!(state.snapshot.is_none());
    assert!(state.result.is_none());
    assert!(!state.is_query_in_flight());
}

// =============================================================
// Dashboard loading
// =============================================================

#[test]
fn successful_load_installs_snapshot() {
    let mut state = ShellState::default();
    let ticket = state.begin_dashboard_load();
    let metrics = DashboardMetrics::placeholder();
    assert!(state.complete_dashboard_load(ticket, Ok(metrics.clone()), FallbackPolicy::Empty));
    assert!(!state.dashboard_loading);
    assert_eq!(state.snapshot.as_deref(), Some(&metrics));
}

#[test]
fn failed_load_settles_with_placeholder_policy() {
    let mut state = ShellState::default();
    let ticket = state.begin_dashboard_load();
    assert!(state.complete_dashboard_load(
        ticket,
        Err(ApiError::Status { status: 500, detail: None }),
        FallbackPolicy::Placeholder,
    ));
    assert!(!state.dashboard_loading);
    assert!(state.snapshot.as_ref().is_some_and(|s| s.is_renderable()));
}

#[test]
fn failed_load_settles_with_empty_policy() {
    let mut state = ShellState::default();
    let ticket = state.begin_dashboard_load();
    state.complete_dashboard_load(ticket, Err(ApiError::Network("down".to_owned())), FallbackPolicy::Empty);
    assert!(!state.dashboard_loading);
    assert!(state.snapshot.is_none());
}

#[test]
fn stale_dashboard_load_is_ignored() {
    let mut state = ShellState::default();
    let first = state.begin_dashboard_load();
    let second = state.refresh();
    assert!(state.complete_dashboard_load(second, Ok(DashboardMetrics::placeholder()), FallbackPolicy::Empty));
    assert!(!state.complete_dashboard_load(first, Ok(DashboardMetrics::default()), FallbackPolicy::Empty));
    assert!(state.snapshot.as_ref().is_some_and(|s| s.is_renderable()));
}

#[test]
fn snapshot_ref_compares_by_identity() {
    let mut state = ShellState::default();
    let ticket = state.begin_dashboard_load();
    state.complete_dashboard_load(ticket, Ok(DashboardMetrics::placeholder()), FallbackPolicy::Empty);
    let first = state.snapshot_ref();
    assert_eq!(first, state.snapshot_ref());

    let ticket = state.refresh();
    state.complete_dashboard_load(ticket, Ok(DashboardMetrics::placeholder()), FallbackPolicy::Empty);
    assert_ne!(first, state.snapshot_ref());
}

// =============================================================
// Queries
// =============================================================

#[test]
fn whitespace_query_changes_nothing() {
    let mut state = ShellState::default();
    state.result = Some(AnalysisResult::default());
    assert!(state.begin_query("  \n\t ").is_none());
    assert_eq!(state.view, ActiveView::Dashboard);
    assert!(state.result.is_some());
    assert!(!state.is_query_in_flight());
}

#[test]
fn begin_query_clears_result_and_switches_view() {
    let mut state = ShellState::default();
    state.result = Some(AnalysisResult::default());
    state.notice = Some("x".to_owned());
    let (ticket, query) = state.begin_query("  统计年龄分布 ").unwrap();
    assert_eq!(query, "统计年龄分布");
    assert_eq!(state.view, ActiveView::Analysis);
    assert!(state.result.is_none());
    assert!(state.notice.is_none());
    assert_eq!(state.query, QueryPhase::InFlight { seq: ticket.seq() });
}

#[test]
fn complete_query_releases_in_flight_on_every_outcome() {
    let origin = ApiOrigin::default();
    for outcome in [
        ok_response("done"),
        Err(ApiError::Status { status: 500, detail: None }),
        Err(ApiError::Network("offline".to_owned())),
        Err(ApiError::Timeout { after_ms: 1 }),
    ] {
        let mut state = ShellState::default();
        let (ticket, _) = state.begin_query("q").unwrap();
        assert!(state.complete_query(ticket, outcome, &origin));
        assert!(!state.is_query_in_flight());
        assert!(state.result.is_some());
    }
}

#[test]
fn stale_query_response_is_discarded() {
    let origin = ApiOrigin::default();
    let mut state = ShellState::default();
    let (first, _) = state.begin_query("first").unwrap();
    let (second, _) = state.begin_query("second").unwrap();

    assert!(!state.complete_query(first, ok_response("old"), &origin));
    assert!(state.is_query_in_flight());
    assert!(state.result.is_none());

    assert!(state.complete_query(second, ok_response("new"), &origin));
    assert_eq!(state.result.as_ref().map(|r| r.markdown.as_str()), Some("new"));
    assert!(!state.is_query_in_flight());
}

#[test]
fn late_response_after_newer_completion_is_ignored() {
    let origin = ApiOrigin::default();
    let mut state = ShellState::default();
    let (first, _) = state.begin_query("first").unwrap();
    let (second, _) = state.begin_query("second").unwrap();
    state.complete_query(second, ok_response("new"), &origin);
    assert!(!state.complete_query(first, ok_response("old"), &origin));
    assert_eq!(state.result.as_ref().map(|r| r.markdown.as_str()), Some("new"));
}

// =============================================================
// Refresh / export
// =============================================================

#[test]
fn refresh_returns_to_dashboard_and_starts_loading() {
    let mut state = ShellState::default();
    let load = state.begin_dashboard_load();
    state.complete_dashboard_load(load, Ok(DashboardMetrics::placeholder()), FallbackPolicy::Empty);
    state.begin_query("q").unwrap();

    let ticket = state.refresh();
    assert_eq!(state.view, ActiveView::Dashboard);
    assert!(state.dashboard_loading);
    assert_eq!(ticket.seq(), load.seq() + 1);
}

#[test]
fn export_surfaces_not_implemented_notice() {
    let mut state = ShellState::default();
    state.request_export();
    assert_eq!(state.notice.as_deref(), Some(EXPORT_NOT_IMPLEMENTED));
    state.dismiss_notice();
    assert!(state.notice.is_none());
}

#[test]
fn refresh_clears_notice() {
    let mut state = ShellState::default();
    state.request_export();
    state.refresh();
    assert!(state.notice.is_none());
}
