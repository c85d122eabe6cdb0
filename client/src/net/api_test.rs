use super::*;

#[test]
fn status_error_extracts_detail_string() {
    let err = status_error(500, r#"{"detail":"Data file not found"}"#);
    assert_eq!(err, ApiError::Status { status: 500, detail: Some("Data file not found".to_owned()) });
}

#[test]
fn status_error_without_json_body_has_no_detail() {
    assert_eq!(
        status_error(502, "<html>Bad Gateway</html>"),
        ApiError::Status { status: 502, detail: None }
    );
    assert_eq!(status_error(500, ""), ApiError::Status { status: 500, detail: None });
}

#[test]
fn decode_analysis_reads_paths() {
    let resp = decode_analysis(r###"{"analysis":"## ok","image_path":"/static/c.png"}"###).unwrap();
    assert_eq!(resp.analysis, "## ok");
    assert_eq!(resp.image_path.as_deref(), Some("/static/c.png"));
}

#[test]
fn decode_analysis_rejects_malformed_body() {
    assert!(matches!(decode_analysis("not json"), Err(ApiError::Decode(_))));
    assert!(matches!(decode_analysis(r#"{"result":"x"}"#), Err(ApiError::Decode(_))));
}

#[test]
fn decode_dashboard_accepts_partial_snapshot() {
    let metrics = decode_dashboard(r#"{"branch_npl_rank":[]}"#).unwrap();
    assert!(!metrics.is_renderable());
}

#[test]
fn decode_dashboard_rejects_wrong_shape() {
    assert!(matches!(decode_dashboard("[]"), Err(ApiError::Decode(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn ssr_stubs_report_unavailable() {
    let config = ClientConfig::default();
    let dashboard = futures::executor::block_on(fetch_dashboard(&config));
    assert_eq!(dashboard, Err(ApiError::Unavailable));
    let analysis = futures::executor::block_on(analyze(&config, "q"));
    assert_eq!(analysis, Err(ApiError::Unavailable));
}
