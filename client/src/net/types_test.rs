use super::*;
use serde_json::json;

#[test]
fn analyze_request_serializes_query_field() {
    let body = serde_json::to_value(AnalyzeRequest { query: "各分行逾期客户数量".to_owned() }).unwrap();
    assert_eq!(body, json!({ "query": "各分行逾期客户数量" }));
}

#[test]
fn analyze_response_optional_paths_default_to_none() {
    let resp: AnalyzeResponse = serde_json::from_value(json!({ "analysis": "## Result" })).unwrap();
    assert_eq!(resp.analysis, "## Result");
    assert!(resp.image_path.is_none());
    assert!(resp.download_path.is_none());
    assert!(resp.notebook_path.is_none());
}

#[test]
fn analyze_response_accepts_null_paths() {
    let resp: AnalyzeResponse = serde_json::from_value(json!({
        "analysis": "ok",
        "image_path": null,
        "download_path": "/static/out.csv",
        "notebook_path": "/srv/notebooks/run.ipynb"
    }))
    .unwrap();
    assert!(resp.image_path.is_none());
    assert_eq!(resp.download_path.as_deref(), Some("/static/out.csv"));
    assert_eq!(resp.notebook_path.as_deref(), Some("/srv/notebooks/run.ipynb"));
}

#[test]
fn analyze_response_requires_analysis() {
    assert!(serde_json::from_value::<AnalyzeResponse>(json!({ "image_path": "/a.png" })).is_err());
}

#[test]
fn error_body_detail_text_handles_shapes() {
    let text: ErrorBody = serde_json::from_value(json!({ "detail": "Internal failure" })).unwrap();
    assert_eq!(text.detail_text().as_deref(), Some("Internal failure"));

    let blank: ErrorBody = serde_json::from_value(json!({ "detail": "  " })).unwrap();
    assert_eq!(blank.detail_text(), None);

    let missing: ErrorBody = serde_json::from_value(json!({})).unwrap();
    assert_eq!(missing.detail_text(), None);

    let list: ErrorBody = serde_json::from_value(json!({ "detail": [{ "msg": "field required" }] })).unwrap();
    assert_eq!(list.detail_text().as_deref(), Some(r#"[{"msg":"field required"}]"#));
}

#[test]
fn api_error_display_is_descriptive() {
    assert_eq!(ApiError::Timeout { after_ms: 500 }.to_string(), "request timed out after 500 ms");
    assert_eq!(
        ApiError::Status { status: 502, detail: None }.to_string(),
        "service responded with status 502"
    );
}
