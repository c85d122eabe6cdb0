use super::*;

#[test]
fn data_url_declares_utf8_charset() {
    assert_eq!(
        data_url("application/x-ipynb+json", "%7B%7D"),
        "data:application/x-ipynb+json;charset=utf-8,%7B%7D"
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn trigger_download_is_noop_without_browser() {
    assert!(!trigger_download("a.ipynb", "{}", "application/json"));
}
