//! Browser file downloads from in-memory text.
//!
//! TRADE-OFFS
//! ==========
//! Content is delivered as a `data:` URL on a detached anchor. That keeps
//! the helper free of Blob/object-URL lifetimes at the cost of URL length,
//! which is fine for notebook-sized payloads. SSR paths no-op.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// Prompt the browser to save `contents` as `filename`.
///
/// Returns `false` when no browser document is available.
pub fn trigger_download(filename: &str, contents: &str, mime: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        let Ok(element) = document.create_element("a") else {
            return false;
        };
        let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
            return false;
        };
        let encoded = String::from(js_sys::encode_uri_component(contents));
        anchor.set_href(&data_url(mime, &encoded));
        anchor.set_download(filename);
        anchor.click();
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, contents, mime);
        false
    }
}

/// `data:` URL for already percent-encoded text.
#[cfg(any(test, feature = "hydrate"))]
fn data_url(mime: &str, encoded: &str) -> String {
    format!("data:{mime};charset=utf-8,{encoded}")
}
