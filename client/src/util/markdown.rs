//! Sanitized Markdown rendering for analysis narratives.
//!
//! The analysis service returns model-generated Markdown that is injected
//! with `inner_html`. Raw HTML events are dropped while rendering, and the
//! resulting HTML is cleaned against a tag and URL-scheme allowlist.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use std::collections::HashSet;
use std::sync::LazyLock;

use ammonia::Builder;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::config::has_scheme;

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

static HTML_SANITIZER: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut b = Builder::default();
    b.url_schemes(ALLOWED_SCHEMES.into_iter().collect::<HashSet<_>>());
    // Task-list checkboxes.
    b.add_tags(["input"]);
    b.add_tag_attributes("input", &["type", "checked", "disabled"]);
    b.add_tag_attributes("th", &["style"]);
    b.add_tag_attributes("td", &["style"]);
    b.filter_style_properties(["text-align"].into_iter().collect::<HashSet<_>>());
    b
});

/// Render Markdown to HTML that is safe to inject into the page.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options)
        .filter(|event| !matches!(event, Event::Html(_) | Event::InlineHtml(_)));

    let mut out = String::new();
    html::push_html(&mut out, parser);
    HTML_SANITIZER.clean(&out).to_string()
}

/// Whether a URL may be used as a link or image target.
///
/// Relative references are allowed; absolute ones must use `http`, `https`,
/// or `mailto`. Whitespace and control characters are ignored when reading
/// the scheme, matching how browsers normalize `href` values.
pub fn is_safe_url(url: &str) -> bool {
    let compact = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect::<String>();
    if !has_scheme(&compact) {
        return true;
    }
    let scheme = compact.split(':').next().unwrap_or_default().to_ascii_lowercase();
    ALLOWED_SCHEMES.contains(&scheme.as_str())
}
