use super::*;

#[test]
fn renders_headings_and_tables() {
    let html = render_markdown_html("### Error\nUnknown error\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert!(html.contains("<h3>Error</h3>"));
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>2</td>"));
}

#[test]
fn drops_raw_html_blocks_and_inline_tags() {
    let html = render_markdown_html("<script>alert(1)</script>\n\nhello <img src=x onerror=alert(1)> world");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("onerror"));
    assert!(html.contains("hello"));
    assert!(html.contains("world"));
}

#[test]
fn strips_javascript_link_targets_but_keeps_text() {
    let html = render_markdown_html("[click](javascript:alert(1))");
    assert!(!html.contains("javascript:"));
    assert!(!html.contains("href="));
    assert!(html.contains(">click</a>"));
}

#[test]
fn strips_unsafe_autolinks_and_images() {
    let html = render_markdown_html("<javascript:alert(1)>\n\n![x](data:text/html;base64,AAAA)");
    assert!(!html.contains("javascript:alert"));
    assert!(!html.contains("data:text/html"));
}

#[test]
fn keeps_http_and_relative_links() {
    let html = render_markdown_html("[a](https://example.com/x) [b](/static/out.csv) [c](mailto:ops@bank.cn)");
    assert!(html.contains(r#"href="https://example.com/x""#));
    assert!(html.contains(r#"href="/static/out.csv""#));
    assert!(html.contains(r#"href="mailto:ops@bank.cn""#));
}

#[test]
fn keeps_task_list_checkboxes_and_column_alignment() {
    let html = render_markdown_html("- [x] done\n\n| n |\n|--:|\n| 1 |\n");
    assert!(html.contains("checkbox"));
    assert!(html.contains("checked"));
    assert!(html.contains("text-align"));
}

#[test]
fn is_safe_url_ignores_embedded_whitespace_in_scheme() {
    assert!(!is_safe_url(" java\tscript:alert(1)"));
    assert!(!is_safe_url("JAVASCRIPT:alert(1)"));
    assert!(!is_safe_url("vbscript:msgbox"));
    assert!(is_safe_url("HTTPS://example.com"));
    assert!(is_safe_url("charts/a:b.png"));
    assert!(is_safe_url("#section"));
}
