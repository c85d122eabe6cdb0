use super::*;

#[test]
fn suggestions_are_unique_and_nonempty() {
    let mut texts = SUGGESTIONS.iter().map(|s| s.text).collect::<Vec<_>>();
    assert!(texts.iter().all(|t| normalize_query(t).is_some()));
    texts.sort_unstable();
    texts.dedup();
    assert_eq!(texts.len(), SUGGESTIONS.len());
}

#[test]
fn normalize_query_trims_and_rejects_blank() {
    assert_eq!(normalize_query("  统计年龄分布\n").as_deref(), Some("统计年龄分布"));
    assert_eq!(normalize_query(" \t\n "), None);
    assert_eq!(normalize_query(""), None);
}

#[test]
fn enter_submits_but_shift_enter_does_not() {
    assert!(submits_on_key("Enter", false));
    assert!(!submits_on_key("Enter", true));
    assert!(!submits_on_key("Process", false));
    assert!(!submits_on_key("a", false));
}
