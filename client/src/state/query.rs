//! Control-panel query input helpers.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// A canned query offered beneath the input box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub text: &'static str,
    /// Remix Icon class for the leading glyph.
    pub icon: &'static str,
}

pub static SUGGESTIONS: [Suggestion; 6] = [
    Suggestion { text: "各分行逾期客户数量", icon: "ri-question-line" },
    Suggestion { text: "产品类型贷款金额图表", icon: "ri-bar-chart-2-line" },
    Suggestion { text: "导出30岁以下按揭逾期明细", icon: "ri-file-excel-2-line" },
    Suggestion { text: "分析12期以内逾期客户", icon: "ri-calendar-line" },
    Suggestion { text: "逾期贷款金额最多的产品", icon: "ri-money-cny-circle-line" },
    Suggestion { text: "统计年龄分布", icon: "ri-user-line" },
];

pub const QUERY_PLACEHOLDER: &str = "在此输入分析指令，例如：各分行不良率排名...";

/// Trimmed query text, or `None` when nothing would be sent.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Enter submits; Shift+Enter inserts a newline. IME composition keys are
/// reported as `"Process"` and never submit.
pub fn submits_on_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}
