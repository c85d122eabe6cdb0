use super::*;
use crate::state::upload::partition_uploads;

fn result_with(markdown: &str, image: Option<&str>, artifact: Option<&str>) -> AnalysisResult {
    AnalysisResult {
        markdown: markdown.to_owned(),
        chart_image_url: image.map(str::to_owned),
        artifact_path: artifact.map(str::to_owned),
        ..AnalysisResult::default()
    }
}

// =============================================================
// Transcript
// =============================================================

#[test]
fn blank_user_turn_is_rejected() {
    let mut chat = ChatState::default();
    assert_eq!(chat.push_user("   ", 0.0), None);
    assert!(chat.messages().is_empty());
    assert!(!chat.is_pending());
}

#[test]
fn reply_is_appended_after_user_turn() {
    let mut chat = ChatState::default();
    let seq = chat.push_user(" 统计年龄分布 ", 1.0).unwrap();
    assert!(chat.is_pending());
    assert!(chat.complete_reply(seq, ChatMessage::assistant("统计年龄分布", &result_with("ok", None, None), 2.0)));

    let roles = chat.messages().iter().map(|m| m.role).collect::<Vec<_>>();
    assert_eq!(roles, vec![Role::User, Role::Assistant]);
    assert_eq!(chat.messages()[0].content, "统计年龄分布");
    assert!(chat.messages()[0].is_user());
    assert!(!chat.is_pending());
}

#[test]
fn stale_reply_is_dropped() {
    let mut chat = ChatState::default();
    let first = chat.push_user("a", 1.0).unwrap();
    let second = chat.push_user("b", 2.0).unwrap();
    assert!(!chat.complete_reply(first, ChatMessage::assistant("a", &result_with("old", None, None), 3.0)));
    assert_eq!(chat.messages().len(), 2);
    assert!(chat.complete_reply(second, ChatMessage::assistant("b", &result_with("new", None, None), 4.0)));
    assert_eq!(chat.messages().last().map(|m| m.content.as_str()), Some("new"));
}

// =============================================================
// Assistant turns
// =============================================================

#[test]
fn assistant_turn_links_chart_image() {
    let msg = ChatMessage::assistant(
        "q",
        &result_with("## 结果", Some("http://localhost:8000/static/c.png"), None),
        0.0,
    );
    assert_eq!(msg.content, "## 结果\n\n![数据可视化图表](http://localhost:8000/static/c.png)");
    assert!(msg.notebook.is_none());
}

#[test]
fn assistant_turn_carries_notebook_when_artifact_reported() {
    let msg = ChatMessage::assistant("统计年龄分布", &result_with("## 结果", None, Some("/srv/nb/age.ipynb")), 0.0);
    let notebook = msg.notebook.unwrap();
    assert_eq!(notebook.filename, "age.ipynb");
    assert!(notebook.source.contains("\"nbformat\": 4"));
    assert!(notebook.source.contains("统计年龄分布"));
}

// =============================================================
// Attachments
// =============================================================

#[test]
fn uploads_accumulate_and_can_be_removed() {
    let mut chat = ChatState::default();
    chat.add_uploads(partition_uploads(
        vec![
            ("a.csv".to_owned(), 1, String::new()),
            ("b.txt".to_owned(), 1, String::new()),
        ],
        0.0,
    ));
    assert_eq!(chat.attachments.len(), 1);
    assert_eq!(chat.upload_errors, vec!["b.txt: 不支持的文件格式".to_owned()]);

    chat.add_uploads(partition_uploads(vec![("c.json".to_owned(), 1, String::new())], 0.0));
    assert_eq!(chat.attachments.len(), 2);
    assert!(chat.upload_errors.is_empty());

    let id = chat.attachments[0].id.clone();
    chat.remove_upload(&id);
    let names = chat.attachments.iter().map(|f| f.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["c.json"]);
}
