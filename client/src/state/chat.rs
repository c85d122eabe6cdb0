//! Multi-turn transcript for the `/chat` page.
//!
//! DESIGN
//! ======
//! The transcript is append-only; the only mutation besides appending is the
//! attachment list. Replies are gated by the same latest-ticket rule as the
//! shell so an abandoned request cannot append out of order.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use super::analysis::AnalysisResult;
use super::upload::{FileInfo, UploadBatch};
use crate::util::notebook::{build_notebook, notebook_filename};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// Notebook source attached to an assistant turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotebookPayload {
    pub filename: String,
    pub source: String,
}

/// A single transcript turn.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
    pub notebook: Option<NotebookPayload>,
}

impl ChatMessage {
    pub fn user(content: &str, timestamp: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::User,
            content: content.to_owned(),
            timestamp,
            notebook: None,
        }
    }

    /// Assistant turn for an analysis result. Chart and download links are
    /// appended as Markdown; a notebook payload is attached when the service
    /// reported one.
    pub fn assistant(query: &str, result: &AnalysisResult, timestamp: f64) -> Self {
        let mut content = result.markdown.clone();
        if let Some(src) = &result.chart_image_url {
            content.push_str(&format!("\n\n![数据可视化图表]({src})"));
        }
        if let Some(href) = &result.download_url {
            content.push_str(&format!("\n\n[点击此处下载数据明细]({href})"));
        }
        let notebook = result.artifact_path.as_deref().map(|path| NotebookPayload {
            filename: notebook_filename(path),
            source: build_notebook(query, &result.markdown, Some(path)),
        });
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::Assistant,
            content,
            timestamp,
            notebook,
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

#[derive(Clone, Debug, Default)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    pending: Option<u64>,
    last_seq: u64,
    pub attachments: Vec<FileInfo>,
    pub upload_errors: Vec<String>,
}

impl ChatState {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Append a user turn and mark a reply pending.
    ///
    /// Returns the reply sequence number, or `None` for blank input.
    pub fn push_user(&mut self, raw: &str, timestamp: f64) -> Option<u64> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(text, timestamp));
        self.last_seq += 1;
        self.pending = Some(self.last_seq);
        Some(self.last_seq)
    }

    /// Append the assistant reply for `seq`. Returns `false` if stale.
    pub fn complete_reply(&mut self, seq: u64, reply: ChatMessage) -> bool {
        if seq != self.last_seq {
            return false;
        }
        self.messages.push(reply);
        self.pending = None;
        true
    }

    /// Merge a validated selection: accepted files are appended and the
    /// rejection messages replace the previous ones.
    pub fn add_uploads(&mut self, batch: UploadBatch) {
        self.upload_errors = batch.rejected.iter().map(ToString::to_string).collect();
        self.attachments.extend(batch.accepted);
    }

    pub fn remove_upload(&mut self, id: &str) {
        self.attachments.retain(|file| file.id != id);
    }
}
