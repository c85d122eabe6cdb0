//! `/chat` route: multi-turn analysis transcript.
//!
//! SYSTEM CONTEXT
//! ==============
//! A self-contained alternative to the dashboard shell. It shares the
//! `/analyze` client and result formatting with the shell but keeps its own
//! `ChatState`, so the two presentations never write each other's state.

use leptos::prelude::*;

use crate::components::chat_panel::{MessageInput, MessageList};
use crate::components::file_upload::FileUpload;
use crate::config::ClientConfig;
use crate::state::chat::{ChatState, NotebookPayload};
use crate::state::upload::UploadBatch;
use crate::util::clock::now_ms;
use crate::util::download::trigger_download;
use crate::util::notebook::NOTEBOOK_MIME;

#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = expect_context::<ClientConfig>();

    let messages = Memo::new(move |_| chat.with(|c| c.messages().to_vec()));
    let pending = Memo::new(move |_| chat.with(ChatState::is_pending));
    let attachments = Memo::new(move |_| chat.with(|c| c.attachments.clone()));
    let upload_errors = Memo::new(move |_| chat.with(|c| c.upload_errors.clone()));

    let on_send = Callback::new(move |text: String| send_turn(chat, config.clone(), text));
    let on_export = Callback::new(move |payload: NotebookPayload| {
        if !trigger_download(&payload.filename, &payload.source, NOTEBOOK_MIME) {
            leptos::logging::warn!("notebook export unavailable for {}", payload.filename);
        }
    });
    let on_files = Callback::new(move |batch: UploadBatch| chat.update(|c| c.add_uploads(batch)));
    let on_remove = Callback::new(move |id: String| chat.update(|c| c.remove_upload(&id)));

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <a href="/" class="chat-page__back">
                    <i class="ri-arrow-left-line"></i>
                    "风险大盘"
                </a>
                <span class="chat-page__brand">"EdgeRisk Insight"</span>
            </header>
            <MessageList messages=messages pending=pending on_export=on_export />
            <div class="chat-page__composer">
                <FileUpload files=attachments errors=upload_errors on_files=on_files on_remove=on_remove />
                <MessageInput on_send=on_send disabled=pending />
            </div>
        </div>
    }
}

fn send_turn(chat: RwSignal<ChatState>, config: ClientConfig, text: String) {
    let Some(seq) = chat.try_update(|c| c.push_user(&text, now_ms())).flatten() else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::analysis::AnalysisResult;
        use crate::state::chat::ChatMessage;

        let query = text.trim().to_owned();
        let outcome = crate::net::api::analyze(&config, &query).await;
        if let Err(err) = &outcome {
            leptos::logging::warn!("chat analysis #{seq} failed: {err}");
        }
        let result = AnalysisResult::from_outcome(outcome, &config.api_origin);
        let reply = ChatMessage::assistant(&query, &result, now_ms());
        let applied = chat.try_update(|c| c.complete_reply(seq, reply)).unwrap_or(false);
        if !applied {
            leptos::logging::log!("discarded stale chat reply #{seq}");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (seq, config);
}
