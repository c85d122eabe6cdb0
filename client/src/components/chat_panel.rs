//! Chat-mode transcript, bubbles, and composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure presentation over `ChatState`: the page passes the transcript in and
//! receives send/export requests back through callbacks.

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, NotebookPayload};
use crate::state::query::submits_on_key;
use crate::util::clock::local_clock_label;
use crate::util::markdown::render_markdown_html;

/// Scrollable transcript; scrolls to the newest turn on every append.
#[component]
pub fn MessageList(
    #[prop(into)] messages: Signal<Vec<ChatMessage>>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(optional)] on_export: Option<Callback<NotebookPayload>>,
) -> impl IntoView {
    let list_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = messages.with(Vec::len);
        let _ = pending.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = list_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <div class="message-list" node_ref=list_ref>
            {move || {
                let messages = messages.get();
                if messages.is_empty() {
                    return view! { <ChatWelcome /> }.into_any();
                }
                messages
                    .into_iter()
                    .map(|message| view! { <ChatBubble message=message on_export=on_export /> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
            <Show when=move || pending.get()>
                <div class="chat-row chat-row--assistant">
                    <div class="chat-avatar chat-avatar--bot">
                        <i class="ri-robot-2-line"></i>
                    </div>
                    <div class="chat-bubble chat-bubble--typing">"分析中..."</div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ChatWelcome() -> impl IntoView {
    view! {
        <div class="chat-welcome">
            <div class="chat-welcome__icon">
                <i class="ri-chat-3-line"></i>
            </div>
            <h2>"欢迎使用 EdgeRisk Insight"</h2>
            <p>"上传您的数据文件，开始智能风险分析"</p>
            <ul>
                <li>"支持 CSV、Excel、JSON 格式"</li>
                <li>"AI 驱动的数据洞察"</li>
                <li>"自动生成 Jupyter Notebook"</li>
            </ul>
        </div>
    }
}

/// One transcript turn. User turns are plain text on the right; assistant
/// turns are sanitized Markdown on the left.
#[component]
pub fn ChatBubble(message: ChatMessage, on_export: Option<Callback<NotebookPayload>>) -> impl IntoView {
    let is_user = message.is_user();
    let time = local_clock_label(message.timestamp);

    let body = if is_user {
        view! { <p class="chat-bubble__text">{message.content.clone()}</p> }.into_any()
    } else {
        let rendered = render_markdown_html(&message.content);
        view! { <div class="chat-bubble__markdown" inner_html=rendered></div> }.into_any()
    };

    let export = match (is_user, message.notebook, on_export) {
        (false, Some(payload), Some(handler)) => Some(view! {
            <button class="chat-bubble__export" on:click=move |_| handler.run(payload.clone())>
                <i class="ri-download-2-line"></i>
                "导出 Jupyter Notebook"
            </button>
        }),
        _ => None,
    };

    view! {
        <div class="chat-row" class:chat-row--user=is_user class:chat-row--assistant=move || !is_user>
            {(!is_user)
                .then(|| {
                    view! {
                        <div class="chat-avatar chat-avatar--bot">
                            <i class="ri-robot-2-line"></i>
                        </div>
                    }
                })}
            <div class="chat-bubble-column">
                <div class="chat-bubble" class:chat-bubble--user=is_user>
                    {body}
                </div>
                <span class="chat-bubble__time">{time}</span>
                {export}
            </div>
            {is_user
                .then(|| {
                    view! {
                        <div class="chat-avatar">
                            <i class="ri-user-line"></i>
                        </div>
                    }
                })}
        </div>
    }
}

/// Composer: Enter sends the trimmed text, Shift+Enter inserts a newline.
#[component]
pub fn MessageInput(on_send: Callback<String>, #[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    let draft = RwSignal::new(String::new());

    let send = move || {
        if disabled.get_untracked() {
            return;
        }
        let text = draft.get_untracked();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        on_send.run(trimmed.to_owned());
        draft.set(String::new());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if submits_on_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            send();
        }
    };

    let can_send = move || !disabled.get() && !draft.get().trim().is_empty();

    view! {
        <div class="message-input">
            <textarea
                class="message-input__field"
                rows="1"
                placeholder="输入您的问题，例如：分析这份数据的风险趋势..."
                disabled=move || disabled.get()
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:keydown=on_keydown
            ></textarea>
            <button class="message-input__send" on:click=move |_| send() disabled=move || !can_send()>
                <i class="ri-send-plane-fill"></i>
            </button>
        </div>
    }
}
