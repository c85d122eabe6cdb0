//! Left-hand control panel: query form, suggestions, and shell actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel owns only its draft text. Submit, refresh, export, and notice
//! dismissal are callbacks into the shell page, which drives `ShellState`.

use leptos::prelude::*;

use crate::state::query::{QUERY_PLACEHOLDER, SUGGESTIONS, normalize_query, submits_on_key};

#[component]
pub fn ControlPanel(
    #[prop(into)] in_flight: Signal<bool>,
    #[prop(into)] notice: Signal<Option<String>>,
    on_submit: Callback<String>,
    on_refresh: Callback<()>,
    on_export: Callback<()>,
    on_dismiss_notice: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(String::new());

    let submit = move || {
        if in_flight.get_untracked() {
            return;
        }
        if let Some(query) = normalize_query(&draft.get_untracked()) {
            on_submit.run(query);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if submits_on_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            submit();
        }
    };

    view! {
        <div class="control-panel">
            <div class="brand" on:click=move |_| on_refresh.run(())>
                <i class="ri-shield-check-fill brand__logo"></i>
                <span>"EdgeRisk Insight"</span>
            </div>

            <div class="chat-window">
                <div class="chat-messages">
                    <div class="message system-message">
                        <i class="ri-sparkling-fill"></i>
                        <span>"您好，我是智能信贷助手。请告诉我您想分析什么数据？"</span>
                    </div>
                </div>
            </div>

            <div class="input-area">
                <form
                    class="input-box-wrapper"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    <textarea
                        placeholder=QUERY_PLACEHOLDER
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    ></textarea>
                    <button type="submit" class="send-btn" disabled=move || in_flight.get()>
                        <i class="ri-send-plane-fill"></i>
                    </button>
                </form>

                <div class="suggestions">
                    {SUGGESTIONS
                        .iter()
                        .map(|suggestion| {
                            let text = suggestion.text;
                            let icon = suggestion.icon;
                            view! {
                                <div class="suggestion-item" on:click=move |_| draft.set(text.to_owned())>
                                    <i class=icon></i>
                                    <span>{text}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <Show when=move || notice.get().is_some()>
                <div class="notice" role="status">
                    <span>{move || notice.get().unwrap_or_default()}</span>
                    <button class="notice__dismiss" on:click=move |_| on_dismiss_notice.run(())>
                        "×"
                    </button>
                </div>
            </Show>

            <div class="actions-area">
                <button class="action-item" on:click=move |_| on_refresh.run(())>
                    <i class="ri-bar-chart-2-line"></i>
                    <span>"风险大盘"</span>
                </button>
                <button class="action-item" on:click=move |_| on_export.run(())>
                    <i class="ri-file-text-line"></i>
                    <span>"导出报告"</span>
                </button>
            </div>
        </div>
    }
}
