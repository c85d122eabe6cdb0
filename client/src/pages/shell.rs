//! Root route: control panel beside the dashboard or analysis view.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page is the only writer of `RwSignal<ShellState>`. It begins each
//! transition synchronously, spawns the HTTP call on the browser task queue,
//! and settles the state with the returned ticket so stale responses are
//! dropped by the state machine.
//!
//! Derived views go through `Memo`s so that, for example, a notice change
//! does not rebuild the chart grid.

use leptos::prelude::*;

use crate::components::analysis_panel::AnalysisPanel;
use crate::components::control_panel::ControlPanel;
use crate::components::dashboard_panel::DashboardPanel;
use crate::config::ClientConfig;
use crate::state::shell::{ActiveView, LoadTicket, ShellState};

#[component]
pub fn ShellPage() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let config = expect_context::<ClientConfig>();

    // Effects only run in the browser, so the initial load never fires during SSR.
    let initial_config = config.clone();
    Effect::new(move || {
        if let Some(ticket) = shell.try_update(ShellState::begin_dashboard_load) {
            spawn_dashboard_load(shell, initial_config.clone(), ticket);
        }
    });

    let view_mode = Memo::new(move |_| shell.with(|s| s.view));
    let snapshot = Memo::new(move |_| shell.with(ShellState::snapshot_ref));
    let dashboard_loading = Memo::new(move |_| shell.with(|s| s.dashboard_loading));
    let in_flight = Memo::new(move |_| shell.with(ShellState::is_query_in_flight));
    let result = Memo::new(move |_| shell.with(|s| s.result.clone()));
    let notice = Memo::new(move |_| shell.with(|s| s.notice.clone()));

    let on_submit = {
        let config = config.clone();
        Callback::new(move |raw: String| submit_query(shell, config.clone(), &raw))
    };
    let on_refresh = Callback::new(move |()| {
        if let Some(ticket) = shell.try_update(ShellState::refresh) {
            spawn_dashboard_load(shell, config.clone(), ticket);
        }
    });
    let on_export = Callback::new(move |()| shell.update(ShellState::request_export));
    let on_dismiss_notice = Callback::new(move |()| shell.update(ShellState::dismiss_notice));

    view! {
        <div class="main-container">
            <ControlPanel
                in_flight=in_flight
                notice=notice
                on_submit=on_submit
                on_refresh=on_refresh
                on_export=on_export
                on_dismiss_notice=on_dismiss_notice
            />
            <div class="display-panel">
                {move || match view_mode.get() {
                    ActiveView::Dashboard => {
                        view! {
                            <WelcomeCard />
                            <DashboardPanel snapshot=snapshot loading=dashboard_loading />
                        }
                            .into_any()
                    }
                    ActiveView::Analysis => view! { <AnalysisPanel in_flight=in_flight result=result /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn WelcomeCard() -> impl IntoView {
    view! {
        <div class="welcome-card">
            <h1>"欢迎使用“长策”智能风险分析平台"</h1>
            <p>"在左侧输入分析指令，或点击推荐问题快速开始；点击“风险大盘”可随时返回全行数据总览。"</p>
        </div>
    }
}

fn spawn_dashboard_load(shell: RwSignal<ShellState>, config: ClientConfig, ticket: LoadTicket) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::fetch_dashboard(&config).await;
        match &outcome {
            Ok(metrics) => {
                for warning in metrics.integrity_warnings() {
                    leptos::logging::warn!("dashboard snapshot #{}: {warning}", ticket.seq());
                }
            }
            Err(err) => {
                leptos::logging::warn!("dashboard load failed ({err}); applying {:?} fallback", config.fallback);
            }
        }
        let applied = shell
            .try_update(|s| s.complete_dashboard_load(ticket, outcome, config.fallback))
            .unwrap_or(false);
        if !applied {
            leptos::logging::log!("discarded stale dashboard load #{}", ticket.seq());
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (shell, config, ticket);
}

fn submit_query(shell: RwSignal<ShellState>, config: ClientConfig, raw: &str) {
    let Some((ticket, query)) = shell.try_update(|s| s.begin_query(raw)).flatten() else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::analyze(&config, &query).await;
        if let Err(err) = &outcome {
            leptos::logging::warn!("analysis request #{} failed: {err}", ticket.seq());
        }
        let applied = shell
            .try_update(|s| s.complete_query(ticket, outcome, &config.api_origin))
            .unwrap_or(false);
        if !applied {
            leptos::logging::log!("discarded stale analysis response #{}", ticket.seq());
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (ticket, query, config);
}
