//! Bank-wide risk dashboard: summary tiles plus the chart grid.

use leptos::prelude::*;
use riskmetrics::summary_tiles;

use super::chart_grid::ChartGrid;
use crate::state::shell::SnapshotRef;

/// Render the current snapshot, a loading indicator, or the "no data" panel.
///
/// Reading `loading` only after the snapshot check keeps an in-progress
/// refresh from tearing down charts that are still valid.
#[component]
pub fn DashboardPanel(
    #[prop(into)] snapshot: Signal<Option<SnapshotRef>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div id="dashboard-card">
            <h2 class="dashboard-title">"全行对私贷款风险数据大盘"</h2>
            {move || match snapshot.get() {
                Some(metrics) if metrics.is_renderable() => view! { <DashboardBody metrics=metrics /> }.into_any(),
                _ if loading.get() => {
                    view! {
                        <div class="dashboard-empty">
                            <div class="spinner"></div>
                            <p>"数据加载中..."</p>
                        </div>
                    }
                        .into_any()
                }
                _ => {
                    view! {
                        <div class="dashboard-empty">
                            <p>"暂无数据或数据加载失败。"</p>
                            <p class="dashboard-empty__hint">
                                "请确保后台服务已启动 (./start_platform.sh) 且数据文件存在。"
                            </p>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn DashboardBody(metrics: SnapshotRef) -> impl IntoView {
    let tiles = metrics.summary.as_ref().map(summary_tiles).unwrap_or_default();

    view! {
        <div class="summary-grid">
            {tiles
                .into_iter()
                .map(|tile| {
                    view! {
                        <div class="summary-item">
                            <div class="label">{tile.label}</div>
                            <div class="value">{tile.value}</div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
        <ChartGrid metrics=metrics />
    }
}
