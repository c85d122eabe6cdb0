//! Chart grid for one dashboard snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! `DashboardPanel` mounts a fresh `ChartGrid` each time a new snapshot is
//! installed, so the chart set, its width signal, and its resize listener
//! share one reactive owner. Disposing the owner (unmount or replacement)
//! runs `on_cleanup`, which removes the window listener.
//!
//! Charts are SVG strings from `riskmetrics::chart`, re-rendered at the
//! measured container width whenever the window resizes.

use leptos::prelude::*;
use riskmetrics::chart::{Chart, ChartSet};
use riskmetrics::{AssetRow, asset_rows};

use crate::state::shell::SnapshotRef;

const DEFAULT_CHART_WIDTH: f64 = 560.0;

#[component]
pub fn ChartGrid(metrics: SnapshotRef) -> impl IntoView {
    let charts = ChartSet::build(&metrics);
    let rows = asset_rows(&metrics.asset_quality);
    let width = RwSignal::new(DEFAULT_CHART_WIDTH);
    let probe_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let measure = move || {
            if let Some(el) = probe_ref.get_untracked() {
                let measured = f64::from(el.client_width());
                if measured > 0.0 {
                    width.set(measured);
                }
            }
        };
        Effect::new(move || {
            if probe_ref.get().is_some() {
                measure();
            }
        });
        let resize = window_event_listener(leptos::ev::resize, move |_| measure());
        on_cleanup(move || resize.remove());
    }

    let ChartSet { branch_npl, product_npl, product_overdue, overdue_days, age_risk } = charts;

    view! {
        <div class="chart-grid">
            <div class="chart-container-item">
                <h3>"各分行不良率排行"</h3>
                <div class="chart-instance" node_ref=probe_ref inner_html=svg(branch_npl, width)></div>
            </div>
            <div class="chart-container-item">
                <h3>"资产质量结构"</h3>
                <AssetQualityTable rows=rows />
            </div>
        </div>

        <div class="chart-grid">
            <div class="chart-container-item">
                <h3>"各产品不良率排行"</h3>
                <div class="chart-instance" inner_html=svg(product_npl, width)></div>
            </div>
            <div class="chart-container-item">
                <h3>"各产品逾期金额分布"</h3>
                <div class="chart-instance" inner_html=svg(product_overdue, width)></div>
            </div>
        </div>

        <div class="chart-grid">
            <div class="chart-container-item">
                <h3>"逾期贷款逾期天数分布"</h3>
                <div class="chart-instance" inner_html=svg(overdue_days, width)></div>
            </div>
            <div class="chart-container-item">
                <h3>"各年龄段风险表现"</h3>
                <div class="chart-instance" inner_html=svg(age_risk, width)></div>
            </div>
        </div>
    }
}

fn svg(chart: Chart, width: RwSignal<f64>) -> impl Fn() -> String + Send + Sync + 'static {
    move || chart.to_svg(width.get())
}

#[component]
fn AssetQualityTable(rows: Vec<AssetRow>) -> impl IntoView {
    view! {
        <div class="asset-quality-table-container">
            <table class="asset-quality-table">
                <thead>
                    <tr>
                        <th>"七级分类"</th>
                        <th>"金额(万元)"</th>
                        <th>"占比(%)"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <td>{row.category}</td>
                                    <td>{row.amount}</td>
                                    <td>{row.share}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
