//! Analysis view: in-flight spinner and the current result cards.

use leptos::prelude::*;

use crate::state::analysis::AnalysisResult;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn AnalysisPanel(
    #[prop(into)] in_flight: Signal<bool>,
    #[prop(into)] result: Signal<Option<AnalysisResult>>,
) -> impl IntoView {
    view! {
        <div class="analysis-view">
            <Show when=move || in_flight.get()>
                <div class="analysis-loading">
                    <div class="spinner"></div>
                    <p>"正在分析，请稍候..."</p>
                </div>
            </Show>
            {move || result.get().map(|result| view! { <ResultCards result=result /> })}
        </div>
    }
}

#[component]
fn ResultCards(result: AnalysisResult) -> impl IntoView {
    let is_error = result.is_error();
    let rendered = render_markdown_html(&result.markdown);

    view! {
        <div id="result-container" class="result-card" class:result-card--error=is_error inner_html=rendered></div>

        {result
            .chart_image_url
            .map(|src| {
                view! {
                    <div class="result-card">
                        <h2>"数据可视化图表"</h2>
                        <img src=src alt="Chart" class="result-chart" />
                    </div>
                }
            })}

        {result
            .download_url
            .map(|href| {
                view! {
                    <div class="result-card">
                        <h2>"数据导出"</h2>
                        <a id="download-link" class="download-link" href=href download="">
                            <i class="ri-download-2-line"></i>
                            "点击此处下载数据明细"
                        </a>
                    </div>
                }
            })}

        {result
            .artifact_path
            .map(|path| {
                view! { <div class="artifact-path">"Generated Code saved to: " {path}</div> }
            })}
    }
}
