//! SVG chart construction for the risk dashboard.
//!
//! ARCHITECTURE
//! ============
//! A [`ChartSet`] is derived once per snapshot and holds the data-only chart
//! models. Layout happens in [`Chart::to_svg`] so the client can re-lay-out
//! at a new container width without re-deriving from the snapshot.
//!
//! Ranked bar charts sort at construction time; the snapshot order is never
//! assumed sorted.

use std::fmt::Write as _;

use crate::format::{grouped, trim_float};
use crate::{DashboardMetrics, ranked_descending};

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

pub const CHART_HEIGHT: f64 = 340.0;
pub const MIN_CHART_WIDTH: f64 = 240.0;

const AXIS_TEXT: &str = "#94a3b8";
const CATEGORY_TEXT: &str = "#f1f5f9";
const VALUE_TEXT: &str = "#ffffff";
const GRID_LINE: &str = "rgba(255,255,255,0.1)";
const EMPTY_TEXT: &str = "暂无数据";

/// Every chart the dashboard shows for one snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSet {
    pub branch_npl: Chart,
    pub product_npl: Chart,
    pub product_overdue: Chart,
    pub overdue_days: Chart,
    pub age_risk: Chart,
}

impl ChartSet {
    #[must_use]
    pub fn build(metrics: &DashboardMetrics) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let customer_counts = metrics.overdue_days.iter().map(|b| b.customer_count as f64).collect();
        Self {
            branch_npl: Chart::HorizontalBar(HorizontalBarChart {
                key: "branch-npl",
                axis_label: "不良率(%)",
                unit: "%",
                gradient: ("#3b82f6", "#60a5fa"),
                entries: ranked_descending(&metrics.branch_ranking),
            }),
            product_npl: Chart::HorizontalBar(HorizontalBarChart {
                key: "product-npl",
                axis_label: "不良率(%)",
                unit: "%",
                gradient: ("#f59e0b", "#fbbf24"),
                entries: ranked_descending(&metrics.product_npl_ranking),
            }),
            product_overdue: Chart::HorizontalBar(HorizontalBarChart {
                key: "product-overdue",
                axis_label: "逾期金额(万元)",
                unit: "",
                gradient: ("#ef4444", "#f87171"),
                entries: ranked_descending(&metrics.product_overdue_balance),
            }),
            overdue_days: Chart::DualAxis(DualAxisChart {
                key: "overdue-days",
                left_label: "金额(万元)",
                right_label: "客户数",
                bar_name: "逾期金额",
                line_name: "客户数",
                bar_color: "#8b5cf6",
                line_color: "#10b981",
                categories: metrics.overdue_days.iter().map(|b| b.bucket.clone()).collect(),
                bars: metrics.overdue_days.iter().map(|b| b.overdue_balance_wan).collect(),
                line: customer_counts,
            }),
            age_risk: Chart::GroupedBar(GroupedBarChart {
                key: "age-risk",
                axis_label: "比例(%)",
                unit: "%",
                categories: metrics.age_risk.iter().map(|a| a.age_segment.clone()).collect(),
                series: vec![
                    Series {
                        name: "不良率",
                        color: "#06b6d4",
                        values: metrics.age_risk.iter().map(|a| a.npl_ratio).collect(),
                    },
                    Series {
                        name: "逾期率",
                        color: "#f59e0b",
                        values: metrics.age_risk.iter().map(|a| a.overdue_ratio).collect(),
                    },
                ],
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Chart {
    HorizontalBar(HorizontalBarChart),
    DualAxis(DualAxisChart),
    GroupedBar(GroupedBarChart),
}

impl Chart {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::HorizontalBar(c) => c.entries.is_empty(),
            Self::DualAxis(c) => c.categories.is_empty(),
            Self::GroupedBar(c) => c.categories.is_empty(),
        }
    }

    /// Render at `width` x [`CHART_HEIGHT`] CSS pixels.
    #[must_use]
    pub fn to_svg(&self, width: f64) -> String {
        let width = width.max(MIN_CHART_WIDTH);
        if self.is_empty() {
            let mut svg = Svg::open(self.key(), width, CHART_HEIGHT);
            svg.text(width / 2.0, CHART_HEIGHT / 2.0, Anchor::Middle, AXIS_TEXT, EMPTY_TEXT);
            return svg.finish();
        }
        match self {
            Self::HorizontalBar(c) => c.render(width, CHART_HEIGHT),
            Self::DualAxis(c) => c.render(width, CHART_HEIGHT),
            Self::GroupedBar(c) => c.render(width, CHART_HEIGHT),
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Self::HorizontalBar(c) => c.key,
            Self::DualAxis(c) => c.key,
            Self::GroupedBar(c) => c.key,
        }
    }
}

/// Category bars laid out top-to-bottom, largest first.
#[derive(Clone, Debug, PartialEq)]
pub struct HorizontalBarChart {
    pub key: &'static str,
    pub axis_label: &'static str,
    pub unit: &'static str,
    pub gradient: (&'static str, &'static str),
    pub entries: Vec<(String, f64)>,
}

impl HorizontalBarChart {
    fn render(&self, width: f64, height: f64) -> String {
        let label_w = (width * 0.28).clamp(72.0, 140.0);
        let value_w = 56.0;
        let top = 28.0;
        let bottom = 28.0;
        let plot_x = label_w + 8.0;
        let plot_w = (width - plot_x - value_w).max(1.0);
        let plot_h = height - top - bottom;
        let max = nice_ceiling(self.entries.iter().map(|(_, v)| *v).fold(0.0, f64::max));

        let mut svg = Svg::open(self.key, width, height);
        let grad_id = format!("{}-grad", self.key);
        svg.linear_gradient(&grad_id, self.gradient.0, self.gradient.1);
        svg.text(plot_x + plot_w, 16.0, Anchor::End, AXIS_TEXT, self.axis_label);

        for tick in 0..=4 {
            let value = max * f64::from(tick) / 4.0;
            let x = plot_x + plot_w * f64::from(tick) / 4.0;
            svg.line(x, top, x, top + plot_h, GRID_LINE, 1.0);
            svg.text(x, height - 8.0, Anchor::Middle, AXIS_TEXT, &format!("{}{}", trim_float(round2(value)), self.unit));
        }

        #[allow(clippy::cast_precision_loss)]
        let row_h = plot_h / self.entries.len() as f64;
        let bar_h = (row_h * 0.6).min(28.0);
        for (i, (label, value)) in self.entries.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let row_y = top + row_h * i as f64;
            let bar_y = row_y + (row_h - bar_h) / 2.0;
            let bar_w = (value.max(0.0) / max) * plot_w;
            let mid_y = row_y + row_h / 2.0 + 4.0;

            svg.text(label_w, mid_y, Anchor::End, CATEGORY_TEXT, label);
            svg.rect(plot_x, bar_y, bar_w, bar_h, &format!("url(#{grad_id})"));
            svg.text(plot_x + bar_w + 6.0, mid_y, Anchor::Start, VALUE_TEXT, &format!("{}{}", trim_float(*value), self.unit));
        }
        svg.finish()
    }
}

/// Bars on a left axis with an independently scaled line on a right axis.
#[derive(Clone, Debug, PartialEq)]
pub struct DualAxisChart {
    pub key: &'static str,
    pub left_label: &'static str,
    pub right_label: &'static str,
    pub bar_name: &'static str,
    pub line_name: &'static str,
    pub bar_color: &'static str,
    pub line_color: &'static str,
    pub categories: Vec<String>,
    pub bars: Vec<f64>,
    pub line: Vec<f64>,
}

impl DualAxisChart {
    fn render(&self, width: f64, height: f64) -> String {
        let left = 56.0;
        let right = 48.0;
        let top = 40.0;
        let bottom = 32.0;
        let plot_w = (width - left - right).max(1.0);
        let plot_h = height - top - bottom;
        let bar_max = nice_ceiling(self.bars.iter().copied().fold(0.0, f64::max));
        let line_max = nice_ceiling(self.line.iter().copied().fold(0.0, f64::max));

        let mut svg = Svg::open(self.key, width, height);
        svg.text(left, 16.0, Anchor::Start, AXIS_TEXT, self.left_label);
        svg.text(width - right, 16.0, Anchor::End, AXIS_TEXT, self.right_label);
        legend(&mut svg, width / 2.0 - 60.0, 16.0, &[(self.bar_name, self.bar_color), (self.line_name, self.line_color)]);

        for tick in 0..=4 {
            let frac = f64::from(tick) / 4.0;
            let y = top + plot_h - plot_h * frac;
            svg.line(left, y, left + plot_w, y, GRID_LINE, 1.0);
            svg.text(left - 6.0, y + 4.0, Anchor::End, AXIS_TEXT, &grouped(bar_max * frac));
            svg.text(left + plot_w + 6.0, y + 4.0, Anchor::Start, AXIS_TEXT, &grouped(line_max * frac));
        }

        #[allow(clippy::cast_precision_loss)]
        let slot_w = plot_w / self.categories.len() as f64;
        let bar_w = (slot_w * 0.5).min(48.0);
        let mut points = Vec::with_capacity(self.line.len());
        for (i, category) in self.categories.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let center = left + slot_w * (i as f64 + 0.5);
            let amount = self.bars.get(i).copied().unwrap_or(0.0).max(0.0);
            let bar_h = amount / bar_max * plot_h;
            svg.rect(center - bar_w / 2.0, top + plot_h - bar_h, bar_w, bar_h, self.bar_color);
            svg.text(center, height - 10.0, Anchor::Middle, CATEGORY_TEXT, category);

            if let Some(count) = self.line.get(i) {
                points.push((center, top + plot_h - count.max(0.0) / line_max * plot_h));
            }
        }
        svg.polyline(&points, self.line_color, 3.0);
        for (x, y) in &points {
            svg.circle(*x, *y, 4.0, self.line_color);
        }
        svg.finish()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Side-by-side bars per category, one per series, sharing a value axis.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupedBarChart {
    pub key: &'static str,
    pub axis_label: &'static str,
    pub unit: &'static str,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl GroupedBarChart {
    fn render(&self, width: f64, height: f64) -> String {
        let left = 48.0;
        let right = 16.0;
        let top = 40.0;
        let bottom = 32.0;
        let plot_w = (width - left - right).max(1.0);
        let plot_h = height - top - bottom;
        let max = nice_ceiling(
            self.series
                .iter()
                .flat_map(|s| s.values.iter().copied())
                .fold(0.0, f64::max),
        );

        let mut svg = Svg::open(self.key, width, height);
        svg.text(left, 16.0, Anchor::Start, AXIS_TEXT, self.axis_label);
        let legend_items = self.series.iter().map(|s| (s.name, s.color)).collect::<Vec<_>>();
        legend(&mut svg, width / 2.0 - 50.0, 16.0, &legend_items);

        for tick in 0..=4 {
            let frac = f64::from(tick) / 4.0;
            let y = top + plot_h - plot_h * frac;
            svg.line(left, y, left + plot_w, y, GRID_LINE, 1.0);
            svg.text(left - 6.0, y + 4.0, Anchor::End, AXIS_TEXT, &format!("{}{}", trim_float(round2(max * frac)), self.unit));
        }

        #[allow(clippy::cast_precision_loss)]
        let slot_w = plot_w / self.categories.len() as f64;
        #[allow(clippy::cast_precision_loss)]
        let bar_w = (slot_w * 0.7 / self.series.len().max(1) as f64).min(32.0);
        #[allow(clippy::cast_precision_loss)]
        let group_w = bar_w * self.series.len() as f64;
        for (i, category) in self.categories.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let center = left + slot_w * (i as f64 + 0.5);
            for (s, series) in self.series.iter().enumerate() {
                let value = series.values.get(i).copied().unwrap_or(0.0).max(0.0);
                let bar_h = value / max * plot_h;
                #[allow(clippy::cast_precision_loss)]
                let x = center - group_w / 2.0 + bar_w * s as f64;
                svg.rect(x, top + plot_h - bar_h, bar_w, bar_h, series.color);
            }
            svg.text(center, height - 10.0, Anchor::Middle, CATEGORY_TEXT, category);
        }
        svg.finish()
    }
}

/// Smallest "nice" axis maximum (1, 2, 2.5, 5 x 10^n) at or above `value`.
#[must_use]
pub fn nice_ceiling(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let normalized = value / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|step| normalized <= *step + f64::EPSILON)
        .unwrap_or(10.0);
    step * magnitude
}

/// Escape text for inclusion in SVG/XML content and attribute values.
#[must_use]
pub fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn legend(svg: &mut Svg, x: f64, y: f64, items: &[(&str, &str)]) {
    let mut cursor = x;
    for (name, color) in items {
        svg.rect(cursor, y - 9.0, 12.0, 10.0, color);
        svg.text(cursor + 16.0, y, Anchor::Start, AXIS_TEXT, name);
        #[allow(clippy::cast_precision_loss)]
        let advance = 28.0 + name.chars().count() as f64 * 12.0;
        cursor += advance;
    }
}

#[derive(Clone, Copy)]
enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Minimal SVG string builder. Coordinates are written with one decimal.
struct Svg {
    out: String,
}

impl Svg {
    fn open(key: &str, width: f64, height: f64) -> Self {
        let mut out = String::with_capacity(4096);
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="chart-svg" data-chart="{key}" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.0} {height:.0}" font-size="12">"#
        );
        Self { out }
    }

    fn linear_gradient(&mut self, id: &str, from: &str, to: &str) {
        let _ = write!(
            self.out,
            r#"<defs><linearGradient id="{id}" x1="0" y1="0" x2="1" y2="0"><stop offset="0%" stop-color="{from}"/><stop offset="100%" stop-color="{to}"/></linearGradient></defs>"#
        );
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        let _ = write!(
            self.out,
            r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" rx="2" fill="{fill}"/>"#
        );
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) {
        let _ = write!(
            self.out,
            r#"<line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="{stroke}" stroke-width="{width:.1}"/>"#
        );
    }

    fn polyline(&mut self, points: &[(f64, f64)], stroke: &str, width: f64) {
        if points.is_empty() {
            return;
        }
        let coords = points
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = write!(
            self.out,
            r#"<polyline points="{coords}" fill="none" stroke="{stroke}" stroke-width="{width:.1}" stroke-linejoin="round"/>"#
        );
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        let _ = write!(self.out, r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}" fill="{fill}"/>"#);
    }

    fn text(&mut self, x: f64, y: f64, anchor: Anchor, fill: &str, content: &str) {
        let _ = write!(
            self.out,
            r#"<text x="{x:.1}" y="{y:.1}" text-anchor="{}" fill="{fill}">{}</text>"#,
            anchor.as_str(),
            xml_escape(content)
        );
    }

    fn finish(mut self) -> String {
        self.out.push_str("</svg>");
        self.out
    }
}
