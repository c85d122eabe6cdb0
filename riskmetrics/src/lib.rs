//! Credit-risk dashboard data model and derivation helpers.
//!
//! This crate is UI-framework agnostic so the client crate can consume it
//! directly for rendering dashboard tiles, tables, and charts. Everything here
//! is a pure function of a [`DashboardMetrics`] snapshot.
//!
//! WIRE FORMAT
//! ===========
//! Field names mirror the analysis service's `/dashboard_data` payload
//! (`branch_npl_rank`, `asset_quality_distribution`, ...). Decoding is lenient:
//! missing sequences become empty and a missing `summary` stays `None` so the
//! renderer can show its "no data" panel instead of failing the whole fetch.

pub mod chart;
pub mod format;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One complete aggregate snapshot of the loan book.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    #[serde(default)]
    pub summary: Option<Summary>,
    #[serde(default, rename = "branch_npl_rank")]
    pub branch_ranking: Vec<BranchNpl>,
    #[serde(default, rename = "asset_quality_distribution")]
    pub asset_quality: Vec<AssetQuality>,
    #[serde(default, rename = "product_npl_rank")]
    pub product_npl_ranking: Vec<ProductNpl>,
    #[serde(default)]
    pub product_overdue_balance: Vec<ProductOverdue>,
    #[serde(default, rename = "overdue_day_distribution")]
    pub overdue_days: Vec<OverdueBucket>,
    #[serde(default, rename = "age_risk_performance")]
    pub age_risk: Vec<AgeRisk>,
}

/// Bank-wide scalar totals. Amounts are in 万元 (ten thousand yuan), ratios
/// in percent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_loan_balance_wan: f64,
    pub total_overdue_balance_wan: f64,
    pub overall_npl_ratio: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub total_overdue_customers: u64,
    pub total_npl_balance_wan: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub total_npl_customers: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BranchNpl {
    pub branch_name: String,
    pub npl_ratio: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductNpl {
    pub product_name: String,
    pub npl_ratio: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductOverdue {
    pub product_name: String,
    pub overdue_balance_wan: f64,
}

/// One row of the seven-tier asset classification (正常, 关注, 次级, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetQuality {
    pub category: String,
    pub value_wan: f64,
    pub percentage: f64,
    /// Raw amount in yuan, when the service includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Overdue balance and customer count for one days-past-due bucket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverdueBucket {
    pub bucket: String,
    pub overdue_balance_wan: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub customer_count: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgeRisk {
    pub age_segment: String,
    pub npl_ratio: f64,
    pub overdue_ratio: f64,
}

/// A labelled value that the dashboard ranks in descending order.
pub trait Ranked {
    fn label(&self) -> &str;
    fn score(&self) -> f64;
}

impl Ranked for BranchNpl {
    fn label(&self) -> &str {
        &self.branch_name
    }

    fn score(&self) -> f64 {
        self.npl_ratio
    }
}

impl Ranked for ProductNpl {
    fn label(&self) -> &str {
        &self.product_name
    }

    fn score(&self) -> f64 {
        self.npl_ratio
    }
}

impl Ranked for ProductOverdue {
    fn label(&self) -> &str {
        &self.product_name
    }

    fn score(&self) -> f64 {
        self.overdue_balance_wan
    }
}

/// Return `(label, score)` pairs sorted by descending score.
///
/// The sort is stable, so entries with equal scores keep their snapshot order.
#[must_use]
pub fn ranked_descending<T: Ranked>(items: &[T]) -> Vec<(String, f64)> {
    let mut ranked = items
        .iter()
        .map(|item| (item.label().to_owned(), item.score()))
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// Labels that occur more than once in a ranked sequence, in first-seen order.
#[must_use]
pub fn duplicate_labels<T: Ranked>(items: &[T]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut dupes = Vec::new();
    for item in items {
        let label = item.label();
        if !seen.insert(label) && !dupes.iter().any(|d: &String| d == label) {
            dupes.push(label.to_owned());
        }
    }
    dupes
}

/// Sum of asset-quality percentages.
#[must_use]
pub fn percentage_total(rows: &[AssetQuality]) -> f64 {
    rows.iter().map(|row| row.percentage).sum()
}

/// Whether the asset-quality percentages sum to 100 within `tolerance`.
#[must_use]
pub fn percentages_balanced(rows: &[AssetQuality], tolerance: f64) -> bool {
    !rows.is_empty() && (percentage_total(rows) - 100.0).abs() <= tolerance
}

/// Allowed drift of the asset-quality percentage total from 100.
pub const PERCENTAGE_TOLERANCE: f64 = 0.5;

impl DashboardMetrics {
    /// Data-quality problems worth logging: repeated ranking labels and an
    /// asset-quality distribution that does not add up to 100%.
    #[must_use]
    pub fn integrity_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let sequences = [
            ("branch_npl_rank", duplicate_labels(&self.branch_ranking)),
            ("product_npl_rank", duplicate_labels(&self.product_npl_ranking)),
            ("product_overdue_balance", duplicate_labels(&self.product_overdue_balance)),
        ];
        for (name, dupes) in sequences {
            if !dupes.is_empty() {
                warnings.push(format!("{name}: duplicate labels {}", dupes.join(", ")));
            }
        }
        if !self.asset_quality.is_empty() && !percentages_balanced(&self.asset_quality, PERCENTAGE_TOLERANCE) {
            warnings.push(format!(
                "asset_quality_distribution: percentages sum to {:.1}",
                percentage_total(&self.asset_quality)
            ));
        }
        warnings
    }
}

/// A labelled headline figure rendered in the summary grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryTile {
    pub label: &'static str,
    pub value: String,
}

/// The six headline tiles, in display order.
#[must_use]
pub fn summary_tiles(summary: &Summary) -> Vec<SummaryTile> {
    let wan = |value: f64| format!("{} 万元", format::grouped(value));
    let people = |count: u64| format!("{} 人", format::grouped_count(count));
    vec![
        SummaryTile { label: "全行总贷款余额", value: wan(summary.total_loan_balance_wan) },
        SummaryTile { label: "全行逾期总余额", value: wan(summary.total_overdue_balance_wan) },
        SummaryTile { label: "全行整体不良率", value: format::percent(summary.overall_npl_ratio) },
        SummaryTile { label: "总逾期客户数", value: people(summary.total_overdue_customers) },
        SummaryTile { label: "总不良余额", value: wan(summary.total_npl_balance_wan) },
        SummaryTile { label: "总不良客户", value: people(summary.total_npl_customers) },
    ]
}

/// Display strings for one asset-quality table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetRow {
    pub category: String,
    pub amount: String,
    pub share: String,
}

/// Asset-quality rows in snapshot order, amounts fixed to two decimals.
#[must_use]
pub fn asset_rows(rows: &[AssetQuality]) -> Vec<AssetRow> {
    rows.iter()
        .map(|row| AssetRow {
            category: row.category.clone(),
            amount: format::fixed2(row.value_wan),
            share: format::percent(row.percentage),
        })
        .collect()
}

impl DashboardMetrics {
    /// Whether the snapshot carries enough data to render tiles and charts.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        self.summary.is_some()
    }

    /// Canned snapshot shown when the analysis service cannot be reached.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            summary: Some(Summary {
                total_loan_balance_wan: 125_000.0,
                total_overdue_balance_wan: 8_500.0,
                overall_npl_ratio: 3.2,
                total_overdue_customers: 450,
                total_npl_balance_wan: 4_000.0,
                total_npl_customers: 180,
            }),
            branch_ranking: [
                ("西安分行", 4.5),
                ("咸阳分行", 3.8),
                ("宝鸡分行", 3.2),
                ("渭南分行", 2.9),
                ("延安分行", 2.5),
            ]
            .into_iter()
            .map(|(name, ratio)| BranchNpl { branch_name: name.to_owned(), npl_ratio: ratio })
            .collect(),
            asset_quality: [
                ("正常", 110_000.0, 88.0),
                ("关注", 7_000.0, 5.6),
                ("次级", 3_000.0, 2.4),
                ("可疑", 3_000.0, 2.4),
                ("损失", 2_000.0, 1.6),
            ]
            .into_iter()
            .map(|(category, value_wan, percentage)| AssetQuality {
                category: category.to_owned(),
                value_wan,
                percentage,
                value: None,
            })
            .collect(),
            product_npl_ranking: [("个人经营贷", 5.2), ("消费贷", 4.1), ("按揭贷款", 2.8), ("汽车贷款", 2.3)]
                .into_iter()
                .map(|(name, ratio)| ProductNpl { product_name: name.to_owned(), npl_ratio: ratio })
                .collect(),
            product_overdue_balance: [
                ("按揭贷款", 3_500.0),
                ("个人经营贷", 2_800.0),
                ("消费贷", 1_500.0),
                ("汽车贷款", 700.0),
            ]
            .into_iter()
            .map(|(name, amount)| ProductOverdue { product_name: name.to_owned(), overdue_balance_wan: amount })
            .collect(),
            overdue_days: [
                ("1-30天", 2_500.0, 150),
                ("31-60天", 2_000.0, 120),
                ("61-90天", 1_500.0, 90),
                ("91-180天", 1_200.0, 60),
                ("180天以上", 1_300.0, 30),
            ]
            .into_iter()
            .map(|(bucket, amount, count)| OverdueBucket {
                bucket: bucket.to_owned(),
                overdue_balance_wan: amount,
                customer_count: count,
            })
            .collect(),
            age_risk: [
                ("18-25岁", 4.5, 7.2),
                ("26-35岁", 3.2, 5.8),
                ("36-45岁", 2.8, 4.5),
                ("46-55岁", 3.5, 5.2),
                ("56岁以上", 4.0, 6.0),
            ]
            .into_iter()
            .map(|(segment, npl, overdue)| AgeRisk {
                age_segment: segment.to_owned(),
                npl_ratio: npl,
                overdue_ratio: overdue,
            })
            .collect(),
        }
    }
}

/// Accept integer counts, integral floats (`450.0`), and `null` (as zero).
fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer count"))
        }
        serde_json::Value::Null => Ok(0),
        _ => Err(D::Error::custom("expected number")),
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
