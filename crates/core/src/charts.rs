//! Dashboard chart datasets derived from the stored record.
//!
//! Recomputed every time the dashboard loads; never persisted.

use serde::{Deserialize, Serialize};

use crate::bank_details::StoredBankDetails;
use crate::constants::CREDIT_SCORE_MAX;

/// Slice colours for the pie chart, cycled by index.
pub const PIE_COLORS: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8"];

/// Fill of the credit score gauge.
pub const GAUGE_FILL: &str = "#8884d8";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

impl ChartDataPoint {
    fn new(name: &str, value: f64) -> Self {
        Self { name: name.to_owned(), value, fill: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeDatum {
    pub name: String,
    pub value: f64,
    pub fill: String,
    pub max: f64,
}

/// Everything the dashboard page renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub has_data: bool,
    pub bar: Vec<ChartDataPoint>,
    pub line: Vec<ChartDataPoint>,
    pub pie: Vec<ChartDataPoint>,
    pub radial: Vec<GaugeDatum>,
}

impl DashboardView {
    /// The empty state: no record, or one that could not be parsed.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the view from the raw local storage value, if any.
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(StoredBankDetails::parse)
            .map_or_else(Self::empty, |details| Self::from_details(&details))
    }

    pub fn from_details(details: &StoredBankDetails) -> Self {
        let or_zero = |v: Option<f64>| v.unwrap_or(0.0);

        let bar = vec![
            ChartDataPoint::new("Loan Amt", or_zero(details.loan_amount)),
            ChartDataPoint::new("EMI", or_zero(details.monthly_emi)),
            ChartDataPoint::new("Txn Limit", or_zero(details.transaction_limit)),
        ];

        let line = vec![
            ChartDataPoint::new("Int. Rate", or_zero(details.interest_rate)),
            ChartDataPoint::new("Tenure", or_zero(details.loan_tenure)),
            ChartDataPoint::new("Credit Score", or_zero(details.credit_score)),
        ];

        let pie = [
            ChartDataPoint::new("Loan Amount", or_zero(details.loan_amount)),
            ChartDataPoint::new("Transaction Limit", or_zero(details.transaction_limit)),
        ]
        .into_iter()
        .filter(|point| point.value > 0.0)
        .enumerate()
        .map(|(i, point)| ChartDataPoint {
            fill: Some(PIE_COLORS[i % PIE_COLORS.len()].to_owned()),
            ..point
        })
        .collect();

        let radial = details
            .credit_score
            .map(|score| GaugeDatum {
                name: "Credit Score".to_owned(),
                value: score,
                fill: GAUGE_FILL.to_owned(),
                max: CREDIT_SCORE_MAX,
            })
            .into_iter()
            .collect();

        Self { has_data: true, bar, line, pie, radial }
    }
}
