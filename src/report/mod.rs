//! Reporting utilities: the exportable scenario table and terminal formatting.
//!
//! The scenario table is built once from an `EvaluationReport`; every output
//! target (terminal, TUI, CSV, XLSX) formats the same rows.

use serde::{Deserialize, Serialize};

use crate::domain::EvaluationReport;

pub mod format;

pub use format::*;

/// Column headers shared by every tabular export.
pub const TABLE_HEADERS: [&str; 5] = ["Rent", "Monthly Cash Flow", "Annual Profit", "ROI (%)", "Strategy"];

/// One exported row. Numbers are already rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRow {
    #[serde(rename = "Rent")]
    pub rent: f64,
    #[serde(rename = "Monthly Cash Flow")]
    pub monthly_cash_flow: f64,
    #[serde(rename = "Annual Profit")]
    pub annual_profit: f64,
    #[serde(rename = "ROI (%)")]
    pub roi_percent: f64,
    #[serde(rename = "Strategy")]
    pub strategy: String,
}

/// Build the rental strategy table in scenario order (low, mid, high).
pub fn scenario_table(report: &EvaluationReport) -> Vec<ScenarioRow> {
    report
        .scenarios
        .iter()
        .map(|s| ScenarioRow {
            rent: round2(s.rent),
            monthly_cash_flow: round2(s.monthly_cash_flow),
            annual_profit: round2(s.annual_profit),
            roi_percent: round2(s.roi_percent),
            strategy: s.strategy.display_name().to_string(),
        })
        .collect()
}

/// Round half away from zero to two decimal places.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::evaluate;
    use crate::domain::InputParameters;

    #[test]
    fn table_rows_follow_scenarios() {
        let report = evaluate(&InputParameters::default()).unwrap();
        let rows = scenario_table(&report);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].rent, 1_600.0);
        assert_eq!(rows[0].monthly_cash_flow, 38.69);
        assert_eq!(rows[0].annual_profit, 464.29);
        assert_eq!(rows[0].roi_percent, 69.75);
        assert_eq!(rows[0].strategy, "Good Rental");
        assert_eq!(rows[2].rent, 2_000.0);
    }

    #[test]
    fn round2_basic() {
        assert_eq!(round2(1.005_1), 1.01);
        assert_eq!(round2(-38.691), -38.69);
        assert_eq!(round2(12.0), 12.0);
    }
}
