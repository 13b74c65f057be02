//! Shared evaluation pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the workflow:
//! parameters -> evaluate -> scenario table
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use tracing::{debug, info};

use crate::calc::evaluate;
use crate::domain::{EvaluationReport, InputParameters};
use crate::error::CalcError;
use crate::report::{ScenarioRow, scenario_table};

/// All computed outputs of a single evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    pub report: EvaluationReport,
    pub table: Vec<ScenarioRow>,
}

/// Evaluate one parameter set and build the export table from it.
pub fn run_evaluation(params: &InputParameters) -> Result<RunOutput, CalcError> {
    let report = evaluate(params)?;

    debug!(
        loan_amount = report.mortgage.loan_amount,
        monthly_payment = report.mortgage.monthly_payment,
        total_monthly_cost = report.mortgage.total_monthly_cost,
        "mortgage"
    );
    debug!(
        future_value = report.forecast.future_value,
        appreciation_gain = report.forecast.appreciation_gain,
        flip_profit = report.forecast.flip_profit,
        "forecast"
    );
    for s in &report.scenarios {
        debug!(
            tier = s.tier.display_name(),
            rent = s.rent,
            cash_flow = s.monthly_cash_flow,
            roi = s.roi_percent,
            strategy = s.strategy.display_name(),
            "scenario"
        );
    }

    let table = scenario_table(&report);
    info!(
        total_monthly_cost = report.mortgage.total_monthly_cost,
        scenarios = table.len(),
        "evaluation complete"
    );

    Ok(RunOutput { report, table })
}
