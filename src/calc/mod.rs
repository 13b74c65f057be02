//! Calculation core.
//!
//! Every function here is pure: it takes an immutable `InputParameters` (or a
//! few derived numbers) and returns a value. No component reads another's
//! internal state; `evaluate` just wires them together.

pub mod comps;
pub mod forecast;
pub mod mortgage;
pub mod scenario;

pub use comps::*;
pub use forecast::*;
pub use mortgage::*;
pub use scenario::*;

use crate::domain::{EvaluationReport, InputParameters};
use crate::error::CalcError;

/// Validate the inputs and compute the full report.
pub fn evaluate(p: &InputParameters) -> Result<EvaluationReport, CalcError> {
    p.validate()?;

    let mortgage = mortgage_figures(p);
    let forecast = forecast_figures(p);
    let comps = comps_figures(p);
    let scenarios = analyze_scenarios(p, mortgage.total_monthly_cost, forecast.appreciation_gain)?;

    let report = EvaluationReport {
        inputs: *p,
        mortgage,
        forecast,
        comps,
        scenarios,
    };
    ensure_finite(&report)?;
    Ok(report)
}

/// Reject reports where extreme (but finite) inputs overflowed a figure.
fn ensure_finite(report: &EvaluationReport) -> Result<(), CalcError> {
    let m = &report.mortgage;
    let f = &report.forecast;
    let c = &report.comps;
    let mut figures = vec![
        ("monthly_payment", m.monthly_payment),
        ("total_monthly_cost", m.total_monthly_cost),
        ("future_value", f.future_value),
        ("appreciation_gain", f.appreciation_gain),
        ("flip_profit", f.flip_profit),
        ("market_value_by_sqft", c.market_value_by_sqft),
        ("rent_estimate_by_sqft", c.rent_estimate_by_sqft),
        ("price_difference", c.price_difference),
    ];
    for s in &report.scenarios {
        figures.push(("monthly_cash_flow", s.monthly_cash_flow));
        figures.push(("annual_profit", s.annual_profit));
        figures.push(("roi_percent", s.roi_percent));
    }

    match figures.into_iter().find(|(_, v)| !v.is_finite()) {
        Some((name, v)) => Err(CalcError::DegenerateFormula(format!("{name} is not finite ({v})"))),
        None => Ok(()),
    }
}
