//! Fixed-rate mortgage payment and total monthly ownership cost.

use crate::domain::{InputParameters, MortgageFigures};

/// Monthly payment for a fixed-rate, fully amortizing loan.
///
/// `annual_rate_pct` is a percentage (`6.5` = 6.5%). A zero rate has no
/// interest component, so the principal is repaid straight-line over the term.
/// Rates so small that `(1 + r)^n - 1` underflows to zero take the same branch.
pub fn monthly_payment(loan_amount: f64, annual_rate_pct: f64, term_years: f64) -> f64 {
    let r = annual_rate_pct / 12.0 / 100.0;
    let n = term_years * 12.0;

    // (1 + r)^n - 1 without the cancellation in `1.0 + r`.
    let denominator = (n * r.ln_1p()).exp_m1();
    if r == 0.0 || denominator == 0.0 {
        return loan_amount / n;
    }

    let growth = denominator + 1.0;
    loan_amount * (r * growth) / denominator
}

/// Mortgage payment plus the monthly share of tax, insurance and maintenance.
pub fn mortgage_figures(p: &InputParameters) -> MortgageFigures {
    let loan_amount = p.loan_amount();
    let payment = monthly_payment(loan_amount, p.interest_rate, p.loan_term);
    let monthly_property_tax = p.annual_property_tax / 12.0;
    let monthly_insurance = p.annual_insurance / 12.0;

    MortgageFigures {
        loan_amount,
        monthly_payment: payment,
        monthly_property_tax,
        monthly_insurance,
        monthly_maintenance: p.monthly_maintenance,
        total_monthly_cost: payment + monthly_property_tax + monthly_insurance + p.monthly_maintenance,
    }
}
