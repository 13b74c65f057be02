//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the calculation code stays clean and testable
//! - output changes are localized

use crate::domain::EvaluationReport;
use crate::report::{ScenarioRow, TABLE_HEADERS};

/// Format the full evaluation: cost breakdown, forecast, flip, comps.
///
/// The rental strategy table is formatted separately by [`format_strategy_table`].
pub fn format_report(report: &EvaluationReport) -> String {
    let mut out = String::new();
    let m = &report.mortgage;
    let f = &report.forecast;
    let c = &report.comps;

    out.push_str("=== rea - Real Estate Investment Analyzer ===\n");

    out.push_str("\nMonthly Ownership Cost Breakdown\n");
    out.push_str(&format!("  Loan amount        : {}\n", fmt_money(m.loan_amount)));
    out.push_str(&format!("  Mortgage           : {}\n", fmt_money(m.monthly_payment)));
    out.push_str(&format!("  Property tax       : {}\n", fmt_money(m.monthly_property_tax)));
    out.push_str(&format!("  Insurance          : {}\n", fmt_money(m.monthly_insurance)));
    out.push_str(&format!("  Maintenance        : {}\n", fmt_money(m.monthly_maintenance)));
    out.push_str(&format!("  Total monthly cost : {}\n", fmt_money(m.total_monthly_cost)));

    out.push_str("\nAppreciation Forecast\n");
    out.push_str(&format!(
        "  Future value after {} years : {}\n",
        fmt_years(f.hold_years),
        fmt_money(f.future_value)
    ));
    out.push_str(&format!("  Expected appreciation gain : {}\n", fmt_money(f.appreciation_gain)));

    out.push_str("\nFlip Profit Analysis\n");
    out.push_str(&format!(
        "  Flip profit (resale - purchase - rehab) : {}\n",
        fmt_money(f.flip_profit)
    ));

    out.push_str("\nSq Ft Comparison Analysis\n");
    out.push_str(&format!("  Estimated market value (comps) : {}\n", fmt_money(c.market_value_by_sqft)));
    out.push_str(&format!(
        "  Your purchase price            : {}\n",
        fmt_money(report.inputs.purchase_price)
    ));
    out.push_str(&format!("  Difference                     : {}\n", fmt_money(c.price_difference)));
    out.push_str(&format!("  Estimated rent (comps)         : {}\n", fmt_money(c.rent_estimate_by_sqft)));

    out
}

/// Format the rental strategy comparison table.
pub fn format_strategy_table(rows: &[ScenarioRow]) -> String {
    let mut out = String::new();
    out.push_str("Rental Strategy Comparison\n");
    out.push_str(
        format!(
            "{:>12} {:>18} {:>14} {:>10} {:<18}",
            TABLE_HEADERS[0], TABLE_HEADERS[1], TABLE_HEADERS[2], TABLE_HEADERS[3], TABLE_HEADERS[4]
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:->12} {:->18} {:->14} {:->10} {:-<18}", "", "", "", "", "").trim_end());
    out.push('\n');

    for r in rows {
        out.push_str(
            format!(
                "{:>12} {:>18} {:>14} {:>10.2} {:<18}",
                fmt_money(r.rent),
                fmt_money(r.monthly_cash_flow),
                fmt_money(r.annual_profit),
                r.roi_percent,
                r.strategy,
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// `$1,234.56` / `-$1,234.56`.
pub fn fmt_money(v: f64) -> String {
    let cents = (v.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if v < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}

fn fmt_years(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::evaluate;
    use crate::domain::InputParameters;
    use crate::report::scenario_table;

    #[test]
    fn fmt_money_groups_thousands() {
        assert_eq!(fmt_money(231_854.814), "$231,854.81");
        assert_eq!(fmt_money(999.999), "$1,000.00");
        assert_eq!(fmt_money(-1_061.3), "-$1,061.30");
        assert_eq!(fmt_money(0.0), "$0.00");
        assert_eq!(fmt_money(-0.001), "$0.00");
    }

    #[test]
    fn report_has_all_sections() {
        let report = evaluate(&InputParameters::default()).unwrap();
        let text = format_report(&report);
        for section in [
            "Monthly Ownership Cost Breakdown",
            "Appreciation Forecast",
            "Flip Profit Analysis",
            "Sq Ft Comparison Analysis",
        ] {
            assert!(text.contains(section), "missing {section}");
        }
        assert!(text.contains("$1,011.31"));
        assert!(text.contains("Future value after 5 years : $231,854.81"));
        assert!(text.contains("$45,000.00"));
    }

    #[test]
    fn strategy_table_lists_rows_in_order() {
        let report = evaluate(&InputParameters::default()).unwrap();
        let table = format_strategy_table(&scenario_table(&report));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[1].contains("Monthly Cash Flow"));
        assert!(lines[3].contains("$1,600.00"));
        assert!(lines[4].contains("$1,800.00"));
        assert!(lines[5].contains("$2,000.00"));
        assert!(lines[3].ends_with("Good Rental"));
    }
}
