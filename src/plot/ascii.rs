//! ASCII bar chart for terminal output.
//!
//! This is intentionally "dumb" (fixed-width rows), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Bars share a zero baseline `|`: positive cash flow grows right as `#`,
//! negative cash flow grows left as `=`.

use crate::domain::RentScenarioResult;
use crate::report::fmt_money;

/// Render monthly cash flow by rent tier.
pub fn render_cash_flow_bars(scenarios: &[RentScenarioResult], width: usize) -> String {
    let width = width.max(10);

    let max_abs = scenarios
        .iter()
        .map(|s| s.monthly_cash_flow.abs())
        .fold(0.0_f64, f64::max);
    let scale = if max_abs > 0.0 { max_abs } else { 1.0 };

    let has_neg = scenarios.iter().any(|s| s.monthly_cash_flow < 0.0);
    let has_pos = scenarios.iter().any(|s| s.monthly_cash_flow > 0.0);
    let (neg_w, pos_w) = match (has_neg, has_pos) {
        (true, true) => (width / 2, width - width / 2),
        (true, false) => (width, 0),
        _ => (0, width),
    };

    let mut out = String::new();
    out.push_str("Monthly Cash Flow by Rent Tier\n");

    for s in scenarios {
        let cf = s.monthly_cash_flow;
        let (left, right) = if cf < 0.0 {
            let len = bar_len(cf.abs(), scale, neg_w);
            (format!("{}{}", " ".repeat(neg_w - len), "=".repeat(len)), " ".repeat(pos_w))
        } else {
            let len = bar_len(cf, scale, pos_w);
            (" ".repeat(neg_w), format!("{}{}", "#".repeat(len), " ".repeat(pos_w - len)))
        };

        out.push_str(
            format!(
                "{:<4} {:>10} {left}|{right} {}",
                s.tier.display_name(),
                fmt_money(s.rent),
                fmt_money(cf)
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

fn bar_len(v: f64, scale: f64, side: usize) -> usize {
    ((v / scale) * side as f64).round().clamp(0.0, side as f64) as usize
}
