//! Appreciation forecast and flip profit.

use crate::domain::{ForecastFigures, InputParameters};

/// Compound `price` at `annual_rate_pct` for `years`.
pub fn future_value(price: f64, annual_rate_pct: f64, years: f64) -> f64 {
    price * (1.0 + annual_rate_pct / 100.0).powf(years)
}

/// Resale minus purchase minus rehab.
pub fn flip_profit(target_resale_value: f64, purchase_price: f64, rehab_cost: f64) -> f64 {
    target_resale_value - purchase_price - rehab_cost
}

pub fn forecast_figures(p: &InputParameters) -> ForecastFigures {
    let future_value = future_value(p.purchase_price, p.appreciation_rate, p.hold_years);
    ForecastFigures {
        hold_years: p.hold_years,
        future_value,
        appreciation_gain: future_value - p.purchase_price,
        flip_profit: flip_profit(p.target_resale_value, p.purchase_price, p.rehab_cost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_years_at_three_percent() {
        let fv = future_value(200_000.0, 3.0, 5.0);
        assert!((fv - 231_854.81).abs() < 0.01, "fv={fv}");

        let figures = forecast_figures(&InputParameters::default());
        assert!((figures.appreciation_gain - 31_854.81).abs() < 0.01);
    }

    #[test]
    fn flip_profit_is_resale_less_costs() {
        assert_eq!(flip_profit(275_000.0, 200_000.0, 30_000.0), 45_000.0);
        assert_eq!(forecast_figures(&InputParameters::default()).flip_profit, 45_000.0);
    }

    #[test]
    fn zero_appreciation_keeps_price() {
        assert_eq!(future_value(180_000.0, 0.0, 7.0), 180_000.0);
    }
}
