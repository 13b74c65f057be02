//! Rent scenario analysis: cash flow, ROI and strategy classification.
//!
//! Each of the three rent estimates is evaluated independently against the
//! same ownership cost and appreciation gain. Results keep the input order
//! (low, mid, high) even when the rents themselves are not ascending.

use crate::domain::{InputParameters, RentScenarioResult, StrategyLabel};
use crate::error::CalcError;

/// Minimum ROI (%) for a positive-cash-flow property to count as a good rental.
const GOOD_RENTAL_MIN_ROI: f64 = 10.0;
/// Appreciation (fraction of price) above which a thin-margin rental is better flipped.
const FLIP_MIN_APPRECIATION: f64 = 0.15;
/// Monthly cash flow below which appreciation dominates the return.
const FLIP_MAX_CASH_FLOW: f64 = 100.0;
/// ROI (%) below which a negative-cash-flow property is a bad buy.
const BAD_BUY_MAX_ROI: f64 = 5.0;

/// Down payment plus maintenance paid over the hold period.
pub fn total_cash_invested(p: &InputParameters) -> f64 {
    p.down_payment + p.monthly_maintenance * 12.0 * p.hold_years
}

/// Classify one scenario. Rules are checked in order and the first match wins.
pub fn classify(roi_percent: f64, cash_flow: f64, appreciation_ratio: f64) -> StrategyLabel {
    if roi_percent >= GOOD_RENTAL_MIN_ROI && cash_flow > 0.0 {
        StrategyLabel::GoodRental
    } else if appreciation_ratio >= FLIP_MIN_APPRECIATION && cash_flow < FLIP_MAX_CASH_FLOW {
        StrategyLabel::BetterAsFlip
    } else if roi_percent < BAD_BUY_MAX_ROI && cash_flow < 0.0 {
        StrategyLabel::BadBuy
    } else {
        StrategyLabel::DependsOnGoals
    }
}

/// Evaluate the low, mid and high rent scenarios.
///
/// Fails with [`CalcError::DegenerateFormula`] when nothing is invested
/// (zero down payment and zero maintenance), since ROI is undefined there.
pub fn analyze_scenarios(
    p: &InputParameters,
    total_monthly_cost: f64,
    appreciation_gain: f64,
) -> Result<[RentScenarioResult; 3], CalcError> {
    let invested = total_cash_invested(p);
    if invested == 0.0 {
        return Err(CalcError::DegenerateFormula(
            "total cash invested is zero (no down payment and no maintenance), ROI is undefined".to_string(),
        ));
    }

    let appreciation_ratio = appreciation_gain / p.purchase_price;

    Ok(p.rents().map(|(tier, rent)| {
        let cash_flow = rent - total_monthly_cost;
        let annual_profit = cash_flow * 12.0;
        let roi_percent = (annual_profit * p.hold_years + appreciation_gain) / invested * 100.0;

        RentScenarioResult {
            tier,
            rent,
            monthly_cash_flow: cash_flow,
            annual_profit,
            roi_percent,
            strategy: classify(roi_percent, cash_flow, appreciation_ratio),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{forecast_figures, mortgage_figures};
    use crate::domain::RentTier;

    fn run(p: &InputParameters) -> Result<[RentScenarioResult; 3], CalcError> {
        let cost = mortgage_figures(p).total_monthly_cost;
        let gain = forecast_figures(p).appreciation_gain;
        analyze_scenarios(p, cost, gain)
    }

    #[test]
    fn defaults_produce_expected_figures() {
        let out = run(&InputParameters::default()).unwrap();
        assert!((out[0].monthly_cash_flow - 38.69).abs() < 0.01);
        assert!((out[0].annual_profit - 464.29).abs() < 0.01);
        assert!((out[0].roi_percent - 69.75).abs() < 0.01);
        assert!((out[2].roi_percent - 118.73).abs() < 0.01);
    }

    #[test]
    fn good_rental_wins_over_flip() {
        // Low rent: cash flow ~38.69 (< 100) and appreciation ~15.9% (>= 15%),
        // so the flip rule also matches. The first rule must take precedence.
        let out = run(&InputParameters::default()).unwrap();
        assert!(out[0].monthly_cash_flow > 0.0 && out[0].monthly_cash_flow < 100.0);
        assert_eq!(out[0].strategy, StrategyLabel::GoodRental);
    }

    #[test]
    fn classify_rule_order() {
        assert_eq!(classify(12.0, 50.0, 0.20), StrategyLabel::GoodRental);
        assert_eq!(classify(8.0, 50.0, 0.20), StrategyLabel::BetterAsFlip);
        assert_eq!(classify(2.0, -50.0, 0.20), StrategyLabel::BetterAsFlip);
        assert_eq!(classify(2.0, -50.0, 0.05), StrategyLabel::BadBuy);
        assert_eq!(classify(7.0, -50.0, 0.05), StrategyLabel::DependsOnGoals);
        assert_eq!(classify(12.0, 0.0, 0.05), StrategyLabel::DependsOnGoals);
    }

    #[test]
    fn classify_boundaries_are_inclusive_where_documented() {
        assert_eq!(classify(10.0, 0.01, 0.0), StrategyLabel::GoodRental);
        assert_eq!(classify(9.99, 99.99, 0.15), StrategyLabel::BetterAsFlip);
        assert_eq!(classify(9.99, 100.0, 0.15), StrategyLabel::DependsOnGoals);
        assert_eq!(classify(5.0, -1.0, 0.0), StrategyLabel::DependsOnGoals);
    }

    #[test]
    fn negative_cash_flow_without_appreciation_is_bad_buy() {
        let p = InputParameters {
            rent_low: 500.0,
            rent_mid: 600.0,
            rent_high: 700.0,
            appreciation_rate: 0.0,
            ..InputParameters::default()
        };
        let out = run(&p).unwrap();
        assert!(out.iter().all(|s| s.strategy == StrategyLabel::BadBuy));
    }

    #[test]
    fn order_is_preserved_for_unsorted_rents() {
        let p = InputParameters {
            rent_low: 2_500.0,
            rent_mid: 900.0,
            rent_high: 1_700.0,
            ..InputParameters::default()
        };
        let out = run(&p).unwrap();
        assert_eq!(
            out.map(|s| s.tier),
            [RentTier::Low, RentTier::Mid, RentTier::High]
        );
        assert_eq!(out.map(|s| s.rent), [2_500.0, 900.0, 1_700.0]);
    }

    #[test]
    fn zero_cash_invested_is_degenerate() {
        let p = InputParameters {
            down_payment: 0.0,
            monthly_maintenance: 0.0,
            ..InputParameters::default()
        };
        let err = run(&p).unwrap_err();
        assert!(matches!(err, CalcError::DegenerateFormula(_)));
    }
}
