//! Per-square-foot comparable values.

use crate::domain::{CompsFigures, InputParameters};

pub fn comps_figures(p: &InputParameters) -> CompsFigures {
    let market_value_by_sqft = p.avg_price_per_sqft * p.square_footage;
    CompsFigures {
        market_value_by_sqft,
        rent_estimate_by_sqft: p.avg_rent_per_sqft * p.square_footage,
        price_difference: market_value_by_sqft - p.purchase_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comps_from_defaults() {
        let comps = comps_figures(&InputParameters::default());
        assert_eq!(comps.market_value_by_sqft, 240_000.0);
        assert!((comps.rent_estimate_by_sqft - 1_800.0).abs() < 1e-9);
        assert_eq!(comps.price_difference, 40_000.0);
    }
}
