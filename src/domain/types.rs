//! Shared domain types.
//!
//! These types are intentionally kept plain and serializable so they can be:
//!
//! - built from CLI flags, environment variables, or a JSON input file
//! - evaluated without any hidden state
//! - exported to CSV/XLSX/JSON by the presentation layer

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// Every user-supplied number needed for one evaluation.
///
/// Rates are annual percentages (`6.5` means 6.5%). Missing fields in a JSON
/// input file fall back to [`InputParameters::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputParameters {
    pub purchase_price: f64,
    pub down_payment: f64,
    pub interest_rate: f64,
    pub loan_term: f64,
    pub annual_property_tax: f64,
    pub annual_insurance: f64,
    pub monthly_maintenance: f64,
    pub square_footage: f64,

    pub avg_price_per_sqft: f64,
    pub avg_rent_per_sqft: f64,

    pub rent_low: f64,
    pub rent_mid: f64,
    pub rent_high: f64,
    pub appreciation_rate: f64,
    pub hold_years: f64,

    pub rehab_cost: f64,
    pub target_resale_value: f64,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            purchase_price: 200_000.0,
            down_payment: 40_000.0,
            interest_rate: 6.5,
            loan_term: 30.0,
            annual_property_tax: 3_600.0,
            annual_insurance: 1_200.0,
            monthly_maintenance: 150.0,
            square_footage: 1_500.0,
            avg_price_per_sqft: 160.0,
            avg_rent_per_sqft: 1.2,
            rent_low: 1_600.0,
            rent_mid: 1_800.0,
            rent_high: 2_000.0,
            appreciation_rate: 3.0,
            hold_years: 5.0,
            rehab_cost: 30_000.0,
            target_resale_value: 275_000.0,
        }
    }
}

impl InputParameters {
    /// Principal financed by the mortgage.
    pub fn loan_amount(&self) -> f64 {
        self.purchase_price - self.down_payment
    }

    /// Rent levels in evaluation order (low, mid, high).
    pub fn rents(&self) -> [(RentTier, f64); 3] {
        [
            (RentTier::Low, self.rent_low),
            (RentTier::Mid, self.rent_mid),
            (RentTier::High, self.rent_high),
        ]
    }

    /// Reject values outside the domain the formulas are defined on.
    ///
    /// The zero-interest and zero-cash-invested singularities are not input
    /// errors; they are handled by the calculators themselves.
    pub fn validate(&self) -> Result<(), CalcError> {
        for field in ParamField::ALL {
            let v = field.get(self);
            if !v.is_finite() {
                return Err(CalcError::invalid(field.key(), format!("expected a finite number, got {v}")));
            }
            if v < 0.0 && !field.allows_negative() {
                return Err(CalcError::invalid(field.key(), format!("must not be negative (got {v})")));
            }
        }

        if self.appreciation_rate <= -100.0 {
            return Err(CalcError::invalid(
                "appreciation_rate",
                format!("must be > -100 (got {})", self.appreciation_rate),
            ));
        }

        if self.purchase_price <= 0.0 {
            return Err(CalcError::invalid("purchase_price", "must be > 0"));
        }
        if self.loan_term <= 0.0 {
            return Err(CalcError::invalid("loan_term", "must be > 0"));
        }
        if self.hold_years <= 0.0 {
            return Err(CalcError::invalid("hold_years", "must be > 0"));
        }
        if self.loan_amount() < 0.0 {
            return Err(CalcError::invalid(
                "down_payment",
                format!(
                    "exceeds purchase price ({:.2} > {:.2})",
                    self.down_payment, self.purchase_price
                ),
            ));
        }

        Ok(())
    }
}

/// Addressable input fields.
///
/// Used by the TUI form and by validation so both walk the same list in the
/// same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamField {
    PurchasePrice,
    DownPayment,
    InterestRate,
    LoanTerm,
    AnnualPropertyTax,
    AnnualInsurance,
    MonthlyMaintenance,
    SquareFootage,
    AvgPricePerSqft,
    AvgRentPerSqft,
    RentLow,
    RentMid,
    RentHigh,
    AppreciationRate,
    HoldYears,
    RehabCost,
    TargetResaleValue,
}

impl ParamField {
    pub const ALL: [ParamField; 17] = [
        ParamField::PurchasePrice,
        ParamField::DownPayment,
        ParamField::InterestRate,
        ParamField::LoanTerm,
        ParamField::AnnualPropertyTax,
        ParamField::AnnualInsurance,
        ParamField::MonthlyMaintenance,
        ParamField::SquareFootage,
        ParamField::AvgPricePerSqft,
        ParamField::AvgRentPerSqft,
        ParamField::RentLow,
        ParamField::RentMid,
        ParamField::RentHigh,
        ParamField::AppreciationRate,
        ParamField::HoldYears,
        ParamField::RehabCost,
        ParamField::TargetResaleValue,
    ];

    /// Snake-case name, matching the JSON input keys.
    pub fn key(self) -> &'static str {
        match self {
            ParamField::PurchasePrice => "purchase_price",
            ParamField::DownPayment => "down_payment",
            ParamField::InterestRate => "interest_rate",
            ParamField::LoanTerm => "loan_term",
            ParamField::AnnualPropertyTax => "annual_property_tax",
            ParamField::AnnualInsurance => "annual_insurance",
            ParamField::MonthlyMaintenance => "monthly_maintenance",
            ParamField::SquareFootage => "square_footage",
            ParamField::AvgPricePerSqft => "avg_price_per_sqft",
            ParamField::AvgRentPerSqft => "avg_rent_per_sqft",
            ParamField::RentLow => "rent_low",
            ParamField::RentMid => "rent_mid",
            ParamField::RentHigh => "rent_high",
            ParamField::AppreciationRate => "appreciation_rate",
            ParamField::HoldYears => "hold_years",
            ParamField::RehabCost => "rehab_cost",
            ParamField::TargetResaleValue => "target_resale_value",
        }
    }

    /// Human-readable label for forms and reports.
    pub fn display_name(self) -> &'static str {
        match self {
            ParamField::PurchasePrice => "Purchase Price ($)",
            ParamField::DownPayment => "Down Payment ($)",
            ParamField::InterestRate => "Interest Rate (%)",
            ParamField::LoanTerm => "Loan Term (years)",
            ParamField::AnnualPropertyTax => "Annual Property Tax ($)",
            ParamField::AnnualInsurance => "Annual Insurance ($)",
            ParamField::MonthlyMaintenance => "Monthly Maintenance ($)",
            ParamField::SquareFootage => "Square Footage",
            ParamField::AvgPricePerSqft => "Avg Price per Sq Ft ($)",
            ParamField::AvgRentPerSqft => "Avg Rent per Sq Ft ($)",
            ParamField::RentLow => "Low Rent Estimate ($)",
            ParamField::RentMid => "Mid Rent Estimate ($)",
            ParamField::RentHigh => "High Rent Estimate ($)",
            ParamField::AppreciationRate => "Appreciation Rate (%)",
            ParamField::HoldYears => "Hold Period (years)",
            ParamField::RehabCost => "Rehab Cost ($)",
            ParamField::TargetResaleValue => "Target Resale Value ($)",
        }
    }

    /// Increment applied by one left/right key press in the TUI.
    pub fn step(self) -> f64 {
        match self {
            ParamField::PurchasePrice
            | ParamField::DownPayment
            | ParamField::RehabCost
            | ParamField::TargetResaleValue => 5_000.0,
            ParamField::AnnualPropertyTax | ParamField::AnnualInsurance => 100.0,
            ParamField::RentLow | ParamField::RentMid | ParamField::RentHigh => 50.0,
            ParamField::MonthlyMaintenance | ParamField::SquareFootage => 25.0,
            ParamField::AvgPricePerSqft => 5.0,
            ParamField::LoanTerm | ParamField::HoldYears => 1.0,
            ParamField::InterestRate | ParamField::AppreciationRate => 0.25,
            ParamField::AvgRentPerSqft => 0.05,
        }
    }

    pub fn get(self, p: &InputParameters) -> f64 {
        match self {
            ParamField::PurchasePrice => p.purchase_price,
            ParamField::DownPayment => p.down_payment,
            ParamField::InterestRate => p.interest_rate,
            ParamField::LoanTerm => p.loan_term,
            ParamField::AnnualPropertyTax => p.annual_property_tax,
            ParamField::AnnualInsurance => p.annual_insurance,
            ParamField::MonthlyMaintenance => p.monthly_maintenance,
            ParamField::SquareFootage => p.square_footage,
            ParamField::AvgPricePerSqft => p.avg_price_per_sqft,
            ParamField::AvgRentPerSqft => p.avg_rent_per_sqft,
            ParamField::RentLow => p.rent_low,
            ParamField::RentMid => p.rent_mid,
            ParamField::RentHigh => p.rent_high,
            ParamField::AppreciationRate => p.appreciation_rate,
            ParamField::HoldYears => p.hold_years,
            ParamField::RehabCost => p.rehab_cost,
            ParamField::TargetResaleValue => p.target_resale_value,
        }
    }

    /// Whether the field may go below zero. Only a depreciating market does.
    pub fn allows_negative(self) -> bool {
        matches!(self, ParamField::AppreciationRate)
    }

    /// Return a copy of `p` with this field replaced.
    pub fn with(self, p: &InputParameters, value: f64) -> InputParameters {
        let mut out = *p;
        let slot = match self {
            ParamField::PurchasePrice => &mut out.purchase_price,
            ParamField::DownPayment => &mut out.down_payment,
            ParamField::InterestRate => &mut out.interest_rate,
            ParamField::LoanTerm => &mut out.loan_term,
            ParamField::AnnualPropertyTax => &mut out.annual_property_tax,
            ParamField::AnnualInsurance => &mut out.annual_insurance,
            ParamField::MonthlyMaintenance => &mut out.monthly_maintenance,
            ParamField::SquareFootage => &mut out.square_footage,
            ParamField::AvgPricePerSqft => &mut out.avg_price_per_sqft,
            ParamField::AvgRentPerSqft => &mut out.avg_rent_per_sqft,
            ParamField::RentLow => &mut out.rent_low,
            ParamField::RentMid => &mut out.rent_mid,
            ParamField::RentHigh => &mut out.rent_high,
            ParamField::AppreciationRate => &mut out.appreciation_rate,
            ParamField::HoldYears => &mut out.hold_years,
            ParamField::RehabCost => &mut out.rehab_cost,
            ParamField::TargetResaleValue => &mut out.target_resale_value,
        };
        *slot = value;
        out
    }
}

/// Which of the three rent estimates a scenario was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentTier {
    Low,
    Mid,
    High,
}

impl RentTier {
    pub fn display_name(self) -> &'static str {
        match self {
            RentTier::Low => "Low",
            RentTier::Mid => "Mid",
            RentTier::High => "High",
        }
    }
}

/// Coarse strategy classification for a rent scenario.
///
/// Colors are deliberately not part of this type; each renderer picks its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyLabel {
    #[serde(rename = "Good Rental")]
    GoodRental,
    #[serde(rename = "Better as a Flip")]
    BetterAsFlip,
    #[serde(rename = "Bad Buy")]
    BadBuy,
    #[serde(rename = "Depends on Goals")]
    DependsOnGoals,
}

impl StrategyLabel {
    pub fn display_name(self) -> &'static str {
        match self {
            StrategyLabel::GoodRental => "Good Rental",
            StrategyLabel::BetterAsFlip => "Better as a Flip",
            StrategyLabel::BadBuy => "Bad Buy",
            StrategyLabel::DependsOnGoals => "Depends on Goals",
        }
    }
}

/// Mortgage payment and the full monthly cost of owning the property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageFigures {
    pub loan_amount: f64,
    pub monthly_payment: f64,
    pub monthly_property_tax: f64,
    pub monthly_insurance: f64,
    pub monthly_maintenance: f64,
    pub total_monthly_cost: f64,
}

/// Appreciation forecast and flip outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastFigures {
    pub hold_years: f64,
    pub future_value: f64,
    pub appreciation_gain: f64,
    pub flip_profit: f64,
}

/// Per-square-foot comparison values (informational only).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompsFigures {
    pub market_value_by_sqft: f64,
    pub rent_estimate_by_sqft: f64,
    /// `market_value_by_sqft - purchase_price`; positive means bought under comps.
    pub price_difference: f64,
}

/// One evaluated rent level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentScenarioResult {
    pub tier: RentTier,
    pub rent: f64,
    pub monthly_cash_flow: f64,
    pub annual_profit: f64,
    pub roi_percent: f64,
    pub strategy: StrategyLabel,
}

/// Everything computed for one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub inputs: InputParameters,
    pub mortgage: MortgageFigures,
    pub forecast: ForecastFigures,
    pub comps: CompsFigures,
    /// Always low, mid, high in that order.
    pub scenarios: [RentScenarioResult; 3],
}
