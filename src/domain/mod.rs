//! Domain types used throughout the evaluation.
//!
//! This module defines:
//!
//! - the flat input structure (`InputParameters`) and its addressable fields
//! - per-component outputs (`MortgageFigures`, `ForecastFigures`, `CompsFigures`)
//! - rent scenario results and the aggregate `EvaluationReport`

pub mod types;

pub use types::*;
