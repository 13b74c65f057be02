//! Input/output helpers.
//!
//! - JSON parameter files (`input`)
//! - report exports: CSV, XLSX, JSON (`export`)

pub mod export;
pub mod input;

pub use export::*;
pub use input::*;
