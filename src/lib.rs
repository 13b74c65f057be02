//! `real-estate-analyzer` library crate.
//!
//! The binary (`rea`) is a thin wrapper around this library so that:
//!
//! - the calculation core is testable without spawning processes
//! - the same evaluation feeds every front-end (terminal report, TUI, exports)

pub mod app;
pub mod calc;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod plot;
pub mod report;
pub mod tui;
