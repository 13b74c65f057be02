//! Command-line parsing for the real estate analyzer.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the calculation code. Every property field can come from a
//! flag, a `REA_*` environment variable (a `.env` file is loaded first), or a
//! JSON file passed with `--input`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::InputParameters;
use crate::error::AppError;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "rea", version, about = "Real Estate Investment Analyzer")]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate a property, print the full report and chart, and optionally export.
    Analyze(AnalyzeArgs),
    /// Print the rental strategy table only (useful for scripting).
    Table(PropertyArgs),
    /// Launch the interactive TUI.
    ///
    /// Starts from the same parameters as `rea analyze` and recomputes the
    /// report on every edit.
    Tui(PropertyArgs),
}

/// Options for `rea analyze`.
#[derive(Debug, Args, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub property: PropertyArgs,

    /// Skip the cash flow bar chart.
    #[arg(long)]
    pub no_plot: bool,

    /// Chart width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Export the rental strategy table to CSV.
    #[arg(long, value_name = "CSV")]
    pub export_csv: Option<PathBuf>,

    /// Export the rental strategy table to an XLSX workbook.
    #[arg(long, value_name = "XLSX")]
    pub export_xlsx: Option<PathBuf>,

    /// Export the full evaluation report to JSON.
    #[arg(long, value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

/// Property, loan and market parameters.
///
/// Unset fields keep the value from `--input` (or the built-in defaults).
#[derive(Debug, Args, Clone, Default)]
pub struct PropertyArgs {
    /// JSON file with a base parameter set (snake_case keys).
    #[arg(long, value_name = "JSON", env = "REA_INPUT")]
    pub input: Option<PathBuf>,

    /// Purchase price ($). [default: 200000]
    #[arg(long, env = "REA_PURCHASE_PRICE")]
    pub purchase_price: Option<f64>,

    /// Down payment ($). [default: 40000]
    #[arg(long, env = "REA_DOWN_PAYMENT")]
    pub down_payment: Option<f64>,

    /// Annual interest rate (%). [default: 6.5]
    #[arg(long, env = "REA_INTEREST_RATE")]
    pub interest_rate: Option<f64>,

    /// Loan term (years). [default: 30]
    #[arg(long, env = "REA_LOAN_TERM")]
    pub loan_term: Option<f64>,

    /// Annual property tax ($). [default: 3600]
    #[arg(long, env = "REA_ANNUAL_PROPERTY_TAX")]
    pub annual_property_tax: Option<f64>,

    /// Annual insurance ($). [default: 1200]
    #[arg(long, env = "REA_ANNUAL_INSURANCE")]
    pub annual_insurance: Option<f64>,

    /// Monthly maintenance ($). [default: 150]
    #[arg(long, env = "REA_MONTHLY_MAINTENANCE")]
    pub monthly_maintenance: Option<f64>,

    /// Property square footage. [default: 1500]
    #[arg(long, env = "REA_SQUARE_FOOTAGE")]
    pub square_footage: Option<f64>,

    /// Average comps price per sq ft ($). [default: 160]
    #[arg(long, env = "REA_AVG_PRICE_PER_SQFT")]
    pub avg_price_per_sqft: Option<f64>,

    /// Average comps rent per sq ft ($). [default: 1.2]
    #[arg(long, env = "REA_AVG_RENT_PER_SQFT")]
    pub avg_rent_per_sqft: Option<f64>,

    /// Low monthly rent estimate ($). [default: 1600]
    #[arg(long, env = "REA_RENT_LOW")]
    pub rent_low: Option<f64>,

    /// Mid monthly rent estimate ($). [default: 1800]
    #[arg(long, env = "REA_RENT_MID")]
    pub rent_mid: Option<f64>,

    /// High monthly rent estimate ($). [default: 2000]
    #[arg(long, env = "REA_RENT_HIGH")]
    pub rent_high: Option<f64>,

    /// Annual appreciation rate (%); negative for a depreciating market. [default: 3.0]
    #[arg(long, env = "REA_APPRECIATION_RATE", allow_negative_numbers = true)]
    pub appreciation_rate: Option<f64>,

    /// Hold period (years). [default: 5]
    #[arg(long, env = "REA_HOLD_YEARS")]
    pub hold_years: Option<f64>,

    /// Rehab cost for the flip scenario ($). [default: 30000]
    #[arg(long, env = "REA_REHAB_COST")]
    pub rehab_cost: Option<f64>,

    /// Target resale value after rehab ($). [default: 275000]
    #[arg(long, env = "REA_TARGET_RESALE_VALUE")]
    pub target_resale_value: Option<f64>,
}

impl PropertyArgs {
    /// Resolve the final parameter set: defaults < `--input` file < flags/env.
    pub fn resolve(&self) -> Result<InputParameters, AppError> {
        let base = match &self.input {
            Some(path) => crate::io::read_input_json(path)?,
            None => InputParameters::default(),
        };
        Ok(self.overlay(base))
    }

    /// Replace every field of `base` that was set on the command line.
    pub fn overlay(&self, base: InputParameters) -> InputParameters {
        InputParameters {
            purchase_price: self.purchase_price.unwrap_or(base.purchase_price),
            down_payment: self.down_payment.unwrap_or(base.down_payment),
            interest_rate: self.interest_rate.unwrap_or(base.interest_rate),
            loan_term: self.loan_term.unwrap_or(base.loan_term),
            annual_property_tax: self.annual_property_tax.unwrap_or(base.annual_property_tax),
            annual_insurance: self.annual_insurance.unwrap_or(base.annual_insurance),
            monthly_maintenance: self.monthly_maintenance.unwrap_or(base.monthly_maintenance),
            square_footage: self.square_footage.unwrap_or(base.square_footage),
            avg_price_per_sqft: self.avg_price_per_sqft.unwrap_or(base.avg_price_per_sqft),
            avg_rent_per_sqft: self.avg_rent_per_sqft.unwrap_or(base.avg_rent_per_sqft),
            rent_low: self.rent_low.unwrap_or(base.rent_low),
            rent_mid: self.rent_mid.unwrap_or(base.rent_mid),
            rent_high: self.rent_high.unwrap_or(base.rent_high),
            appreciation_rate: self.appreciation_rate.unwrap_or(base.appreciation_rate),
            hold_years: self.hold_years.unwrap_or(base.hold_years),
            rehab_cost: self.rehab_cost.unwrap_or(base.rehab_cost),
            target_resale_value: self.target_resale_value.unwrap_or(base.target_resale_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, FromArgMatches};

    /// Parse argv with every `REA_*` env fallback detached, so variables in the
    /// developer's shell or `.env` can't leak into the assertions.
    fn parse_isolated<const N: usize>(argv: [&str; N]) -> Result<Cli, clap::Error> {
        let mut cmd = Cli::command();
        for name in ["analyze", "table", "tui"] {
            cmd = cmd.mut_subcommand(name, |sub| sub.mut_args(|arg| arg.env(None::<&'static str>)));
        }
        let matches = cmd.try_get_matches_from(argv)?;
        Cli::from_arg_matches(&matches)
    }

    #[test]
    fn isolated_parse_ignores_environment() {
        let cmd = Cli::command();
        let table = cmd
            .get_subcommands()
            .find(|s| s.get_name() == "table")
            .map(|s| s.get_arguments().filter(|a| a.get_env().is_some()).count());
        assert!(table.unwrap_or(0) > 0);

        let cli = parse_isolated(["rea", "table"]).unwrap();
        let Command::Table(args) = cli.command else {
            panic!("expected table");
        };
        assert_eq!(args.overlay(InputParameters::default()), InputParameters::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = parse_isolated([
            "rea",
            "analyze",
            "--purchase-price",
            "250000",
            "--rent-mid",
            "2100",
            "--no-plot",
        ])
        .unwrap();

        let Command::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert!(args.no_plot);
        let p = args.property.overlay(InputParameters::default());
        assert_eq!(p.purchase_price, 250_000.0);
        assert_eq!(p.rent_mid, 2_100.0);
        assert_eq!(p.rent_low, 1_600.0);
    }

    #[test]
    fn negative_appreciation_flag_parses() {
        let cli = parse_isolated(["rea", "table", "--appreciation-rate", "-2"]).unwrap();
        let Command::Table(args) = cli.command else {
            panic!("expected table");
        };
        assert_eq!(args.appreciation_rate, Some(-2.0));
    }

    #[test]
    fn unset_args_keep_base() {
        let base = InputParameters {
            hold_years: 9.0,
            ..InputParameters::default()
        };
        assert_eq!(PropertyArgs::default().overlay(base), base);
    }

    #[test]
    fn rejects_non_numeric_values() {
        let res = parse_isolated(["rea", "table", "--interest-rate", "six"]);
        assert!(res.is_err());
    }
}
