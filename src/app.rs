//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - resolves the parameter set
//! - runs the evaluation
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;
use tracing::debug;

use crate::cli::{AnalyzeArgs, Command, PropertyArgs};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `rea` binary.
pub fn run() -> Result<(), AppError> {
    // Must happen before parsing so clap's `env = "REA_*"` sees the values.
    dotenvy::dotenv().ok();

    // We want `rea` and `rea --rent-low 1500` to behave like `rea tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    if !matches!(cli.command, Command::Tui(_)) {
        crate::logging::init(cli.verbose);
    }

    match cli.command {
        Command::Analyze(args) => handle_analyze(args),
        Command::Table(args) => handle_table(args),
        Command::Tui(args) => handle_tui(args),
    }
}

fn handle_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let params = args.property.resolve()?;
    debug!(?params, "resolved parameters");
    let run = pipeline::run_evaluation(&params)?;

    println!("{}", crate::report::format_report(&run.report));
    println!("{}", crate::report::format_strategy_table(&run.table));

    if !args.no_plot {
        println!("{}", crate::plot::render_cash_flow_bars(&run.report.scenarios, args.width));
    }

    if let Some(path) = &args.export_csv {
        crate::io::write_scenario_csv(path, &run.table)?;
    }
    if let Some(path) = &args.export_xlsx {
        crate::io::write_scenario_xlsx(path, &run.table)?;
    }
    if let Some(path) = &args.export_json {
        crate::io::write_report_json(path, &run.report)?;
    }

    Ok(())
}

fn handle_table(args: PropertyArgs) -> Result<(), AppError> {
    let params = args.resolve()?;
    let run = pipeline::run_evaluation(&params)?;
    print!("{}", crate::report::format_strategy_table(&run.table));
    Ok(())
}

fn handle_tui(args: PropertyArgs) -> Result<(), AppError> {
    let params = args.resolve()?;
    crate::tui::run(params)
}

/// Rewrite argv so `rea` defaults to `rea tui`.
///
/// Rules:
/// - `rea`                      -> `rea tui`
/// - `rea --rent-low 1500 ...`  -> `rea tui --rent-low 1500 ...`
/// - `rea --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "analyze" | "table" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
