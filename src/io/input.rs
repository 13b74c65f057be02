//! Load a base parameter set from a JSON file.
//!
//! Keys are the snake_case field names of `InputParameters`; any key left out
//! keeps its default. Unknown keys are rejected so typos don't go unnoticed.

use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::domain::InputParameters;
use crate::error::AppError;

/// Read an input JSON file.
pub fn read_input_json(path: &Path) -> Result<InputParameters, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open input JSON '{}': {e}", path.display())))?;
    let params = parse_input_json(file)
        .map_err(|e| AppError::new(2, format!("Invalid input JSON '{}': {e}", path.display())))?;
    debug!(path = %path.display(), "loaded input parameters");
    Ok(params)
}

fn parse_input_json<R: std::io::Read>(reader: R) -> Result<InputParameters, serde_json::Error> {
    serde_json::from_reader(reader)
}
