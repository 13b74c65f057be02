use thiserror::Error;

/// Failures raised by the calculation core.
///
/// These never carry NaN/Infinity: every singular case is detected before the
/// division happens and surfaced here instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Degenerate formula: {0}")]
    DegenerateFormula(String),
}

impl CalcError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<CalcError> for AppError {
    fn from(err: CalcError) -> Self {
        AppError::new(3, format!("Evaluation failed: {err}"))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_errors_map_to_exit_code_3() {
        let err: AppError = CalcError::DegenerateFormula("zero cash invested".to_string()).into();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("zero cash invested"));
    }

    #[test]
    fn invalid_input_names_the_field() {
        let err = CalcError::invalid("loan_term", "must be > 0");
        assert_eq!(err.to_string(), "Invalid input for loan_term: must be > 0");
    }
}
