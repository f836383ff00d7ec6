//! HtmaErrorCode trait and the stable code strings.

/// Trait for mapping HTMA errors onto the engine's error taxonomy.
/// Every error enum implements this so collaborators (scripts, CLIs)
/// can branch on a stable code instead of parsing messages.
pub trait HtmaErrorCode {
    /// Returns the taxonomy code (e.g., "INVALID_RANGE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted report string: `[ERROR_CODE] message`.
    fn report_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_RANGE: &str = "INVALID_RANGE";
pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const LENGTH_MISMATCH: &str = "LENGTH_MISMATCH";
pub const EMPTY_SAMPLE: &str = "EMPTY_SAMPLE";
pub const INVALID_PAYOFF: &str = "INVALID_PAYOFF";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
