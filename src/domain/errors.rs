use derive_more::Display;

/// Every failure the dashboard can surface. Views catch these at their
/// boundary and turn them into a notice; nothing propagates further.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AppError {
    /// Request could not be sent or the server answered with a non-2xx status.
    #[display(fmt = "Network Error: {}", _0)]
    Network(String),
    /// Response body was not the JSON shape we expect.
    #[display(fmt = "Parse Error: {}", _0)]
    Parse(String),
    /// Payload parsed but violates a domain rule (e.g. empty symbol).
    #[display(fmt = "Validation Error: {}", _0)]
    Validation(String),
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_))
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::Parse(format!("invalid date: {err}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
