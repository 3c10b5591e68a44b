use thiserror::Error;

/// Prefix shown in front of every request failure.
pub const FETCH_FAILED_PREFIX: &str = "Ошибка при получении данных: ";

/// Reasons a submission ends without a rendered table.
///
/// None of these is fatal: the form is interactive again after each one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Пожалуйста, введите хотя бы один город")]
    EmptyInput,

    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// Transport failure or a body that is not a valid report.
    #[error("{message}")]
    Network { message: String },
}

impl SubmitError {
    /// Text for the error banner.
    pub fn banner_text(&self) -> String {
        match self {
            SubmitError::EmptyInput => self.to_string(),
            SubmitError::Http { .. } | SubmitError::Network { .. } => {
                format!("{FETCH_FAILED_PREFIX}{self}")
            }
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Network { message: err.to_string() }
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        SubmitError::Network { message: err.to_string() }
    }
}
