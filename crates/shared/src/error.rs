use thiserror::Error;

use crate::domain::MIN_TEXT_CHARS;

const GENERIC_FAILURE: &str = "Failed to analyze sentiment. Please try again.";

/// Rejections raised before any request leaves the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("input is empty")]
    Empty,
    #[error("input is too short")]
    TooShort,
}

impl ValidationError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Empty => "Please enter some text to analyze.".to_string(),
            Self::TooShort => format!(
                "Please enter at least {MIN_TEXT_CHARS} characters for meaningful analysis."
            ),
        }
    }
}

/// Outcome of a prediction attempt that reached the network layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    #[error("prediction service unreachable at {endpoint}: {reason}")]
    NetworkUnreachable { endpoint: String, reason: String },
    #[error("prediction service returned {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("prediction service returned a body without a prediction")]
    MalformedResponse,
}

impl PredictionError {
    pub fn server(status: u16, message: Option<String>) -> Self {
        Self::ServerError {
            status,
            message: message.unwrap_or_else(|| format!("Server error ({status})")),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::NetworkUnreachable { endpoint, .. } => format!(
                "Unable to connect to the sentiment analysis service. Please ensure it is running and reachable at {endpoint}."
            ),
            Self::ServerError { message, .. } => message.clone(),
            Self::MalformedResponse => "Invalid response from server".to_string(),
        }
    }
}

/// Shown when an attempt never reached the client, e.g. the worker is gone.
pub fn generic_failure_message() -> &'static str {
    GENERIC_FAILURE
}
