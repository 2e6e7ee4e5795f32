//! UI/backend events and error modeling for the analysis form.

use shared::{domain::Prediction, error::PredictionError};

use crate::controller::orchestration::DispatchError;
use crate::controller::reducer::AttemptId;

pub enum UiEvent {
    Info(String),
    Error(UiError),
    PredictionFinished {
        attempt: AttemptId,
        outcome: Result<Prediction, PredictionError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Runtime,
    Transport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    BackendStopped,
    Submit,
}

/// Failure of the bridge itself, as opposed to a failed prediction attempt.
#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn startup(message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Runtime,
            context: UiErrorContext::BackendStartup,
            message: message.into(),
        }
    }

    pub fn worker_stopped() -> Self {
        Self {
            category: UiErrorCategory::Runtime,
            context: UiErrorContext::BackendStopped,
            message: "backend worker stopped before answering".to_string(),
        }
    }

    /// An attempt still in flight will never complete once the worker is gone.
    pub fn ends_in_flight_attempt(&self) -> bool {
        matches!(
            self.context,
            UiErrorContext::BackendStartup | UiErrorContext::BackendStopped
        )
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<DispatchError> for UiError {
    fn from(err: DispatchError) -> Self {
        Self {
            category: UiErrorCategory::Transport,
            context: UiErrorContext::Submit,
            message: err.to_string(),
        }
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Runtime => "Backend",
        UiErrorCategory::Transport => "Transport",
    }
}
