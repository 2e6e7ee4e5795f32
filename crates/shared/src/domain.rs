use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Shortest trimmed input accepted for analysis.
pub const MIN_TEXT_CHARS: usize = 5;
/// Soft cap enforced by the text field; the wire protocol does not check it.
pub const MAX_TEXT_CHARS: usize = 1000;
/// Length of the input echo shown next to a prediction.
pub const ECHO_CHARS: usize = 100;
/// Counter switches to its warning style above this many characters.
pub const COUNTER_WARNING_CHARS: usize = MAX_TEXT_CHARS * 9 / 10;

const ECHO_ELLIPSIS: &str = "...";

/// Trimmed user text that passed local validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionText(String);

impl SubmissionText {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        if trimmed.chars().count() < MIN_TEXT_CHARS {
            return Err(ValidationError::TooShort);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Echo shown with a result: the first [`ECHO_CHARS`] characters, with an
    /// ellipsis appended when anything was cut.
    pub fn echo(&self) -> String {
        truncate_echo(&self.0)
    }
}

pub fn truncate_echo(text: &str) -> String {
    match text.char_indices().nth(ECHO_CHARS) {
        Some((cut, _)) => format!("{}{ECHO_ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
}

/// Label returned by the prediction endpoint, kept verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub label: String,
}

impl Prediction {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Anything other than a case-insensitive `positive` counts as negative.
    pub fn sentiment(&self) -> Sentiment {
        if self.label.to_lowercase() == "positive" {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }
}
