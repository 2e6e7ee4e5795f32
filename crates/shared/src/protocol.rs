use serde::{Deserialize, Serialize};

use crate::domain::SubmissionText;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

impl From<&SubmissionText> for PredictRequest {
    fn from(value: &SubmissionText) -> Self {
        Self {
            text: value.as_str().to_string(),
        }
    }
}

/// Success body. The service also echoes `input`, which the client ignores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Pulls a usable message out of an error response body, if it carries one.
pub fn error_message_from_body(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("error")
        .and_then(serde_json::Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_trimmed_text_field_only() {
        let text = SubmissionText::parse("  loved it  ").expect("valid");
        let json = serde_json::to_string(&PredictRequest::from(&text)).expect("serialize");
        assert_eq!(json, r#"{"text":"loved it"}"#);
    }

    #[test]
    fn response_tolerates_extra_and_missing_fields() {
        let full: PredictResponse =
            serde_json::from_str(r#"{"input":"x","prediction":"Positive"}"#).expect("parse");
        assert_eq!(full.prediction.as_deref(), Some("Positive"));

        let empty: PredictResponse = serde_json::from_str("{}").expect("parse");
        assert!(empty.prediction.is_none());
    }

    #[test]
    fn extracts_error_message_only_when_it_is_a_non_empty_string() {
        assert_eq!(
            error_message_from_body(br#"{"error":"bad request"}"#).as_deref(),
            Some("bad request")
        );
        assert_eq!(error_message_from_body(br#"{"error":""}"#), None);
        assert_eq!(error_message_from_body(br#"{"error":42}"#), None);
        assert_eq!(error_message_from_body(b"<html>oops</html>"), None);
    }
}
