use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{Prediction, SubmissionText},
    error::PredictionError,
    protocol::{error_message_from_body, PredictRequest, PredictResponse},
};
use tracing::debug;

pub const DEFAULT_PREDICT_URL: &str = "http://localhost:5000/predict";

/// One prediction attempt against the sentiment service.
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait SentimentPredictor: Send + Sync {
    fn endpoint(&self) -> &str;
    async fn predict(&self, text: &SubmissionText) -> Result<Prediction, PredictionError>;
}

/// HTTP client for the `/predict` endpoint.
///
/// The underlying reqwest client is built without a request timeout, so an
/// attempt lasts until the service answers or the transport fails.
pub struct PredictionClient {
    http: Client,
    endpoint: String,
}

impl PredictionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), endpoint)
    }

    pub fn with_http_client(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    fn unreachable(&self, err: reqwest::Error) -> PredictionError {
        PredictionError::NetworkUnreachable {
            endpoint: self.endpoint.clone(),
            reason: err.to_string(),
        }
    }
}

impl Default for PredictionClient {
    fn default() -> Self {
        Self::new(DEFAULT_PREDICT_URL)
    }
}

#[async_trait]
impl SentimentPredictor for PredictionClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn predict(&self, text: &SubmissionText) -> Result<Prediction, PredictionError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&PredictRequest::from(text))
            .send()
            .await
            .map_err(|err| self.unreachable(err))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|err| self.unreachable(err))?;
        debug!(status = status.as_u16(), bytes = body.len(), "prediction response received");

        classify_response(status.as_u16(), &body)
    }
}

/// Maps a completed HTTP exchange onto a prediction or a typed failure.
pub fn classify_response(status: u16, body: &[u8]) -> Result<Prediction, PredictionError> {
    if !(200..300).contains(&status) {
        return Err(PredictionError::server(status, error_message_from_body(body)));
    }

    let parsed: PredictResponse =
        serde_json::from_slice(body).map_err(|_| PredictionError::MalformedResponse)?;
    match parsed.prediction {
        Some(label) if !label.is_empty() => Ok(Prediction::new(label)),
        _ => Err(PredictionError::MalformedResponse),
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
