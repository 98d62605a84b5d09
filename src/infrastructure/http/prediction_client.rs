use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;

use super::dto::{PredictionRequestDto, classify_status, parse_prediction_body};
use crate::domain::{
    errors::{PredictionError, PredictionResult},
    logging::{LogComponent, get_logger},
    market_data::{PredictionRepository, PredictionResponse, Ticker},
};

/// Where the prediction service listens unless configured otherwise
pub const DEFAULT_PREDICT_ENDPOINT: &str = "http://127.0.0.1:5000/api/predict";

/// HTTP client for the prediction service
#[derive(Clone, Debug)]
pub struct PredictionHttpClient {
    endpoint: String,
}

impl Default for PredictionHttpClient {
    fn default() -> Self {
        Self::new(DEFAULT_PREDICT_ENDPOINT)
    }
}

impl PredictionHttpClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `POST {endpoint}` with `{"ticker": ...}`; no timeout, no retry.
    pub async fn post_ticker(&self, ticker: &Ticker) -> PredictionResult<PredictionResponse> {
        get_logger().debug(
            LogComponent::Infrastructure("PredictionHttpClient"),
            &format!("🌐 POST {} ticker='{}'", self.endpoint, ticker.value()),
        );

        let request = Request::post(&self.endpoint)
            .json(&PredictionRequestDto { ticker: ticker.value() })
            .map_err(|e| PredictionError::request_failed(format!("Failed to encode request: {:?}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| PredictionError::request_failed(format!("Failed to send request: {:?}", e)))?;

        classify_status(response.status())?;

        let body = response
            .text()
            .await
            .map_err(|e| PredictionError::request_failed(format!("Failed to read response: {:?}", e)))?;

        get_logger().debug(
            LogComponent::Infrastructure("PredictionHttpClient"),
            &format!("✅ {} answered {} ({} bytes)", self.endpoint, response.status(), body.len()),
        );

        parse_prediction_body(&body)
    }
}

impl PredictionRepository for PredictionHttpClient {
    fn request_prediction<'a>(
        &'a self,
        ticker: &'a Ticker,
    ) -> LocalBoxFuture<'a, Result<PredictionResponse, PredictionError>> {
        self.post_ticker(ticker).boxed_local()
    }
}
