use crate::domain::{
    errors::{PredictionError, PredictionResult},
    logging::LogComponent,
    market_data::{PredictionRepository, PredictionResponse, Ticker},
};

/// Use Case: one prediction round-trip for a ticker.
///
/// No validation, no retry: the ticker goes out exactly as typed and the
/// first answer is the answer.
pub struct RequestPredictionUseCase<R: PredictionRepository> {
    repository: R,
}

impl<R: PredictionRepository> RequestPredictionUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub async fn execute(&self, ticker: &Ticker) -> PredictionResult<PredictionResponse> {
        crate::log_info!(
            LogComponent::Application("RequestPrediction"),
            "📡 Requesting prediction for '{}'",
            ticker.value()
        );

        let result = self.repository.request_prediction(ticker).await;

        match &result {
            Ok(response) => {
                crate::log_info!(
                    LogComponent::Application("RequestPrediction"),
                    "✅ '{}': {} bars, {} predicted candles",
                    ticker.value(),
                    response.bars.len(),
                    response.predictions.len()
                );
            }
            Err(PredictionError::NotFound) => {
                crate::log_warn!(
                    LogComponent::Application("RequestPrediction"),
                    "Ticker '{}' not found",
                    ticker.value()
                );
            }
            Err(err) => {
                crate::log_error!(LogComponent::Application("RequestPrediction"), "❌ '{}': {}", ticker.value(), err);
            }
        }

        result
    }
}
