use crate::domain::errors::PredictionError;
use crate::domain::market_data::{PredictionResponse, Ticker};
use futures::future::LocalBoxFuture;

/// Source of predictions for a ticker.
///
/// Futures are local: everything runs on the browser event loop.
pub trait PredictionRepository {
    fn request_prediction<'a>(
        &'a self,
        ticker: &'a Ticker,
    ) -> LocalBoxFuture<'a, Result<PredictionResponse, PredictionError>>;
}

impl<R: PredictionRepository + ?Sized> PredictionRepository for std::rc::Rc<R> {
    fn request_prediction<'a>(
        &'a self,
        ticker: &'a Ticker,
    ) -> LocalBoxFuture<'a, Result<PredictionResponse, PredictionError>> {
        (**self).request_prediction(ticker)
    }
}
