//! Transport to the prediction service.

pub mod dto;
pub mod prediction_client;

pub use dto::{classify_status, parse_prediction_body};
pub use prediction_client::{DEFAULT_PREDICT_ENDPOINT, PredictionHttpClient};
