pub mod request_prediction;

pub use request_prediction::*;
