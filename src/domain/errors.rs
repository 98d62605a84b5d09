/// User-facing message for a ticker the service does not know.
pub const TICKER_NOT_FOUND_MESSAGE: &str = "Ticker not found. Please check the ticker symbol.";

/// User-facing message for every other request failure.
pub const REQUEST_FAILED_MESSAGE: &str = "Error fetching predicted data. Please try again.";

/// Failure of a prediction round-trip.
///
/// Only two classes exist: the service answered 404, or anything else went
/// wrong (transport, other status, payload shape). The detail carried by
/// `RequestFailed` goes to the log, never to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictionError {
    NotFound,
    RequestFailed(String),
}

impl PredictionError {
    pub fn request_failed(detail: impl Into<String>) -> Self {
        PredictionError::RequestFailed(detail.into())
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            PredictionError::NotFound => TICKER_NOT_FOUND_MESSAGE,
            PredictionError::RequestFailed(_) => REQUEST_FAILED_MESSAGE,
        }
    }
}

impl std::fmt::Display for PredictionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictionError::NotFound => write!(f, "Prediction service returned 404"),
            PredictionError::RequestFailed(detail) => write!(f, "Prediction request failed: {}", detail),
        }
    }
}

impl std::error::Error for PredictionError {}

/// Errors outside the prediction round-trip: mounting and drawing.
#[derive(Debug, Clone)]
pub enum AppError {
    Prediction(PredictionError),
    RenderingError(String),
    MountError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Prediction(err) => write!(f, "{}", err),
            AppError::RenderingError(msg) => write!(f, "Rendering Error: {}", msg),
            AppError::MountError(msg) => write!(f, "Mount Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Prediction(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PredictionError> for AppError {
    fn from(err: PredictionError) -> Self {
        AppError::Prediction(err)
    }
}

pub type PredictionResult<T> = Result<T, PredictionError>;
pub type RenderingResult<T> = Result<T, AppError>;
