use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::PredictionError,
    market_data::{HistoricalBar, Ohlc, Price, PredictionResponse, PredictionRow},
};

/// Request body: `{"ticker": "..."}`
#[derive(Debug, Serialize)]
pub struct PredictionRequestDto<'a> {
    pub ticker: &'a str,
}

/// One historical row as the service emits it.
///
/// The service dumps whole dataframe rows, so Volume, Adj Close and the
/// indicator columns come along; only the OHLC fields and the date are read.
#[derive(Debug, Deserialize)]
pub struct HistoricalBarDto {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Close")]
    pub close: f64,
}

impl HistoricalBarDto {
    pub fn to_domain_bar(&self) -> HistoricalBar {
        HistoricalBar::new(
            self.date.clone(),
            Ohlc::new(
                Price::new(self.open),
                Price::new(self.high),
                Price::new(self.low),
                Price::new(self.close),
            ),
        )
    }
}

/// Success body: `{"received_data": [...], "predicted_data": [[o, h, l, c, ...], ...]}`
#[derive(Debug, Deserialize)]
pub struct PredictionResponseDto {
    pub received_data: Vec<HistoricalBarDto>,
    pub predicted_data: Vec<Vec<f64>>,
}

impl PredictionResponseDto {
    /// Convert into the domain response; rows carry `[o, h, l, c, ...indicators]`
    /// and any row shorter than four numbers makes the whole payload malformed.
    pub fn into_domain(self) -> Result<PredictionResponse, PredictionError> {
        let bars = self.received_data.iter().map(HistoricalBarDto::to_domain_bar).collect();

        let predictions = self
            .predicted_data
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                PredictionRow::try_from(row).map_err(|arity| {
                    PredictionError::request_failed(format!(
                        "predicted_data[{}] has {} values, expected at least 4",
                        index, arity
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PredictionResponse::new(bars, predictions))
    }
}

/// Decode a success body.
pub fn parse_prediction_body(body: &str) -> Result<PredictionResponse, PredictionError> {
    let dto: PredictionResponseDto = serde_json::from_str(body)
        .map_err(|e| PredictionError::request_failed(format!("Malformed response: {}", e)))?;
    dto.into_domain()
}

/// Map an HTTP status onto the error taxonomy; every 2xx passes.
pub fn classify_status(status: u16) -> Result<(), PredictionError> {
    match status {
        200..=299 => Ok(()),
        404 => Err(PredictionError::NotFound),
        other => Err(PredictionError::request_failed(format!("HTTP error: {}", other))),
    }
}
