pub use super::value_objects::{Ohlc, Price};
use serde::{Deserialize, Serialize};

/// Domain entity - one observed trading interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalBar {
    pub date: String,
    pub ohlc: Ohlc,
}

impl HistoricalBar {
    pub fn new(date: impl Into<String>, ohlc: Ohlc) -> Self {
        Self { date: date.into(), ohlc }
    }
}

/// Domain entity - one forecast candle, positional `[open, high, low, close]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionRow(pub [f64; 4]);

impl PredictionRow {
    pub fn open(&self) -> f64 {
        self.0[0]
    }

    pub fn high(&self) -> f64 {
        self.0[1]
    }

    pub fn low(&self) -> f64 {
        self.0[2]
    }

    pub fn close(&self) -> f64 {
        self.0[3]
    }

    /// Fields in the order the summary list shows them: Low, Open, Close, High.
    pub fn display_fields(&self) -> [(&'static str, f64); 4] {
        [
            ("Low", self.low()),
            ("Open", self.open()),
            ("Close", self.close()),
            ("High", self.high()),
        ]
    }
}

impl TryFrom<Vec<f64>> for PredictionRow {
    type Error = usize;

    /// Reads positions 0..4; the model's trailing indicator columns are
    /// ignored. Fails with the actual arity when fewer than four numbers came.
    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        match values.as_slice() {
            [open, high, low, close, ..] => Ok(PredictionRow([*open, *high, *low, *close])),
            short => Err(short.len()),
        }
    }
}

/// Decoded prediction service answer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredictionResponse {
    pub bars: Vec<HistoricalBar>,
    pub predictions: Vec<PredictionRow>,
}

impl PredictionResponse {
    pub fn new(bars: Vec<HistoricalBar>, predictions: Vec<PredictionRow>) -> Self {
        Self { bars, predictions }
    }

    /// The candle the widget summarizes.
    pub fn next_candle(&self) -> Option<&PredictionRow> {
        self.predictions.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_fields_follow_low_open_close_high() {
        let row = PredictionRow([10.5, 12.5, 9.5, 11.5]);
        assert_eq!(
            row.display_fields(),
            [("Low", 9.5), ("Open", 10.5), ("Close", 11.5), ("High", 12.5)]
        );
    }

    #[test]
    fn rows_need_at_least_four_values() {
        assert_eq!(PredictionRow::try_from(vec![1.0, 2.0, 3.0]), Err(3));
        assert_eq!(PredictionRow::try_from(Vec::new()), Err(0));
        assert_eq!(
            PredictionRow::try_from(vec![1.0, 2.0, 3.0, 4.0]),
            Ok(PredictionRow([1.0, 2.0, 3.0, 4.0]))
        );
    }

    #[test]
    fn trailing_indicator_columns_are_dropped() {
        let row = PredictionRow::try_from(vec![10.5, 12.5, 9.5, 11.5, 10.9, 10.7, 11.0, 10.8, 55.2]);
        assert_eq!(row, Ok(PredictionRow([10.5, 12.5, 9.5, 11.5])));
    }
}
