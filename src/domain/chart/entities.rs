use super::value_objects::ChartOptions;
use crate::domain::market_data::Ohlc;
use serde::Serialize;

/// Name of the one series the chart ever shows
pub const CANDLESTICK_SERIES_NAME: &str = "Candlestick Data";

/// One candle as the chart consumes it: `x` label and `[open, high, low, close]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: String,
    pub y: [f64; 4],
}

impl ChartPoint {
    pub fn ohlc(&self) -> Ohlc {
        Ohlc::from_array(self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub data: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn candlestick(data: Vec<ChartPoint>) -> Self {
        Self {
            name: CANDLESTICK_SERIES_NAME.to_string(),
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Chart input: series plus static options
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub series: Vec<ChartSeries>,
    pub options: ChartOptions,
}

impl Default for ChartData {
    fn default() -> Self {
        Self::new(ChartOptions::default())
    }
}

impl ChartData {
    /// Empty candlestick series with the given options
    pub fn new(options: ChartOptions) -> Self {
        Self {
            series: vec![ChartSeries::candlestick(Vec::new())],
            options,
        }
    }

    /// Replace the series wholesale, keeping the options.
    pub fn replace_series(&mut self, series: ChartSeries) {
        self.series = vec![series];
    }

    pub fn points(&self) -> &[ChartPoint] {
        self.series.first().map(|s| s.data.as_slice()).unwrap_or(&[])
    }
}
