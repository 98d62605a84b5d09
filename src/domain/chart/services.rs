use super::entities::{ChartData, ChartPoint, ChartSeries};
use crate::domain::market_data::HistoricalBar;

/// Доменный сервис построения данных графика из исторических свечей
pub struct ChartDerivationService;

impl ChartDerivationService {
    /// One point per bar, same order, `y = [open, high, low, close]`.
    ///
    /// Total and pure: the same bars always produce the same series.
    pub fn derive_series(bars: &[HistoricalBar]) -> ChartSeries {
        let data = bars
            .iter()
            .map(|bar| ChartPoint {
                x: bar.date.clone(),
                y: bar.ohlc.as_array(),
            })
            .collect();
        ChartSeries::candlestick(data)
    }

    /// Rebuild the chart from scratch for a new set of bars.
    pub fn refresh(chart: &mut ChartData, bars: &[HistoricalBar]) {
        chart.replace_series(Self::derive_series(bars));
    }
}
