//! Browser-free core: tickers, bars, chart derivation and widget state.

pub mod chart;
pub mod errors;
pub mod logging;
pub mod market_data;
pub mod state;
