use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Value Object - price of one OHLC field
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Deref, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - open/high/low/close of one interval
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct Ohlc {
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
}

impl Ohlc {
    pub fn from_array([open, high, low, close]: [f64; 4]) -> Self {
        Self::new(Price::new(open), Price::new(high), Price::new(low), Price::new(close))
    }

    /// Positional `[open, high, low, close]`.
    pub fn as_array(&self) -> [f64; 4] {
        [self.open.value(), self.high.value(), self.low.value(), self.close.value()]
    }

    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    /// Lowest and highest price touched by the interval.
    pub fn range(&self) -> (f64, f64) {
        let values = self.as_array();
        let low = values.iter().copied().fold(f64::INFINITY, f64::min);
        let high = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (low, high)
    }
}

/// Value Object - ticker exactly as typed.
///
/// No trimming, case folding or emptiness check: whatever the user typed is
/// what the service receives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deref, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Ticker {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
