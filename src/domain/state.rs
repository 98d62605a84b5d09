use crate::domain::{
    chart::{ChartData, ChartDerivationService, ChartOptions},
    errors::PredictionError,
    logging::{LogComponent, LogLevel, get_logger},
    market_data::{HistoricalBar, PredictionResponse, PredictionRow, Ticker},
};
use derive_more::Display;
use strum::{AsRefStr, EnumString};

/// Sequence number handed out per submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Display)]
#[display(fmt = "#{}", _0)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// What to do with a response that resolves after a newer submission was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ResponsePolicy {
    /// Responses to anything but the newest submission are dropped
    #[default]
    LatestRequestWins,
    /// Every response is applied as it resolves; a slow stale response can
    /// overwrite a fresh one
    LastResolvedWins,
}

/// Outcome of feeding a response into the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Discarded,
}

/// Which panels the widget shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelVisibility {
    pub chart: bool,
    pub prediction: bool,
    pub error: bool,
}

/// All mutable state of one widget instance.
///
/// Bars, predictions and chart are replaced together on success and cleared
/// together on failure; the error is set only on failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastState {
    ticker: Ticker,
    bars: Option<Vec<HistoricalBar>>,
    predictions: Option<Vec<PredictionRow>>,
    chart: ChartData,
    error: Option<String>,
    last_issued: RequestTicket,
    policy: ResponsePolicy,
}

impl Default for ForecastState {
    fn default() -> Self {
        Self::new(ResponsePolicy::default(), ChartOptions::default())
    }
}

impl ForecastState {
    pub fn new(policy: ResponsePolicy, options: ChartOptions) -> Self {
        Self {
            ticker: Ticker::default(),
            bars: None,
            predictions: None,
            chart: ChartData::new(options),
            error: None,
            last_issued: RequestTicket::default(),
            policy,
        }
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn set_ticker(&mut self, ticker: impl Into<Ticker>) {
        self.ticker = ticker.into();
    }

    pub fn bars(&self) -> Option<&[HistoricalBar]> {
        self.bars.as_deref()
    }

    pub fn predictions(&self) -> Option<&[PredictionRow]> {
        self.predictions.as_deref()
    }

    pub fn chart(&self) -> &ChartData {
        &self.chart
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn policy(&self) -> ResponsePolicy {
        self.policy
    }

    /// The candle shown in the summary list.
    pub fn next_candle(&self) -> Option<&PredictionRow> {
        self.predictions.as_ref().and_then(|rows| rows.first())
    }

    /// Start a submission: clear the error and issue a ticket for the
    /// current ticker. The ticker itself is left as typed.
    pub fn begin_submit(&mut self) -> (RequestTicket, Ticker) {
        self.error = None;
        self.last_issued = self.last_issued.next();
        (self.last_issued, self.ticker.clone())
    }

    pub fn is_stale(&self, ticket: RequestTicket) -> bool {
        ticket < self.last_issued
    }

    /// Apply a finished request, subject to the response policy.
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        result: Result<PredictionResponse, PredictionError>,
    ) -> Resolution {
        if self.policy == ResponsePolicy::LatestRequestWins && self.is_stale(ticket) {
            get_logger().log_with_metadata(
                LogLevel::Warn,
                LogComponent::Domain("ForecastState"),
                "Dropping superseded response",
                &format!("ticket={} latest={}", ticket, self.last_issued),
            );
            return Resolution::Discarded;
        }

        match result {
            Ok(response) => self.apply_success(response),
            Err(err) => self.apply_failure(&err),
        }
        Resolution::Applied
    }

    fn apply_success(&mut self, response: PredictionResponse) {
        let PredictionResponse { bars, predictions } = response;
        ChartDerivationService::refresh(&mut self.chart, &bars);
        self.bars = Some(bars);
        self.predictions = Some(predictions);
        self.error = None;
    }

    fn apply_failure(&mut self, err: &PredictionError) {
        self.bars = None;
        self.predictions = None;
        ChartDerivationService::refresh(&mut self.chart, &[]);
        self.error = Some(err.user_message().to_string());
    }

    /// Each panel is gated on its own piece of state only.
    pub fn visibility(&self) -> PanelVisibility {
        PanelVisibility {
            chart: self.bars.is_some(),
            prediction: self.next_candle().is_some(),
            error: self.error.is_some(),
        }
    }
}
