use derive_more::Display;
use serde::Serialize;
use strum::{AsRefStr, EnumString};

pub const CHART_TITLE: &str = "Stock Price Candlestick Chart";
pub const DEFAULT_CHART_HEIGHT: u32 = 600;

/// Value Object - Chart type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[display(fmt = "Candlestick")]
    #[strum(serialize = "candlestick")]
    Candlestick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TitleAlign {
    Left,
    Center,
    Right,
}

/// How the x axis treats its values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AxisType {
    /// One evenly spaced slot per point, labels taken verbatim from `x`
    Category,
}

/// How x axis labels are turned into text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelFormat {
    /// The label is parsed as a date and shown as the locale's short date
    LocaleDate,
    Verbatim,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSettings {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleOptions {
    pub text: String,
    pub align: TitleAlign,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabels {
    pub format: LabelFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XAxisOptions {
    #[serde(rename = "type")]
    pub axis_type: AxisType,
    pub labels: AxisLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipOptions {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YAxisOptions {
    pub tooltip: TooltipOptions,
}

/// Value Object - static chart configuration.
///
/// Never derived from data; only the series changes between submissions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub chart: ChartSettings,
    pub title: TitleOptions,
    pub xaxis: XAxisOptions,
    pub yaxis: YAxisOptions,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            chart: ChartSettings {
                chart_type: ChartType::Candlestick,
                height: DEFAULT_CHART_HEIGHT,
            },
            title: TitleOptions {
                text: CHART_TITLE.to_string(),
                align: TitleAlign::Center,
            },
            xaxis: XAxisOptions {
                axis_type: AxisType::Category,
                labels: AxisLabels {
                    format: LabelFormat::LocaleDate,
                },
            },
            yaxis: YAxisOptions {
                tooltip: TooltipOptions { enabled: true },
            },
        }
    }
}

impl ChartOptions {
    pub fn with_height(mut self, height: u32) -> Self {
        self.chart.height = height;
        self
    }

    pub fn y_tooltip_enabled(&self) -> bool {
        self.yaxis.tooltip.enabled
    }
}
