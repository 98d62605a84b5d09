use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::layout::ChartLayout;
use crate::domain::{
    chart::{ChartData, ChartPoint, LabelFormat, TitleAlign},
    errors::{AppError, RenderingResult},
    logging::{LogComponent, get_logger},
};
use crate::time_utils::format_date_label;

const BACKGROUND: &str = "#ffffff";
const GRID_COLOR: &str = "#e5e7eb";
const TEXT_COLOR: &str = "#374151";
const WICK_COLOR: &str = "#6b7280";
const BULLISH_COLOR: &str = "#00b746";
const BEARISH_COLOR: &str = "#ef403c";

/// Horizontal grid lines, top and bottom included
const PRICE_LEVELS: usize = 5;
const MAX_X_LABELS: usize = 8;
/// Title inset for left/right alignment
const PADDING_X: f64 = 20.0;

/// Canvas 2D renderer for the candlestick chart
pub struct CanvasRenderer {
    width: u32,
    height: u32,
}

impl CanvasRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn layout(&self, chart: &ChartData) -> Option<ChartLayout> {
        ChartLayout::compute(self.width, self.height, chart.points())
    }

    fn get_canvas_context(&self, canvas: &HtmlCanvasElement) -> RenderingResult<CanvasRenderingContext2d> {
        canvas.set_width(self.width);
        canvas.set_height(self.height);

        canvas
            .get_context("2d")
            .map_err(|_| AppError::RenderingError("Failed to get 2D context".to_string()))?
            .ok_or_else(|| AppError::RenderingError("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::RenderingError("Failed to cast to 2D context".to_string()))
    }

    /// Draw the whole chart; returns the layout used so callers can hit-test.
    pub fn render_chart(&self, canvas: &HtmlCanvasElement, chart: &ChartData) -> RenderingResult<Option<ChartLayout>> {
        let context = self.get_canvas_context(canvas)?;

        context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        context.set_fill_style_str(BACKGROUND);
        context.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);

        self.render_title(&context, chart).map_err(js_err)?;

        let points = chart.points();
        let Some(layout) = self.layout(chart) else {
            self.render_no_data_message(&context).map_err(js_err)?;
            return Ok(None);
        };

        self.render_price_scale(&context, &layout).map_err(js_err)?;
        for (index, point) in points.iter().enumerate() {
            self.render_single_candle(&context, &layout, index, point);
        }
        self.render_x_labels(&context, &layout, points, chart.options.xaxis.labels.format)
            .map_err(js_err)?;

        get_logger().debug(
            LogComponent::Infrastructure("CanvasRenderer"),
            &format!("Rendered {} candles", points.len()),
        );

        Ok(Some(layout))
    }

    fn render_title(&self, context: &CanvasRenderingContext2d, chart: &ChartData) -> Result<(), JsValue> {
        let title = &chart.options.title;
        let (align, x) = match title.align {
            TitleAlign::Left => ("left", PADDING_X),
            TitleAlign::Center => ("center", self.width as f64 / 2.0),
            TitleAlign::Right => ("right", self.width as f64 - PADDING_X),
        };
        context.set_fill_style_str(TEXT_COLOR);
        context.set_font("bold 16px sans-serif");
        context.set_text_align(align);
        context.fill_text(&title.text, x, 30.0)
    }

    fn render_price_scale(&self, context: &CanvasRenderingContext2d, layout: &ChartLayout) -> Result<(), JsValue> {
        context.set_font("12px sans-serif");
        context.set_text_align("right");
        context.set_line_width(1.0);

        for price in layout.price_levels(PRICE_LEVELS) {
            let y = layout.y_for_price(price);

            context.set_stroke_style_str(GRID_COLOR);
            context.begin_path();
            context.move_to(layout.plot_left, y);
            context.line_to(layout.plot_right(), y);
            context.stroke();

            context.set_fill_style_str(TEXT_COLOR);
            context.fill_text(&format!("{:.2}", price), layout.plot_left - 8.0, y + 4.0)?;
        }
        Ok(())
    }

    fn render_single_candle(&self, context: &CanvasRenderingContext2d, layout: &ChartLayout, index: usize, point: &ChartPoint) {
        let ohlc = point.ohlc();
        let x = layout.x_for_index(index);

        context.set_stroke_style_str(WICK_COLOR);
        context.set_line_width(1.0);
        context.begin_path();
        context.move_to(x, layout.y_for_price(ohlc.high.value()));
        context.line_to(x, layout.y_for_price(ohlc.low.value()));
        context.stroke();

        let open_y = layout.y_for_price(ohlc.open.value());
        let close_y = layout.y_for_price(ohlc.close.value());
        let body_top = open_y.min(close_y);
        // doji still gets a visible body
        let body_height = (open_y - close_y).abs().max(1.0);
        let body_width = layout.body_width();

        let color = if ohlc.is_bullish() { BULLISH_COLOR } else { BEARISH_COLOR };
        context.set_fill_style_str(color);
        context.fill_rect(x - body_width / 2.0, body_top, body_width, body_height);
    }

    fn render_x_labels(
        &self,
        context: &CanvasRenderingContext2d,
        layout: &ChartLayout,
        points: &[ChartPoint],
        format: LabelFormat,
    ) -> Result<(), JsValue> {
        context.set_fill_style_str(TEXT_COLOR);
        context.set_font("11px sans-serif");
        context.set_text_align("center");

        let stride = layout.label_stride(MAX_X_LABELS);
        for (index, point) in points.iter().enumerate().step_by(stride) {
            let label = match format {
                LabelFormat::LocaleDate => format_date_label(&point.x),
                LabelFormat::Verbatim => point.x.clone(),
            };
            context.fill_text(&label, layout.x_for_index(index), layout.plot_bottom() + 20.0)?;
        }
        Ok(())
    }

    fn render_no_data_message(&self, context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        context.set_fill_style_str(TEXT_COLOR);
        context.set_font("16px sans-serif");
        context.set_text_align("center");
        context.fill_text("No data", self.width as f64 / 2.0, self.height as f64 / 2.0)?;

        get_logger().warn(
            LogComponent::Infrastructure("CanvasRenderer"),
            "No candle data to render",
        );
        Ok(())
    }
}

fn js_err(err: JsValue) -> AppError {
    AppError::RenderingError(format!("{:?}", err))
}
