use leptos::html::Canvas;
use leptos::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use crate::{
    application::ForecastCoordinator,
    config::config,
    domain::{
        chart::{ChartOptions, ChartPoint},
        logging::{LogComponent, get_logger},
        market_data::PredictionRow,
        state::ForecastState,
    },
    infrastructure::{
        http::PredictionHttpClient,
        rendering::{CanvasRenderer, ChartLayout, HoverHit},
    },
    time_utils::format_date_label,
};

const WIDGET_STYLE: &str = r#"
.forecast-widget {
    max-width: 56rem;
    margin: 0 auto;
    padding: 1.5rem;
    background: #f3f4f6;
    border-radius: 0.5rem;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    font-family: -apple-system, BlinkMacSystemFont, sans-serif;
}
.forecast-form { display: flex; justify-content: space-between; margin-bottom: 1.5rem; }
.forecast-form input {
    flex-grow: 1;
    padding: 0.5rem;
    border: 1px solid #d1d5db;
    border-radius: 0.5rem;
}
.forecast-form button {
    margin-left: 1rem;
    padding: 0.5rem 1rem;
    color: white;
    background: #3b82f6;
    border: none;
    border-radius: 0.5rem;
    cursor: pointer;
}
.forecast-form button:hover { background: #2563eb; }
.forecast-chart { margin-bottom: 1.5rem; }
.forecast-chart-frame { position: relative; display: inline-block; }
.forecast-chart canvas { cursor: crosshair; }
.forecast-tooltip {
    position: absolute;
    pointer-events: none;
    padding: 4px 8px;
    background: rgba(17, 24, 39, 0.9);
    color: white;
    font: 12px 'Courier New', monospace;
    white-space: pre-line;
    border-radius: 4px;
    transform: translate(12px, -100%);
}
.forecast-widget h3 { font-size: 1.125rem; font-weight: 600; margin-bottom: 0.5rem; }
.forecast-prediction ul { list-style: disc; margin-left: 1.25rem; }
.forecast-error { color: #ef4444; }
"#;

/// 🦀 The ticker forecast widget: form, chart, next-candle summary, error line
#[component]
pub fn ForecastWidget(#[prop(optional, into)] endpoint: Option<String>) -> impl IntoView {
    let cfg = config();
    let endpoint = endpoint.unwrap_or_else(|| cfg.endpoint.clone());
    let options = ChartOptions::default().with_height(cfg.chart_height);

    let state = create_rw_signal(ForecastState::new(cfg.response_policy, options));
    let visibility = create_memo(move |_| state.with(ForecastState::visibility));

    get_logger().info(
        LogComponent::Presentation("ForecastWidget"),
        &format!("🚀 Widget created, predictions from {}", endpoint),
    );
    let coordinator = Rc::new(ForecastCoordinator::new(PredictionHttpClient::new(endpoint)));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let coordinator = Rc::clone(&coordinator);
        spawn_local(async move {
            coordinator.submit(&state).await;
        });
    };

    view! {
        <div class="forecast-widget">
            <style>{WIDGET_STYLE}</style>
            <form class="forecast-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Type ticker name..."
                    prop:value=move || state.with(|s| s.ticker().value().to_string())
                    on:input=move |ev| state.update(|s| s.set_ticker(event_target_value(&ev)))
                />
                <button type="submit">"Get Prediction"</button>
            </form>

            <Show when=move || visibility.get().chart>
                <CandlestickPanel state=state />
            </Show>

            <Show when=move || visibility.get().prediction>
                <PredictionPanel state=state />
            </Show>

            <Show when=move || visibility.get().error>
                <p class="forecast-error">
                    {move || state.with(|s| s.error().unwrap_or_default().to_string())}
                </p>
            </Show>
        </div>
    }
}

/// 📊 Candlestick chart drawn on a canvas, re-rendered whenever the series changes
#[component]
fn CandlestickPanel(state: RwSignal<ForecastState>) -> impl IntoView {
    let cfg = config();
    let renderer = Rc::new(CanvasRenderer::new(cfg.chart_width, cfg.chart_height));
    let canvas_ref = create_node_ref::<Canvas>();

    // typing into the form must not redraw the chart
    let chart = create_memo(move |_| state.with(|s| s.chart().clone()));
    let layout = create_rw_signal(None::<ChartLayout>);
    let tooltip = create_rw_signal(None::<(f64, f64, String)>);

    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        chart.with(|chart| match renderer.render_chart(&canvas, chart) {
            Ok(new_layout) => layout.set(new_layout),
            Err(err) => {
                get_logger().error(
                    LogComponent::Presentation("CandlestickPanel"),
                    &format!("❌ Render failed: {}", err),
                );
                layout.set(None);
            }
        });
    });

    let handle_mouse_move = move |ev: ev::MouseEvent| {
        let (x, y) = (ev.offset_x() as f64, ev.offset_y() as f64);
        let text = chart.with(|chart| {
            if !chart.options.y_tooltip_enabled() {
                return None;
            }
            layout
                .with(|layout| layout.as_ref().and_then(|l| l.hit_test(x, y)))
                .map(|hit| tooltip_text(hit, chart.points()))
        });
        tooltip.set(text.map(|text| (x, y, text)));
    };

    view! {
        <div class="forecast-chart">
            <h3>"Stock Data Candlestick Chart:"</h3>
            <div class="forecast-chart-frame">
                <canvas
                    node_ref=canvas_ref
                    width=cfg.chart_width
                    height=cfg.chart_height
                    on:mousemove=handle_mouse_move
                    on:mouseleave=move |_| tooltip.set(None)
                />
                {move || tooltip.get().map(|(x, y, text)| view! {
                    <div
                        class="forecast-tooltip"
                        style:left=format!("{}px", x)
                        style:top=format!("{}px", y)
                    >
                        {text}
                    </div>
                })}
            </div>
        </div>
    }
}

/// 🔮 First predicted candle, fields listed Low, Open, Close, High
#[component]
fn PredictionPanel(state: RwSignal<ForecastState>) -> impl IntoView {
    let lines = move || {
        state.with(|s| s.next_candle().map(prediction_lines)).unwrap_or_default()
    };

    view! {
        <div class="forecast-prediction">
            <h3>"Predicted Next Candle Data:"</h3>
            <ul>
                {move || lines().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
        </div>
    }
}

/// `"Low: 9.5"` etc., in display order.
pub fn prediction_lines(row: &PredictionRow) -> Vec<String> {
    row.display_fields()
        .iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect()
}

/// Price under the cursor, plus the hovered candle when there is one.
pub fn tooltip_text(hit: HoverHit, points: &[ChartPoint]) -> String {
    let price_line = format!("Price: {:.2}", hit.price);
    match hit.index.and_then(|i| points.get(i)) {
        Some(point) => {
            let [open, high, low, close] = point.y;
            format!(
                "{}\n{}\nO: {:.2}  H: {:.2}\nL: {:.2}  C: {:.2}",
                price_line,
                format_date_label(&point.x),
                open,
                high,
                low,
                close
            )
        }
        None => price_line,
    }
}
