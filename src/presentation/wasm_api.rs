use js_sys::Promise;
use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::{
    app::ForecastWidget,
    application::RequestPredictionUseCase,
    config::config,
    domain::{
        chart::{ChartData, ChartDerivationService, ChartOptions},
        errors::AppError,
        logging::{LogComponent, get_logger},
        market_data::{PredictionResponse, Ticker},
    },
    infrastructure::http::{PredictionHttpClient, parse_prediction_body},
};

// WASM API for host pages: mount the widget, or run the request/transform without it

impl From<AppError> for JsValue {
    /// Prediction failures reach JavaScript as the user-facing message only.
    fn from(err: AppError) -> Self {
        match err {
            AppError::Prediction(err) => JsValue::from_str(err.user_message()),
            other => JsValue::from_str(&other.to_string()),
        }
    }
}

/// Mount the widget into the element with `element_id`, or into `<body>`.
///
/// `endpoint` overrides the configured prediction endpoint for this widget.
#[wasm_bindgen(js_name = mountForecastWidget)]
pub fn mount_forecast_widget(element_id: Option<String>, endpoint: Option<String>) -> Result<(), JsValue> {
    let endpoint = endpoint.unwrap_or_else(|| config().endpoint.clone());

    match element_id {
        Some(id) => {
            let parent = gloo::utils::document()
                .get_element_by_id(&id)
                .ok_or_else(|| AppError::MountError(format!("No element with id '{}'", id)))?
                .dyn_into::<web_sys::HtmlElement>()
                .map_err(|_| AppError::MountError(format!("Element '{}' is not an HTML element", id)))?;
            mount_to(parent, move || view! { <ForecastWidget endpoint=endpoint /> });
            get_logger().info(
                LogComponent::Presentation("WasmApi"),
                &format!("✅ Widget mounted into #{}", id),
            );
        }
        None => {
            mount_to_body(move || view! { <ForecastWidget endpoint=endpoint /> });
            get_logger().info(LogComponent::Presentation("WasmApi"), "✅ Widget mounted into <body>");
        }
    }

    Ok(())
}

/// Chart input for a successful response body, as JSON.
pub fn chart_data_json(body: &str) -> Result<String, AppError> {
    let response = parse_prediction_body(body)?;
    chart_json_for(&response)
}

fn chart_json_for(response: &PredictionResponse) -> Result<String, AppError> {
    let mut chart = ChartData::new(ChartOptions::default().with_height(config().chart_height));
    ChartDerivationService::refresh(&mut chart, &response.bars);
    serde_json::to_string(&chart).map_err(|e| AppError::RenderingError(format!("Failed to serialize chart: {}", e)))
}

/// Parse a prediction response body and return the derived chart JSON.
#[wasm_bindgen(js_name = chartDataFromResponse)]
pub fn chart_data_from_response(body: &str) -> Result<String, JsValue> {
    chart_data_json(body).map_err(JsValue::from)
}

/// Run one prediction round-trip without the widget; resolves with the
/// chart JSON, rejects with the user-facing error message.
#[wasm_bindgen(js_name = predictTicker)]
pub fn predict_ticker(ticker: String, endpoint: Option<String>) -> Promise {
    let endpoint = endpoint.unwrap_or_else(|| config().endpoint.clone());

    future_to_promise(async move {
        let use_case = RequestPredictionUseCase::new(PredictionHttpClient::new(endpoint));
        let response = use_case
            .execute(&Ticker::from(ticker))
            .await
            .map_err(AppError::from)?;
        let json = chart_json_for(&response)?;
        Ok(JsValue::from_str(&json))
    })
}
