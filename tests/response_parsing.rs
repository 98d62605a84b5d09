use ticker_forecast_wasm::domain::errors::{PredictionError, REQUEST_FAILED_MESSAGE};
use ticker_forecast_wasm::domain::market_data::PredictionRow;
use ticker_forecast_wasm::infrastructure::http::{DEFAULT_PREDICT_ENDPOINT, PredictionHttpClient, parse_prediction_body};
use ticker_forecast_wasm::presentation::chart_data_json;

const BODY: &str = r#"{
    "received_data": [
        {"Date": "Mon, 01 Jan 2024 00:00:00 GMT", "Open": 10, "High": 12, "Low": 9, "Close": 11,
         "Adj Close": 11, "Volume": 1200, "RSI": 55.1},
        {"Date": "Tue, 02 Jan 2024 00:00:00 GMT", "Open": 11, "High": 11.5, "Low": 8, "Close": 8.5,
         "Adj Close": 8.5, "Volume": 900, "RSI": 41.0}
    ],
    "predicted_data": [[10.5, 12.5, 9.5, 11.5], [11.0, 13.0, 10.0, 12.0]]
}"#;

#[test]
fn service_rows_decode_and_extra_columns_are_ignored() {
    let response = parse_prediction_body(BODY).unwrap();

    assert_eq!(response.bars.len(), 2);
    assert_eq!(response.bars[0].date, "Mon, 01 Jan 2024 00:00:00 GMT");
    assert_eq!(response.bars[1].ohlc.as_array(), [11.0, 11.5, 8.0, 8.5]);
    assert_eq!(response.next_candle(), Some(&PredictionRow([10.5, 12.5, 9.5, 11.5])));
}

#[test]
fn short_prediction_row_is_a_request_failure() {
    let body = r#"{"received_data": [], "predicted_data": [[1, 2, 3]]}"#;
    let err = parse_prediction_body(body).unwrap_err();

    assert_eq!(err, PredictionError::request_failed("predicted_data[0] has 3 values, expected at least 4"));
    assert_eq!(err.user_message(), REQUEST_FAILED_MESSAGE);
}

#[test]
fn model_rows_with_indicator_columns_keep_only_ohlc() {
    // open, high, low, close, MA_5, MA_10, EMA_5, EMA_10, RSI
    let body = r#"{
        "received_data": [{"Date": "2024-01-01", "Open": 10, "High": 12, "Low": 9, "Close": 11}],
        "predicted_data": [[10.5, 12.5, 9.5, 11.5, 10.9, 10.7, 11.0, 10.8, 55.2]]
    }"#;
    let response = parse_prediction_body(body).unwrap();

    assert_eq!(response.next_candle(), Some(&PredictionRow([10.5, 12.5, 9.5, 11.5])));
    assert_eq!(response.bars.len(), 1);
}

#[test]
fn missing_fields_and_garbage_are_request_failures() {
    for body in ["", "not json", r#"{"received_data": []}"#, r#"{"error": "boom"}"#] {
        let err = parse_prediction_body(body).unwrap_err();
        assert!(matches!(err, PredictionError::RequestFailed(ref detail) if detail.starts_with("Malformed response")));
    }
}

#[test]
fn bar_missing_a_price_is_rejected() {
    let body = r#"{"received_data": [{"Date": "2024-01-01", "Open": 1, "High": 2, "Low": 0.5}], "predicted_data": []}"#;
    assert!(parse_prediction_body(body).is_err());
}

#[test]
fn empty_payload_is_valid() {
    let response = parse_prediction_body(r#"{"received_data": [], "predicted_data": []}"#).unwrap();
    assert!(response.bars.is_empty());
    assert_eq!(response.next_candle(), None);
}

#[test]
fn chart_json_carries_dates_verbatim() {
    let json = chart_data_json(BODY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let points = value["series"][0]["data"].as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0]["x"], "Mon, 01 Jan 2024 00:00:00 GMT");
    assert_eq!(points[0]["y"], serde_json::json!([10.0, 12.0, 9.0, 11.0]));
    assert_eq!(value["options"]["title"]["text"], "Stock Price Candlestick Chart");
}

#[test]
fn chart_json_rejects_malformed_bodies() {
    assert!(chart_data_json("{}").is_err());
}

#[test]
fn client_targets_the_local_service_by_default() {
    assert_eq!(PredictionHttpClient::default().endpoint(), DEFAULT_PREDICT_ENDPOINT);
    assert_eq!(DEFAULT_PREDICT_ENDPOINT, "http://127.0.0.1:5000/api/predict");
    assert_eq!(PredictionHttpClient::new("http://host/api").endpoint(), "http://host/api");
}
