use wasm_bindgen::prelude::*;

use crate::config::{AppConfig, config, init_config, query_pairs};
use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

/// Initialize config, logger and clock before any widget is mounted
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let search = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();
    let app_config = AppConfig::default().with_query_overrides(
        query_pairs(&search).map(|(key, value)| (key, decode_query_value(value))),
    );
    init_config(app_config);

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new(config().log_level));
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!(
            "🚀 Ticker forecast ready: endpoint={} policy={}",
            config().endpoint,
            config().response_policy.as_ref()
        ),
    );
}

// `+` in query strings is a space; keep the raw text if decoding fails
fn decode_query_value(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    js_sys::decode_uri_component(&spaced)
        .map(String::from)
        .unwrap_or(spaced)
}
