use js_sys::Date;
use wasm_bindgen::JsValue;

/// Render a date label the way the browser's locale prints short dates.
///
/// Anything `Date` cannot parse is returned unchanged.
pub fn format_date_label(value: &str) -> String {
    let date = Date::new(&JsValue::from_str(value));
    if date.get_time().is_nan() {
        return value.to_string();
    }
    date.to_locale_date_string("default", &JsValue::UNDEFINED).into()
}
