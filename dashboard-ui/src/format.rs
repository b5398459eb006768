use chrono::{DateTime, Utc};
use js_sys::Date;
use wasm_bindgen::JsValue;

/// Render a report instant in the viewer's local date format.
pub fn local_date(reported_at: &DateTime<Utc>) -> String {
    let date = Date::new(&JsValue::from_f64(reported_at.timestamp_millis() as f64));
    date.to_locale_date_string("default", &JsValue::UNDEFINED)
        .into()
}
