//! Utility functions
//!
//! Small browser helpers used across the frontend.

use wasm_bindgen::JsValue;

/// Show a blocking browser alert
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        tracing::warn!(message, "No window to show alert");
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        tracing::warn!(error = %js_error_text(&err), "Alert failed");
    }
}

/// Best-effort text for a thrown JS value
pub fn js_error_text(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
