use solar_dash::dashboard::DIAGNOSTIC_PREFIX;
use wasm_bindgen::JsValue;

/// Blocking `window.alert`.
pub(super) fn alert(message: &str) {
    let Some(w) = web_sys::window() else {
        return;
    };
    let _ = w.alert_with_message(message);
}

/// `console.error` with the prediction diagnostic prefix.
pub(super) fn console_error(detail: &str) {
    web_sys::console::error_1(&JsValue::from_str(&format!("{DIAGNOSTIC_PREFIX} {detail}")));
}
