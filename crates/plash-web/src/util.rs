//! Shared browser helpers for the web crate

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Console.log binding for WASM
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}

/// Query keys read from the page URL
pub const QUERY_KEYS: [&str; 6] = ["variant", "mode", "speed_url", "poll_ms", "fps", "overlay"];

/// Collect the known query parameters present in `search` (e.g. "?mode=adaptive")
pub fn query_pairs(search: &str) -> Vec<(String, String)> {
    let Ok(params) = web_sys::UrlSearchParams::new_with_str(search) else {
        return Vec::new();
    };
    QUERY_KEYS
        .iter()
        .filter_map(|key| params.get(key).map(|value| (key.to_string(), value)))
        .collect()
}

/// Current CSS viewport and device pixel ratio
pub fn window_metrics(window: &web_sys::Window) -> (f32, f32, f32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width as f32, height as f32, window.device_pixel_ratio() as f32)
}

/// Convert a JS error value to a loggable string
pub fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
