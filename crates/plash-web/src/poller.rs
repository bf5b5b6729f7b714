//! Adaptive speed polling
//!
//! Every interval a fresh `fetch` is issued; each response that parses
//! updates the engine's target. Anything else leaves the target alone.

use std::cell::RefCell;
use std::rc::Rc;

use plash_scene::speed::parse_sample;
use plash_scene::SpeedSample;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::app::WallpaperApp;
use crate::util::log;

/// Start polling `url` every `interval_ms`. The interval lives as long as the page.
pub fn start(
    window: &web_sys::Window,
    app: Rc<RefCell<WallpaperApp>>,
    url: String,
    interval_ms: u32,
) -> Result<(), JsValue> {
    log(&format!("[speed] Polling {} every {}ms", url, interval_ms));

    let tick_window = window.clone();
    let closure = Closure::<dyn FnMut()>::new(move || {
        let window = tick_window.clone();
        let app = app.clone();
        let url = url.clone();
        spawn_local(async move {
            match fetch_sample(&window, &url).await {
                Ok(sample) => {
                    app.borrow_mut().apply_speed_sample(sample);
                }
                Err(_) => app.borrow_mut().speed_fetch_failed(),
            }
        });
    });

    window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        i32::try_from(interval_ms).unwrap_or(i32::MAX),
    )?;
    closure.forget();
    Ok(())
}

/// Fetch and decode one sample, bypassing the HTTP cache
async fn fetch_sample(window: &web_sys::Window, url: &str) -> Result<SpeedSample, JsValue> {
    let init = web_sys::RequestInit::new();
    init.set_method("GET");
    init.set_cache(web_sys::RequestCache::NoStore);
    let request = web_sys::Request::new_with_str_and_init(url, &init)?;

    let response: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", response.status())));
    }

    let body = JsFuture::from(response.text()?).await?;
    let body = body
        .as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))?;

    parse_sample(&body).map_err(|e| JsValue::from_str(&e.to_string()))
}
