//! Browser entry point for the Plash wallpapers
//!
//! Loaded by `web/index.html`. On start it reads the query string, sizes the
//! `#bg` canvas, builds the engine and renderer, then runs the frame loop,
//! the resize listener and (in adaptive mode) the speed poller.

mod app;
mod hud;
#[cfg(target_arch = "wasm32")]
mod overlay_image;
mod poller;
mod util;

use std::cell::RefCell;
use std::rc::Rc;

use plash_scene::{Rng, Variant, Viewport, WallpaperConfig, WallpaperEngine};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::app::WallpaperApp;
use crate::hud::FpsCounter;
use crate::util::{js_error, log, query_pairs, window_metrics};

/// Id of the canvas the wallpaper draws into
pub const CANVAS_ID: &str = "bg";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // The wallpaper never takes input
    if let Some(body) = document.body() {
        body.style().set_property("pointer-events", "none")?;
    }

    let config = read_config(&window);
    log(&format!(
        "[wallpaper] Starting {} ({} speed)",
        config.variant.name(),
        config.mode.id()
    ));

    let canvas: web_sys::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("missing #bg canvas"))?
        .dyn_into()?;

    spawn_local(async move {
        if let Err(e) = init(window, document, canvas, config).await {
            log(&format!("[wallpaper] Initialization failed: {}", js_error(&e)));
        }
    });
    Ok(())
}

/// Parse the page query, logging each rejected value
fn read_config(window: &web_sys::Window) -> WallpaperConfig {
    let search = window.location().search().unwrap_or_default();
    let (config, warnings) = WallpaperConfig::from_query_pairs(query_pairs(&search));
    for warning in &warnings {
        log(&format!("[wallpaper] Ignoring query value: {}", warning));
    }
    config
}

async fn init(
    window: web_sys::Window,
    document: web_sys::Document,
    canvas: web_sys::HtmlCanvasElement,
    config: WallpaperConfig,
) -> Result<(), JsValue> {
    let (width, height, ratio) = window_metrics(&window);
    let viewport = Viewport::new(width, height, ratio);
    app::size_canvas(&canvas, &viewport);

    let engine = WallpaperEngine::new(&config, viewport, Rng::from_entropy());
    let renderer = app::create_renderer(canvas.clone(), &engine, config.overlay.is_some())
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let hud = if config.show_fps {
        Some(FpsCounter::attach(&document)?)
    } else {
        None
    };

    let app = Rc::new(RefCell::new(WallpaperApp::new(engine, renderer, canvas, hud)));

    app::start_resize_listener(&window, app.clone())?;
    if config.polls_speed() {
        poller::start(
            &window,
            app.clone(),
            config.speed_url.clone(),
            config.poll_interval_ms,
        )?;
    }
    app::start_frame_loop(window.clone(), app.clone())?;

    if let Some(url) = config.overlay {
        load_overlay(&window, &document, &app, &url).await;
    }

    Ok(())
}

/// Load the overlay image; the scene keeps running without it on failure
#[cfg(target_arch = "wasm32")]
async fn load_overlay(
    window: &web_sys::Window,
    document: &web_sys::Document,
    app: &Rc<RefCell<WallpaperApp>>,
    url: &str,
) {
    match overlay_image::load_bitmap(window, document, url).await {
        Ok(bitmap) => {
            app.borrow_mut().set_overlay_image(&bitmap);
            log(&format!("[wallpaper] Overlay loaded: {}", url));
        }
        Err(e) => log(&format!("[wallpaper] Overlay {} unavailable: {}", url, js_error(&e))),
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_overlay(
    _window: &web_sys::Window,
    _document: &web_sys::Document,
    _app: &Rc<RefCell<WallpaperApp>>,
    url: &str,
) {
    log(&format!("[wallpaper] Overlay {} skipped: no browser", url));
}

/// All wallpaper variants as JSON
/// Returns: [{ "id": "starburst", "name": "Starburst" }, ...]
#[wasm_bindgen]
pub fn available_variants() -> String {
    let variants: Vec<serde_json::Value> = Variant::all()
        .iter()
        .map(|variant| {
            serde_json::json!({
                "id": variant.id(),
                "name": variant.name()
            })
        })
        .collect();
    serde_json::to_string(&variants).unwrap_or_else(|_| "[]".to_string())
}

/// Effective configuration for a query string, as JSON
#[wasm_bindgen]
pub fn config_for_query(search: &str) -> String {
    let (config, _) = WallpaperConfig::from_query_pairs(query_pairs(search));
    serde_json::to_string(&config).unwrap_or_else(|_| "{}".to_string())
}
