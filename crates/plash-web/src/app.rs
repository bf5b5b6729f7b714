//! Page state shared by the frame loop, resize listener and speed poller

use std::cell::RefCell;
use std::rc::Rc;

use plash_scene::background::WallpaperRenderer;
use plash_scene::{SpeedSample, Viewport, WallpaperEngine, WallpaperError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::hud::FpsCounter;
use crate::util::{log, window_metrics};

/// Whether the frame loop should schedule another frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Skipped frames keep the loop alive; any other render error ends it
pub fn loop_control(result: &Result<(), WallpaperError>) -> LoopControl {
    match result {
        Err(e) if !e.is_recoverable() => LoopControl::Stop,
        _ => LoopControl::Continue,
    }
}

pub struct WallpaperApp {
    engine: WallpaperEngine,
    renderer: WallpaperRenderer,
    canvas: web_sys::HtmlCanvasElement,
    hud: Option<FpsCounter>,
    last_timestamp: Option<f64>,
}

impl WallpaperApp {
    pub fn new(
        engine: WallpaperEngine,
        renderer: WallpaperRenderer,
        canvas: web_sys::HtmlCanvasElement,
        hud: Option<FpsCounter>,
    ) -> Self {
        Self {
            engine,
            renderer,
            canvas,
            hud,
            last_timestamp: None,
        }
    }

    /// Advance one frame at `timestamp` (ms, from requestAnimationFrame) and draw it.
    ///
    /// Returns [`LoopControl::Stop`] after a fatal render error, logged once here.
    pub fn frame(&mut self, timestamp: f64) -> LoopControl {
        let delta = match self.last_timestamp {
            Some(last) => ((timestamp - last) / 1000.0).max(0.0),
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp);

        let state = self.engine.tick(delta);
        if let (Some(fps), Some(hud)) = (state.fps, &self.hud) {
            hud.show(fps);
        }

        let result = self.renderer.render(&self.engine);
        let control = loop_control(&result);
        if let (LoopControl::Stop, Err(e)) = (control, &result) {
            log(&format!("[renderer] Animation stopped: {}", e));
        }
        control
    }

    /// Match the canvas backing store to the window
    pub fn resize(&mut self, window: &web_sys::Window) {
        let (width, height, ratio) = window_metrics(window);
        let viewport = Viewport::new(width, height, ratio);
        let (physical_width, physical_height) = size_canvas(&self.canvas, &viewport);

        self.engine.resize(viewport);
        self.renderer.resize(physical_width, physical_height);
    }

    pub fn apply_speed_sample(&mut self, sample: SpeedSample) {
        self.engine.apply_speed_sample(sample);
    }

    pub fn speed_fetch_failed(&mut self) {
        self.engine.speed_fetch_failed();
    }

    #[cfg(target_arch = "wasm32")]
    pub fn set_overlay_image(&mut self, bitmap: &web_sys::ImageBitmap) {
        self.renderer.set_overlay_image(bitmap);
    }
}

/// Set the canvas backing size from a viewport; returns the pixel size
pub fn size_canvas(canvas: &web_sys::HtmlCanvasElement, viewport: &Viewport) -> (u32, u32) {
    let (width, height) = viewport.physical_size();
    canvas.set_width(width);
    canvas.set_height(height);
    (width, height)
}

/// Build the renderer for `engine` on `canvas`
pub async fn create_renderer(
    canvas: web_sys::HtmlCanvasElement,
    engine: &WallpaperEngine,
    with_overlay: bool,
) -> Result<WallpaperRenderer, WallpaperError> {
    log("[renderer] Initializing wgpu renderer...");
    let renderer = WallpaperRenderer::new(canvas, engine, with_overlay).await?;
    log("[renderer] Renderer initialized");
    Ok(renderer)
}

/// Drive `app` from requestAnimationFrame for the lifetime of the page
pub fn start_frame_loop(window: web_sys::Window, app: Rc<RefCell<WallpaperApp>>) -> Result<(), JsValue> {
    let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let loop_window = window.clone();

    *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        if app.borrow_mut().frame(timestamp) == LoopControl::Stop {
            return;
        }

        if let Some(closure) = next.borrow().as_ref() {
            if let Err(e) = loop_window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                log(&format!("[wallpaper] Frame loop stopped: {:?}", e));
            }
        }
    }));

    let first = callback.borrow();
    match first.as_ref() {
        Some(closure) => {
            window.request_animation_frame(closure.as_ref().unchecked_ref())?;
            Ok(())
        }
        None => Err(JsValue::from_str("frame callback missing")),
    }
}

/// Keep the canvas sized to the window
pub fn start_resize_listener(window: &web_sys::Window, app: Rc<RefCell<WallpaperApp>>) -> Result<(), JsValue> {
    let listener_window = window.clone();
    let closure = Closure::<dyn FnMut()>::new(move || {
        app.borrow_mut().resize(&listener_window);
    });
    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_continues_on_success_and_skipped_frames() {
        assert_eq!(loop_control(&Ok(())), LoopControl::Continue);
        assert_eq!(
            loop_control(&Err(WallpaperError::SkipFrame("surface reconfigured"))),
            LoopControl::Continue
        );
    }

    #[test]
    fn test_loop_stops_on_fatal_errors() {
        assert_eq!(loop_control(&Err(WallpaperError::OutOfMemory)), LoopControl::Stop);
        assert_eq!(
            loop_control(&Err(WallpaperError::Surface("lost canvas".to_string()))),
            LoopControl::Stop
        );
    }
}
