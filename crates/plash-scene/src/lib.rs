//! Animated wallpaper scenes for Plash
//!
//! This crate provides the simulation and rendering for three decorative
//! wallpaper backgrounds:
//! - **Starburst**: instanced glowing streaks flying out of a bounding box
//! - **Starfield**: CPU-simulated stars drawn as line streaks
//! - **Gradient**: a domain-warped gradient field computed per pixel
//!
//! ## Architecture
//!
//! - [`math`]: `Vec3` and `Mat4` used for projection
//! - [`camera`]: viewport and perspective camera
//! - [`speed`]: the speed control (constant or network-driven)
//! - [`starburst`], [`starfield`], [`gradient`]: per-variant scene data
//! - [`overlay`]: optional image quad composited into the scene
//! - `engine`: per-frame state shared by all variants
//! - `background`: wgpu renderer (only with the `wasm` feature)
//!
//! ## Example
//!
//! ```rust
//! use plash_scene::{Rng, Variant, WallpaperConfig, WallpaperEngine, Viewport};
//!
//! let config = WallpaperConfig::default();
//! let mut engine = WallpaperEngine::new(&config, Viewport::new(1920.0, 1080.0, 1.0), Rng::seeded(7));
//! let frame = engine.tick(1.0 / 60.0);
//! assert_eq!(engine.variant(), Variant::Starburst);
//! assert!(frame.time > 0.0);
//! ```
//!
//! The simulation side is pure Rust and runs in native tests; only the
//! renderer needs a browser.

pub mod camera;
pub mod clock;
pub mod config;
pub mod fps;
pub mod gradient;
pub mod math;
pub mod overlay;
pub mod speed;
pub mod starburst;
pub mod starfield;

mod engine;
mod error;
mod rng;
mod variant;

// Background renderer (only available with "wasm" feature)
#[cfg(feature = "wasm")]
pub mod background;

pub use camera::{PerspectiveCamera, Viewport};
pub use clock::SceneClock;
pub use config::WallpaperConfig;
pub use engine::{FrameState, WallpaperEngine};
pub use error::WallpaperError;
pub use fps::FpsMeter;
pub use math::{Mat4, Vec3};
pub use rng::Rng;
pub use speed::{SpeedControl, SpeedMode, SpeedSample};
pub use variant::Variant;
