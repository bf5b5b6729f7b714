//! WebGPU/WebGL renderer for the wallpaper scenes
//!
//! One [`WallpaperRenderer`] per canvas. Each frame it uploads the engine's
//! uniforms, draws the active scene with additive blending and composites the
//! overlay image (once loaded) on top.

mod init;
mod overlay_layer;
mod passes;
mod render;
mod renderer;
mod shaders;

pub use renderer::WallpaperRenderer;
