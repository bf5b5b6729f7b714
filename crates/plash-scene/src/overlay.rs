//! Image overlay placed inside the scene
//!
//! The image loads asynchronously; until a texture arrives nothing is drawn.
//! Placement is in world units so the overlay sits inside the particle
//! stream rather than on top of the screen.

use crate::math::{Mat4, Vec3};

/// Layers composited each frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawLayer {
    /// Image plane at the back of the particle stream
    Overlay,
    /// Active scene (additive particles or gradient)
    Scene,
}

/// Back-to-front layer order.
///
/// The overlay sits at z = -20, behind most streaks, so it is blended first
/// and additive particles land on top of it. An opaque scene covers the
/// whole screen and has to go first.
pub fn draw_order(opaque_scene: bool) -> [DrawLayer; 2] {
    if opaque_scene {
        [DrawLayer::Scene, DrawLayer::Overlay]
    } else {
        [DrawLayer::Overlay, DrawLayer::Scene]
    }
}

/// Tunables for the overlay quad
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayConfig {
    /// Source image size in pixels
    pub image_width: f32,
    pub image_height: f32,
    /// World units per image pixel
    pub scale: f32,
    /// Quad center in world space
    pub center: Vec3,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            image_width: 460.0,
            image_height: 186.0,
            scale: 0.02,
            center: Vec3::new(0.0, 0.0, -20.0),
        }
    }
}

impl OverlayConfig {
    /// Use the decoded image's real pixel size
    pub fn with_image_size(mut self, width: u32, height: u32) -> Self {
        if width > 0 && height > 0 {
            self.image_width = width as f32;
            self.image_height = height as f32;
        }
        self
    }

    /// Quad size in world units
    pub fn world_size(&self) -> [f32; 2] {
        [self.image_width * self.scale, self.image_height * self.scale]
    }

    /// Uniform values for a frame
    pub fn uniforms(&self, time: f32, view_proj: &Mat4) -> OverlayUniforms {
        OverlayUniforms {
            view_proj: view_proj.to_cols_array(),
            center: self.center.to_array(),
            time,
            size: self.world_size(),
            _pad: [0.0; 2],
        }
    }
}

/// Uniform block for the overlay shader (96 bytes)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct OverlayUniforms {
    pub view_proj: [[f32; 4]; 4], // offset 0
    pub center: [f32; 3],         // offset 64
    pub time: f32,                // offset 76
    pub size: [f32; 2],           // offset 80
    pub _pad: [f32; 2],           // offset 88
}
