//! Viewport and perspective camera

use crate::math::{Mat4, Vec3};

/// Upper bound on the device pixel ratio used for the drawing buffer
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Canvas viewport in CSS pixels
///
/// Only the projection depends on this; scene data never does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Width in CSS pixels
    pub width: f32,
    /// Height in CSS pixels
    pub height: f32,
    /// Device pixel ratio, clamped to `[1, MAX_PIXEL_RATIO]`
    pub pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1920.0, 1080.0, 1.0)
    }
}

impl Viewport {
    /// Create a viewport, clamping the pixel ratio
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        let pixel_ratio = if device_pixel_ratio.is_finite() {
            device_pixel_ratio.clamp(1.0, MAX_PIXEL_RATIO)
        } else {
            1.0
        };
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            pixel_ratio,
        }
    }

    /// Width over height
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Drawing-buffer size in device pixels (never zero)
    pub fn physical_size(&self) -> (u32, u32) {
        let w = (self.width * self.pixel_ratio).round().max(1.0) as u32;
        let h = (self.height * self.pixel_ratio).round().max(1.0) as u32;
        (w, h)
    }
}

/// Perspective camera placed on the +Z axis looking toward -Z
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Camera z position; points past `position_z` are behind the viewer
    pub position_z: f32,
}

impl PerspectiveCamera {
    /// Create a camera for the given viewport
    pub fn new(fov_y_degrees: f32, near: f32, far: f32, position_z: f32, viewport: &Viewport) -> Self {
        Self {
            fov_y_degrees,
            aspect: viewport.aspect(),
            near,
            far,
            position_z,
        }
    }

    /// Camera used by the starburst scene
    pub fn starburst(viewport: &Viewport) -> Self {
        Self::new(60.0, 0.1, 1000.0, 2.0, viewport)
    }

    /// Camera used by the starfield scene
    pub fn starfield(viewport: &Viewport) -> Self {
        Self::new(60.0, 0.1, 2000.0, 1.0, viewport)
    }

    /// Update the aspect ratio after a resize
    pub fn set_viewport(&mut self, viewport: &Viewport) {
        self.aspect = viewport.aspect();
    }

    /// Projection matrix
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    /// View matrix (inverse of the camera transform)
    pub fn view(&self) -> Mat4 {
        Mat4::translation(Vec3::new(0.0, 0.0, -self.position_z))
    }

    /// Combined projection * view
    pub fn view_projection(&self) -> Mat4 {
        self.projection().mul(&self.view())
    }
}
