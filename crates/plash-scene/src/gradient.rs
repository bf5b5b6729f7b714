//! Warped gradient scene
//!
//! Entirely procedural: a fullscreen triangle whose fragment shader warps
//! a three-color gradient with layered noise. The CPU side only supplies
//! the palette and a few scalars.

use crate::math::rgb_from_hex;

/// Tunables for the gradient scene
#[derive(Clone, Debug, PartialEq)]
pub struct GradientConfig {
    /// Palette as `0xRRGGBB`, from shadow to highlight
    pub colors: [u32; 3],
    /// How far noise displaces the sample position
    pub warp_strength: f32,
    /// Noise frequency in screen-height units
    pub noise_scale: f32,
    /// Multiplier on scene time for the drift
    pub drift_speed: f32,
    /// Speed used to advance the scene clock
    pub global_speed: f64,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            colors: [0x0b0628, 0xff6b35, 0x4169e1],
            warp_strength: 1.6,
            noise_scale: 2.2,
            drift_speed: 0.35,
            global_speed: 1.0,
        }
    }
}

/// Uniform block for the gradient shader (80 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GradientUniforms {
    pub time: f32,            // offset 0
    pub warp_strength: f32,   // offset 4
    pub resolution: [f32; 2], // offset 8
    pub noise_scale: f32,     // offset 16
    pub drift_speed: f32,     // offset 20
    pub _pad0: [f32; 2],      // offset 24
    pub color_a: [f32; 3],    // offset 32
    pub _pad1: f32,
    pub color_b: [f32; 3],    // offset 48
    pub _pad2: f32,
    pub color_c: [f32; 3],    // offset 64
    pub _pad3: f32,
}

impl GradientConfig {
    /// Uniform values for a frame
    pub fn uniforms(&self, time: f32, width: u32, height: u32) -> GradientUniforms {
        GradientUniforms {
            time,
            warp_strength: self.warp_strength,
            resolution: [width as f32, height as f32],
            noise_scale: self.noise_scale,
            drift_speed: self.drift_speed,
            _pad0: [0.0; 2],
            color_a: rgb_from_hex(self.colors[0]),
            _pad1: 0.0,
            color_b: rgb_from_hex(self.colors[1]),
            _pad2: 0.0,
            color_c: rgb_from_hex(self.colors[2]),
            _pad3: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size() {
        assert_eq!(std::mem::size_of::<GradientUniforms>(), 80);
    }

    #[test]
    fn test_uniforms_carry_config() {
        let config = GradientConfig::default();
        let u = config.uniforms(2.5, 1920, 1080);
        assert_eq!(u.time, 2.5);
        assert_eq!(u.resolution, [1920.0, 1080.0]);
        assert_eq!(u.color_b, rgb_from_hex(0xff6b35));
        assert_eq!(u.warp_strength, config.warp_strength);
    }
}
