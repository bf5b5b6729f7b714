//! Core 3D math types for scene projection
//!
//! Just enough linear algebra to build a perspective camera and mirror
//! shader arithmetic on the CPU.

mod mat4;
mod vec3;

pub use mat4::Mat4;
pub use vec3::Vec3;

/// Linearly remap `value` from `[min1, max1]` to `[min2, max2]`
#[inline]
pub fn map_range(value: f32, min1: f32, max1: f32, min2: f32, max2: f32) -> f32 {
    min2 + (value - min1) * (max2 - min2) / (max1 - min1)
}

/// Remap and clamp to the output range
#[inline]
pub fn map_range_clamped(value: f32, min1: f32, max1: f32, min2: f32, max2: f32) -> f32 {
    map_range(value, min1, max1, min2, max2).clamp(min2.min(max2), min2.max(max2))
}

/// Convert a packed `0xRRGGBB` color to linear-ish `[r, g, b]` in `[0, 1]`
#[inline]
pub fn rgb_from_hex(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range() {
        assert!((map_range(0.5, 0.0, 1.0, -80.0, 20.0) - (-30.0)).abs() < 0.001);
        assert!((map_range(0.0, 0.0, 1.0, -80.0, 20.0) - (-80.0)).abs() < 0.001);
    }

    #[test]
    fn test_map_range_clamped() {
        assert!((map_range_clamped(1.5, 0.0, 1.0, -80.0, 20.0) - 20.0).abs() < 0.001);
        assert!((map_range_clamped(-0.5, 0.0, 1.0, -80.0, 20.0) - (-80.0)).abs() < 0.001);
    }

    #[test]
    fn test_rgb_from_hex() {
        let [r, g, b] = rgb_from_hex(0xff6b35);
        assert!((r - 1.0).abs() < 0.001);
        assert!((g - 107.0 / 255.0).abs() < 0.001);
        assert!((b - 53.0 / 255.0).abs() < 0.001);
    }
}
