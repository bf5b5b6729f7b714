//! Column-major 4x4 matrix matching WGSL `mat4x4<f32>` layout

use super::Vec3;

/// 4x4 matrix stored as four columns
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    pub cols: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    /// Identity matrix
    pub const IDENTITY: Mat4 = Mat4 {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Right-handed perspective projection with a `[0, 1]` depth range.
    ///
    /// The camera looks down -Z; `fov_y` is in radians.
    pub fn perspective_rh(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y * 0.5).tan();
        let range = near - far;
        Self {
            cols: [
                [f / aspect, 0.0, 0.0, 0.0],
                [0.0, f, 0.0, 0.0],
                [0.0, 0.0, far / range, -1.0],
                [0.0, 0.0, near * far / range, 0.0],
            ],
        }
    }

    /// Translation matrix
    pub fn translation(t: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = [t.x, t.y, t.z, 1.0];
        m
    }

    /// Matrix product `self * rhs`
    pub fn mul(&self, rhs: &Mat4) -> Mat4 {
        let mut out = [[0.0f32; 4]; 4];
        for (c, col) in out.iter_mut().enumerate() {
            for (r, cell) in col.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.cols[k][r] * rhs.cols[c][k]).sum();
            }
        }
        Mat4 { cols: out }
    }

    /// Transform a point, returning homogeneous clip coordinates
    pub fn transform_point(&self, p: Vec3) -> [f32; 4] {
        let v = [p.x, p.y, p.z, 1.0];
        let mut out = [0.0f32; 4];
        for (r, cell) in out.iter_mut().enumerate() {
            *cell = (0..4).map(|k| self.cols[k][r] * v[k]).sum();
        }
        out
    }

    /// Raw columns for uniform upload
    #[inline]
    pub fn to_cols_array(&self) -> [[f32; 4]; 4] {
        self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_mul() {
        let t = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Mat4::IDENTITY.mul(&t), t);
        assert_eq!(t.mul(&Mat4::IDENTITY), t);
    }

    #[test]
    fn test_translation_point() {
        let t = Mat4::translation(Vec3::new(0.0, 0.0, -2.0));
        let p = t.transform_point(Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(p, [1.0, 1.0, -1.0, 1.0]);
    }

    #[test]
    fn test_perspective_depth_range() {
        let proj = Mat4::perspective_rh(60f32.to_radians(), 16.0 / 9.0, 0.1, 1000.0);

        let near = proj.transform_point(Vec3::new(0.0, 0.0, -0.1));
        assert!((near[2] / near[3]).abs() < 1e-4);

        let far = proj.transform_point(Vec3::new(0.0, 0.0, -1000.0));
        assert!((far[2] / far[3] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_perspective_aspect_scales_x() {
        let wide = Mat4::perspective_rh(1.0, 2.0, 0.1, 10.0);
        let square = Mat4::perspective_rh(1.0, 1.0, 0.1, 10.0);
        assert!((wide.cols[0][0] * 2.0 - square.cols[0][0]).abs() < 1e-5);
        assert!((wide.cols[1][1] - square.cols[1][1]).abs() < 1e-5);
    }
}
