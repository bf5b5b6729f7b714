//! Starburst warp scene
//!
//! A fixed set of instanced unit boxes, stretched along Z into streaks. Each
//! instance gets four random seed vectors at startup; all motion is computed
//! in the vertex shader from those seeds and the scene time. The seeds are
//! never rewritten, so the instance buffer is uploaded exactly once.
//!
//! The `particle_*` functions mirror the shader arithmetic so the motion
//! can be tested without a GPU.

use crate::math::{map_range_clamped, rgb_from_hex, Mat4, Vec3};
use crate::rng::Rng;

/// Per-particle speed factor applied to scene time
pub const LIFE_TIME_SCALE: f32 = 0.1;

/// Z coordinate particles reach at the end of their life
pub const LIFE_END_Z: f32 = 20.0;

/// Tunables for the starburst scene
#[derive(Clone, Debug, PartialEq)]
pub struct StarburstConfig {
    /// Number of instances
    pub count: usize,
    /// Half-extent in X/Y and depth in Z of the spawn volume
    pub bounding_box: Vec3,
    pub geometry_min_size: f32,
    pub geometry_max_size: f32,
    pub geometry_min_depth: f32,
    pub geometry_max_depth: f32,
    /// Speed used in default mode and as the adaptive starting point
    pub global_speed: f64,
    pub trail: f32,
    pub glow_intensity: f32,
    pub brightness: f32,
    /// Head color as `0xRRGGBB`
    pub color: u32,
    /// Blend toward `color_gradient` along each streak
    pub use_gradient: bool,
    pub color_gradient: u32,
}

impl Default for StarburstConfig {
    fn default() -> Self {
        Self {
            count: 350,
            bounding_box: Vec3::new(10.0, 10.0, 80.0),
            geometry_min_size: 0.025,
            geometry_max_size: 0.05,
            geometry_min_depth: 2.0,
            geometry_max_depth: 5.0,
            global_speed: 5.0,
            trail: 1.0,
            glow_intensity: 2.0,
            brightness: 1.0,
            color: 0xff6b35,
            use_gradient: true,
            color_gradient: 0x4169e1,
        }
    }
}

impl StarburstConfig {
    /// Smallest per-axis box scale
    pub fn min_scale(&self) -> Vec3 {
        Vec3::new(self.geometry_min_size, self.geometry_min_size, self.geometry_min_depth)
    }

    /// Largest per-axis box scale
    pub fn max_scale(&self) -> Vec3 {
        Vec3::new(self.geometry_max_size, self.geometry_max_size, self.geometry_max_depth)
    }
}

/// Per-instance random seeds (instance-rate vertex attributes)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarburstInstance {
    /// x,z pick the box scale between min and max
    pub random_scale: [f32; 4],
    /// xyz in `[-1, 1)` position inside the bounding box; w in `[0, 1)`
    pub random_vertex: [f32; 4],
    /// x varies the particle's time rate
    pub random_simulation: [f32; 4],
    /// Per-particle color jitter
    pub random_fragment: [f32; 4],
}

impl StarburstInstance {
    /// Draw a fresh instance
    pub fn random(rng: &mut Rng) -> Self {
        Self {
            random_scale: rng.vec4(),
            random_vertex: [
                rng.range(-1.0, 1.0),
                rng.range(-1.0, 1.0),
                rng.range(-1.0, 1.0),
                rng.next_f32(),
            ],
            random_simulation: rng.vec4(),
            random_fragment: rng.vec4(),
        }
    }
}

/// Unit-box vertex with texture coordinates
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BoxVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Non-indexed unit cube centered at the origin: 6 faces x 2 triangles.
pub fn box_geometry() -> Vec<BoxVertex> {
    // Each face: origin corner, u axis, v axis (all edges length 1)
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([0.5, -0.5, 0.5], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),   // +X
        ([-0.5, -0.5, -0.5], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),  // -X
        ([-0.5, 0.5, 0.5], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),   // +Y
        ([-0.5, -0.5, -0.5], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),  // -Y
        ([-0.5, -0.5, 0.5], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),   // +Z
        ([0.5, -0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),  // -Z
    ];
    const CORNERS: [[f32; 2]; 6] = [
        [0.0, 0.0],
        [1.0, 0.0],
        [1.0, 1.0],
        [0.0, 0.0],
        [1.0, 1.0],
        [0.0, 1.0],
    ];

    let mut vertices = Vec::with_capacity(36);
    for (origin, u_axis, v_axis) in FACES {
        for [u, v] in CORNERS {
            let position = [
                origin[0] + u_axis[0] * u + v_axis[0] * v,
                origin[1] + u_axis[1] * u + v_axis[1] * v,
                origin[2] + u_axis[2] * u + v_axis[2] * v,
            ];
            vertices.push(BoxVertex { position, uv: [u, v] });
        }
    }
    vertices
}

/// Uniform block for the starburst shader.
/// NOTE: Field order must match the WGSL struct; 144 bytes total.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarburstUniforms {
    pub view_proj: [[f32; 4]; 4],    // offset 0
    pub bounding_box: [f32; 3],      // offset 64
    pub time: f32,                   // offset 76
    pub min_scale: [f32; 3],         // offset 80
    pub trail: f32,                  // offset 92
    pub max_scale: [f32; 3],         // offset 96
    pub glow_intensity: f32,         // offset 108
    pub color: [f32; 3],             // offset 112
    pub brightness: f32,             // offset 124
    pub color_gradient: [f32; 3],    // offset 128
    pub global_alpha: f32,           // offset 140
}

/// Starburst scene state
#[derive(Clone, Debug)]
pub struct Starburst {
    config: StarburstConfig,
    instances: Vec<StarburstInstance>,
}

impl Starburst {
    /// Build the scene, drawing every instance's seeds once
    pub fn new(config: StarburstConfig, rng: &mut Rng) -> Self {
        let instances = (0..config.count).map(|_| StarburstInstance::random(rng)).collect();
        Self { config, instances }
    }

    pub fn config(&self) -> &StarburstConfig {
        &self.config
    }

    /// Instance seeds, in draw order
    pub fn instances(&self) -> &[StarburstInstance] {
        &self.instances
    }

    /// Uniform values for the given frame
    pub fn uniforms(&self, time: f32, view_proj: &Mat4) -> StarburstUniforms {
        let color = rgb_from_hex(self.config.color);
        let color_gradient = if self.config.use_gradient {
            rgb_from_hex(self.config.color_gradient)
        } else {
            color
        };
        StarburstUniforms {
            view_proj: view_proj.to_cols_array(),
            bounding_box: self.config.bounding_box.to_array(),
            time,
            min_scale: self.config.min_scale().to_array(),
            trail: self.config.trail,
            max_scale: self.config.max_scale().to_array(),
            glow_intensity: self.config.glow_intensity,
            color,
            brightness: self.config.brightness,
            color_gradient,
            global_alpha: 1.0,
        }
    }
}

/// Quadratic ease-in-out on `[0, 1]`
#[inline]
pub fn ease_in_out_quad(x: f32) -> f32 {
    if x < 0.5 {
        2.0 * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(2) / 2.0
    }
}

/// Eased life phase in `[0, 1]` of an instance at scene time `time`
pub fn particle_life(instance: &StarburstInstance, time: f32) -> f32 {
    let t = time * LIFE_TIME_SCALE * (instance.random_simulation[0] + 0.5) + instance.random_vertex[2];
    ease_in_out_quad(t.rem_euclid(1.0))
}

/// Z position for a life phase: from the back of the box to just past the viewer
#[inline]
pub fn particle_depth(life: f32, bounding_box_z: f32) -> f32 {
    map_range_clamped(life, 0.0, 1.0, -bounding_box_z, LIFE_END_Z)
}

/// Opacity envelope: fade in over the first tenth of life, out over the last
pub fn life_alpha(life: f32) -> f32 {
    smoothstep(0.0, 0.1, life) * (1.0 - smoothstep(0.9, 1.0, life))
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_count_matches_config() {
        let mut rng = Rng::seeded(11);
        let scene = Starburst::new(StarburstConfig::default(), &mut rng);
        assert_eq!(scene.instances().len(), 350);
    }

    #[test]
    fn test_instance_ranges() {
        let mut rng = Rng::seeded(5);
        for _ in 0..500 {
            let inst = StarburstInstance::random(&mut rng);
            assert!(inst.random_vertex[..3].iter().all(|v| (-1.0..1.0).contains(v)));
            assert!((0.0..1.0).contains(&inst.random_vertex[3]));
            assert!(inst.random_scale.iter().all(|v| (0.0..1.0).contains(v)));
        }
    }

    #[test]
    fn test_instance_layout_size() {
        assert_eq!(std::mem::size_of::<StarburstInstance>(), 64);
        assert_eq!(std::mem::size_of::<BoxVertex>(), 20);
        assert_eq!(std::mem::size_of::<StarburstUniforms>(), 144);
    }

    #[test]
    fn test_box_geometry() {
        let verts = box_geometry();
        assert_eq!(verts.len(), 36);
        for v in &verts {
            assert!(v.position.iter().all(|c| (c.abs() - 0.5).abs() < 1e-6));
            assert!(v.uv.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn test_ease_in_out_quad() {
        assert!(ease_in_out_quad(0.0).abs() < 1e-6);
        assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_in_out_quad(1.0) - 1.0).abs() < 1e-6);
        assert!(ease_in_out_quad(0.25) < 0.25);
        assert!(ease_in_out_quad(0.75) > 0.75);
    }

    #[test]
    fn test_particle_life_wraps() {
        let inst = StarburstInstance {
            random_scale: [0.0; 4],
            random_vertex: [0.0, 0.0, -0.25, 0.0],
            random_simulation: [0.5, 0.0, 0.0, 0.0],
            random_fragment: [0.0; 4],
        };
        // rate = 0.1 * (0.5 + 0.5) = 0.1; phase at t=0 is fract(-0.25) = 0.75
        assert!((particle_life(&inst, 0.0) - ease_in_out_quad(0.75)).abs() < 1e-5);
        // a full period later the phase repeats
        assert!((particle_life(&inst, 10.0) - particle_life(&inst, 0.0)).abs() < 1e-4);
        for i in 0..200 {
            let life = particle_life(&inst, i as f32 * 0.37);
            assert!((0.0..=1.0).contains(&life));
        }
    }

    #[test]
    fn test_particle_depth_range() {
        assert!((particle_depth(0.0, 80.0) + 80.0).abs() < 1e-5);
        assert!((particle_depth(1.0, 80.0) - LIFE_END_Z).abs() < 1e-5);
        assert!((particle_depth(0.8, 80.0) - 0.0).abs() < 1e-4);
    }

    #[test]
    fn test_life_alpha_envelope() {
        assert_eq!(life_alpha(0.0), 0.0);
        assert!((life_alpha(0.5) - 1.0).abs() < 1e-6);
        assert!(life_alpha(1.0).abs() < 1e-6);
    }

    #[test]
    fn test_uniforms_gradient_toggle() {
        let mut rng = Rng::seeded(2);
        let config = StarburstConfig {
            use_gradient: false,
            count: 1,
            ..Default::default()
        };
        let scene = Starburst::new(config, &mut rng);
        let u = scene.uniforms(1.0, &Mat4::IDENTITY);
        assert_eq!(u.color, u.color_gradient);
        assert_eq!(u.bounding_box, [10.0, 10.0, 80.0]);
        assert_eq!(u.max_scale, [0.05, 0.05, 5.0]);
    }
}
