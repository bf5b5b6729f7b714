//! Starfield streak scene
//!
//! Stars live in a sphere pushed back along -Z and fly toward the camera.
//! Each frame every star advances, stars that pass the viewer are redrawn
//! in place, and two flat buffers (positions and colors, two vertices per
//! star) are rewritten for a line-list draw.

use std::f32::consts::PI;

use crate::math::Mat4;
use crate::rng::Rng;

/// Floats per star in each buffer (two xyz / rgb vertices)
pub const FLOATS_PER_STAR: usize = 6;

/// Minimum streak length in world units
pub const MIN_STREAK: f32 = 5.0;

/// Streak length per unit of velocity at the sphere center
pub const STREAK_SCALE: f32 = 30.0;

/// Tail color as a fraction of the head color
pub const TAIL_DIM: f32 = 0.2;

/// Tunables for the starfield scene
#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldConfig {
    pub count: usize,
    /// Distance moved per frame per unit velocity
    pub speed: f32,
    /// Radius of the spawn sphere (also its offset along -Z)
    pub spread: f32,
    /// How far past the camera a star travels before it is recycled
    pub recycle_margin: f32,
    /// Line opacity
    pub opacity: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 8000,
            speed: 2.5,
            spread: 800.0,
            recycle_margin: 50.0,
            opacity: 0.8,
        }
    }
}

/// A single simulated star
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub velocity: f32,
    pub color: [f32; 3],
}

impl Star {
    /// Draw a new star from the spawn distribution
    pub fn spawn(rng: &mut Rng, spread: f32) -> Self {
        let mut star = Star::default();
        star.reset(rng, spread);
        star
    }

    /// Redraw position, velocity and color.
    ///
    /// Direction is uniform on the sphere; radius is uniform in
    /// `[0, spread)` (so density rises toward the center).
    pub fn reset(&mut self, rng: &mut Rng, spread: f32) {
        let theta = rng.next_f32() * PI * 2.0;
        let phi = (rng.next_f32() * 2.0 - 1.0).acos();
        let radius = rng.next_f32() * spread;

        self.x = radius * phi.sin() * theta.cos();
        self.y = radius * phi.sin() * theta.sin();
        self.z = radius * phi.cos() - spread;
        self.velocity = rng.next_f32() * 1.5 + 0.5;
        self.color = star_color(rng);
    }

    /// Move toward the camera. Returns `true` if the star passed
    /// `threshold` and was recycled.
    pub fn update(&mut self, speed: f32, threshold: f32, rng: &mut Rng, spread: f32) -> bool {
        self.z += speed * self.velocity;
        if self.z > threshold {
            self.reset(rng, spread);
            true
        } else {
            false
        }
    }
}

/// Pick a star color: half blue, a third white, the rest orange
fn star_color(rng: &mut Rng) -> [f32; 3] {
    let class = rng.next_f32();
    if class < 0.5 {
        [0.4 + rng.next_f32() * 0.3, 0.7 + rng.next_f32() * 0.3, 1.0]
    } else if class < 0.85 {
        let brightness = 0.7 + rng.next_f32() * 0.3;
        [brightness, brightness, brightness]
    } else {
        [1.0, 0.6 + rng.next_f32() * 0.4, 0.2 + rng.next_f32() * 0.3]
    }
}

/// Streak length: closer stars (larger z) draw longer trails
#[inline]
pub fn streak_length(star: &Star, spread: f32) -> f32 {
    (STREAK_SCALE * star.velocity * (1.0 + star.z / spread)).max(MIN_STREAK)
}

/// Interleaved line vertex for upload (position + color)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Uniform block for the starfield shader (80 bytes)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarfieldUniforms {
    pub view_proj: [[f32; 4]; 4], // offset 0
    pub opacity: f32,             // offset 64
    pub _pad: [f32; 3],           // offset 68 - padding to 80 bytes
}

/// Starfield scene state
#[derive(Clone, Debug)]
pub struct Starfield {
    config: StarfieldConfig,
    stars: Vec<Star>,
    positions: Vec<f32>,
    colors: Vec<f32>,
    recycle_threshold: f32,
    rng: Rng,
}

impl Starfield {
    /// Spawn `config.count` stars. Stars are recycled once they pass
    /// `camera_z + recycle_margin`.
    pub fn new(config: StarfieldConfig, camera_z: f32, mut rng: Rng) -> Self {
        let stars: Vec<Star> = (0..config.count)
            .map(|_| Star::spawn(&mut rng, config.spread))
            .collect();
        let len = config.count * FLOATS_PER_STAR;
        let recycle_threshold = camera_z + config.recycle_margin;

        let mut field = Self {
            config,
            stars,
            positions: vec![0.0; len],
            colors: vec![0.0; len],
            recycle_threshold,
            rng,
        };
        field.write_buffers();
        field
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Line endpoints: head xyz then tail xyz per star
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Line colors: head rgb then tail rgb per star
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn recycle_threshold(&self) -> f32 {
        self.recycle_threshold
    }

    /// Advance every star one frame at `speed_scale` x the configured speed
    /// and rewrite both buffers. Returns the number of recycled stars.
    pub fn update(&mut self, speed_scale: f32) -> usize {
        let speed = self.config.speed * speed_scale;
        let spread = self.config.spread;
        let threshold = self.recycle_threshold;

        let mut recycled = 0;
        for star in &mut self.stars {
            if star.update(speed, threshold, &mut self.rng, spread) {
                recycled += 1;
            }
        }
        self.write_buffers();
        recycled
    }

    /// Interleave both buffers into GPU vertices
    pub fn line_vertices(&self) -> Vec<LineVertex> {
        let mut out = Vec::with_capacity(self.stars.len() * 2);
        self.fill_line_vertices(&mut out);
        out
    }

    /// Same as [`Starfield::line_vertices`], reusing `out`'s allocation
    pub fn fill_line_vertices(&self, out: &mut Vec<LineVertex>) {
        out.clear();
        out.extend(
            self.positions
                .chunks_exact(3)
                .zip(self.colors.chunks_exact(3))
                .map(|(p, c)| LineVertex {
                    position: [p[0], p[1], p[2]],
                    color: [c[0], c[1], c[2]],
                }),
        );
    }

    /// Uniform values for a frame
    pub fn uniforms(&self, view_proj: &Mat4) -> StarfieldUniforms {
        StarfieldUniforms {
            view_proj: view_proj.to_cols_array(),
            opacity: self.config.opacity,
            _pad: [0.0; 3],
        }
    }

    fn write_buffers(&mut self) {
        let spread = self.config.spread;
        let stars = &self.stars;
        let positions = self.positions.chunks_exact_mut(FLOATS_PER_STAR);
        let colors = self.colors.chunks_exact_mut(FLOATS_PER_STAR);

        for ((star, pos), col) in stars.iter().zip(positions).zip(colors) {
            let streak = streak_length(star, spread);
            pos.copy_from_slice(&[star.x, star.y, star.z, star.x, star.y, star.z - streak]);

            let [r, g, b] = star.color;
            col.copy_from_slice(&[r, g, b, r * TAIL_DIM, g * TAIL_DIM, b * TAIL_DIM]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(count: usize) -> StarfieldConfig {
        StarfieldConfig {
            count,
            ..Default::default()
        }
    }

    #[test]
    fn test_spawn_inside_sphere() {
        let mut rng = Rng::seeded(8);
        for _ in 0..2000 {
            let s = Star::spawn(&mut rng, 800.0);
            let dz = s.z + 800.0;
            let r = (s.x * s.x + s.y * s.y + dz * dz).sqrt();
            assert!(r <= 800.0 + 1e-2);
            assert!((0.5..2.0).contains(&s.velocity));
        }
    }

    #[test]
    fn test_color_classes() {
        let mut rng = Rng::seeded(21);
        let (mut blue, mut white, mut orange) = (0, 0, 0);
        for _ in 0..5000 {
            let [r, g, b] = star_color(&mut rng);
            if b == 1.0 && r < 0.7 {
                blue += 1;
                assert!((0.7..1.0).contains(&g));
            } else if r == g && g == b {
                white += 1;
                assert!((0.7..1.0).contains(&r));
            } else {
                orange += 1;
                assert_eq!(r, 1.0);
                assert!((0.2..0.5).contains(&b));
            }
        }
        assert!(blue > white && white > orange && orange > 0);
    }

    #[test]
    fn test_buffer_lengths_fixed() {
        let mut field = Starfield::new(small_config(100), 1.0, Rng::seeded(1));
        for _ in 0..500 {
            field.update(1.0);
            assert_eq!(field.stars().len(), 100);
            assert_eq!(field.positions().len(), 600);
            assert_eq!(field.colors().len(), 600);
        }
    }

    #[test]
    fn test_streak_length_minimum() {
        let far = Star {
            z: -1600.0,
            velocity: 1.0,
            ..Default::default()
        };
        assert_eq!(streak_length(&far, 800.0), MIN_STREAK);

        let near = Star {
            z: 0.0,
            velocity: 2.0,
            ..Default::default()
        };
        assert!((streak_length(&near, 800.0) - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_buffers_follow_stars() {
        let field = Starfield::new(small_config(3), 1.0, Rng::seeded(4));
        for (i, star) in field.stars().iter().enumerate() {
            let p = &field.positions()[i * 6..i * 6 + 6];
            assert_eq!(p[0], star.x);
            assert_eq!(p[2], star.z);
            assert!((p[5] - (star.z - streak_length(star, 800.0))).abs() < 1e-4);

            let c = &field.colors()[i * 6..i * 6 + 6];
            assert_eq!(c[..3], star.color);
            assert!((c[3] - star.color[0] * TAIL_DIM).abs() < 1e-6);
        }
    }

    #[test]
    fn test_recycle_past_threshold() {
        let mut rng = Rng::seeded(13);
        let mut star = Star {
            z: 50.0,
            velocity: 1.0,
            ..Default::default()
        };
        assert!(star.update(2.5, 51.0, &mut rng, 800.0));
        assert!(star.z <= 0.0);
    }

    #[test]
    fn test_recycle_is_deterministic() {
        let mut a = Starfield::new(small_config(200), 1.0, Rng::seeded(77));
        let mut b = Starfield::new(small_config(200), 1.0, Rng::seeded(77));
        for _ in 0..400 {
            assert_eq!(a.update(1.0), b.update(1.0));
        }
        assert_eq!(a.stars(), b.stars());
    }

    #[test]
    fn test_stars_never_stay_past_threshold() {
        let mut field = Starfield::new(small_config(300), 1.0, Rng::seeded(3));
        let mut total = 0;
        for _ in 0..600 {
            total += field.update(1.0);
            let threshold = field.recycle_threshold();
            assert!(field.stars().iter().all(|s| s.z <= threshold));
        }
        assert!(total > 0);
    }

    #[test]
    fn test_line_vertices_interleave() {
        let field = Starfield::new(small_config(2), 1.0, Rng::seeded(6));
        let verts = field.line_vertices();
        assert_eq!(verts.len(), 4);
        assert_eq!(verts[1].position[2], field.positions()[5]);
        assert_eq!(verts[1].color[0], field.colors()[3]);
    }

    #[test]
    fn test_uniforms_layout() {
        assert_eq!(std::mem::size_of::<StarfieldUniforms>(), 80);
        let field = Starfield::new(small_config(1), 1.0, Rng::seeded(6));
        assert_eq!(field.uniforms(&Mat4::IDENTITY).opacity, 0.8);
    }
}
