//! Per-frame wallpaper state
//!
//! `WallpaperEngine` owns everything that changes between frames for the
//! selected variant: the speed control, the scene clock, the FPS meter and
//! the scene data. It has no browser or GPU dependencies; the renderer reads
//! from it after each `tick`.

use crate::camera::{PerspectiveCamera, Viewport};
use crate::clock::SceneClock;
use crate::config::WallpaperConfig;
use crate::fps::FpsMeter;
use crate::gradient::GradientConfig;
use crate::math::Mat4;
use crate::rng::Rng;
use crate::speed::{SpeedControl, SpeedSample};
use crate::starburst::{Starburst, StarburstConfig};
use crate::starfield::{Starfield, StarfieldConfig};
use crate::variant::Variant;

/// Scene data for the active variant
#[derive(Clone, Debug)]
enum Scene {
    Starburst(Starburst),
    Starfield(Starfield),
    Gradient(GradientConfig),
}

/// Result of one frame step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    /// Scene time after this frame
    pub time: f32,
    /// Speed used for this frame
    pub speed: f64,
    /// New FPS counter value, when a sample interval completed
    pub fps: Option<u32>,
    /// Stars recycled this frame (starfield only)
    pub recycled: usize,
}

/// Wallpaper simulation state
#[derive(Clone, Debug)]
pub struct WallpaperEngine {
    variant: Variant,
    viewport: Viewport,
    camera: PerspectiveCamera,
    clock: SceneClock,
    speed: SpeedControl,
    fps: FpsMeter,
    scene: Scene,
}

impl WallpaperEngine {
    /// Create the engine for `config.variant` with default scene tunables
    pub fn new(config: &WallpaperConfig, viewport: Viewport, mut rng: Rng) -> Self {
        let (camera, scene, initial_speed) = match config.variant {
            Variant::Starburst => {
                let scene_config = StarburstConfig::default();
                let speed = scene_config.global_speed;
                (
                    PerspectiveCamera::starburst(&viewport),
                    Scene::Starburst(Starburst::new(scene_config, &mut rng)),
                    speed,
                )
            }
            Variant::Starfield => {
                let camera = PerspectiveCamera::starfield(&viewport);
                let field = Starfield::new(StarfieldConfig::default(), camera.position_z, rng);
                (camera, Scene::Starfield(field), 1.0)
            }
            Variant::Gradient => {
                let scene_config = GradientConfig::default();
                let speed = scene_config.global_speed;
                (
                    PerspectiveCamera::starburst(&viewport),
                    Scene::Gradient(scene_config),
                    speed,
                )
            }
        };

        Self {
            variant: config.variant,
            viewport,
            camera,
            clock: SceneClock::new(),
            speed: SpeedControl::new(config.mode, initial_speed),
            fps: FpsMeter::new(),
            scene,
        }
    }

    /// Advance one animation frame.
    ///
    /// `delta_seconds` is wall-clock time since the previous frame and only
    /// feeds the FPS meter; motion is frame-driven.
    pub fn tick(&mut self, delta_seconds: f64) -> FrameState {
        let speed = self.speed.step();
        let time = self.clock.advance(speed) as f32;

        let recycled = match &mut self.scene {
            Scene::Starfield(field) => field.update(speed as f32),
            Scene::Starburst(_) | Scene::Gradient(_) => 0,
        };

        let fps = self.fps.record(delta_seconds).map(crate::fps::display_value);

        FrameState {
            time,
            speed,
            fps,
            recycled,
        }
    }

    /// Apply a new viewport. Only projection state changes.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.set_viewport(&viewport);
    }

    /// Feed a fetched speed sample; returns `true` if the target moved
    pub fn apply_speed_sample(&mut self, sample: SpeedSample) -> bool {
        self.speed.apply_sample(sample)
    }

    /// A speed poll failed; nothing changes
    pub fn speed_fetch_failed(&mut self) {
        self.speed.fetch_failed();
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn speed(&self) -> &SpeedControl {
        &self.speed
    }

    /// Current scene time
    pub fn time(&self) -> f32 {
        self.clock.time() as f32
    }

    /// Projection * view for the current viewport
    pub fn view_projection(&self) -> Mat4 {
        self.camera.view_projection()
    }

    pub fn starburst(&self) -> Option<&Starburst> {
        match &self.scene {
            Scene::Starburst(s) => Some(s),
            _ => None,
        }
    }

    pub fn starfield(&self) -> Option<&Starfield> {
        match &self.scene {
            Scene::Starfield(s) => Some(s),
            _ => None,
        }
    }

    pub fn gradient(&self) -> Option<&GradientConfig> {
        match &self.scene {
            Scene::Gradient(g) => Some(g),
            _ => None,
        }
    }
}
