//! Speed control: constant, or nudged toward a network-reported target
//!
//! In adaptive mode a native monitor publishes `speed.json` with an
//! events-per-second figure. The page polls it and the control variable eases
//! toward the mapped target each frame. A failed poll never changes anything.

use serde::{Deserialize, Serialize};

use crate::error::WallpaperError;

/// Fraction of the remaining gap closed per frame
pub const SMOOTHING: f64 = 0.05;

/// Multiplier applied to the reported events-per-second
pub const SAMPLE_GAIN: f64 = 2.0;

/// Lowest target speed, so the scene never freezes
pub const MIN_TARGET_SPEED: f64 = 0.5;

/// How the speed control is driven
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedMode {
    /// Constant speed, no polling
    #[default]
    Default,
    /// Speed follows the polled endpoint
    Adaptive,
}

impl SpeedMode {
    /// Parse from a query value (e.g., "adaptive")
    pub fn from_id(id: &str) -> Result<Self, WallpaperError> {
        match id.to_lowercase().as_str() {
            "default" => Ok(SpeedMode::Default),
            "adaptive" => Ok(SpeedMode::Adaptive),
            _ => Err(WallpaperError::UnknownMode(id.to_string())),
        }
    }

    /// Get the string ID for this mode
    pub fn id(&self) -> &'static str {
        match self {
            SpeedMode::Default => "default",
            SpeedMode::Adaptive => "adaptive",
        }
    }

    /// Whether the endpoint should be polled
    pub fn polls(&self) -> bool {
        *self == SpeedMode::Adaptive
    }
}

/// Body of the speed endpoint
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeedSample {
    /// Events per second (moving average) reported by the monitor
    pub speed: f64,
}

impl SpeedSample {
    /// Map the raw rate to a scene speed target
    pub fn target(&self) -> f64 {
        (self.speed * SAMPLE_GAIN).max(MIN_TARGET_SPEED)
    }
}

/// Parse a `speed.json` body
pub fn parse_sample(body: &str) -> Result<SpeedSample, WallpaperError> {
    Ok(serde_json::from_str(body)?)
}

/// Scalar speed control written once per frame
#[derive(Clone, Debug, PartialEq)]
pub struct SpeedControl {
    mode: SpeedMode,
    current: f64,
    target: f64,
}

impl SpeedControl {
    /// Create a control resting at `initial`
    pub fn new(mode: SpeedMode, initial: f64) -> Self {
        Self {
            mode,
            current: initial,
            target: initial,
        }
    }

    pub fn mode(&self) -> SpeedMode {
        self.mode
    }

    /// Speed to use for this frame
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Value `current` is easing toward
    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Record a freshly fetched sample.
    ///
    /// Returns `true` if the target changed. Samples are ignored in default
    /// mode, and non-finite rates are dropped like a failed fetch.
    pub fn apply_sample(&mut self, sample: SpeedSample) -> bool {
        if !self.mode.polls() || !sample.speed.is_finite() {
            return false;
        }
        let target = sample.target();
        let changed = target != self.target;
        self.target = target;
        changed
    }

    /// A poll failed; keep the last good target.
    #[inline]
    pub fn fetch_failed(&mut self) {}

    /// Advance one frame toward the target
    pub fn step(&mut self) -> f64 {
        if self.mode.polls() {
            self.current += (self.target - self.current) * SMOOTHING;
        }
        self.current
    }
}
