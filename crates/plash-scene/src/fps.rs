//! Frames-per-second sampling for the on-screen counter

/// Seconds of frames aggregated into one reading
pub const SAMPLE_INTERVAL_SECS: f64 = 0.5;

/// Accumulates frame timings and reports an averaged rate
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FpsMeter {
    frames: u32,
    elapsed: f64,
    last_reading: f64,
}

impl FpsMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame. Returns a new reading once a full interval elapsed.
    pub fn record(&mut self, delta_seconds: f64) -> Option<f64> {
        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            self.elapsed += delta_seconds;
        }
        self.frames += 1;

        if self.elapsed >= SAMPLE_INTERVAL_SECS {
            let reading = self.frames as f64 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
            self.last_reading = reading;
            Some(reading)
        } else {
            None
        }
    }

    /// Most recent reading (0 until the first interval completes)
    pub fn last_reading(&self) -> f64 {
        self.last_reading
    }

    /// Value shown in the counter
    pub fn display(&self) -> u32 {
        display_value(self.last_reading)
    }
}

/// Round and clamp a rate to the counter's `[1, 999]` range
pub fn display_value(fps: f64) -> u32 {
    if !fps.is_finite() {
        return 1;
    }
    fps.round().clamp(1.0, 999.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_after_interval() {
        let mut meter = FpsMeter::new();
        let mut frames = 0;
        let reading = loop {
            frames += 1;
            if let Some(r) = meter.record(1.0 / 60.0) {
                break r;
            }
        };
        assert!((30..=31).contains(&frames));
        assert!((reading - 60.0).abs() < 0.5);
        assert_eq!(meter.display(), 60);
    }

    #[test]
    fn test_resets_after_reading() {
        let mut meter = FpsMeter::new();
        assert!(meter.record(0.6).is_some());
        assert!(meter.record(0.1).is_none());
    }

    #[test]
    fn test_display_clamps() {
        assert_eq!(display_value(0.0), 1);
        assert_eq!(display_value(5000.0), 999);
        assert_eq!(display_value(59.6), 60);
        assert_eq!(display_value(f64::NAN), 1);
        assert_eq!(FpsMeter::new().display(), 1);
    }
}
