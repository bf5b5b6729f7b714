//! Scene time

/// Time added per frame per unit of speed
pub const TIME_STEP: f64 = 0.01;

/// Frame-driven scene clock.
///
/// Time advances by a fixed step scaled by the current speed on every frame,
/// so the animation rate follows the display refresh rate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneClock {
    time: f64,
}

impl SceneClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scene time
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Advance one frame at `speed`, returning the new time
    pub fn advance(&mut self, speed: f64) -> f64 {
        self.time += TIME_STEP * speed;
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance() {
        let mut clock = SceneClock::new();
        clock.advance(5.0);
        clock.advance(5.0);
        assert!((clock.time() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_zero_speed_holds() {
        let mut clock = SceneClock::new();
        clock.advance(1.0);
        let t = clock.time();
        clock.advance(0.0);
        assert_eq!(clock.time(), t);
    }
}
