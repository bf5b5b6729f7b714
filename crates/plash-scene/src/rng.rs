//! Seedable random source for scene attributes

/// SplitMix64 generator.
///
/// Scenes draw every random attribute through this type so tests can replay
/// a fixed stream with [`Rng::seeded`].
#[derive(Clone, Debug)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Create a generator with a fixed seed
    pub const fn seeded(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed from platform entropy (`crypto.getRandomValues` in the browser).
    ///
    /// Falls back to a fixed seed if the entropy source is unavailable.
    pub fn from_entropy() -> Self {
        let mut bytes = [0u8; 8];
        match getrandom::getrandom(&mut bytes) {
            Ok(()) => Self::seeded(u64::from_le_bytes(bytes)),
            Err(_) => Self::seeded(0x5eed_cafe_f00d_d00d),
        }
    }

    /// Next raw 64-bit value
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform `f32` in `[0, 1)`
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        // 24 high bits fit the f32 mantissa exactly
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform `f32` in `[min, max)`
    #[inline]
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Four independent uniform values
    #[inline]
    pub fn vec4(&mut self) -> [f32; 4] {
        [self.next_f32(), self.next_f32(), self.next_f32(), self.next_f32()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = Rng::seeded(42);
        let mut b = Rng::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_next_f32_in_unit_range() {
        let mut rng = Rng::seeded(1);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = Rng::seeded(9);
        for _ in 0..1000 {
            let v = rng.range(0.5, 2.0);
            assert!((0.5..2.0).contains(&v));
        }
    }

    #[test]
    fn test_distribution_covers_unit_interval() {
        let mut rng = Rng::seeded(3);
        let mut buckets = [0u32; 10];
        for _ in 0..10_000 {
            buckets[(rng.next_f32() * 10.0) as usize] += 1;
        }
        assert!(buckets.iter().all(|&n| n > 800));
    }

    #[test]
    fn test_from_entropy_produces_values() {
        let mut rng = Rng::from_entropy();
        let v = rng.next_f32();
        assert!((0.0..1.0).contains(&v));
    }
}
