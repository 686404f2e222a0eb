//! Lightweight xorshift32 PRNG — no external crate needed
//!
//! Each effect owns its own seeded source, so a fixed seed reproduces an
//! exact particle layout.

#[derive(Debug)]
pub struct EffectRng {
    state: u32,
}

impl EffectRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() as f32) / (u32::MAX as f32)
    }

    /// Returns a float in [min, max)
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Returns a uniform index in [0, len). `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        (self.next_u32() as usize) % len
    }

    /// Returns a size-tier-biased speed with magnitude at least 1.
    ///
    /// Draws `tier * 0.2 + [0, 3.6)` and resamples while the result is
    /// below 1, so no particle ends up imperceptibly slow.
    pub fn tier_speed(&mut self, tier: usize) -> f32 {
        loop {
            let speed = tier as f32 * 0.2 + self.range(0.0, 3.6);
            if speed >= 1.0 {
                return speed;
            }
        }
    }
}
