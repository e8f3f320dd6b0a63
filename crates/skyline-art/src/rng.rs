use skyline_engine::coords::Vec2;

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49_297;
const MODULUS: u64 = 233_280;

/// Deterministic linear congruential generator for static texture placement.
///
/// The generator is a plain value: the same seed always yields the same
/// sequence, and nothing outside the value advances it. Every routine that
/// scatters shapes builds its own generator from a constant or from the point it
/// draws at.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    #[inline]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed as u64 % MODULUS }
    }

    /// Generator seeded from a canvas position, rounded to whole pixels.
    pub fn from_point(p: Vec2) -> Self {
        Self::from_point_salted(p, 0)
    }

    /// Like [`from_point`](Self::from_point) with an extra salt, so two scatter
    /// routines at the same point draw independent sequences.
    pub fn from_point_salted(p: Vec2, salt: u32) -> Self {
        let x = p.x.round() as i64;
        let y = p.y.round() as i64;
        let seed = (x * 1013 + y * 7919 + salt as i64 * 104_729).rem_euclid(MODULUS as i64);
        Self { state: seed as u64 }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f32 / MODULUS as f32
    }

    /// Next value in `[lo, hi)`.
    #[inline]
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }

    /// Next index in `0..len`. Always `0` when `len == 0`.
    pub fn index(&mut self, len: usize) -> usize {
        let i = (self.next_f32() * len as f32) as usize;
        i.min(len.saturating_sub(1))
    }
}
