use std::fmt::Display;

/// A closed interval `[lo, hi]` on the real line.
///
/// Invariant: lo <= hi
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    pub fn new(lo: f64, hi: f64) -> Interval {
        if lo <= hi {
            Self { lo, hi }
        } else {
            Self { lo: hi, hi: lo }
        }
    }

    fn new_unchecked(lo: f64, hi: f64) -> Interval {
        debug_assert!(lo <= hi);
        Self { lo, hi }
    }

    pub fn point(val: f64) -> Self {
        Self::new_unchecked(val, val)
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Keeps the part of the interval left of `mid`. If `mid` lies outside,
    /// it gets clamped, so the result is always a sub-interval.
    pub fn split_left(&self, mid: f64) -> Self {
        Self::new_unchecked(self.lo, mid.clamp(self.lo, self.hi))
    }

    pub fn split_right(&self, mid: f64) -> Self {
        Self::new_unchecked(mid.clamp(self.lo, self.hi), self.hi)
    }

    pub fn midpoint(&self) -> f64 {
        (self.lo + self.hi) / 2.0
    }

    pub fn widen(self, value: f64) -> Self {
        self + Self::new_unchecked(-value.abs(), value.abs())
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }
}

impl std::ops::Add<Interval> for Interval {
    type Output = Interval;

    fn add(self, rhs: Self) -> Self {
        Self::new_unchecked(self.lo + rhs.lo, self.hi + rhs.hi)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
