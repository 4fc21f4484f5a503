//! Semantic unit type for the flame temperature.
//!
//! The flame temperature lives in an abstract Kelvin-like scale bounded to
//! `[1000, 9000]`. Wrapping it in a newtype keeps the clamping in one place:
//! every constructor and arithmetic helper re-clamps, so no public path can
//! produce an out-of-range value. The color model takes a raw `f64` instead,
//! because per-ember cooling offsets push the *rendered* temperature above
//! the flame's ceiling on purpose.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

/// Flame temperature in abstract Kelvin, clamped to `[FLOOR, CEIL]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kelvin(i32);

impl Kelvin {
    /// Coldest representable temperature; the flame is extinguished here.
    pub const FLOOR: Kelvin = Kelvin(1000);

    /// Hottest representable temperature.
    pub const CEIL: Kelvin = Kelvin(9000);

    /// Create a temperature, clamping into the valid range.
    pub fn clamped(value: i32) -> Self {
        Kelvin(value.clamp(Self::FLOOR.0, Self::CEIL.0))
    }

    /// Apply a signed delta and re-clamp.
    ///
    /// The delta is `i64` because fuel gains come from file byte sizes and
    /// can exceed `i32` before clamping.
    pub fn offset(self, delta: i64) -> Self {
        let shifted = i64::from(self.0) + delta;
        Kelvin(shifted.clamp(i64::from(Self::FLOOR.0), i64::from(Self::CEIL.0)) as i32)
    }

    /// Temperature as `f32` for screen-space math.
    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }

    /// Temperature as `f64` for the color model.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Deref for Kelvin {
    type Target = i32;
    #[inline]
    fn deref(&self) -> &i32 {
        &self.0
    }
}

impl PartialOrd for Kelvin {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kelvin {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl fmt::Display for Kelvin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.0)
    }
}
