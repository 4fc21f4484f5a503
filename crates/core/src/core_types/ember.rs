//! One rising ember of the flame.
//!
//! An ember is a filled square in screen space. It rises at a fixed speed
//! derived from the flame temperature at spawn time, sways horizontally on a
//! per-ember sinusoid, stochastically shrinks, and periodically re-derives
//! its color from the *current* flame temperature plus a per-ember cooling
//! offset that grows as the ember climbs. It signals its own retirement;
//! the pool does the actual removal.
//!
//! Horizontal drift is recomputed from elapsed time rather than integrated,
//! so floating-point error never accumulates into the sway.

use crate::config::{
    COLOR_OFFSET_MAX, COLOR_OFFSET_MIN, COLOR_REFRESH_INTERVAL_MS, DRIFT_AMPLITUDE,
    DRIFT_FREQUENCY_MAX, MIN_EMBER_SIZE, RISE_SPEED_DIVISOR, RISE_SPEED_MAX, RISE_SPEED_MIN,
    SCREEN_HEIGHT, SCREEN_WIDTH, SHRINK_FACTOR, SHRINK_PROBABILITY, SPAWN_SIZE_DIVISOR,
    SPAWN_SIZE_MAX, SPAWN_SIZE_MIN,
};
use crate::core_types::color::{temperature_to_color, Rgb};
use crate::core_types::units::Kelvin;
use crate::core_types::vec2::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Outcome of advancing an ember by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmberStatus {
    /// Still visible; keep it in the pool.
    Alive,
    /// Shrunk away or left the screen; drop it from the pool.
    Retired,
}

/// A single rising flame particle.
///
/// Position is the square's center in screen space (origin top-left,
/// y increasing downward). `rise_speed` is stored negative: adding it each
/// tick moves the ember up the screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ember {
    position: Vec2,
    /// Horizontal anchor the sinusoidal drift oscillates around.
    origin_x: f32,
    rise_speed: f32,
    size: f32,
    color: Rgb,
    /// Per-ember color-temperature perturbation in Kelvin, scaled by height.
    color_offset: f32,
    /// Per-ember drift frequency in radians per millisecond.
    drift_frequency: f32,
    last_color_refresh_ms: u64,
}

impl Ember {
    /// Spawn an ember at `(x, y)` from a flame at `temperature`.
    ///
    /// Hotter flames produce faster, larger embers: rise speed is
    /// `clamp(temperature / 500, 1.4, 3.0)` (negated) and size is
    /// `clamp((temperature + y) / 100, 16, 30)`.
    pub fn spawn(rng: &mut impl Rng, temperature: Kelvin, x: f32, y: f32) -> Self {
        let temp = temperature.as_f32();

        Ember {
            position: Vec2::new(x, y),
            origin_x: x,
            rise_speed: -(temp / RISE_SPEED_DIVISOR).clamp(RISE_SPEED_MIN, RISE_SPEED_MAX),
            size: ((temp + y) / SPAWN_SIZE_DIVISOR).clamp(SPAWN_SIZE_MIN, SPAWN_SIZE_MAX),
            color: temperature_to_color(temperature.as_f64()),
            color_offset: rng.random_range(COLOR_OFFSET_MIN..=COLOR_OFFSET_MAX) as f32,
            drift_frequency: rng.random_range(0.0..DRIFT_FREQUENCY_MAX),
            last_color_refresh_ms: 0,
        }
    }

    /// Advance the ember by one tick.
    ///
    /// `now_ms` is the game clock; `flame_temperature` is the flame's current
    /// (not spawn-time) temperature, so embers dim as the fire dies down.
    ///
    /// Retirement policy is symmetric: the ember retires when its square no
    /// longer intersects the window horizontally (left edge past the right
    /// side, or right edge past the left side), or when it is fully above
    /// the top edge. The top check is strict - a bottom edge exactly on
    /// y = 0 is still considered visible.
    pub fn advance(
        &mut self,
        now_ms: u64,
        flame_temperature: Kelvin,
        rng: &mut impl Rng,
    ) -> EmberStatus {
        // Drift is a pure function of elapsed time, not of the previous x.
        self.position.x =
            self.origin_x + (now_ms as f32 * self.drift_frequency).cos() * DRIFT_AMPLITUDE;
        self.position.y += self.rise_speed;

        if rng.random::<f64>() < SHRINK_PROBABILITY {
            // Center position is unchanged, so the square shrinks in place.
            self.size *= SHRINK_FACTOR;
            if self.size <= MIN_EMBER_SIZE {
                return EmberStatus::Retired;
            }
        }

        let half = self.size / 2.0;
        if self.position.y + half < 0.0
            || self.position.x - half > SCREEN_WIDTH
            || self.position.x + half < 0.0
        {
            return EmberStatus::Retired;
        }

        if now_ms.saturating_sub(self.last_color_refresh_ms) >= COLOR_REFRESH_INTERVAL_MS {
            self.last_color_refresh_ms = now_ms;
            // The cooling term scales the square's *center* y, not its top
            // edge; the difference is at most half a size (15 px), under
            // 45 K of offset, and invisible on screen.
            // On-screen embers keep y >= -half >= -15, so the cooled value
            // stays comfortably positive for the color model's logarithms.
            let cooled = flame_temperature.as_f64()
                + f64::from(self.position.y / SCREEN_HEIGHT) * f64::from(self.color_offset);
            self.color = temperature_to_color(cooled);
        }

        EmberStatus::Alive
    }

    /// Center of the ember's square, in screen space.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Side length of the ember's square.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Current display color.
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Vertical speed in pixels per tick (negative: rising).
    pub fn rise_speed(&self) -> f32 {
        self.rise_speed
    }
}
