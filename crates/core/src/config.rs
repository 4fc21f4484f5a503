//! Tuning constants for the flame simulation.
//!
//! Per-tick probabilities and cadences here are calibrated for the fixed
//! 60 Hz tick in [`TICK_RATE_HZ`]; changing the tick rate requires rescaling
//! [`SHRINK_PROBABILITY`] and the millisecond intervals to match.

/// Logical window width in pixels.
pub const SCREEN_WIDTH: f32 = 800.0;

/// Logical window height in pixels.
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Width of the horizontal band embers spawn in, centered on the window.
pub const SPAWN_BAND_WIDTH: f32 = 300.0;

/// Left edge of the spawn band.
pub const SPAWN_BAND_LEFT: f32 = (SCREEN_WIDTH - SPAWN_BAND_WIDTH) / 2.0;

/// Right edge of the spawn band.
pub const SPAWN_BAND_RIGHT: f32 = (SCREEN_WIDTH + SPAWN_BAND_WIDTH) / 2.0;

/// Embers spawn below the bottom edge, up to this many pixels deep.
pub const SPAWN_DEPTH: f32 = 100.0;

/// Fixed tick rate the per-tick probabilities are tuned for.
pub const TICK_RATE_HZ: f64 = 60.0;

/// Milliseconds between spawn bursts while the flame is alive.
pub const BURST_INTERVAL_MS: u64 = 300;

/// Embers spawned per burst.
pub const BURST_SIZE: usize = 70;

/// Temperature lost on every burst, in Kelvin.
pub const DECAY_PER_BURST: i64 = 100;

/// Milliseconds between score recomputations.
pub const SCORE_INTERVAL_MS: u64 = 1000;

/// Bytes of fuel required per Kelvin of temperature gain.
pub const FUEL_BYTES_PER_KELVIN: u64 = 20;

/// Per-tick probability that an ember shrinks (tuned for 60 ticks/s).
pub const SHRINK_PROBABILITY: f64 = 0.045;

/// Size multiplier applied on each shrink.
pub const SHRINK_FACTOR: f32 = 0.9;

/// Embers at or below this size retire.
pub const MIN_EMBER_SIZE: f32 = 3.0;

/// Spawn size bounds, derived from temperature and spawn depth.
pub const SPAWN_SIZE_MIN: f32 = 16.0;
pub const SPAWN_SIZE_MAX: f32 = 30.0;

/// Divisor mapping `temperature + spawn_y` to an ember size.
pub const SPAWN_SIZE_DIVISOR: f32 = 100.0;

/// Rise speed bounds in pixels per tick (stored negated: up is -y).
pub const RISE_SPEED_MIN: f32 = 1.4;
pub const RISE_SPEED_MAX: f32 = 3.0;

/// Divisor mapping temperature to a rise speed.
pub const RISE_SPEED_DIVISOR: f32 = 500.0;

/// Amplitude of the sinusoidal horizontal drift, in pixels.
pub const DRIFT_AMPLITUDE: f32 = 10.0;

/// Exclusive upper bound on the per-ember drift frequency (radians per ms).
pub const DRIFT_FREQUENCY_MAX: f32 = 0.006;

/// Minimum milliseconds between per-ember color refreshes.
pub const COLOR_REFRESH_INTERVAL_MS: u64 = 200;

/// Per-ember color-temperature perturbation bounds, in Kelvin.
pub const COLOR_OFFSET_MIN: i32 = 1200;
pub const COLOR_OFFSET_MAX: i32 = 1800;

/// Temperature range a fresh or reset flame starts in.
pub const IGNITION_TEMP_MIN: i32 = 7000;
pub const IGNITION_TEMP_MAX: i32 = 9000;
