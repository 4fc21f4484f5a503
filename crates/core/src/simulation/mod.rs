//! Flame simulation state machine.
//!
//! [`FlameSimulation`] owns the temperature, the ember pool, and the
//! score/fuel bookkeeping. The frontend drives it with a monotonic
//! millisecond clock: `update` once per fixed tick, `add_fuel` for file
//! drops, `reset` for the restart key. The flame is **alive** while its
//! temperature sits above [`Kelvin::FLOOR`] and **extinguished** once
//! periodic decay drags it down there; the crossing itself happens inside
//! `update`, which is the only place temperature decreases.

pub mod pool;

pub use pool::EmberPool;

use crate::config::{
    BURST_INTERVAL_MS, BURST_SIZE, DECAY_PER_BURST, FUEL_BYTES_PER_KELVIN, IGNITION_TEMP_MAX,
    IGNITION_TEMP_MIN, SCORE_INTERVAL_MS, SCREEN_HEIGHT, SPAWN_BAND_LEFT, SPAWN_BAND_RIGHT,
    SPAWN_DEPTH,
};
use crate::core_types::ember::Ember;
use crate::core_types::units::Kelvin;
use crate::fuel::{FuelError, FuelGain, FuelProbe};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Tip shown while the flame burns.
const TIP_FEED: &str = "Feed me more files as fuel!";

/// Tip shown after the flame dies.
const TIP_GAME_OVER: &str = "Game Over!\nPress <Spacebar> to reset the fire";

/// Tip shown when a file is dropped twice.
const TIP_DUPLICATE: &str = "This file has been thrown into the fire!";

/// The whole game, minus the window.
pub struct FlameSimulation {
    temperature: Kelvin,
    embers: EmberPool,

    /// Seconds survived this round.
    score: u64,
    /// Highest score reached since process start; survives resets.
    best_score: u64,

    /// Status line shown under the temperature readout.
    tip: String,

    /// Files already burned this round; duplicates are rejected.
    consumed: FxHashSet<PathBuf>,

    started_ms: u64,
    last_burst_ms: u64,
    last_score_ms: u64,

    rng: StdRng,
}

impl FlameSimulation {
    /// Start a fresh flame. `now_ms` is the current game-clock reading.
    pub fn new(now_ms: u64) -> Self {
        Self::with_rng(StdRng::from_os_rng(), now_ms)
    }

    /// Start a fresh flame with a deterministic random source.
    pub fn with_seed(seed: u64, now_ms: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), now_ms)
    }

    fn with_rng(rng: StdRng, now_ms: u64) -> Self {
        let mut sim = FlameSimulation {
            temperature: Kelvin::FLOOR,
            embers: EmberPool::new(),
            score: 0,
            best_score: 0,
            tip: String::new(),
            consumed: FxHashSet::default(),
            started_ms: now_ms,
            last_burst_ms: now_ms,
            last_score_ms: now_ms,
            rng,
        };
        sim.ignite(now_ms);
        sim
    }

    /// Light (or relight) the flame: fresh temperature, score, and fuel
    /// history. Best score and in-flight embers are deliberately kept.
    fn ignite(&mut self, now_ms: u64) {
        self.temperature = Kelvin::clamped(
            self.rng
                .random_range(IGNITION_TEMP_MIN..=IGNITION_TEMP_MAX),
        );
        self.score = 0;
        self.tip = TIP_FEED.to_string();
        self.consumed.clear();
        self.started_ms = now_ms;
        self.last_burst_ms = now_ms;
        self.last_score_ms = now_ms;
        info!(temperature = %self.temperature, "flame ignited");
    }

    /// The flame burns while the temperature is above the floor.
    pub fn is_alive(&self) -> bool {
        self.temperature > Kelvin::FLOOR
    }

    /// Advance one fixed tick.
    ///
    /// Embers always advance, even after the flame dies - they finish their
    /// rise and retire naturally. While alive, every 300 ms a burst of 70
    /// embers spawns in the band under the window and the temperature decays
    /// by 100 K; if that decay reaches the floor, the round ends here. The
    /// score clock keeps counting within the tick that killed the flame,
    /// matching the decay-then-score ordering of a single update pass.
    pub fn update(&mut self, now_ms: u64) {
        self.embers
            .advance_all(now_ms, self.temperature, &mut self.rng);

        if !self.is_alive() {
            return;
        }

        // Saturating: a frontend clock hiccup must stall the timers, not
        // wrap them.
        if now_ms.saturating_sub(self.last_burst_ms) >= BURST_INTERVAL_MS {
            self.last_burst_ms = now_ms;
            self.spawn_burst();

            self.temperature = self.temperature.offset(-DECAY_PER_BURST);
            if !self.is_alive() {
                if self.score > self.best_score {
                    self.best_score = self.score;
                }
                self.tip = TIP_GAME_OVER.to_string();
                info!(score = self.score, best = self.best_score, "flame extinguished");
            }
        }

        if now_ms.saturating_sub(self.last_score_ms) >= SCORE_INTERVAL_MS {
            self.last_score_ms = now_ms;
            self.score = now_ms.saturating_sub(self.started_ms) / 1000;
        }
    }

    fn spawn_burst(&mut self) {
        for _ in 0..BURST_SIZE {
            let x = self.rng.random_range(SPAWN_BAND_LEFT..=SPAWN_BAND_RIGHT);
            let y = SCREEN_HEIGHT + self.rng.random_range(0.0..=SPAWN_DEPTH);
            let ember = Ember::spawn(&mut self.rng, self.temperature, x, y);
            self.embers.insert(ember);
        }
        debug!(
            count = BURST_SIZE,
            pooled = self.embers.len(),
            "spawned ember burst"
        );
    }

    /// Throw a file into the fire.
    ///
    /// Each 20 bytes of file size is worth one Kelvin, clamped to the valid
    /// temperature range. A file only burns once per round; rereading its
    /// size after a probe failure is allowed. Extinguished flames take no
    /// fuel and leave the status line alone.
    ///
    /// An `Ok` return is the "fuel accepted" signal - the frontend plays
    /// the gain sound off it.
    pub fn add_fuel(
        &mut self,
        probe: &impl FuelProbe,
        path: &Path,
    ) -> Result<FuelGain, FuelError> {
        if !self.is_alive() {
            return Err(FuelError::Extinguished);
        }

        if self.consumed.contains(path) {
            self.tip = TIP_DUPLICATE.to_string();
            return Err(FuelError::Duplicate);
        }

        let bytes = match probe.size_of(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                self.tip = format!("Couldn't read that file.\n{err}");
                return Err(FuelError::Unreadable(err));
            }
        };

        self.consumed.insert(path.to_path_buf());
        let kelvin = (bytes / FUEL_BYTES_PER_KELVIN) as i64;
        self.temperature = self.temperature.offset(kelvin);
        self.tip = format!("This file is {bytes}B.\nTemperature +{kelvin}K");
        debug!(path = %path.display(), bytes, kelvin, "fuel accepted");

        Ok(FuelGain { bytes, kelvin })
    }

    /// Relight the flame after it has gone out. Ignored while alive.
    ///
    /// Embers already in flight are not cleared; they keep animating and
    /// retire on their own.
    pub fn reset(&mut self, now_ms: u64) {
        if self.is_alive() {
            return;
        }
        self.ignite(now_ms);
    }

    /// Override the temperature, for scripted starts and tests.
    pub fn set_temperature(&mut self, temperature: Kelvin) {
        self.temperature = temperature;
    }

    pub fn temperature(&self) -> Kelvin {
        self.temperature
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    /// Current status line.
    pub fn tip(&self) -> &str {
        &self.tip
    }

    pub fn embers(&self) -> &EmberPool {
        &self.embers
    }
}
