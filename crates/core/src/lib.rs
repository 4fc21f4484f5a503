//! Flame Simulation Core Library
//!
//! Headless simulation for the Flame Protector game: a flame whose temperature
//! decays over time and is replenished by dropping files into it as fuel. The
//! crate owns the particle simulation (spawning, drift, shrink, retirement),
//! the black-body color model, and the score/fuel bookkeeping. It has no
//! opinion about windowing, rendering, or audio; a frontend drives it with a
//! millisecond clock and reads back ember positions, sizes, and colors.
//!
//! ## Structure
//!
//! - [`core_types`] - value types: `Kelvin`, `Rgb`, `Vec2`, and the [`Ember`]
//!   particle itself
//! - [`simulation`] - the [`FlameSimulation`] state machine and [`EmberPool`]
//! - [`fuel`] - the filesystem seam used to convert dropped files into heat
//! - [`config`] - tuning constants, calibrated for a 60 Hz fixed tick

// Core types and utilities
pub mod core_types;

// Tuning constants (window geometry, cadences, probabilities)
pub mod config;

// Fuel intake seam (filesystem probe, fuel errors)
pub mod fuel;

// Simulation state machine and ember pool
pub mod simulation;

// Re-export core types
pub use core_types::{temperature_to_color, Ember, EmberStatus, Kelvin, Rgb, Vec2};

// Re-export fuel seam
pub use fuel::{FsProbe, FuelError, FuelGain, FuelProbe};

// Re-export simulation types
pub use simulation::{EmberPool, FlameSimulation};
