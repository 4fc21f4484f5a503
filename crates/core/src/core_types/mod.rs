//! Core types and utilities

pub mod color;
pub mod ember;
pub mod units;
pub mod vec2;

pub use color::{temperature_to_color, Rgb};
pub use ember::{Ember, EmberStatus};
pub use units::Kelvin;
pub use vec2::Vec2;
