//! Black-body radiation color approximation.
//!
//! Maps a temperature to an RGB color using Tanner Helland's curve-fit
//! approximation of black-body radiation: below 6600K the flame reads as
//! deep red through orange to white, above it the blue channel saturates and
//! the red/green channels fall off along power curves.

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Approximate the color of a black body at the given temperature.
///
/// The temperature is in the simulation's abstract Kelvin scale. Flame
/// temperatures are clamped to `[1000, 9000]` by [`Kelvin`], but embers pass
/// a *cooled* temperature (flame temperature plus a per-ember offset scaled
/// by height) that can legitimately exceed the ceiling; any value above
/// ~955 is well-defined here. Callers must never pass a temperature at or
/// below zero, or the logarithms below leave their domain.
///
/// Deterministic and pure.
///
/// [`Kelvin`]: crate::core_types::Kelvin
pub fn temperature_to_color(temperature: f64) -> Rgb {
    let t = temperature / 100.0;

    let (red, green, blue) = if t <= 66.0 {
        let green = 99.4708025861 * t.ln() - 161.1195681661;
        let blue = if t <= 19.0 {
            0.0
        } else {
            138.5177312231 * (t - 10.0).ln() - 305.0447927307
        };
        (255.0, green, blue)
    } else {
        let red = 329.698727446 * (t - 60.0).powf(-0.1332047592);
        let green = 288.1221695283 * (t - 60.0).powf(-0.0755148492);
        (red, green, 255.0)
    };

    Rgb {
        r: red.clamp(0.0, 255.0) as u8,
        g: green.clamp(0.0, 255.0) as u8,
        b: blue.clamp(0.0, 255.0) as u8,
    }
}
