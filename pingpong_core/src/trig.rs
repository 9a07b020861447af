//! Quarter-wave sine table and whole-degree sin/cos.
//!
//! Only 0-90° is stored; the other quadrants come from symmetry. There is no
//! interpolation between entries, so results near a table boundary can be one
//! step off the true value.

use crate::types::{Angle, Fx};

/// Number of angular steps across the quarter wave
pub const TABLE_STEPS: i32 = 32;

/// sin(i * 90 / 32) in 8.8 fixed-point, i = 0..=32
pub static SIN_TABLE: [Fx; (TABLE_STEPS + 1) as usize] = [
    0, 13, 25, 38, 50, 63, 75, 87, 100, 112, 124, 135, 147, 158, 169, 180, 190, 200, 209, 218, 226,
    234, 241, 247, 252, 254, 255, 256, 256, 256, 256, 256, 256,
];

/// Reduce any angle into [0, 360)
pub fn normalize(degrees: Angle) -> Angle {
    degrees.rem_euclid(360)
}

/// Sine of an integer angle in degrees, 8.8 fixed-point
pub fn sin(degrees: Angle) -> Fx {
    let degrees = normalize(degrees);

    let (sign, mut lookup) = if degrees > 180 {
        (-1, degrees - 180)
    } else {
        (1, degrees)
    };

    if lookup > 90 {
        lookup = 180 - lookup;
    }

    let index = ((lookup * TABLE_STEPS) / 90).min(TABLE_STEPS);
    sign * SIN_TABLE[index as usize]
}

/// Cosine of an integer angle in degrees, 8.8 fixed-point
pub fn cos(degrees: Angle) -> Fx {
    // Normalise first so `+ 90` cannot overflow
    sin(normalize(degrees) + 90)
}
