//! Core types and constants for the deterministic ball physics engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed-point type using 8.8 format (8 fractional bits).
///
/// Stored in an `i32` so full-screen positions (`160 << 8`) never wrap;
/// callers keep magnitudes 16-bit-safe to stay in step with the 8-bit target.
pub type Fx = i32;

/// Bits of fraction in an [`Fx`]
pub const FX_SHIFT: u32 = 8;

/// One unit in fixed-point format
pub const FX_ONE: Fx = 1 << FX_SHIFT;

/// One half in fixed-point format
pub const FX_HALF: Fx = FX_ONE >> 1;

/// Angle in whole degrees. Unbounded; normalised before any table lookup.
pub type Angle = i32;

/// Screen width of the target console in pixels
pub const SCREEN_WIDTH: i32 = 160;

/// Screen height of the target console in pixels
pub const SCREEN_HEIGHT: i32 = 144;

/// Default maximum deflection either side of straight up (degrees)
pub const DEFAULT_MAX_ANGLE: Angle = 60;

/// Shallowest angle a paddle hit can produce
pub const MIN_REFLECT_ANGLE: Angle = 30;

/// Steepest angle a paddle hit can produce
pub const MAX_REFLECT_ANGLE: Angle = 150;

/// Flat surface the ball bounced off
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Floor or ceiling: vertical velocity flips
    Horizontal,
    /// Left or right wall: horizontal velocity flips
    Vertical,
}

/// Engine settings, fixed for the lifetime of a scene
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Ball speed in whole pixels per frame
    pub ball_speed: i32,
    /// Maximum deflection from straight up on an edge hit (degrees)
    pub max_angle: Angle,
    /// Paddle width in pixels
    pub paddle_width: i32,
    /// Contact tolerance above the paddle's top edge (pixels)
    pub paddle_reach_above: i32,
    /// Contact tolerance below the paddle's top edge (pixels)
    pub paddle_reach_below: i32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ball_speed: 2,
            max_angle: DEFAULT_MAX_ANGLE,
            paddle_width: 24,
            paddle_reach_above: 2,
            paddle_reach_below: 4,
        }
    }
}

/// 2D vector in fixed-point
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2 {
    pub x: Fx,
    pub y: Fx,
}

impl Vec2 {
    pub fn new(x: Fx, y: Fx) -> Self {
        Vec2 { x, y }
    }

    pub fn zero() -> Self {
        Vec2 { x: 0, y: 0 }
    }
}

/// Ball state.
///
/// `vel` is always the decomposition of `angle` at the last speed used,
/// except after a wall bounce, which flips one component and leaves `angle`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ball {
    /// Position
    pub pos: Vec2,
    /// Velocity (per frame)
    pub vel: Vec2,
    /// Launch angle in [0, 360); 0 = right, 90 = up, 270 = down
    pub angle: Angle,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, angle: Angle) -> Self {
        Ball { pos, vel, angle }
    }
}

/// Paddle as the collision routine sees it
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Paddle {
    /// Centre X (pixels)
    pub centre_x: i32,
    /// Top edge Y (pixels)
    pub top_y: i32,
}

impl Paddle {
    pub fn new(centre_x: i32, top_y: i32) -> Self {
        Paddle { centre_x, top_y }
    }
}

/// Register snapshot for save/restore
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    pub ball: Ball,
    pub active: bool,
}

/// Fixed-point utility functions
pub mod fx {
    use super::{Fx, FX_HALF, FX_SHIFT};
    use crate::error::PhysicsError;

    /// Convert an integer to fixed-point. Overflow is the caller's problem.
    pub fn to_fixed(i: i32) -> Fx {
        i << FX_SHIFT
    }

    /// Convert to integer, truncating toward negative infinity
    pub fn to_int(value: Fx) -> i32 {
        value >> FX_SHIFT
    }

    /// Convert to integer, rounding half up (negatives included)
    pub fn to_int_rounded(value: Fx) -> i32 {
        (value + FX_HALF) >> FX_SHIFT
    }

    /// Multiply two fixed-point numbers
    pub fn mul(a: Fx, b: Fx) -> Fx {
        ((a as i64) * (b as i64) >> FX_SHIFT) as Fx
    }

    /// Divide two fixed-point numbers, truncating toward zero
    pub fn div(a: Fx, b: Fx) -> Result<Fx, PhysicsError> {
        if b == 0 {
            return Err(PhysicsError::DivisionByZero);
        }
        Ok((((a as i64) << FX_SHIFT) / (b as i64)) as Fx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhysicsError;

    #[test]
    fn test_fixed_point_conversion() {
        assert_eq!(FX_ONE, 256);
        assert_eq!(fx::to_fixed(0), 0);
        assert_eq!(fx::to_fixed(1), 256);
        assert_eq!(fx::to_fixed(-1), -256);
        assert_eq!(fx::to_fixed(127), 32512);

        assert_eq!(fx::to_int(255), 0);
        assert_eq!(fx::to_int(257), 1);
        assert_eq!(fx::to_int(-256), -1);
        // Arithmetic shift floors negatives
        assert_eq!(fx::to_int(-1), -1);
    }

    #[test]
    fn test_rounding_vs_truncation() {
        assert_eq!(fx::to_int(FX_ONE - 1), 0);
        assert_eq!(fx::to_int_rounded(FX_ONE - 1), 1);
        assert_eq!(fx::to_int_rounded(128), 1);
        assert_eq!(fx::to_int_rounded(127), 0);
        assert_eq!(fx::to_int_rounded(384), 2);
        // Half-up biases negatives toward positive infinity
        assert_eq!(fx::to_int_rounded(-128), 0);
        assert_eq!(fx::to_int_rounded(-129), -1);
    }

    #[test]
    fn test_fixed_point_arithmetic() {
        assert_eq!(fx::mul(256, 256), 256);
        assert_eq!(fx::mul(512, 512), 1024);
        assert_eq!(fx::mul(384, 384), 576); // 1.5 * 1.5 = 2.25
        assert_eq!(fx::mul(-256, 256), -256);
        assert_eq!(fx::mul(-256, -256), 256);
        assert_eq!(fx::mul(64, 1024), 256);
        assert_eq!(fx::to_int(fx::mul(fx::to_fixed(127), fx::to_fixed(2))), 254);

        assert_eq!(fx::div(256, 256), Ok(256));
        assert_eq!(fx::div(256, 512), Ok(128));
        assert_eq!(fx::div(fx::to_fixed(3), fx::to_fixed(2)), Ok(384));
        assert_eq!(fx::div(256, -256), Ok(-256));
    }

    #[test]
    fn test_div_truncates_toward_zero() {
        // -1/3 = -85.33 units
        assert_eq!(fx::div(-256, 768), Ok(-85));
        assert_eq!(fx::div(256, 768), Ok(85));
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(fx::div(256, 0), Err(PhysicsError::DivisionByZero));
        assert_eq!(fx::div(0, 0), Err(PhysicsError::DivisionByZero));
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.ball_speed, 2);
        assert_eq!(config.max_angle, DEFAULT_MAX_ANGLE);
        assert_eq!(config.paddle_width, 24);
    }
}
