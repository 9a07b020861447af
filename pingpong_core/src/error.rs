use core::fmt;

/// Errors raised by the fixed-point and reflection math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsError {
    /// Fixed-point division by zero; there is no representable infinity
    DivisionByZero,
    /// Paddle width below zero
    InvalidPaddleWidth(i32),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "fixed-point division by zero"),
            Self::InvalidPaddleWidth(width) => {
                write!(f, "paddle width must be positive, got {width}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PhysicsError {}
