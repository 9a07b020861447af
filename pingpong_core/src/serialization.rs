//! Compact binary encoding of the ball registers.

use core::fmt;

use crate::types::*;

/// Serialization errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Invalid data during deserialization
    InvalidData,
    /// Unexpected end of buffer
    UnexpectedEnd,
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidData => write!(f, "invalid snapshot data"),
            Self::UnexpectedEnd => write!(f, "snapshot buffer ended early"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SerializationError {}

impl Snapshot {
    /// Encoded size in bytes
    pub const ENCODED_LEN: usize = 19;

    /// Serialize to compact binary format.
    /// Layout: [x:4][y:4][vel_x:4][vel_y:4][angle:2][active:1], little-endian
    pub fn encode(&self) -> [u8; Self::ENCODED_LEN] {
        let mut bytes = [0u8; Self::ENCODED_LEN];

        bytes[0..4].copy_from_slice(&self.ball.pos.x.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.ball.pos.y.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.ball.vel.x.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.ball.vel.y.to_le_bytes());

        // Stored angles are always in [0, 360)
        bytes[16..18].copy_from_slice(&(self.ball.angle as u16).to_le_bytes());

        bytes[18] = self.active as u8;

        bytes
    }

    /// Deserialize from binary format
    pub fn decode(bytes: &[u8]) -> Result<Self, SerializationError> {
        if bytes.len() < Self::ENCODED_LEN {
            return Err(SerializationError::UnexpectedEnd);
        }

        let read_fx = |offset: usize| -> Fx {
            Fx::from_le_bytes([
                bytes[offset],
                bytes[offset + 1],
                bytes[offset + 2],
                bytes[offset + 3],
            ])
        };

        let angle = u16::from_le_bytes([bytes[16], bytes[17]]) as Angle;
        if angle >= 360 {
            return Err(SerializationError::InvalidData);
        }

        let active = match bytes[18] {
            0 => false,
            1 => true,
            _ => return Err(SerializationError::InvalidData),
        };

        Ok(Snapshot {
            ball: Ball {
                pos: Vec2::new(read_fx(0), read_fx(4)),
                vel: Vec2::new(read_fx(8), read_fx(12)),
                angle,
            },
            active,
        })
    }
}
