//! PingPong core - deterministic 8.8 fixed-point ball physics.
//!
//! One implementation serves both the embedded build
//! (`cargo build -p pingpong_core --no-default-features`, an rlib) and the
//! host: the CLI harness, tests and the WASM bridge all link this crate.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod engine;
pub mod error;
pub mod physics;
pub mod serialization;
pub mod trig;
pub mod types;

// WASM bridge module - only compiled when wasm feature is enabled
#[cfg(feature = "wasm")]
pub mod wasm;

pub use engine::Engine;
pub use error::PhysicsError;
pub use physics::Physics;
pub use serialization::SerializationError;
pub use types::*;
