//! Stride Core - Core types and utilities for the Stride locomotion stack
//!
//! This crate provides the foundational types shared by the other crates:
//! - Mathematical primitives (re-exported from glam)
//! - Transform and entity identifiers for actors and cameras
//! - The frame clock that drives variable-rate and fixed-rate phases

pub mod time;
pub mod types;

pub use glam::{Quat, Vec2, Vec3};
pub use time::{GameTime, TimeConfig};
pub use types::{axis, EntityId, Transform};
