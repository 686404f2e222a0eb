//! Sleet Core - Foundational types for the Sleet ambience engine
//!
//! This crate provides the types that all other Sleet crates depend on:
//! - `Vec2` - Virtual-space positions and offsets
//! - Error types and Result alias

mod error;
mod types;

pub use error::{Result, SleetError};
pub use types::Vec2;
