//! Sleet Scene - TOML ambience settings persistence
//!
//! This crate handles loading and saving the per-effect settings records
//! in TOML format. Only display settings are persisted; particle
//! populations are regenerated fresh from the RNG on every construction.

mod format;
mod loader;
mod saver;

pub use format::{AmbienceFile, AmbienceMetadata};
pub use loader::{load_ambience, load_ambience_string};
pub use saver::{save_ambience, save_ambience_string};
