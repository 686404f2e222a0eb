//! Sleet Particles - ambient particle layers with toroidal scrolling
//!
//! Provides viewport-tiling ambient effects with:
//! - A shared wrap-and-draw base remapping virtual-space particles into
//!   wrapped screen coordinates as the camera scrolls
//! - Snow, ghost, and cloud variants, each seeding its own population
//!   and integrating its own per-frame motion
//! - One persisted setting per effect (the compositing layer) in named
//!   TOML records; populations are reseeded fresh every construction
//! - A seeded per-effect RNG, so layouts are reproducible in tests
//!
//! A host drives every active effect once per frame: `update(dt)` first,
//! then `draw(canvas)`.

pub mod cloud;
pub mod effect;
pub mod ghost;
pub mod particle;
pub mod rand;
pub mod snow;

pub use cloud::{CloudParticle, CloudParticleSystem};
pub use effect::ParticleEffect;
pub use ghost::{GhostParticle, GhostParticleSystem};
pub use particle::{wrap, Particle, ParticleSystem};
pub use rand::EffectRng;
pub use snow::{SnowParticle, SnowParticleSystem};
