//! Compositing-layer constants
//!
//! The external renderer sorts draw submissions by layer before
//! compositing, so an ambient effect's layer decides whether it sits
//! behind or in front of world content.

/// Far background band
pub const LAYER_BACKGROUND0: i32 = -300;

/// Near background band. The default for ambient effects.
pub const LAYER_BACKGROUND1: i32 = -200;

/// World tiles
pub const LAYER_TILES: i32 = 0;

/// Game objects
pub const LAYER_OBJECTS: i32 = 100;

/// In front of all world content
pub const LAYER_FOREGROUND: i32 = 300;
