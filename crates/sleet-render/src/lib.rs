//! Sleet Render - Draw-submission seam for ambient effects
//!
//! This crate defines the drawing-context contract effects draw through
//! each frame:
//! - `Canvas` - translation state, transform stack, and draw submission
//! - `TransformScope` - scoped push/pop guard for the transform stack
//! - `DrawList` - recording canvas for headless hosts and tests
//! - `Drawable` / `DrawableCatalog` - opaque image handles keyed by name
//! - `Viewport` - visible screen extent
//! - `layers` - compositing order constants

mod canvas;
mod drawable;
pub mod layers;
mod viewport;

pub use canvas::{Canvas, DrawCommand, DrawList, TransformScope};
pub use drawable::{Drawable, DrawableCatalog, DrawableHandle};
pub use viewport::Viewport;
