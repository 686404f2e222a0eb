//! Visible screen extent

/// The visible extent in pixels, as reported by the host window.
///
/// A plain value record; validation happens where a wrapping domain is
/// derived from it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
