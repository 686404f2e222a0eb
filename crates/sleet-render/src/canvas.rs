//! Drawing context: translation state, transform stack, draw submission

use crate::drawable::DrawableHandle;
use sleet_core::Vec2;
use std::ops::{Deref, DerefMut};

/// The drawing context effects submit to each frame.
///
/// Positions passed to [`draw`](Canvas::draw) are interpreted in world
/// space: the current translation is subtracted at submission time.
/// Installing a zero translation therefore makes submitted positions
/// absolute screen coordinates.
pub trait Canvas {
    /// Current camera translation (scroll offset)
    fn translation(&self) -> Vec2;

    /// Replace the current translation
    fn set_translation(&mut self, translation: Vec2);

    /// Save the current translation onto the transform stack
    fn push_transform(&mut self);

    /// Restore the most recently pushed translation.
    ///
    /// Popping an empty stack leaves the current translation in place.
    fn pop_transform(&mut self);

    /// Submit one drawable at `pos` on the given compositing layer
    fn draw(&mut self, drawable: &DrawableHandle, pos: Vec2, layer: i32);
}

/// Scoped transform guard: pushes on creation, pops on drop.
///
/// Keeps push/pop balanced even when a draw pass exits early, so no
/// partial transform leaks to whatever draws next.
pub struct TransformScope<'a> {
    canvas: &'a mut dyn Canvas,
}

impl<'a> TransformScope<'a> {
    pub fn new(canvas: &'a mut dyn Canvas) -> Self {
        canvas.push_transform();
        Self { canvas }
    }
}

impl Drop for TransformScope<'_> {
    fn drop(&mut self) {
        self.canvas.pop_transform();
    }
}

impl<'a> Deref for TransformScope<'a> {
    type Target = dyn Canvas + 'a;
    fn deref(&self) -> &Self::Target {
        self.canvas
    }
}

impl<'a> DerefMut for TransformScope<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.canvas
    }
}

/// A single recorded draw submission, already remapped to screen space
#[derive(Clone, Debug)]
pub struct DrawCommand {
    pub drawable: DrawableHandle,
    pub pos: Vec2,
    pub layer: i32,
}

/// Recording canvas: collects draw commands for a host renderer (or a
/// test) to consume after the frame.
#[derive(Default)]
pub struct DrawList {
    translation: Vec2,
    stack: Vec<Vec2>,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last [`clear`](DrawList::clear),
    /// in submission order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands. Translation state is kept.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for DrawList {
    fn translation(&self) -> Vec2 {
        self.translation
    }

    fn set_translation(&mut self, translation: Vec2) {
        self.translation = translation;
    }

    fn push_transform(&mut self) {
        self.stack.push(self.translation);
    }

    fn pop_transform(&mut self) {
        debug_assert!(!self.stack.is_empty(), "pop_transform on empty stack");
        if let Some(translation) = self.stack.pop() {
            self.translation = translation;
        }
    }

    fn draw(&mut self, drawable: &DrawableHandle, pos: Vec2, layer: i32) {
        self.commands.push(DrawCommand {
            drawable: drawable.clone(),
            pos: pos - self.translation,
            layer,
        });
    }
}
