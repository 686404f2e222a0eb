//! Opaque drawable handles and the name-keyed catalog

use sleet_core::{Result, SleetError};
use std::collections::HashMap;
use std::sync::Arc;

/// An opaque image record. Effects never inspect it; the name and pixel
/// dimensions exist for the host renderer that eventually draws it.
#[derive(Debug)]
pub struct Drawable {
    name: String,
    width: u32,
    height: u32,
}

impl Drawable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Shared, reference-counted drawable handle.
///
/// Particles hold clones; the catalog keeps the registration alive for the
/// lifetime of the host.
pub type DrawableHandle = Arc<Drawable>;

/// Host-populated registry resolving resource names to drawable handles.
///
/// Image decoding stays outside Sleet: the host registers each drawable's
/// name and dimensions after loading the pixels with its own texture
/// system, then effects resolve by name at construction.
pub struct DrawableCatalog {
    entries: HashMap<String, DrawableHandle>,
}

impl DrawableCatalog {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a drawable under `name`, returning its shared handle.
    /// Re-registering a name replaces the previous entry.
    pub fn register(&mut self, name: impl Into<String>, width: u32, height: u32) -> DrawableHandle {
        let name = name.into();
        let handle = Arc::new(Drawable {
            name: name.clone(),
            width,
            height,
        });
        self.entries.insert(name, handle.clone());
        handle
    }

    /// Resolve a name to its handle. A missing name is fatal for the
    /// effect being constructed.
    pub fn resolve(&self, name: &str) -> Result<DrawableHandle> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| SleetError::DrawableNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DrawableCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_resolve() {
        let mut catalog = DrawableCatalog::new();
        let handle = catalog.register("snow0", 16, 16);
        assert_eq!(handle.name(), "snow0");
        assert_eq!(handle.width(), 16);

        let resolved = catalog.resolve("snow0").unwrap();
        assert!(Arc::ptr_eq(&handle, &resolved));
    }

    #[test]
    fn resolve_missing_is_error() {
        let catalog = DrawableCatalog::new();
        let err = catalog.resolve("ghost0").unwrap_err();
        assert!(matches!(err, SleetError::DrawableNotFound(name) if name == "ghost0"));
    }

    #[test]
    fn reregister_replaces() {
        let mut catalog = DrawableCatalog::new();
        catalog.register("cloud", 8, 8);
        let second = catalog.register("cloud", 64, 32);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.resolve("cloud").unwrap().width(), 64);
        assert!(Arc::ptr_eq(&second, &catalog.resolve("cloud").unwrap()));
    }
}
