//! The per-frame contract every ambient effect implements

use sleet_render::Canvas;
use toml::value::Table;

/// One ambient effect layer: per-frame motion plus the shared draw
/// transform, driven by an external scene loop.
///
/// Object-safe so a host can hold a mixed `Vec<Box<dyn ParticleEffect>>`
/// and tick every layer uniformly. Settings records hold one persisted
/// field, `layer`; populations are reseeded at construction, never
/// restored.
pub trait ParticleEffect {
    /// Fixed tag naming this effect's settings record
    fn record_tag(&self) -> &'static str;

    /// Compositing layer the external renderer orders by
    fn layer(&self) -> i32;

    fn set_layer(&mut self, layer: i32);

    /// Advance particle motion by `dt` seconds
    fn update(&mut self, dt: f32);

    /// Remap and submit every particle for this frame
    fn draw(&self, canvas: &mut dyn Canvas);

    /// Apply a settings record. A missing or mistyped `layer` key keeps
    /// the current value.
    fn apply_record(&mut self, record: &Table) {
        if let Some(layer) = record.get("layer").and_then(toml::Value::as_integer) {
            self.set_layer(layer as i32);
        }
    }

    /// Emit the settings record persisted for this effect
    fn to_record(&self) -> Table {
        let mut record = Table::new();
        record.insert("layer".to_string(), toml::Value::Integer(self.layer() as i64));
        record
    }
}
