//! Ambience file format definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use toml::value::Table;

/// Root structure of an ambience TOML file.
///
/// Every table other than `[ambience]` is a per-effect settings record,
/// keyed by the effect's fixed record tag (`particles-snow`,
/// `particles-ghosts`, `particles-clouds`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmbienceFile {
    pub ambience: AmbienceMetadata,
    #[serde(flatten)]
    pub records: HashMap<String, Table>,
}

/// Ambience metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmbienceMetadata {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl AmbienceFile {
    /// Create an empty ambience file
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            ambience: AmbienceMetadata {
                name: name.into(),
                version: default_version(),
            },
            records: HashMap::new(),
        }
    }

    /// The settings record stored under `tag`, if any
    pub fn record(&self, tag: &str) -> Option<&Table> {
        self.records.get(tag)
    }

    /// Insert or replace the settings record under `tag`
    pub fn set_record(&mut self, tag: impl Into<String>, record: Table) {
        self.records.insert(tag.into(), record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambience_file_serialization() {
        let mut file = AmbienceFile::new("Winter Night");
        let mut record = Table::new();
        record.insert("layer".to_string(), toml::Value::Integer(-100));
        file.set_record("particles-snow", record);

        let toml_str = toml::to_string_pretty(&file).unwrap();
        assert!(toml_str.contains("Winter Night"));
        assert!(toml_str.contains("particles-snow"));
        assert!(toml_str.contains("layer = -100"));
    }

    #[test]
    fn test_ambience_file_deserialization() {
        let toml_str = r#"
[ambience]
name = "Winter Night"
version = "1.0"

[particles-snow]
layer = -100

[particles-clouds]
layer = -300
"#;

        let file: AmbienceFile = toml::from_str(toml_str).unwrap();
        assert_eq!(file.ambience.name, "Winter Night");
        assert!(file.record("particles-snow").is_some());
        assert!(file.record("particles-clouds").is_some());
        assert!(file.record("particles-ghosts").is_none());

        let snow = file.record("particles-snow").unwrap();
        assert_eq!(snow.get("layer").and_then(toml::Value::as_integer), Some(-100));
    }

    #[test]
    fn test_version_defaults_when_missing() {
        let toml_str = r#"
[ambience]
name = "bare"
"#;
        let file: AmbienceFile = toml::from_str(toml_str).unwrap();
        assert_eq!(file.ambience.version, "1.0");
    }
}
