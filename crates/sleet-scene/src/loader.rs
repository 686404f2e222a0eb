//! Ambience loading from TOML files

use crate::format::AmbienceFile;
use sleet_core::Result;
use std::fs;
use std::path::Path;

/// Load ambience settings from a TOML file
pub fn load_ambience<P: AsRef<Path>>(path: P) -> Result<AmbienceFile> {
    let content = fs::read_to_string(path)?;
    load_ambience_string(&content)
}

/// Load ambience settings from a TOML string
pub fn load_ambience_string(content: &str) -> Result<AmbienceFile> {
    let file: AmbienceFile = toml::from_str(content)?;
    Ok(file)
}
