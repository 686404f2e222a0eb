//! Ambience saving to TOML files

use crate::format::AmbienceFile;
use sleet_core::Result;
use std::fs;
use std::path::Path;

/// Save ambience settings to a TOML file
pub fn save_ambience<P: AsRef<Path>>(path: P, file: &AmbienceFile) -> Result<()> {
    let content = save_ambience_string(file)?;
    fs::write(path, content)?;
    Ok(())
}

/// Save ambience settings to a TOML string
pub fn save_ambience_string(file: &AmbienceFile) -> Result<String> {
    let content = toml::to_string_pretty(file)?;
    Ok(content)
}
