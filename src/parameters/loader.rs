//! Load parameter overrides from JSON files

use super::{ParameterOverrides, ProjectParameters};
use crate::error::Result;
use log::info;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read a JSON parameter file. Keys are the snake_case field names of
/// [`ProjectParameters`]; any subset may be present.
pub fn load_overrides<P: AsRef<Path>>(path: P) -> Result<ParameterOverrides> {
    let path = path.as_ref();
    info!("Loading project parameters from {}", path.display());
    let file = File::open(path)?;
    load_overrides_from_reader(BufReader::new(file))
}

/// Parse parameter overrides from any reader
pub fn load_overrides_from_reader<R: Read>(reader: R) -> Result<ParameterOverrides> {
    let overrides = serde_json::from_reader(reader)?;
    Ok(overrides)
}

/// Load a parameter file and apply it to the default project
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<ProjectParameters> {
    let overrides = load_overrides(path)?;
    Ok(overrides.apply(&ProjectParameters::default()))
}
