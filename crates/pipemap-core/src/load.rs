//! JSON descriptor loading.
//!
//! Typed loaders for the four descriptor files the surrounding tooling
//! produces. These sit beside the build boundary as conveniences;
//! [`crate::build::build`] itself only ever sees already-parsed values.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::LoadError;
use crate::meta::MetaGraph;
use crate::project::{ContractSchema, ModuleSpec};
use crate::runs::RunState;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the scanned module list (a JSON array of module specs).
pub fn load_modules(path: &Path) -> Result<Vec<ModuleSpec>, LoadError> {
    read_json(path)
}

/// Loads the scanned contract list (a JSON array of contract schemas).
pub fn load_contracts(path: &Path) -> Result<Vec<ContractSchema>, LoadError> {
    read_json(path)
}

/// Loads the authored metadata bundle.
pub fn load_meta(path: &Path) -> Result<MetaGraph, LoadError> {
    read_json(path)
}

/// Loads the run history.
pub fn load_runs(path: &Path) -> Result<RunState, LoadError> {
    read_json(path)
}
