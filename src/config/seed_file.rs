//! Seed graph loading from a TOML file.
//!
//! When `SEED_FILE` points at a TOML document, its departments replace the built-in
//! sample data. The layout follows the graph nesting:
//!
//! ```toml
//! [[departments]]
//! id = 101
//! name = "HR"
//!
//! [[departments.employees]]
//! last_name = "Popa"
//! first_name = "Ion"
//! ssn = "1890812283456"
//! email = "popa.ion@gmail.com"
//!
//! [departments.manager]
//! id = 100
//! last_name = "Chivu"
//! first_name = "Sorina"
//! budget = [{ resources = "Hiring", money = 20000 }]
//! ```

use crate::core::graph::DepartmentGraph;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{env::VarError, path::Path};

/// Structure of a seed file
#[derive(Debug, Deserialize)]
pub struct SeedFile {
    /// Departments to persist, in insertion order
    pub departments: Vec<DepartmentGraph>,
}

/// Loads a seed graph from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<Vec<DepartmentGraph>> {
    let path_ref = path.as_ref();
    tracing::debug!("Loading seed graph from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read seed file {}: {e}", path_ref.display()),
    })?;

    parse_seed_file(&contents)
}

/// Resolves the `SEED_FILE` variable into a seed graph.
///
/// Returns `Ok(None)` when the variable is not set, so the built-in sample applies.
///
/// # Errors
/// Returns [`Error::Config`] when the value is not valid Unicode or the file cannot be
/// loaded.
pub fn load_seed_file_from_var(
    var: std::result::Result<String, VarError>,
) -> Result<Option<Vec<DepartmentGraph>>> {
    match var {
        Ok(path) => load_seed_file(&path).map(Some),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(Error::Config {
            message: format!("SEED_FILE is not valid Unicode: {raw:?}"),
        }),
    }
}

/// Parses the contents of a seed file.
pub fn parse_seed_file(contents: &str) -> Result<Vec<DepartmentGraph>> {
    let file: SeedFile = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed file: {e}"),
    })?;

    if file.departments.is_empty() {
        return Err(Error::Config {
            message: "Seed file does not define any departments".to_string(),
        });
    }

    Ok(file.departments)
}
