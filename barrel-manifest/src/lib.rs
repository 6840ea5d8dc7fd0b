// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Manifest parsing and validation for the barrel index-class generator.
//!
//! A `barrel.toml` file declares one `[[class]]` entry per generated index
//! class. This crate owns the schema, TOML parsing, and the validation pass
//! that keeps every configured name a legal TypeScript identifier.

mod config;
mod error;
mod file;
mod validate;

use std::{path::Path, str::FromStr};

pub use config::{ClassConfig, ExtendsConfig, Manifest};
pub use error::{Error, Result};
pub use file::BarrelToml;

/// Parse a barrel.toml file from the given path
pub fn parse_file(path: impl AsRef<Path>) -> Result<Manifest> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let filename = path.display().to_string();
    parse_str_with_filename(&content, &filename)
}

/// Parse a barrel.toml from a string (uses "barrel.toml" as default filename)
pub fn parse_str(content: &str) -> Result<Manifest> {
    parse_str_with_filename(content, "barrel.toml")
}

/// Parse a barrel.toml from a string with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<Manifest> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;

    manifest.validate(content, filename)?;
    Ok(manifest)
}

impl Manifest {
    /// Parse and validate a barrel.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        parse_file(path)
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_str(s)
    }
}
