//! Manifest schema for barrel.toml

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::{Error, Result, validate};

/// Root schema for barrel.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Index classes to generate; one `[[class]]` entry per job
    #[serde(default, rename = "class")]
    pub classes: Vec<ClassConfig>,
}

/// One generation job, producing a single index class file.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassConfig {
    /// Path of the generated file. Its parent directory is the scan root.
    pub output: PathBuf,

    /// Name of the generated class
    pub name: String,

    /// File extensions to include, without the leading dot (empty means every file)
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Glob patterns to exclude, relative to the output directory
    #[serde(default)]
    pub ignores: Vec<String>,

    /// Literal text placed at the top of the generated class body
    #[serde(default)]
    pub prefix: Option<String>,

    /// Base class for the generated class
    #[serde(default)]
    pub extends: Option<ExtendsConfig>,

    /// Overrides for derived export names, keyed by raw file stem
    #[serde(default)]
    pub names: HashMap<String, String>,
}

/// Base class reference rendered as an `extends` clause plus one import.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtendsConfig {
    /// Class name to extend
    pub name: String,
    /// Module specifier the base class is imported from
    pub from: String,
}

impl Manifest {
    /// Validate the manifest after parsing
    pub fn validate(&self, src: &str, filename: &str) -> Result<()> {
        if self.classes.is_empty() {
            return Err(Error::missing_classes(filename));
        }

        for class in &self.classes {
            class.validate(src, filename)?;
        }

        Ok(())
    }
}

impl ClassConfig {
    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        if self.output.file_name().is_none() {
            return Err(Error::validation(
                format!("output path '{}' must name a file", self.output.display()),
                src,
                filename,
            ));
        }

        validate::validate_name(&self.name, "class", src, filename)?;

        for ext in &self.extensions {
            if ext.is_empty() {
                return Err(Error::validation(
                    "extensions must not contain empty entries",
                    src,
                    filename,
                ));
            }
            if ext.starts_with('.') {
                let span = validate::find_name_span(src, ext);
                return Err(match span {
                    Some(span) => Error::validation_at(
                        format!("write extension '{}' without the leading dot", ext),
                        src,
                        filename,
                        span,
                    ),
                    None => Error::validation(
                        format!("write extension '{}' without the leading dot", ext),
                        src,
                        filename,
                    ),
                });
            }
            if ext.contains('*') || ext.contains('/') {
                return Err(Error::validation(
                    format!("extension '{}' must be a plain suffix, not a glob pattern", ext),
                    src,
                    filename,
                ));
            }
        }

        for pattern in &self.ignores {
            if pattern.is_empty() {
                return Err(Error::validation(
                    "ignores must not contain empty patterns",
                    src,
                    filename,
                ));
            }
        }

        if let Some(extends) = &self.extends {
            validate::validate_name(&extends.name, "base class", src, filename)?;
            if extends.from.is_empty() {
                return Err(Error::validation(
                    format!("extends.from for '{}' must not be empty", extends.name),
                    src,
                    filename,
                ));
            }
        }

        for (stem, export_name) in &self.names {
            if stem.is_empty() {
                return Err(Error::validation(
                    "names keys must be non-empty file stems",
                    src,
                    filename,
                ));
            }
            validate::validate_name(export_name, "export name", src, filename)?;
        }

        Ok(())
    }
}
