//! Mapping from a discovered file path to an export binding and its
//! namespace address.

use std::collections::HashMap;
use std::path::Path;

use eyre::{Result, eyre};

use crate::naming::{to_camel_case, to_pascal_case};

/// A generated identifier paired with the module path it is imported from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBinding {
    export_name: String,
    import_source: String,
}

impl ExportBinding {
    pub fn new(export_name: impl Into<String>, import_source: impl Into<String>) -> Self {
        Self {
            export_name: export_name.into(),
            import_source: import_source.into(),
        }
    }

    /// The identifier the module is exported under.
    pub fn export_name(&self) -> &str {
        &self.export_name
    }

    /// The `./`-prefixed, extensionless module path the identifier is
    /// imported from.
    pub fn import_source(&self) -> &str {
        &self.import_source
    }
}

/// A discovered file resolved to its binding and namespace address.
#[derive(Debug, Clone)]
pub struct MappedFile {
    pub binding: ExportBinding,
    /// Camel-cased directory components; the address ends at the export name.
    pub dirs: Vec<String>,
}

impl MappedFile {
    /// The dotted namespace address, ending at the export name.
    pub fn address(&self) -> String {
        if self.dirs.is_empty() {
            self.binding.export_name().to_string()
        } else {
            format!("{}.{}", self.dirs.join("."), self.binding.export_name())
        }
    }
}

/// Map a discovered file to its export binding and namespace address.
///
/// The export name is the exception-table entry for the raw stem when one
/// exists, and the PascalCase form of the stem otherwise. Directory
/// components become camelCase address segments; the import source keeps the
/// raw component names.
pub fn map_file(
    file: &Path,
    output_dir: &Path,
    exceptions: &HashMap<String, String>,
) -> Result<MappedFile> {
    let relative = file.strip_prefix(output_dir).map_err(|_| {
        eyre!(
            "'{}' is not under the output directory '{}'",
            file.display(),
            output_dir.display()
        )
    })?;

    let stem = relative
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| eyre!("'{}' has no usable file name", file.display()))?;

    let export_name = match exceptions.get(stem) {
        Some(forced) => forced.clone(),
        None => to_pascal_case(stem),
    };

    let components: Vec<String> = relative
        .parent()
        .map(|parent| {
            parent
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();

    let mut import_source = String::from("./");
    for component in &components {
        import_source.push_str(component);
        import_source.push('/');
    }
    import_source.push_str(stem);

    let dirs = components.iter().map(|c| to_camel_case(c)).collect();

    Ok(MappedFile {
        binding: ExportBinding::new(export_name, import_source),
        dirs,
    })
}
