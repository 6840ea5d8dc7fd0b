//! Job orchestration: discover, map, build the tree, render, write.

use std::path::PathBuf;

use barrelgen_manifest::{ClassConfig, Manifest};
use eyre::{Result, WrapErr};

use crate::class_file::ClassFile;
use crate::discover::{discover, scan_root};
use crate::imports::{Import, ImportSet};
use crate::mapper::map_file;
use crate::tree::NamespaceTree;
use crate::writer::write_output;

/// A rendered file that has not been written to disk.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
    pub warnings: Vec<String>,
}

/// Summary of one completed generation job.
#[derive(Debug)]
pub struct JobOutcome {
    pub output: PathBuf,
    pub modules: usize,
    pub warnings: Vec<String>,
}

/// Runs every configured generation job, strictly in manifest order.
///
/// Each job is a linear pass over one directory scan; nothing is shared
/// between jobs and the first failing job aborts the run.
pub struct Generator<'a> {
    manifest: &'a Manifest,
}

struct RenderedJob {
    content: String,
    modules: usize,
    warnings: Vec<String>,
}

impl<'a> Generator<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self { manifest }
    }

    /// Render every job without writing anything.
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        self.manifest
            .classes
            .iter()
            .map(|class| {
                let rendered = self.render_job(class)?;
                Ok(PreviewFile {
                    path: class.output.clone(),
                    content: rendered.content,
                    warnings: rendered.warnings,
                })
            })
            .collect()
    }

    /// Render and write every job.
    pub fn generate(&self) -> Result<Vec<JobOutcome>> {
        let mut outcomes = Vec::new();

        for class in &self.manifest.classes {
            let rendered = self.render_job(class)?;
            let mut warnings = rendered.warnings;

            let write = write_output(&class.output, &rendered.content)?;
            if let Some(warning) = write.format_warning {
                warnings.push(warning);
            }

            outcomes.push(JobOutcome {
                output: class.output.clone(),
                modules: rendered.modules,
                warnings,
            });
        }

        Ok(outcomes)
    }

    fn render_job(&self, class: &ClassConfig) -> Result<RenderedJob> {
        let files = discover(&class.output, &class.extensions, &class.ignores)
            .wrap_err_with(|| format!("discovery failed for '{}'", class.output.display()))?;
        let root = scan_root(&class.output);

        let mut tree = NamespaceTree::new();
        let mut imports = ImportSet::new();
        let mut warnings = Vec::new();

        if let Some(extends) = &class.extends {
            imports.add(&Import::new(&extends.name, &extends.from));
        }

        let modules = files.len();
        for file in &files {
            let mapped = map_file(file, &root, &class.names)
                .wrap_err_with(|| format!("failed to map '{}'", file.display()))?;

            let address = mapped.address();
            let incoming = mapped.binding.import_source().to_string();

            imports.add_binding(&mapped.binding);
            let displaced = tree
                .insert(&mapped.dirs, mapped.binding)
                .wrap_err_with(|| format!("failed to place '{}'", file.display()))?;

            if let Some(displaced) = displaced {
                warnings.push(format!(
                    "'{}' replaces '{}' at '{}'",
                    incoming,
                    displaced.import_source(),
                    address
                ));
            }
        }

        let root_node = tree.into_root();
        let content = ClassFile::new(&class.name, &imports, &root_node)
            .extends(class.extends.as_ref().map(|e| e.name.as_str()))
            .prefix(class.prefix.as_deref())
            .render();

        Ok(RenderedJob {
            content,
            modules,
            warnings,
        })
    }
}
