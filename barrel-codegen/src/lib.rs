//! Core code generation for the barrel index-class generator.
//!
//! Given a validated manifest, this crate discovers module files under each
//! output file's directory, maps every file to an export binding and a
//! nested namespace address, folds the bindings into a namespace tree, and
//! renders one deterministic TypeScript class per job: a sorted import block
//! followed by `export class X { ... }` whose body mirrors the directory
//! layout.
//!
//! ```ignore
//! use barrelgen_codegen::Generator;
//! use barrelgen_manifest::Manifest;
//!
//! let manifest = Manifest::from_file("barrel.toml")?;
//! let generator = Generator::new(&manifest);
//!
//! // Preview files without writing
//! let files = generator.preview()?;
//!
//! // Generate files to disk
//! let outcomes = generator.generate()?;
//! ```
//!
//! Output is stable across runs: sibling keys render in lexicographic order
//! and the import block is sorted, so regeneration without filesystem
//! changes is byte-identical (before the optional prettier pass).

mod builder;
mod class_file;
mod discover;
mod file;
mod generator;
mod imports;
mod mapper;
mod naming;
mod render;
mod tree;
mod writer;

pub use builder::{CodeBuilder, Indent};
pub use class_file::ClassFile;
pub use discover::{PRIVATE_MARKER, discover};
pub use file::{Overwrite, WriteResult, write_file, write_file_with};
pub use generator::{Generator, JobOutcome, PreviewFile};
pub use imports::{Import, ImportSet};
pub use mapper::{ExportBinding, MappedFile, map_file};
pub use naming::{to_camel_case, to_pascal_case};
pub use render::render;
pub use tree::{ConflictError, NamespaceTree, Node};
pub use writer::{WriteOutcome, write_output};
