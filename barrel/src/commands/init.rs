use std::path::PathBuf;

use barrelgen_codegen::{Overwrite, WriteResult, write_file_with};
use clap::Args;
use eyre::Result;

const STARTER_MANIFEST: &str = r#"# One [[class]] entry per generated index file. The output file's directory
# is scanned recursively; files whose name starts with '_' are skipped.

[[class]]
output = "src/services/index.ts"
name = "Services"
extensions = ["ts"]
# ignores = ["legacy/**"]
# prefix = ""

# Extend a base class:
# [class.extends]
# name = "BaseRegistry"
# from = "./base"

# Override derived export names (raw file stem -> forced name):
# [class.names]
# apiUrl = "ApiURL"
"#;

#[derive(Args)]
pub struct InitCommand {
    /// Where to create the manifest (defaults to ./barrel.toml)
    #[arg(default_value = "barrel.toml")]
    pub path: PathBuf,
}

impl InitCommand {
    /// Run the init command
    pub fn run(&self) -> Result<()> {
        match write_file_with(&self.path, STARTER_MANIFEST, Overwrite::IfMissing)? {
            WriteResult::Written => {
                println!("Created {}", self.path.display());
                println!();
                println!("Next steps:");
                println!("  edit {} to point at your sources", self.path.display());
                println!("  barrel generate");
            }
            WriteResult::Skipped => {
                println!("{} already exists, leaving it untouched", self.path.display());
            }
        }

        Ok(())
    }
}
