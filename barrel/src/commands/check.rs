use std::path::PathBuf;

use barrelgen_manifest::BarrelToml;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to barrel.toml (defaults to ./barrel.toml)
    #[arg(short, long, default_value = "barrel.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let barrel_toml = BarrelToml::open(&self.config).unwrap_or_exit();
        let manifest = barrel_toml.manifest();

        println!("✓ {} is valid\n", self.config.display());

        let count = manifest.classes.len();
        println!("  {} class{}:", count, if count == 1 { "" } else { "es" });
        for class in &manifest.classes {
            let filter = if class.extensions.is_empty() {
                "all files".to_string()
            } else {
                format!("*.{{{}}}", class.extensions.join(","))
            };
            println!(
                "    {} -> {} ({})",
                class.name,
                class.output.display(),
                filter
            );
        }

        Ok(())
    }
}
