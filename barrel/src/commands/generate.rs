use std::path::PathBuf;

use barrelgen_codegen::Generator;
use barrelgen_manifest::BarrelToml;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to barrel.toml (defaults to ./barrel.toml)
    #[arg(short, long, default_value = "barrel.toml")]
    pub config: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let barrel_toml = BarrelToml::open(&self.config).unwrap_or_exit();
        let generator = Generator::new(barrel_toml.manifest());

        if self.dry_run {
            return Self::run_preview(&generator);
        }

        let outcomes = generator.generate()?;
        for outcome in &outcomes {
            for warning in &outcome.warnings {
                eprintln!("warning: {}", warning);
            }
            println!(
                "Generated {} ({} module{})",
                outcome.output.display(),
                outcome.modules,
                if outcome.modules == 1 { "" } else { "s" }
            );
        }

        Ok(())
    }

    fn run_preview(generator: &Generator) -> Result<()> {
        let files = generator.preview()?;

        for file in &files {
            for warning in &file.warnings {
                eprintln!("warning: {}", warning);
            }
        }

        for file in &files {
            println!("── {} ──", file.path.display());
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
