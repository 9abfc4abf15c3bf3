//! Generate typed modules from forge build artifacts

use std::path::Path;

use cinder_core::{
    render_bytecode_module, render_reexport_module, write_module, ArtifactLoader, ArtifactSet,
    FileSystemArtifactLoader,
};
use clap::Args;
use color_eyre::eyre::Result;
use console::style;

use crate::config::{CinderConfig, CINDER_CONFIG};

/// Generate typed modules from forge build artifacts
#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the configuration file
    #[arg(long, default_value = CINDER_CONFIG)]
    config: String,
}

impl GenerateCommand {
    pub fn run(self) -> Result<()> {
        let config = CinderConfig::load_from(Path::new(&self.config))?;
        let loader = FileSystemArtifactLoader::with_dir(&config.artifacts.out);

        // Every artifact loads and every module renders before the first
        // write; a failure anywhere leaves previous output untouched.
        let mut pending: Vec<(String, String, usize)> = Vec::new();

        if let Some(bytecode) = &config.bytecode {
            println!(
                "{} Loading {} bytecode artifact(s) from {}/...",
                style("->").blue(),
                bytecode.include.len(),
                config.artifacts.out
            );

            let set = ArtifactSet::from_includes(&bytecode.include)?;
            let artifacts = loader.load_set(&set)?;
            pending.push((
                bytecode.out.clone(),
                render_bytecode_module(&artifacts),
                artifacts.len(),
            ));
        }

        if let Some(types) = &config.types {
            let names: usize = types.reexport.iter().map(|group| group.names.len()).sum();
            pending.push((
                types.out.clone(),
                render_reexport_module(&types.reexport),
                names,
            ));
        }

        if let Some(abi) = &config.abi {
            let set = ArtifactSet::from_includes(&abi.include)?;
            let artifacts = loader.load_set(&set)?;
            println!(
                "{} Validated {} ABI artifact(s) for {}",
                style("->").blue(),
                artifacts.len(),
                abi.out
            );
        }

        if pending.is_empty() && config.abi.is_none() {
            println!(
                "{} Nothing to generate (no targets configured in {})",
                style("!").yellow(),
                self.config
            );
            return Ok(());
        }

        for (path, content, count) in &pending {
            write_module(Path::new(path), content)?;
            println!(
                "{} Wrote {} ({} declaration(s))",
                style("✓").green(),
                style(path).cyan(),
                count
            );
        }

        Ok(())
    }
}
