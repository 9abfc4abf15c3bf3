//! Validate configured artifacts without writing anything

use std::path::Path;

use cinder_core::{Abi, ArtifactLoader, ArtifactSet, FileSystemArtifactLoader};
use clap::Args;
use color_eyre::eyre::{eyre, Result};
use console::style;

use crate::config::{CinderConfig, CINDER_CONFIG};

/// Validate configured artifacts without writing anything
#[derive(Args)]
pub struct CheckCommand {
    /// Path to the configuration file
    #[arg(long, default_value = CINDER_CONFIG)]
    config: String,
}

impl CheckCommand {
    pub fn run(self) -> Result<()> {
        let config = CinderConfig::load_from(Path::new(&self.config))?;
        let loader = FileSystemArtifactLoader::with_dir(&config.artifacts.out);

        let targets = [
            ("bytecode", config.bytecode.as_ref().map(|t| &t.include)),
            ("abi", config.abi.as_ref().map(|t| &t.include)),
        ];

        let mut checked = 0;
        let mut failures = 0;

        for (label, include) in targets {
            let Some(include) = include else { continue };

            println!("{} Checking [{}] artifacts...", style("->").blue(), label);

            let set = match ArtifactSet::from_includes(include) {
                Ok(set) => set,
                Err(e) => {
                    println!("   {} {}", style("✗").red(), e);
                    failures += 1;
                    continue;
                }
            };

            for entry in set.entries() {
                checked += 1;
                match loader.load(entry) {
                    Ok(artifact) => {
                        if Abi::from_value(&artifact.abi).is_ok() {
                            println!("   {} {}", style("✓").green(), entry.name);
                        } else {
                            // Shape is valid, so generation would succeed;
                            // the ABI just can't be summarized.
                            println!(
                                "   {} {} (ABI not parseable for summaries)",
                                style("!").yellow(),
                                entry.name
                            );
                        }
                    }
                    Err(e) => {
                        println!("   {} {}", style("✗").red(), e);
                        failures += 1;
                    }
                }
            }
        }

        println!();
        if failures > 0 {
            return Err(eyre!("{} artifact(s) failed validation", failures));
        }

        if checked == 0 {
            println!("{} No artifacts configured", style("!").yellow());
        } else {
            println!(
                "{} All {} artifact(s) valid",
                style("✓").green().bold(),
                checked
            );
        }

        Ok(())
    }
}
