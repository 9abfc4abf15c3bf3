//! List configured artifacts with bytecode and ABI details

use std::path::Path;

use cinder_core::{
    Abi, ArtifactLoader, ArtifactSet, Bytecode, FileSystemArtifactLoader, LoadedArtifact,
};
use clap::Args;
use color_eyre::eyre::Result;
use console::style;

use crate::config::{CinderConfig, CINDER_CONFIG};

/// List configured artifacts with bytecode and ABI details
#[derive(Args)]
pub struct ListCommand {
    /// Path to the configuration file
    #[arg(long, default_value = CINDER_CONFIG)]
    config: String,
}

impl ListCommand {
    pub fn run(self) -> Result<()> {
        let config = CinderConfig::load_from(Path::new(&self.config))?;
        let loader = FileSystemArtifactLoader::with_dir(&config.artifacts.out);

        let targets = [
            ("bytecode", config.bytecode.as_ref().map(|t| (&t.out, &t.include))),
            ("abi", config.abi.as_ref().map(|t| (&t.out, &t.include))),
        ];

        let mut listed = 0;

        for (label, target) in targets {
            let Some((out, include)) = target else { continue };
            if include.is_empty() {
                continue;
            }

            println!("{} [{}] -> {}", style("->").blue(), label, style(out).cyan());

            let set = ArtifactSet::from_includes(include)?;
            for entry in set.entries() {
                match loader.load(entry) {
                    Ok(artifact) => {
                        print_artifact(&artifact);
                        listed += 1;
                    }
                    Err(e) => println!("   {} {}", style("!").yellow(), e),
                }
            }
            println!();
        }

        if listed == 0 {
            println!("{} No artifacts configured", style("!").yellow());
        }

        Ok(())
    }
}

fn print_artifact(artifact: &LoadedArtifact) {
    let bytecode = Bytecode::try_from(&artifact.bytecode).ok();

    let size = match &bytecode {
        Some(b) if !b.is_empty() => format!("{} bytes", b.len()),
        _ => "no bytecode".to_string(),
    };

    let hash = bytecode
        .map(|b| b.hash())
        .filter(|h| !h.is_empty())
        .map(|h| format!(" {}...", &h[..8]))
        .unwrap_or_default();

    let abi_summary = match Abi::from_value(&artifact.abi) {
        Ok(abi) => {
            let constructor = if abi.has_constructor() {
                ", constructor"
            } else {
                ""
            };
            format!("{} function(s){}", abi.function_count(), constructor)
        }
        Err(_) => "ABI not parseable".to_string(),
    };

    println!(
        "   {} {} ({}, {}){}",
        style("*").dim(),
        style(&artifact.name).cyan(),
        size,
        abi_summary,
        style(hash).dim()
    );
}
