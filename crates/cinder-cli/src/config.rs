use std::path::Path;

use cinder_core::TypeReexport;
use color_eyre::eyre::{eyre, Result};
use serde::Deserialize;

pub const CINDER_CONFIG: &str = "cinder.toml";

/// Cinder configuration file structure (cinder.toml)
///
/// Every generation target is optional; a section left out is skipped. The
/// include lists are ordered and that order carries through to the emitted
/// declarations.
#[derive(Debug, Clone, Deserialize)]
pub struct CinderConfig {
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
    pub bytecode: Option<BytecodeTarget>,
    pub abi: Option<AbiTarget>,
    pub types: Option<TypesTarget>,
}

/// Location of the forge build output
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsConfig {
    #[serde(default = "default_out_dir")]
    pub out: String,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            out: default_out_dir(),
        }
    }
}

fn default_out_dir() -> String {
    "out".to_string()
}

/// Bytecode-constants generation target
#[derive(Debug, Clone, Deserialize)]
pub struct BytecodeTarget {
    /// Path of the generated module
    pub out: String,
    /// Ordered artifact include paths, e.g. "Counter.sol/Counter.json"
    #[serde(default)]
    pub include: Vec<String>,
}

/// Artifact include list handed to the external ABI-types generator.
/// Cinder validates these artifacts but emits nothing for them.
#[derive(Debug, Clone, Deserialize)]
pub struct AbiTarget {
    /// Path the external generator writes to
    pub out: String,
    #[serde(default)]
    pub include: Vec<String>,
}

/// Type re-export generation target
#[derive(Debug, Clone, Deserialize)]
pub struct TypesTarget {
    /// Path of the generated module
    pub out: String,
    #[serde(default)]
    pub reexport: Vec<TypeReexport>,
}

impl CinderConfig {
    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|_| {
            eyre!(
                "Could not find {}. Run cinder from the project root or pass --config.",
                path.display()
            )
        })?;

        let config: CinderConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
