//! Generated-module rendering and writing
//!
//! Renderers are pure string builders: no timestamps, no reordering, no
//! derived identifiers beyond `<name>_bytecode`. Equal input produces
//! byte-identical output, so regenerated files diff cleanly. Writing is a
//! single full-file overwrite that happens only after every artifact has
//! loaded and rendered.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::artifact::{ArtifactLoader, ArtifactSet, LoadedArtifact};
use crate::error::{Error, Result};

/// TypeScript annotation for 0x-prefixed hex strings
pub const HEX_STRING_TYPE: &str = "`0x${string}`";

/// Render the bytecode-constants module: one exported constant per artifact,
/// in input order, bytecode copied verbatim.
pub fn render_bytecode_module(artifacts: &[LoadedArtifact]) -> String {
    let mut module = String::new();
    for artifact in artifacts {
        module.push_str(&format!(
            "export const {}_bytecode: {} = \"{}\";\n",
            artifact.name, HEX_STRING_TYPE, artifact.bytecode.object
        ));
    }
    module
}

/// One group of type re-exports from a generated ABI-types module
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeReexport {
    /// Module specifier in the generated ABI-types tree
    pub from: String,
    /// Type identifiers to re-export, in declaration order
    pub names: Vec<String>,
}

/// Render the type re-export module: one `export type` block per group,
/// blocks separated by a blank line. Value-free by construction.
pub fn render_reexport_module(reexports: &[TypeReexport]) -> String {
    let mut blocks = Vec::with_capacity(reexports.len());
    for group in reexports {
        let mut block = String::from("export type {\n");
        for name in &group.names {
            block.push_str(&format!("  {},\n", name));
        }
        block.push_str(&format!("}} from \"{}\";\n", group.from));
        blocks.push(block);
    }
    blocks.join("\n")
}

/// Write a generated module, replacing any existing file at `path` in full.
pub fn write_module(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| Error::Write {
        path: path.display().to_string(),
        source,
    })
}

/// Load every artifact in `set`, render the bytecode module, and write it to
/// `out_path`. Loading and rendering complete before the write, so a failed
/// run leaves any previous output untouched. Returns the number of emitted
/// constants.
pub fn generate_bytecode_module(
    loader: &dyn ArtifactLoader,
    set: &ArtifactSet,
    out_path: &Path,
) -> Result<usize> {
    let artifacts = loader.load_set(set)?;
    let module = render_bytecode_module(&artifacts);
    write_module(out_path, &module)?;
    Ok(artifacts.len())
}
