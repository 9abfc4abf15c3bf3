//! Artifact selection and loading from forge build output
//!
//! Artifacts are enumerated explicitly as an ordered [`ArtifactSet`], never
//! discovered by scanning the build directory. Loading shape-checks every
//! document before anything downstream runs; a document that fails any check
//! is rejected whole.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

// =============================================================================
// Artifact Set
// =============================================================================

/// A single enumerated artifact: contract name plus the artifact path
/// relative to the build-output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactEntry {
    pub name: String,
    pub path: String,
}

impl ArtifactEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Build an entry from a forge include path such as
    /// `Counter.sol/Counter.json`, taking the contract name from the file stem.
    pub fn from_include(include: &str) -> Result<Self> {
        let name = Path::new(include)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| Error::artifact(include, "include path has no file name"))?;

        Ok(Self::new(name, include))
    }
}

/// An ordered set of artifact entries.
///
/// Order is preserved through loading and into the emitted module. Duplicate
/// names are rejected on construction: two entries with the same name would
/// collide as generated identifiers.
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    entries: Vec<ArtifactEntry>,
}

impl ArtifactSet {
    pub fn new(entries: Vec<ArtifactEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(Error::DuplicateName(entry.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Build a set from forge include paths, preserving their order.
    pub fn from_includes<S: AsRef<str>>(includes: &[S]) -> Result<Self> {
        let entries = includes
            .iter()
            .map(|include| ArtifactEntry::from_include(include.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(entries)
    }

    pub fn entries(&self) -> &[ArtifactEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Artifact Documents
// =============================================================================

/// Shape-validated contract artifact from forge build output
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub abi: serde_json::Value,
    pub bytecode: BytecodeObject,
}

/// Bytecode object within an artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BytecodeObject {
    pub object: String,
}

impl BytecodeObject {
    /// Whether this bytecode can actually be deployed. Interfaces and
    /// abstract contracts compile to an empty `0x` object.
    pub fn is_deployable(&self) -> bool {
        !self.object.is_empty() && self.object != "0x"
    }

    /// The bytecode hex without its `0x` prefix.
    pub fn without_prefix(&self) -> &str {
        self.object.trim_start_matches("0x")
    }
}

impl ContractArtifact {
    /// Parse an artifact document and check its shape. Never proceeds with a
    /// partially valid document.
    pub fn from_json(name: &str, content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)
            .map_err(|err| Error::artifact(name, format!("invalid JSON: {}", err)))?;
        Self::from_value(name, &value)
    }

    /// Shape-check an already parsed artifact document.
    pub fn from_value(name: &str, value: &serde_json::Value) -> Result<Self> {
        let abi = value
            .get("abi")
            .ok_or_else(|| Error::artifact(name, "missing `abi` field"))?;
        if !abi.is_array() {
            return Err(Error::artifact(name, "`abi` is not an array"));
        }

        let bytecode = value
            .get("bytecode")
            .ok_or_else(|| Error::artifact(name, "missing `bytecode` field"))?;
        let object = bytecode
            .get("object")
            .ok_or_else(|| Error::artifact(name, "missing `bytecode.object` field"))?;
        let object = object
            .as_str()
            .ok_or_else(|| Error::artifact(name, "`bytecode.object` is not a string"))?;
        if !object.starts_with("0x") {
            return Err(Error::artifact(name, "`bytecode.object` is not `0x`-prefixed"));
        }

        Ok(Self {
            abi: abi.clone(),
            bytecode: BytecodeObject {
                object: object.to_string(),
            },
        })
    }
}

/// An artifact joined with its set entry name, ready for emission
#[derive(Debug, Clone)]
pub struct LoadedArtifact {
    pub name: String,
    pub abi: serde_json::Value,
    pub bytecode: BytecodeObject,
}

// =============================================================================
// Loader
// =============================================================================

/// Trait for loading contract artifacts from various sources
pub trait ArtifactLoader {
    /// Load a single enumerated artifact
    fn load(&self, entry: &ArtifactEntry) -> Result<LoadedArtifact>;

    /// Load every artifact in the set, in set order. The first failure aborts
    /// the whole load; no partial result is returned.
    fn load_set(&self, set: &ArtifactSet) -> Result<Vec<LoadedArtifact>> {
        set.entries().iter().map(|entry| self.load(entry)).collect()
    }
}

/// Artifact loader that reads from the filesystem (forge build output)
#[derive(Debug, Clone)]
pub struct FileSystemArtifactLoader {
    /// Directory containing compiled artifacts (typically "out")
    out_dir: PathBuf,
}

impl FileSystemArtifactLoader {
    /// Create a loader reading from `out/` in the current directory.
    pub fn new() -> Self {
        Self::with_dir("out")
    }

    /// Create a loader reading from an explicit build-output directory.
    pub fn with_dir<P: Into<PathBuf>>(out_dir: P) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

impl Default for FileSystemArtifactLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactLoader for FileSystemArtifactLoader {
    fn load(&self, entry: &ArtifactEntry) -> Result<LoadedArtifact> {
        let path = self.out_dir.join(&entry.path);
        let content = std::fs::read_to_string(&path).map_err(|_| {
            Error::artifact(
                &entry.name,
                format!(
                    "not found at {}. Make sure `forge build` was run.",
                    path.display()
                ),
            )
        })?;

        let artifact = ContractArtifact::from_json(&entry.name, &content)?;

        Ok(LoadedArtifact {
            name: entry.name.clone(),
            abi: artifact.abi,
            bytecode: artifact.bytecode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact_json(bytecode: &str) -> String {
        format!(
            r#"{{
                "abi": [
                    {{
                        "type": "function",
                        "name": "transfer",
                        "inputs": [
                            {{"name": "to", "type": "address"}},
                            {{"name": "amount", "type": "uint256"}}
                        ],
                        "outputs": [{{"type": "bool"}}]
                    }}
                ],
                "bytecode": {{
                    "object": "{}"
                }}
            }}"#,
            bytecode
        )
    }

    #[test]
    fn test_parse_contract_artifact() {
        let json = artifact_json("0x6080604052348015600f57600080fd5b50");
        let artifact = ContractArtifact::from_json("Token", &json).unwrap();

        assert!(artifact.abi.is_array());
        assert_eq!(artifact.abi.as_array().unwrap().len(), 1);
        assert!(artifact.bytecode.is_deployable());
        assert_eq!(
            artifact.bytecode.without_prefix(),
            "6080604052348015600f57600080fd5b50"
        );
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = ContractArtifact::from_json("Token", "{not json").unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn test_parse_rejects_missing_abi() {
        let json = r#"{"bytecode": {"object": "0x6001"}}"#;
        let err = ContractArtifact::from_json("Token", json).unwrap_err();
        assert!(err.to_string().contains("missing `abi` field"));
        assert!(err.to_string().contains("Token"));
    }

    #[test]
    fn test_parse_rejects_non_array_abi() {
        let json = r#"{"abi": {}, "bytecode": {"object": "0x6001"}}"#;
        let err = ContractArtifact::from_json("Token", json).unwrap_err();
        assert!(err.to_string().contains("`abi` is not an array"));
    }

    #[test]
    fn test_parse_rejects_missing_bytecode() {
        let json = r#"{"abi": []}"#;
        let err = ContractArtifact::from_json("Token", json).unwrap_err();
        assert!(err.to_string().contains("missing `bytecode` field"));
    }

    #[test]
    fn test_parse_rejects_missing_bytecode_object() {
        let json = r#"{"abi": [], "bytecode": {}}"#;
        let err = ContractArtifact::from_json("Token", json).unwrap_err();
        assert!(err.to_string().contains("missing `bytecode.object` field"));
    }

    #[test]
    fn test_parse_rejects_non_string_bytecode_object() {
        let json = r#"{"abi": [], "bytecode": {"object": 42}}"#;
        let err = ContractArtifact::from_json("Token", json).unwrap_err();
        assert!(err.to_string().contains("`bytecode.object` is not a string"));
    }

    #[test]
    fn test_parse_rejects_unprefixed_bytecode_object() {
        let json = r#"{"abi": [], "bytecode": {"object": "6001"}}"#;
        let err = ContractArtifact::from_json("Token", json).unwrap_err();
        assert!(err.to_string().contains("not `0x`-prefixed"));
    }

    #[test]
    fn test_bytecode_object_is_deployable() {
        let valid = BytecodeObject {
            object: "0x6080604052".to_string(),
        };
        assert!(valid.is_deployable());

        let just_prefix = BytecodeObject {
            object: "0x".to_string(),
        };
        assert!(!just_prefix.is_deployable());
    }

    #[test]
    fn test_entry_from_include() {
        let entry = ArtifactEntry::from_include("Counter.sol/Counter.json").unwrap();
        assert_eq!(entry.name, "Counter");
        assert_eq!(entry.path, "Counter.sol/Counter.json");
    }

    #[test]
    fn test_entry_from_include_preserves_case() {
        let entry = ArtifactEntry::from_include("GhoFMTaker.sol/GhoFMTaker.json").unwrap();
        assert_eq!(entry.name, "GhoFMTaker");
    }

    #[test]
    fn test_entry_from_include_rejects_empty() {
        assert!(ArtifactEntry::from_include("").is_err());
    }

    #[test]
    fn test_set_rejects_duplicate_names() {
        let err = ArtifactSet::from_includes(&[
            "Alpha.sol/Alpha.json",
            "Beta.sol/Beta.json",
            "other/Alpha.json",
        ])
        .unwrap_err();

        assert!(matches!(err, Error::DuplicateName(name) if name == "Alpha"));
    }

    #[test]
    fn test_set_preserves_order() {
        let set = ArtifactSet::from_includes(&[
            "Zeta.sol/Zeta.json",
            "Alpha.sol/Alpha.json",
            "Mid.sol/Mid.json",
        ])
        .unwrap();

        let names: Vec<_> = set.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_loader_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loader = FileSystemArtifactLoader::with_dir(dir.path());

        let entry = ArtifactEntry::from_include("Ghost.sol/Ghost.json").unwrap();
        let err = loader.load(&entry).unwrap_err();

        assert!(matches!(err, Error::Artifact { ref name, .. } if name == "Ghost"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_loader_set_order_matches_input() {
        let dir = tempfile::tempdir().unwrap();
        for (name, code) in [("Beta", "0x6002"), ("Alpha", "0x6001")] {
            let contract_dir = dir.path().join(format!("{}.sol", name));
            std::fs::create_dir_all(&contract_dir).unwrap();
            std::fs::write(
                contract_dir.join(format!("{}.json", name)),
                artifact_json(code),
            )
            .unwrap();
        }

        let loader = FileSystemArtifactLoader::with_dir(dir.path());
        let set =
            ArtifactSet::from_includes(&["Beta.sol/Beta.json", "Alpha.sol/Alpha.json"]).unwrap();

        let artifacts = loader.load_set(&set).unwrap();
        let names: Vec<_> = artifacts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Beta", "Alpha"]);
        assert_eq!(artifacts[0].bytecode.object, "0x6002");
    }

    #[test]
    fn test_loader_set_aborts_on_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let contract_dir = dir.path().join("Alpha.sol");
        std::fs::create_dir_all(&contract_dir).unwrap();
        std::fs::write(contract_dir.join("Alpha.json"), artifact_json("0x6001")).unwrap();

        let loader = FileSystemArtifactLoader::with_dir(dir.path());
        let set =
            ArtifactSet::from_includes(&["Alpha.sol/Alpha.json", "Ghost.sol/Ghost.json"]).unwrap();

        assert!(loader.load_set(&set).is_err());
    }
}
