//! Bytecode inspection helpers
//!
//! The emitter copies `bytecode.object` into the generated module verbatim;
//! nothing here touches that path. These helpers decode the hex for
//! reporting (size, keccak256 hash) in the CLI.

use alloy::primitives::keccak256;

use crate::artifact::BytecodeObject;
use crate::error::Result;

/// Decoded deployment bytecode
#[derive(Debug, Clone)]
pub struct Bytecode {
    bytes: Vec<u8>,
}

impl Bytecode {
    /// Decode from a hex string (with or without 0x prefix)
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let clean = hex_str.trim_start_matches("0x");
        if clean.is_empty() {
            return Ok(Self { bytes: Vec::new() });
        }
        let bytes = hex::decode(clean)?;
        Ok(Self { bytes })
    }

    /// Compute the keccak256 hash of the bytecode
    pub fn hash(&self) -> String {
        if self.bytes.is_empty() {
            return String::new();
        }
        format!("{:x}", keccak256(&self.bytes))
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bytecode length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Re-encode as a hex string with 0x prefix
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.bytes))
    }
}

impl TryFrom<&BytecodeObject> for Bytecode {
    type Error = crate::error::Error;

    fn try_from(object: &BytecodeObject) -> Result<Self> {
        Self::from_hex(&object.object)
    }
}
