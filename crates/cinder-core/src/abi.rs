//! ABI summary utilities
//!
//! The generation pipeline treats ABIs as opaque beyond a shape check; this
//! wrapper exists for artifact reporting in the CLI (function counts,
//! constructor presence).

use alloy::json_abi::JsonAbi;

use crate::error::{Error, Result};

/// Wrapper around alloy's JsonAbi providing summary accessors.
#[derive(Debug, Clone)]
pub struct Abi(JsonAbi);

impl Abi {
    /// Parse a JSON ABI string
    pub fn parse(json: &str) -> Result<Self> {
        let abi: JsonAbi = serde_json::from_str(json)
            .map_err(|err| Error::Abi(format!("Failed to parse ABI: {}", err)))?;
        Ok(Self(abi))
    }

    /// Parse from a serde_json::Value
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        let abi: JsonAbi = serde_json::from_value(value.clone())
            .map_err(|err| Error::Abi(format!("Failed to parse ABI: {}", err)))?;
        Ok(Self(abi))
    }

    /// Get the inner JsonAbi for advanced operations
    pub fn inner(&self) -> &JsonAbi {
        &self.0
    }

    pub fn has_constructor(&self) -> bool {
        self.0.constructor.is_some()
    }

    /// Number of functions, counting overloads
    pub fn function_count(&self) -> usize {
        self.0.functions.values().map(Vec::len).sum()
    }

    /// Number of events, counting overloads
    pub fn event_count(&self) -> usize {
        self.0.events.values().map(Vec::len).sum()
    }

    /// Number of custom errors, counting overloads
    pub fn error_count(&self) -> usize {
        self.0.errors.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN_ABI: &str = r#"[
        {
            "type": "constructor",
            "inputs": [{"name": "supply", "type": "uint256"}],
            "stateMutability": "nonpayable"
        },
        {
            "type": "function",
            "name": "transfer",
            "inputs": [
                {"name": "to", "type": "address"},
                {"name": "amount", "type": "uint256"}
            ],
            "outputs": [{"name": "", "type": "bool"}],
            "stateMutability": "nonpayable"
        },
        {
            "type": "function",
            "name": "balanceOf",
            "inputs": [{"name": "owner", "type": "address"}],
            "outputs": [{"name": "", "type": "uint256"}],
            "stateMutability": "view"
        },
        {
            "type": "event",
            "name": "Transfer",
            "inputs": [
                {"name": "from", "type": "address", "indexed": true},
                {"name": "to", "type": "address", "indexed": true},
                {"name": "amount", "type": "uint256", "indexed": false}
            ],
            "anonymous": false
        },
        {
            "type": "error",
            "name": "InsufficientBalance",
            "inputs": [{"name": "needed", "type": "uint256"}]
        }
    ]"#;

    #[test]
    fn test_parse_abi() {
        let abi = Abi::parse(TOKEN_ABI).unwrap();
        assert!(abi.has_constructor());
        assert_eq!(abi.function_count(), 2);
        assert_eq!(abi.event_count(), 1);
        assert_eq!(abi.error_count(), 1);
    }

    #[test]
    fn test_from_value() {
        let value: serde_json::Value = serde_json::from_str(TOKEN_ABI).unwrap();
        let abi = Abi::from_value(&value).unwrap();
        assert_eq!(abi.function_count(), 2);
    }

    #[test]
    fn test_empty_abi() {
        let abi = Abi::parse("[]").unwrap();
        assert!(!abi.has_constructor());
        assert_eq!(abi.function_count(), 0);
    }

    #[test]
    fn test_parse_invalid_abi() {
        assert!(Abi::parse(r#"{"not": "an abi"}"#).is_err());
    }
}
