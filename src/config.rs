//! Configuration for huffpack

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Decode the header symbol table leniently: invalid UTF-8 bytes become
    /// U+FFFD instead of failing the whole decode.
    pub lenient_symbols: bool,
    /// Upper bound on the number of distinct symbols accepted for encoding.
    pub max_alphabet_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            lenient_symbols: false,
            max_alphabet_len: 1 << 16,
        }
    }
}

impl CodecConfig {
    /// Parse a configuration from JSON, as handed over by an outer CLI or
    /// file layer.
    pub fn from_json(json: &str) -> Result<Self, CodecError> {
        serde_json::from_str(json).map_err(|e| CodecError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let config = CodecConfig::default();
        assert!(!config.lenient_symbols);
        assert!(config.max_alphabet_len >= 256);
    }

    #[test]
    fn test_from_json() {
        let config =
            CodecConfig::from_json(r#"{"lenient_symbols":true,"max_alphabet_len":128}"#).unwrap();
        assert!(config.lenient_symbols);
        assert_eq!(config.max_alphabet_len, 128);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(CodecConfig::from_json("not json").is_err());
    }
}
