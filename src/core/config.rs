use serde::{Deserialize, Serialize};
use crate::core::error::{Error, ErrorKind, Result};

/// Shortest prefix that resolves to a value
pub const MIN_PREFIX_LEN: usize = 3;

/// How disallowed characters are removed from a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// Remove every character outside `[A-Za-z0-9]`
    #[default]
    StripAll,
    /// Remove only the first character outside `[A-Za-z0-9]`
    StripFirst,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub min_prefix_len: usize,
    pub normalization: NormalizationMode,

    // 0 disables the per-index query cache
    pub query_cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_prefix_len: MIN_PREFIX_LEN,
            normalization: NormalizationMode::StripAll,
            query_cache_size: 0,
        }
    }
}

impl Config {
    /// Parse a JSON config, filling absent fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_prefix_len == 0 {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                "min_prefix_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
