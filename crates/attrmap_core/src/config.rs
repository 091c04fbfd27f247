//! Mapper configuration.
//!
//! # Invariants
//! - The default configuration keeps the silent fallback: unresolved names
//!   are dropped (`fill`, `write`), read as none (`read`, `has`) or left
//!   alone (`clear`).

use serde::{Deserialize, Serialize};

/// Per-record mapper settings.
///
/// Deserializable so hosts can embed it in their own configuration files;
/// missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Raise `UnresolvedAttribute` instead of silently ignoring unknown names.
    pub strict: bool,
}

impl MapperConfig {
    /// Configuration that rejects unresolved names.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Configuration that silently ignores unresolved names.
    pub fn lenient() -> Self {
        Self { strict: false }
    }
}

#[cfg(test)]
mod tests {
    use super::MapperConfig;

    #[test]
    fn default_is_lenient() {
        assert!(!MapperConfig::default().strict);
        assert_eq!(MapperConfig::default(), MapperConfig::lenient());
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let config: MapperConfig = serde_json::from_str("{}").expect("empty config");
        assert_eq!(config, MapperConfig::default());

        let config: MapperConfig =
            serde_json::from_str(r#"{"strict": true}"#).expect("strict config");
        assert_eq!(config, MapperConfig::strict());
    }
}
