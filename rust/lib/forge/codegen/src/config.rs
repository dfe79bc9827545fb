//! Generator configuration.
//!
//! Read from a TOML file such as:
//!
//! ```toml
//! mapping-mode = "strict"
//! read-policy = "lenient"
//!
//! [custom-types]
//! bool = "BOOLEAN"
//! uuid = "CHAR(36)"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dml::ReadPolicy;
use crate::type_map::{MappingMode, TypeMapper};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeneratorConfig {
    /// Behaviour for type names with no mapping rule.
    pub mapping_mode: MappingMode,

    /// Behaviour for unreadable fields during INSERT generation.
    pub read_policy: ReadPolicy,

    /// Extra `type name → SQL type` mappings, checked before the built-in rules.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_types: BTreeMap<String, String>,
}

impl GeneratorConfig {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from disk, or return default if the file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn type_mapper(&self) -> TypeMapper {
        self.custom_types
            .iter()
            .fold(TypeMapper::new(self.mapping_mode), |mapper, (name, sql_type)| {
                mapper.register(name.as_str(), sql_type.as_str())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GeneratorConfig::from_toml_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.mapping_mode, MappingMode::Permissive);
        assert_eq!(config.read_policy, ReadPolicy::Lenient);
    }

    #[test]
    fn parse_full() {
        let config = GeneratorConfig::from_toml_str(
            r#"
mapping-mode = "strict"
read-policy = "strict"

[custom-types]
bool = "BOOLEAN"
"#,
        )
        .unwrap();
        assert_eq!(config.mapping_mode, MappingMode::Strict);
        assert_eq!(config.read_policy, ReadPolicy::Strict);

        let mapper = config.type_mapper();
        assert_eq!(mapper.map("bool").unwrap(), "BOOLEAN");
        assert!(mapper.map("uuid").is_err());
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(GeneratorConfig::from_toml_str(r#"mapping-mode = "loose""#).is_err());
    }

    #[test]
    fn toml_roundtrip() {
        let mut config = GeneratorConfig {
            read_policy: ReadPolicy::Strict,
            ..Default::default()
        };
        config.custom_types.insert("uuid".into(), "CHAR(36)".into());
        let text = config.to_toml_string().unwrap();
        assert_eq!(GeneratorConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::load(&dir.path().join("forge.toml")).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("forge.toml");
        std::fs::write(&path, "mapping-mode = \"strict\"\n").unwrap();
        let config = GeneratorConfig::load(&path).unwrap();
        assert_eq!(config.mapping_mode, MappingMode::Strict);
    }
}
