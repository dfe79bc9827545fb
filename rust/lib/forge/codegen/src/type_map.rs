/// Semantic type name → SQL column type

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::GenError;

pub const BIGINT: &str = "BIGINT";
pub const VARCHAR: &str = "VARCHAR(255)";

/// What to do with a type name no rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingMode {
    /// Fall back to `VARCHAR(255)`.
    #[default]
    Permissive,
    /// Fail with [`GenError::UnmappedType`].
    Strict,
}

#[derive(Debug, Clone, Default)]
pub struct TypeMapper {
    mode: MappingMode,
    custom: BTreeMap<String, String>,
}

impl TypeMapper {
    pub fn new(mode: MappingMode) -> Self {
        Self {
            mode,
            custom: BTreeMap::new(),
        }
    }

    /// Register an explicit mapping. Registered names are checked before
    /// the built-in rules.
    pub fn register(mut self, type_name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        self.custom.insert(type_name.into(), sql_type.into());
        self
    }

    pub fn mode(&self) -> MappingMode {
        self.mode
    }

    pub fn map(&self, type_name: &str) -> Result<String, GenError> {
        if let Some(sql_type) = self.custom.get(type_name) {
            return Ok(sql_type.clone());
        }

        let sql_type = match type_name {
            "int64" | "long" => BIGINT,
            "string" => VARCHAR,
            _ => match self.mode {
                MappingMode::Permissive => VARCHAR,
                MappingMode::Strict => {
                    return Err(GenError::UnmappedType(type_name.to_string()));
                }
            },
        };

        Ok(sql_type.to_string())
    }
}
