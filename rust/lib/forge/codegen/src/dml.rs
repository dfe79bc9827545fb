/// INSERT statement generator

use forge_ir::{FieldAccess, FieldValue, MetadataTagRegistry, TypeDescriptor};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ddl::resolve_table;
use crate::error::GenError;

/// How a failed field read is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadPolicy {
    /// Substitute `NULL` and keep going.
    #[default]
    Lenient,
    /// Abort with [`GenError::FieldRead`].
    Strict,
}

/// A parameterized INSERT: `?` placeholders plus the values to bind, in
/// column order.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedInsert {
    pub sql: String,
    pub args: Vec<FieldValue>,
}

/// Emits INSERT statements from the current field values of a live instance.
///
/// Two calls against an instance mutated in between may differ. The instance
/// is not locked; its owner must not mutate it during a call.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertStatementGenerator {
    policy: ReadPolicy,
}

impl InsertStatementGenerator {
    pub fn new(policy: ReadPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ReadPolicy {
        self.policy
    }

    /// Literal form: `INSERT INTO t (a, b) VALUES ('x', 1)`.
    pub fn generate(
        &self,
        instance: &dyn FieldAccess,
        ty: &TypeDescriptor,
    ) -> Result<String, GenError> {
        let (table, columns) = self.read_columns(instance, ty)?;

        let names: Vec<&str> = columns.iter().map(|(name, _)| name.as_str()).collect();
        let values: Vec<String> = columns.iter().map(|(_, value)| sql_literal(value)).collect();

        Ok(format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            names.join(", "),
            values.join(", ")
        ))
    }

    /// Parameterized form: `INSERT INTO t (a, b) VALUES (?, ?)` plus args.
    pub fn prepare(
        &self,
        instance: &dyn FieldAccess,
        ty: &TypeDescriptor,
    ) -> Result<PreparedInsert, GenError> {
        let (table, columns) = self.read_columns(instance, ty)?;

        let names: Vec<&str> = columns.iter().map(|(name, _)| name.as_str()).collect();
        let placeholders = vec!["?"; columns.len()];
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            names.join(", "),
            placeholders.join(", ")
        );
        let args = columns.into_iter().map(|(_, value)| value).collect();

        Ok(PreparedInsert { sql, args })
    }

    /// Resolve the table and read every `Column` field, in descriptor order.
    fn read_columns(
        &self,
        instance: &dyn FieldAccess,
        ty: &TypeDescriptor,
    ) -> Result<(String, Vec<(String, FieldValue)>), GenError> {
        let table = resolve_table(ty)?;
        debug!(table = %table.name, type_name = ty.simple_name(), "generating insert");

        let mut columns = Vec::new();
        for field in ty.fields() {
            let Some(column) = MetadataTagRegistry::column(field) else {
                continue;
            };
            let column = column?;

            let value = match instance.read_field(field.name()) {
                Ok(value) => value,
                Err(e) => match self.policy {
                    ReadPolicy::Lenient => {
                        warn!(table = %table.name, column = %column.name, "{}, using NULL", e);
                        FieldValue::Null
                    }
                    ReadPolicy::Strict => return Err(e.into()),
                },
            };
            columns.push((column.name, value));
        }

        Ok((table.name, columns))
    }
}

// Legacy rendering: text is wrapped in single quotes without escaping, so a
// value containing `'` yields broken or injectable SQL. Use `prepare` for
// anything that reaches a database.
fn sql_literal(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) => format!("'{}'", s),
        other => other.to_string(),
    }
}
