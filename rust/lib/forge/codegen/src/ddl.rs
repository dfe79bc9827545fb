/// CREATE TABLE generator

use forge_ir::{MetadataTagRegistry, TagKind, TableTag, TypeDescriptor};
use tracing::debug;

use crate::error::GenError;
use crate::type_map::TypeMapper;
use crate::{ArtifactKind, Codegen};

/// Emits a single-line `CREATE TABLE` for a `Table` type.
///
/// Only `Column`-tagged fields become columns; the rest are skipped.
#[derive(Debug, Clone, Default)]
pub struct SchemaDdlGenerator {
    mapper: TypeMapper,
}

impl SchemaDdlGenerator {
    pub fn new(mapper: TypeMapper) -> Self {
        Self { mapper }
    }
}

impl Codegen for SchemaDdlGenerator {
    fn generate(&self, ty: &TypeDescriptor) -> Result<String, GenError> {
        let table = resolve_table(ty)?;

        let mut columns = Vec::new();
        for field in ty.fields() {
            let Some(column) = MetadataTagRegistry::column(field) else {
                continue;
            };
            let column = column?;

            let mut clause = format!("{} {}", column.name, self.mapper.map(field.type_name())?);
            if column.primary_key {
                clause.push_str(" PRIMARY KEY");
            }
            if !column.nullable {
                clause.push_str(" NOT NULL");
            }
            columns.push(clause);
        }

        debug!(table = %table.name, columns = columns.len(), "generating create table");
        Ok(format!("CREATE TABLE {} ({})", table.name, columns.join(", ")))
    }

    fn path(&self, ty: &TypeDescriptor) -> Result<String, GenError> {
        let table = resolve_table(ty)?;
        Ok(format!("migrations/create_{}.sql", file_stem(&table.name)))
    }

    fn kind(&self) -> ArtifactKind {
        ArtifactKind::SchemaDdl
    }
}

// Keeps the file name inside `migrations/`: anything other than ASCII
// alphanumerics and `_` becomes `_`.
fn file_stem(table: &str) -> String {
    table
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Check the `Table` tag and resolve its parameters.
pub(crate) fn resolve_table(ty: &TypeDescriptor) -> Result<TableTag, GenError> {
    let table = MetadataTagRegistry::table(ty).ok_or_else(|| GenError::NotTagged {
        type_name: ty.simple_name().to_string(),
        expected: TagKind::Table,
    })?;
    Ok(table?)
}
