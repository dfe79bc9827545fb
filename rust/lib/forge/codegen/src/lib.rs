//! Forge codegen - turns tagged type descriptors into source and SQL text
//!
//! Builder source, CREATE TABLE and INSERT statements. Every generator is a
//! single-pass, stateless transformation; callers own all file and database I/O.

pub mod builder;
pub mod config;
pub mod ddl;
pub mod dml;
pub mod error;
pub mod orchestrator;
pub mod type_map;

use forge_ir::{TagKind, TypeDescriptor};
use serde::{Deserialize, Serialize};

pub use builder::BuilderCodeGenerator;
pub use config::GeneratorConfig;
pub use ddl::SchemaDdlGenerator;
pub use dml::{InsertStatementGenerator, PreparedInsert, ReadPolicy};
pub use error::GenError;
pub use orchestrator::GenerationOrchestrator;
pub use type_map::{MappingMode, TypeMapper};

/// Artifacts produced from a descriptor alone. Inserts also need an
/// instance and go through their own entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    Builder,
    SchemaDdl,
}

/// Codegen trait - implemented by each descriptor-only generator
pub trait Codegen {
    fn generate(&self, ty: &TypeDescriptor) -> Result<String, GenError>;

    /// Suggested relative output path for the generated text.
    fn path(&self, ty: &TypeDescriptor) -> Result<String, GenError>;

    fn kind(&self) -> ArtifactKind;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

pub(crate) fn require_tag(ty: &TypeDescriptor, expected: TagKind) -> Result<(), GenError> {
    if ty.has_tag(expected) {
        Ok(())
    } else {
        Err(GenError::NotTagged {
            type_name: ty.simple_name().to_string(),
            expected,
        })
    }
}
