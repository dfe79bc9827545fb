/// Dispatches generation requests to the matching generator

use forge_ir::{FieldAccess, TypeDescriptor};

use crate::builder::BuilderCodeGenerator;
use crate::config::GeneratorConfig;
use crate::ddl::SchemaDdlGenerator;
use crate::dml::{InsertStatementGenerator, PreparedInsert};
use crate::error::GenError;
use crate::{ArtifactKind, Codegen, GeneratedFile};

/// Entry point for callers. Holds only configuration, so one instance can
/// serve concurrent requests from any number of threads.
///
/// Errors from the generators are returned unchanged.
#[derive(Debug, Clone, Default)]
pub struct GenerationOrchestrator {
    builder: BuilderCodeGenerator,
    ddl: SchemaDdlGenerator,
    insert: InsertStatementGenerator,
}

impl GenerationOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            builder: BuilderCodeGenerator,
            ddl: SchemaDdlGenerator::new(config.type_mapper()),
            insert: InsertStatementGenerator::new(config.read_policy),
        }
    }

    fn generator(&self, kind: ArtifactKind) -> &dyn Codegen {
        match kind {
            ArtifactKind::Builder => &self.builder,
            ArtifactKind::SchemaDdl => &self.ddl,
        }
    }

    pub fn generate(&self, ty: &TypeDescriptor, kind: ArtifactKind) -> Result<String, GenError> {
        self.generator(kind).generate(ty)
    }

    /// Generate text together with a suggested relative output path.
    pub fn generate_file(
        &self,
        ty: &TypeDescriptor,
        kind: ArtifactKind,
    ) -> Result<GeneratedFile, GenError> {
        let generator = self.generator(kind);
        let content = generator.generate(ty)?;
        let path = generator.path(ty)?;
        Ok(GeneratedFile { path, content })
    }

    pub fn generate_insert(
        &self,
        instance: &dyn FieldAccess,
        ty: &TypeDescriptor,
    ) -> Result<String, GenError> {
        self.insert.generate(instance, ty)
    }

    pub fn prepare_insert(
        &self,
        instance: &dyn FieldAccess,
        ty: &TypeDescriptor,
    ) -> Result<PreparedInsert, GenError> {
        self.insert.prepare(instance, ty)
    }
}
