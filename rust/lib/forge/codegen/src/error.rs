use forge_ir::{FieldReadError, TagError, TagKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("type '{type_name}' is not tagged {expected}")]
    NotTagged { type_name: String, expected: TagKind },

    #[error(transparent)]
    Tag(#[from] TagError),

    #[error("no schema type registered for '{0}'")]
    UnmappedType(String),

    #[error("field read failed: {0}")]
    FieldRead(#[from] FieldReadError),
}

impl GenError {
    /// Tag a generator expected but did not find, if that is what failed.
    pub fn expected_tag(&self) -> Option<TagKind> {
        match self {
            GenError::NotTagged { expected, .. } => Some(*expected),
            _ => None,
        }
    }
}
