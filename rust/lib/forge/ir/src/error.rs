use thiserror::Error;

use crate::tag::{ParamKind, TagKind};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("{tag_kind} tag is missing required parameter '{parameter}'")]
    MissingRequiredParameter { tag_kind: TagKind, parameter: String },

    #[error("{tag_kind} tag parameter '{parameter}' must be {expected}")]
    InvalidParameterType {
        tag_kind: TagKind,
        parameter: String,
        expected: ParamKind,
    },
}

/// A single field could not be read from a live instance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldReadError {
    #[error("field '{0}' does not exist on the instance")]
    Missing(String),

    #[error("field '{field}' is not accessible: {reason}")]
    Inaccessible { field: String, reason: String },

    #[error("field '{field}' holds an unsupported value kind: {kind}")]
    Unsupported { field: String, kind: String },
}

impl FieldReadError {
    /// Name of the field whose read failed.
    pub fn field(&self) -> &str {
        match self {
            FieldReadError::Missing(field) => field,
            FieldReadError::Inaccessible { field, .. } => field,
            FieldReadError::Unsupported { field, .. } => field,
        }
    }
}
