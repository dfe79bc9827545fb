//! Descriptor consistency checks.
//!
//! Run by introspection providers after building a descriptor:
//! - Type and field names must be non-empty
//! - Field names must be unique within the type
//! - Tags must sit at the level their contract declares
//! - Tags must carry their required parameters with the right kinds

use std::collections::BTreeSet;

use crate::descriptor::TypeDescriptor;
use crate::registry::{MetadataTagRegistry, TagTarget};
use crate::tag::TagMap;

/// A validation error with a descriptive message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    /// `Type` or `Type.field`.
    pub context: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.context, self.message)
    }
}

/// Validate a descriptor. Returns all errors found (does not stop at first error).
pub fn validate_descriptor(ty: &TypeDescriptor) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let type_ctx = ty.simple_name().to_string();

    if ty.simple_name().is_empty() {
        errors.push(ValidationError {
            message: "type name is empty".into(),
            context: "<anonymous>".into(),
        });
    }

    errors.extend(validate_tags(ty.type_tags(), TagTarget::Type, &type_ctx));

    let mut seen = BTreeSet::new();
    for (i, field) in ty.fields().iter().enumerate() {
        let ctx = format!("{}.{}", type_ctx, field.name());

        if field.name().is_empty() {
            errors.push(ValidationError {
                message: format!("field #{} has an empty name", i),
                context: type_ctx.clone(),
            });
        } else if !seen.insert(field.name()) {
            errors.push(ValidationError {
                message: format!("duplicate field name '{}'", field.name()),
                context: type_ctx.clone(),
            });
        }

        if field.type_name().is_empty() {
            errors.push(ValidationError {
                message: "field type is empty".into(),
                context: ctx.clone(),
            });
        }

        errors.extend(validate_tags(field.tags(), TagTarget::Field, &ctx));
    }

    errors
}

fn validate_tags(tags: &TagMap, level: TagTarget, ctx: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (kind, raw) in tags {
        let contract = MetadataTagRegistry::contract(*kind);
        if contract.target != level {
            errors.push(ValidationError {
                message: format!("{} tag cannot be attached to a {}", kind, level_name(level)),
                context: ctx.to_string(),
            });
            continue;
        }
        if let Err(e) = MetadataTagRegistry::resolve(*kind, raw) {
            errors.push(ValidationError {
                message: e.to_string(),
                context: ctx.to_string(),
            });
        }
    }
    errors
}

fn level_name(level: TagTarget) -> &'static str {
    match level {
        TagTarget::Type => "type",
        TagTarget::Field => "field",
    }
}
