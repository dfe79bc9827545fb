//! Forge Intermediate Representation (IR)
//!
//! Immutable type descriptors consumed by the generators in `forge-codegen`:
//! - tag      — metadata tag kinds and their raw parameters
//! - descriptor — type and field snapshots with attached tags
//! - registry — tag contracts, defaults, required-parameter checks
//! - value    — runtime field values + the introspection traits
//! - validate — structural checks an introspection provider runs once

pub mod descriptor;
pub mod error;
pub mod registry;
pub mod tag;
pub mod validate;
pub mod value;

pub use descriptor::*;
pub use error::{FieldReadError, TagError};
pub use registry::*;
pub use tag::*;
pub use validate::*;
pub use value::*;
