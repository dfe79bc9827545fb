//! Type and field descriptors — read-only snapshots of a type's shape.
//!
//! Built once per generation request by an introspection provider and
//! never mutated afterwards. Field order is declaration order.

use serde::{Deserialize, Serialize};

use crate::tag::{ParameterMap, TagKind, TagMap};

/// One structural field of a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    name: String,

    /// Semantic type identifier (e.g. `int64`, `string`).
    type_name: String,

    #[serde(default, skip_serializing_if = "TagMap::is_empty")]
    tags: TagMap,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            tags: TagMap::new(),
        }
    }

    /// Attach a tag. A second tag of the same kind replaces the first.
    pub fn with_tag(mut self, kind: TagKind, params: ParameterMap) -> Self {
        self.tags.insert(kind, params);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn tags(&self) -> &TagMap {
        &self.tags
    }

    pub fn tag(&self, kind: TagKind) -> Option<&ParameterMap> {
        self.tags.get(&kind)
    }

    pub fn has_tag(&self, kind: TagKind) -> bool {
        self.tags.contains_key(&kind)
    }
}

/// One generatable type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    simple_name: String,

    /// Dotted (`com.example`) or slash-delimited (`com/example`). May be empty.
    #[serde(default)]
    namespace: String,

    #[serde(default)]
    fields: Vec<FieldDescriptor>,

    #[serde(default, skip_serializing_if = "TagMap::is_empty")]
    type_tags: TagMap,
}

impl TypeDescriptor {
    pub fn new(simple_name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            simple_name: simple_name.into(),
            namespace: namespace.into(),
            fields: Vec::new(),
            type_tags: TagMap::new(),
        }
    }

    pub fn with_tag(mut self, kind: TagKind, params: ParameterMap) -> Self {
        self.type_tags.insert(kind, params);
        self
    }

    /// Append a field. Fields keep the order they were added in.
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn type_tags(&self) -> &TagMap {
        &self.type_tags
    }

    pub fn type_tag(&self, kind: TagKind) -> Option<&ParameterMap> {
        self.type_tags.get(&kind)
    }

    pub fn has_tag(&self, kind: TagKind) -> bool {
        self.type_tags.contains_key(&kind)
    }

    /// Get a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields carrying the given tag, in declaration order.
    pub fn fields_tagged(&self, kind: TagKind) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(move |f| f.has_tag(kind))
    }
}
