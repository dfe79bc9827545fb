//! Tag contracts: which parameters each tag declares, which are required,
//! and what the optional ones default to.

use crate::descriptor::{FieldDescriptor, TypeDescriptor};
use crate::error::TagError;
use crate::tag::{ParamKind, ParamValue, ParameterMap, TagKind};

/// Where a tag may be attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagTarget {
    Type,
    Field,
}

/// Default for an optional parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamDefault {
    Bool(bool),
}

impl ParamDefault {
    fn to_value(self) -> ParamValue {
        match self {
            ParamDefault::Bool(b) => ParamValue::Bool(b),
        }
    }
}

/// One declared parameter. `default == None` means required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub default: Option<ParamDefault>,
}

impl ParamSpec {
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagContract {
    pub kind: TagKind,
    pub target: TagTarget,
    pub params: &'static [ParamSpec],
}

const BUILDER_TARGET: TagContract = TagContract {
    kind: TagKind::BuilderTarget,
    target: TagTarget::Type,
    params: &[],
};

const TABLE: TagContract = TagContract {
    kind: TagKind::Table,
    target: TagTarget::Type,
    params: &[ParamSpec {
        name: "name",
        kind: ParamKind::Text,
        default: None,
    }],
};

const COLUMN: TagContract = TagContract {
    kind: TagKind::Column,
    target: TagTarget::Field,
    params: &[
        ParamSpec {
            name: "name",
            kind: ParamKind::Text,
            default: None,
        },
        ParamSpec {
            name: "primaryKey",
            kind: ParamKind::Bool,
            default: Some(ParamDefault::Bool(false)),
        },
        ParamSpec {
            name: "nullable",
            kind: ParamKind::Bool,
            default: Some(ParamDefault::Bool(true)),
        },
    ],
};

/// Resolved `Table` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableTag {
    pub name: String,
}

/// Resolved `Column` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTag {
    pub name: String,
    pub primary_key: bool,
    pub nullable: bool,
}

/// Resolves raw tag parameters against the static tag contracts.
///
/// Stateless; every method is a pure function of its inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataTagRegistry;

impl MetadataTagRegistry {
    pub fn contract(kind: TagKind) -> &'static TagContract {
        match kind {
            TagKind::BuilderTarget => &BUILDER_TARGET,
            TagKind::Table => &TABLE,
            TagKind::Column => &COLUMN,
        }
    }

    /// Fill in defaults and check required parameters.
    ///
    /// Parameters the contract does not declare are carried through as-is.
    pub fn resolve(kind: TagKind, raw: &ParameterMap) -> Result<ParameterMap, TagError> {
        let contract = Self::contract(kind);
        let mut resolved = raw.clone();

        for spec in contract.params {
            match raw.get(spec.name) {
                Some(value) if value.kind() != spec.kind => {
                    return Err(TagError::InvalidParameterType {
                        tag_kind: kind,
                        parameter: spec.name.to_string(),
                        expected: spec.kind,
                    });
                }
                Some(_) => {}
                None => match spec.default {
                    Some(default) => {
                        resolved.insert(spec.name.to_string(), default.to_value());
                    }
                    None => {
                        return Err(TagError::MissingRequiredParameter {
                            tag_kind: kind,
                            parameter: spec.name.to_string(),
                        });
                    }
                },
            }
        }

        Ok(resolved)
    }

    /// Resolve the `Table` tag of a type. `None` if the type is not tagged.
    pub fn table(ty: &TypeDescriptor) -> Option<Result<TableTag, TagError>> {
        let raw = ty.type_tag(TagKind::Table)?;
        Some(Self::resolve(TagKind::Table, raw).map(|p| TableTag {
            name: text(&p, "name"),
        }))
    }

    /// Resolve the `Column` tag of a field. `None` if the field is not tagged.
    pub fn column(field: &FieldDescriptor) -> Option<Result<ColumnTag, TagError>> {
        let raw = field.tag(TagKind::Column)?;
        Some(Self::resolve(TagKind::Column, raw).map(|p| ColumnTag {
            name: text(&p, "name"),
            primary_key: flag(&p, "primaryKey"),
            nullable: flag(&p, "nullable"),
        }))
    }
}

// Only called on resolved maps, where declared parameters are present and
// of the declared kind.
fn text(p: &ParameterMap, name: &str) -> String {
    p.get(name)
        .and_then(ParamValue::as_text)
        .unwrap_or_default()
        .to_string()
}

fn flag(p: &ParameterMap, name: &str) -> bool {
    p.get(name).and_then(ParamValue::as_bool).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::params;

    #[test]
    fn column_defaults_applied() {
        let resolved =
            MetadataTagRegistry::resolve(TagKind::Column, &params([("name", "age".into())]))
                .unwrap();
        assert_eq!(resolved.get("primaryKey"), Some(&ParamValue::Bool(false)));
        assert_eq!(resolved.get("nullable"), Some(&ParamValue::Bool(true)));
    }

    #[test]
    fn explicit_values_win_over_defaults() {
        let raw = params([("name", "id".into()), ("primaryKey", true.into()), ("nullable", false.into())]);
        let resolved = MetadataTagRegistry::resolve(TagKind::Column, &raw).unwrap();
        assert_eq!(resolved, raw);
    }

    #[test]
    fn missing_table_name() {
        let err = MetadataTagRegistry::resolve(TagKind::Table, &ParameterMap::new()).unwrap_err();
        assert_eq!(
            err,
            TagError::MissingRequiredParameter {
                tag_kind: TagKind::Table,
                parameter: "name".into(),
            }
        );
    }

    #[test]
    fn missing_column_name() {
        let err = MetadataTagRegistry::resolve(TagKind::Column, &params([("nullable", false.into())]))
            .unwrap_err();
        assert!(matches!(
            err,
            TagError::MissingRequiredParameter { tag_kind: TagKind::Column, ref parameter } if parameter == "name"
        ));
    }

    #[test]
    fn wrong_parameter_kind() {
        let err = MetadataTagRegistry::resolve(
            TagKind::Column,
            &params([("name", "id".into()), ("primaryKey", "yes".into())]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            TagError::InvalidParameterType {
                tag_kind: TagKind::Column,
                parameter: "primaryKey".into(),
                expected: ParamKind::Bool,
            }
        );
    }

    #[test]
    fn builder_target_has_no_parameters() {
        let resolved =
            MetadataTagRegistry::resolve(TagKind::BuilderTarget, &ParameterMap::new()).unwrap();
        assert!(resolved.is_empty());
    }

    #[test]
    fn undeclared_parameters_pass_through() {
        let raw = params([("name", "people".into()), ("schema", "public".into())]);
        let resolved = MetadataTagRegistry::resolve(TagKind::Table, &raw).unwrap();
        assert_eq!(resolved.get("schema"), Some(&ParamValue::from("public")));
    }

    #[test]
    fn typed_views() {
        let ty = TypeDescriptor::new("Person", "")
            .with_tag(TagKind::Table, params([("name", "people".into())]));
        let table = MetadataTagRegistry::table(&ty).unwrap().unwrap();
        assert_eq!(table.name, "people");

        let field = FieldDescriptor::new("id", "int64").with_tag(
            TagKind::Column,
            params([("name", "person_id".into()), ("primaryKey", true.into())]),
        );
        let column = MetadataTagRegistry::column(&field).unwrap().unwrap();
        assert_eq!(
            column,
            ColumnTag {
                name: "person_id".into(),
                primary_key: true,
                nullable: true,
            }
        );

        assert!(MetadataTagRegistry::column(&FieldDescriptor::new("x", "string")).is_none());
    }
}
