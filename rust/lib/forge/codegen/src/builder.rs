/// Fluent builder generator

use forge_ir::{TagKind, TypeDescriptor};
use tracing::debug;

use crate::error::GenError;
use crate::{require_tag, ArtifactKind, Codegen};

/// Emits Java-style builder source for a `BuilderTarget` type.
///
/// Fields are declared and passed to the constructor in descriptor order;
/// setters are named after the fields and return the builder for chaining.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuilderCodeGenerator;

impl Codegen for BuilderCodeGenerator {
    fn generate(&self, ty: &TypeDescriptor) -> Result<String, GenError> {
        require_tag(ty, TagKind::BuilderTarget)?;
        debug!(type_name = ty.simple_name(), fields = ty.fields().len(), "generating builder");
        Ok(generate_builder(ty))
    }

    fn path(&self, ty: &TypeDescriptor) -> Result<String, GenError> {
        require_tag(ty, TagKind::BuilderTarget)?;
        let package = package_name(ty.namespace());
        let file = format!("{}Builder.java", ty.simple_name());
        if package.is_empty() {
            Ok(file)
        } else {
            Ok(format!("{}/{}", package.replace('.', "/"), file))
        }
    }

    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Builder
    }
}

fn generate_builder(ty: &TypeDescriptor) -> String {
    let name = ty.simple_name();
    let builder = format!("{}Builder", name);
    let mut output = String::new();

    let package = package_name(ty.namespace());
    if !package.is_empty() {
        output.push_str(&format!("package {};\n\n", package));
    }

    output.push_str(&format!("public class {} {{\n", builder));

    for field in ty.fields() {
        output.push_str(&format!("    private {} {};\n", field.type_name(), field.name()));
    }
    if !ty.fields().is_empty() {
        output.push('\n');
    }

    for field in ty.fields() {
        output.push_str(&format!(
            "    public {} {}({} {}) {{\n",
            builder,
            field.name(),
            field.type_name(),
            field.name()
        ));
        output.push_str(&format!("        this.{0} = {0};\n", field.name()));
        output.push_str("        return this;\n");
        output.push_str("    }\n\n");
    }

    let args: Vec<&str> = ty.fields().iter().map(|f| f.name()).collect();
    output.push_str(&format!("    public {} build() {{\n", name));
    output.push_str(&format!("        return new {}({});\n", name, args.join(", ")));
    output.push_str("    }\n");
    output.push_str("}\n");

    output
}

/// `com/example/` and `com.example` both become `com.example`.
fn package_name(namespace: &str) -> String {
    namespace
        .split(['.', '/'])
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_ir::{FieldDescriptor, ParameterMap};

    fn person() -> TypeDescriptor {
        TypeDescriptor::new("Person", "com/example")
            .with_tag(TagKind::BuilderTarget, ParameterMap::new())
            .with_field(FieldDescriptor::new("name", "String"))
            .with_field(FieldDescriptor::new("age", "long"))
            .with_field(FieldDescriptor::new("email", "String"))
    }

    #[test]
    fn full_output() {
        let code = BuilderCodeGenerator.generate(&person()).unwrap();
        let expected = "\
package com.example;

public class PersonBuilder {
    private String name;
    private long age;
    private String email;

    public PersonBuilder name(String name) {
        this.name = name;
        return this;
    }

    public PersonBuilder age(long age) {
        this.age = age;
        return this;
    }

    public PersonBuilder email(String email) {
        this.email = email;
        return this;
    }

    public Person build() {
        return new Person(name, age, email);
    }
}
";
        assert_eq!(code, expected);
    }

    #[test]
    fn empty_namespace_omits_package() {
        let ty = TypeDescriptor::new("Point", "")
            .with_tag(TagKind::BuilderTarget, ParameterMap::new())
            .with_field(FieldDescriptor::new("x", "int64"));
        let code = BuilderCodeGenerator.generate(&ty).unwrap();
        assert!(code.starts_with("public class PointBuilder {\n"));
        assert!(!code.contains("package"));
    }

    #[test]
    fn no_fields() {
        let ty = TypeDescriptor::new("Marker", "")
            .with_tag(TagKind::BuilderTarget, ParameterMap::new());
        let code = BuilderCodeGenerator.generate(&ty).unwrap();
        assert_eq!(
            code,
            "public class MarkerBuilder {\n    public Marker build() {\n        return new Marker();\n    }\n}\n"
        );
    }

    #[test]
    fn requires_builder_target() {
        let ty = TypeDescriptor::new("Person", "").with_field(FieldDescriptor::new("name", "String"));
        let err = BuilderCodeGenerator.generate(&ty).unwrap_err();
        assert_eq!(err.expected_tag(), Some(TagKind::BuilderTarget));
    }

    #[test]
    fn deterministic() {
        let ty = person();
        assert_eq!(
            BuilderCodeGenerator.generate(&ty).unwrap(),
            BuilderCodeGenerator.generate(&ty).unwrap()
        );
    }

    #[test]
    fn suggested_path() {
        assert_eq!(
            BuilderCodeGenerator.path(&person()).unwrap(),
            "com/example/PersonBuilder.java"
        );
        let bare = TypeDescriptor::new("Point", "")
            .with_tag(TagKind::BuilderTarget, ParameterMap::new());
        assert_eq!(BuilderCodeGenerator.path(&bare).unwrap(), "PointBuilder.java");
    }

    #[test]
    fn package_normalization() {
        assert_eq!(package_name("com.example"), "com.example");
        assert_eq!(package_name("/com/example/"), "com.example");
        assert_eq!(package_name(""), "");
    }
}
