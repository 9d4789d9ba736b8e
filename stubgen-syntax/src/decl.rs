//! Source-level declaration nodes.
//!
//! These types are a purely structural view of method signatures and their
//! enclosing scopes. They carry no resolved symbols; resolution happens
//! behind the `SemanticContext` boundary in `stubgen-semantic`.

use serde::{Deserialize, Serialize};

/// One source unit (file) worth of declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    /// Path of the unit, used in diagnostics.
    pub path: String,
    /// Top-level declarations in source order.
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

impl SourceUnit {
    /// Create a new source unit.
    pub fn new(path: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            path: path.into(),
            declarations,
        }
    }
}

/// A declaration node: a namespace scope, a type scope, or a method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Declaration {
    /// A namespace scope. Namespaces may nest.
    Namespace {
        name: String,
        #[serde(default)]
        members: Vec<Declaration>,
    },
    /// A type scope. Types may nest inside namespaces and other types.
    Type {
        name: String,
        #[serde(default)]
        members: Vec<Declaration>,
    },
    /// A method signature.
    Method(MethodDecl),
}

impl Declaration {
    /// Create a namespace scope.
    pub fn namespace(name: impl Into<String>, members: Vec<Declaration>) -> Self {
        Self::Namespace {
            name: name.into(),
            members,
        }
    }

    /// Create a type scope.
    pub fn class(name: impl Into<String>, members: Vec<Declaration>) -> Self {
        Self::Type {
            name: name.into(),
            members,
        }
    }

    /// Wrap a method declaration.
    pub fn method(method: MethodDecl) -> Self {
        Self::Method(method)
    }
}

/// Declared visibility of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Internal,
    Protected,
    #[default]
    Private,
}

impl Visibility {
    /// Returns true for public visibility.
    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// A method signature as written in source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    /// Return type exactly as written at the declaration site.
    pub return_type: String,
    #[serde(default)]
    pub visibility: Visibility,
    /// Attribute names as written at the declaration site, unresolved.
    #[serde(default)]
    pub attributes: Vec<String>,
    /// Parameters in declaration order.
    #[serde(default)]
    pub params: Vec<ParamDecl>,
}

impl MethodDecl {
    /// Create a method with default (private) visibility and no attributes.
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            visibility: Visibility::default(),
            attributes: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Mark the method public.
    pub fn public(mut self) -> Self {
        self.visibility = Visibility::Public;
        self
    }

    /// Set an explicit visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Attach an attribute by its written name.
    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(name.into());
        self
    }

    /// Append a parameter.
    pub fn with_param(mut self, param: ParamDecl) -> Self {
        self.params.push(param);
        self
    }

    /// Whether any attribute is attached.
    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }
}

/// A declared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDecl {
    pub name: String,
    /// Type name as written, before semantic resolution.
    #[serde(rename = "type")]
    pub ty: String,
    /// True if the parameter carries the variadic modifier.
    #[serde(default)]
    pub variadic: bool,
    #[serde(default)]
    pub default: Option<DefaultExpr>,
}

impl ParamDecl {
    /// Create a plain parameter.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            variadic: false,
            default: None,
        }
    }

    /// Mark the parameter variadic.
    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Set a default value expression.
    pub fn with_default(mut self, default: DefaultExpr) -> Self {
        self.default = Some(default);
        self
    }
}

/// The shape of a parameter's default value expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum DefaultExpr {
    /// A literal token, rendered verbatim.
    Literal(String),
    /// A member or constant reference path, e.g. `Color.Red`.
    Member(String),
    /// Any other expression shape; not carried into descriptors.
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_builder() {
        let method = MethodDecl::new("Ping", "Task")
            .public()
            .with_attribute("Cmd")
            .with_param(ParamDecl::new("count", "int"));

        assert!(method.visibility.is_public());
        assert!(method.has_attributes());
        assert_eq!(method.params.len(), 1);
    }

    #[test]
    fn test_default_visibility_is_private() {
        let method = MethodDecl::new("Hidden", "void");
        assert_eq!(method.visibility, Visibility::Private);
        assert!(!method.has_attributes());
    }

    #[test]
    fn test_declaration_deserialize() {
        let json = r#"
        {
            "kind": "namespace",
            "name": "NS",
            "members": [
                {
                    "kind": "type",
                    "name": "A",
                    "members": [
                        {
                            "kind": "method",
                            "name": "Foo",
                            "return_type": "void",
                            "visibility": "public",
                            "attributes": ["Cmd"],
                            "params": [
                                { "name": "x", "type": "int", "variadic": true }
                            ]
                        }
                    ]
                }
            ]
        }
        "#;

        let decl: Declaration = serde_json::from_str(json).expect("should parse");
        let Declaration::Namespace { name, members } = &decl else {
            panic!("expected namespace");
        };
        assert_eq!(name, "NS");
        assert_eq!(members.len(), 1);
    }

    #[test]
    fn test_default_expr_deserialize() {
        let json = r#"{ "kind": "member", "text": "Color.Red" }"#;
        let default: DefaultExpr = serde_json::from_str(json).expect("should parse");
        assert_eq!(default, DefaultExpr::Member("Color.Red".into()));
    }

    #[test]
    fn test_declaration_roundtrip() {
        let decl = Declaration::namespace(
            "NS",
            vec![Declaration::class(
                "A",
                vec![Declaration::method(
                    MethodDecl::new("Foo", "void").public().with_attribute("Cmd"),
                )],
            )],
        );

        let json = serde_json::to_string(&decl).expect("serialize");
        let back: Declaration = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decl, back);
    }
}
