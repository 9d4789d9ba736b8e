//! Immutable models flowing through the pipeline.
//!
//! Models are built once by the lowering phase and never mutated afterwards;
//! they are discarded when the corresponding generated text has been emitted.

use crate::naming;

/// One declared parameter of a matched method.
///
/// Order among parameters is significant and matches declaration order; it
/// is part of the generated signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamModel {
    /// True if the parameter carries the variadic modifier.
    pub variadic: bool,
    /// Fully qualified type text; empty when resolution failed.
    pub type_text: String,
    pub name: String,
    /// Rendered default value, absent when the parameter has none or its
    /// shape is not carried over.
    pub default_text: Option<String>,
}

impl ParamModel {
    /// Render the parameter as it appears in a generated signature.
    ///
    /// An unresolved type renders as an empty token. That is a known
    /// degradation inherited from the selection policy, not a crash.
    pub fn render(&self) -> String {
        let prefix = if self.variadic { "params " } else { "" };
        let suffix = match &self.default_text {
            Some(default) => format!(" = {default}"),
            None => String::new(),
        };
        format!("{prefix}{} {}{suffix}", self.type_text, self.name)
    }
}

/// One matched method, lowered from its declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodModel {
    /// Enclosing namespaces joined with `.`, absent outside any namespace.
    pub namespace: Option<String>,
    /// Enclosing types, outermost first. Never empty.
    pub type_chain: Vec<String>,
    /// Return type exactly as written at the declaration site.
    pub return_type: String,
    pub name: String,
    pub params: Vec<ParamModel>,
}

impl MethodModel {
    /// Key of the file model this method belongs to.
    pub fn group_key(&self) -> String {
        naming::group_key(self.namespace.as_deref(), &self.type_chain)
    }
}

/// One generated unit: all matched methods sharing a namespace and type chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileModel {
    pub namespace: Option<String>,
    /// Shared enclosing types, outermost first.
    pub type_chain: Vec<String>,
    pub methods: Vec<MethodModel>,
}

impl FileModel {
    /// The distinct key identifying this file model.
    pub fn key(&self) -> String {
        naming::group_key(self.namespace.as_deref(), &self.type_chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, ty: &str) -> ParamModel {
        ParamModel {
            variadic: false,
            type_text: ty.into(),
            name: name.into(),
            default_text: None,
        }
    }

    #[test]
    fn test_param_render_plain() {
        assert_eq!(param("x", "System.Int32").render(), "System.Int32 x");
    }

    #[test]
    fn test_param_render_variadic() {
        let mut p = param("rest", "System.String[]");
        p.variadic = true;
        assert_eq!(p.render(), "params System.String[] rest");
    }

    #[test]
    fn test_param_render_with_default() {
        let mut p = param("count", "System.Int32");
        p.default_text = Some("1".into());
        assert_eq!(p.render(), "System.Int32 count = 1");
    }

    #[test]
    fn test_param_render_unresolved_type() {
        assert_eq!(param("x", "").render(), " x");
    }

    #[test]
    fn test_method_group_key() {
        let method = MethodModel {
            namespace: Some("NS".into()),
            type_chain: vec!["Outer".into(), "Inner".into()],
            return_type: "void".into(),
            name: "Foo".into(),
            params: vec![],
        };
        assert_eq!(method.group_key(), "NS.Outer.Inner");
    }
}
