//! Table-backed semantic context.

use std::path::Path;

use indexmap::IndexMap;
use miette::NamedSource;
use serde::{Deserialize, Serialize};

use crate::{
    SemanticContext,
    error::{Error, Result, json_span},
};

/// A [`SemanticContext`] backed by plain lookup tables.
///
/// Each map goes from a reference as written in source to its fully
/// qualified resolution. Insertion order is preserved so serialization is
/// stable across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolTable {
    /// Attribute name (as written) to attribute type fully qualified name.
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
    /// Type name (as written) to fully qualified display name.
    #[serde(default)]
    pub types: IndexMap<String, String>,
    /// Member reference path to fully qualified display text.
    #[serde(default)]
    pub members: IndexMap<String, String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open and parse a symbol table file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a symbol table, attributing errors to the given filename.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            let span = json_span(content, &e);
            Box::new(Error::Parse {
                src: NamedSource::new(filename, content.to_string()),
                span,
                source: e,
            })
        })
    }

    /// Register an attribute resolution.
    pub fn with_attribute(mut self, written: impl Into<String>, fqn: impl Into<String>) -> Self {
        self.attributes.insert(written.into(), fqn.into());
        self
    }

    /// Register a type resolution.
    pub fn with_type(mut self, written: impl Into<String>, fqn: impl Into<String>) -> Self {
        self.types.insert(written.into(), fqn.into());
        self
    }

    /// Register a member resolution.
    pub fn with_member(mut self, path: impl Into<String>, display: impl Into<String>) -> Self {
        self.members.insert(path.into(), display.into());
        self
    }
}

impl SemanticContext for SymbolTable {
    fn resolve_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn resolve_type(&self, name: &str) -> Option<&str> {
        self.types.get(name).map(String::as_str)
    }

    fn resolve_member(&self, path: &str) -> Option<&str> {
        self.members.get(path).map(String::as_str)
    }
}
