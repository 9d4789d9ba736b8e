//! Generation context passed through pipeline stages.

use stubgen_semantic::SemanticContext;
use stubgen_syntax::{Candidate, SourceUnit};

use super::diagnostic::{Diagnostic, Severity};
use crate::{CancelToken, FileModel, MethodModel, options::GeneratorOptions};

/// State of one evaluation, carried through every stage.
///
/// Stages fill in their results and accumulate diagnostics along the way.
/// The context borrows the source units and the semantic context; both are
/// read-only for the whole evaluation, so parallel stages can share them
/// freely.
pub struct GenerationContext<'a> {
    /// The source units under evaluation.
    pub units: &'a [SourceUnit],
    /// Read-only resolved-symbol view for this evaluation.
    pub semantics: &'a dyn SemanticContext,
    /// Generator options for this evaluation.
    pub options: &'a GeneratorOptions,
    /// Cooperative cancellation token.
    pub cancel: CancelToken,
    /// Attribute-bearing methods (populated by the scan stage).
    pub candidates: Vec<Candidate<'a>>,
    /// Candidates whose marker attribute resolved (populated by resolve).
    pub matched: Vec<Candidate<'a>>,
    /// Lowered method models (populated by lower).
    pub methods: Vec<MethodModel>,
    /// Grouped file models (populated by group).
    pub files: Vec<FileModel>,
    /// Diagnostics collected during the evaluation.
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> GenerationContext<'a> {
    /// Create a fresh context for one evaluation.
    pub fn new(
        units: &'a [SourceUnit],
        semantics: &'a dyn SemanticContext,
        options: &'a GeneratorOptions,
        cancel: CancelToken,
    ) -> Self {
        Self {
            units,
            semantics,
            options,
            cancel,
            candidates: Vec::new(),
            matched: Vec::new(),
            methods: Vec::new(),
            files: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Add an error diagnostic.
    pub fn add_error(&mut self, stage: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(stage, message));
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, stage: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(stage, message));
    }

    /// Add a diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }
}

#[cfg(test)]
mod tests {
    use stubgen_semantic::SymbolTable;

    use super::*;

    #[test]
    fn test_context_creation() {
        let units: Vec<SourceUnit> = Vec::new();
        let semantics = SymbolTable::new();
        let options = GeneratorOptions::default();
        let ctx = GenerationContext::new(&units, &semantics, &options, CancelToken::new());

        assert!(ctx.candidates.is_empty());
        assert!(ctx.files.is_empty());
        assert!(ctx.diagnostics.is_empty());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_context_diagnostics() {
        let units: Vec<SourceUnit> = Vec::new();
        let semantics = SymbolTable::new();
        let options = GeneratorOptions::default();
        let mut ctx = GenerationContext::new(&units, &semantics, &options, CancelToken::new());

        ctx.add_warning("resolve", "just a warning");
        assert!(!ctx.has_errors());

        ctx.add_error("lower", "bad unit");
        assert!(ctx.has_errors());
        assert_eq!(ctx.errors().count(), 1);
    }
}
