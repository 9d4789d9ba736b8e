//! Semantic resolution boundary for the stubgen generator.
//!
//! The pipeline never inspects compiler internals directly; everything it
//! needs to know about resolved symbols goes through [`SemanticContext`].
//! The context is built once per evaluation and is read-only for the rest of
//! that evaluation, so concurrent readers are safe.
//!
//! [`SymbolTable`] is the table-backed implementation used by the CLI and by
//! tests; hosts embedding the generator can implement the trait over their
//! own compilation model.

mod error;
mod symbols;

pub use error::{Error, Result};
pub use symbols::SymbolTable;

/// Read-only view of resolved symbols for one evaluation.
///
/// Every method returns `None` when the reference does not resolve; an
/// unresolved reference is a non-match or a degraded field downstream, never
/// an error here.
pub trait SemanticContext: Send + Sync {
    /// Resolve an attribute reference, as written at a declaration site, to
    /// the fully qualified name of the attribute type it denotes.
    fn resolve_attribute(&self, name: &str) -> Option<&str>;

    /// Resolve a type reference to its fully qualified display name.
    fn resolve_type(&self, name: &str) -> Option<&str>;

    /// Resolve a member or constant reference path to its fully qualified
    /// display text.
    fn resolve_member(&self, path: &str) -> Option<&str>;
}
