//! Declaration model and syntactic scanner for the stubgen generator.
//!
//! This crate is the structural half of the generator's input boundary: a
//! tree of namespace, type, and method declarations per source unit, and a
//! cheap scanner that yields attribute-bearing methods without consulting
//! any semantic information.
//!
//! # Module Organization
//!
//! - [`decl`](crate::Declaration) - Declaration nodes (SourceUnit, Declaration, MethodDecl, ...)
//! - [`scan`](crate::candidates) - Syntactic candidate scan
//! - [`SourceSet`] - serde-loadable collection of source units

mod decl;
mod error;
mod scan;
mod source_set;

pub use decl::{Declaration, DefaultExpr, MethodDecl, ParamDecl, SourceUnit, Visibility};
pub use error::{Error, Result};
pub use scan::{Candidate, Candidates, candidates};
pub use source_set::SourceSet;
