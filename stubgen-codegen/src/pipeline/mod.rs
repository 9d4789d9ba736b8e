//! Generation pipeline.
//!
//! The [`Generator`] orchestrates the stages of one evaluation:
//!
//! - scan: syntactic candidate filter, parallel per source unit
//! - resolve: marker attribute resolution against the semantic context
//! - lower: matched declarations into immutable method models
//! - group: partition by `(namespace, type chain)` key (barrier stage)
//!
//! followed by rendering and registration into the output sink, with
//! per-unit fault isolation. Non-fatal conditions are collected as
//! [`Diagnostic`] values on the [`GenerationContext`], never early returns.

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::GenerationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::{Generator, RunReport};
