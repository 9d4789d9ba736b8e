//! Core generation pipeline for marker-annotated method stubs.
//!
//! The generator scans source units for attribute-bearing methods, resolves
//! the marker attribute against a semantic context, lowers matches into
//! immutable method models, groups them by enclosing namespace and type
//! chain, and renders one generated unit per group into an output sink.
//!
//! The whole run is a pure function of the input source set: nothing is
//! retained between evaluations, and nothing is written to the sink until
//! every stage up to grouping has completed.
//!
//! # Module Organization
//!
//! - [`pipeline`] - Phase orchestration ([`Generator`], [`Phase`], diagnostics)
//! - [`model`](FileModel) - Method, parameter, and file models
//! - [`emit`](render_file) - Text rendering for file models
//! - [`sink`](OutputSink) - Output boundary toward the host build
//! - [`builder`](CodeBuilder) - Indentation-aware text building
//! - [`naming`](output_name) - Deterministic generated-unit naming

mod builder;
mod cancel;
mod emit;
mod model;
mod naming;
mod options;
pub mod pipeline;
mod sink;

pub use builder::{CodeBuilder, Indent};
pub use cancel::CancelToken;
pub use emit::{marker_attribute_source, render_file};
pub use model::{FileModel, MethodModel, ParamModel};
pub use naming::{group_key, output_name};
pub use options::{GENERATED_EXTENSION, GeneratorOptions, MARKER_ATTRIBUTE, STUB_ATTRIBUTES};
pub use pipeline::{Diagnostic, GenerationContext, Generator, Phase, RunReport, Severity};
pub use sink::{MemorySink, OutputSink};
