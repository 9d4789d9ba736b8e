//! Pipeline phase trait.

use eyre::Result;

use super::GenerationContext;

/// A stage in the generation pipeline.
///
/// Phases run in order and communicate only through the context. A phase
/// must be deterministic and side-effect-free: registration into the output
/// sink happens after every phase has completed, never inside one.
///
/// Built-in phases, in execution order:
/// - `ScanPhase` - syntactic candidate filter
/// - `ResolvePhase` - marker attribute resolution and visibility check
/// - `LowerPhase` - matched declarations into method models
/// - `GroupPhase` - partition models by enclosing scope key (barrier)
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and logging).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the generation context.
    ///
    /// # Errors
    ///
    /// Returns an error only if the phase fails fatally. Unit-local issues
    /// are recorded as diagnostics instead.
    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()>;
}
