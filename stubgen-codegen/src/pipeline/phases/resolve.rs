//! Resolve phase - marker attribute resolution.

use eyre::Result;
use rayon::prelude::*;
use stubgen_semantic::SemanticContext;
use stubgen_syntax::Candidate;

use crate::pipeline::{GenerationContext, Phase};

/// Phase that keeps candidates whose marker attribute resolves and whose
/// declaration is public.
///
/// The check is a capability test against the semantic context, not a name
/// comparison: an attribute written as `Cmd` matches only if it resolves to
/// the marker type. Unresolved attributes and non-public methods are
/// discarded silently; a non-match is not an error.
pub struct ResolvePhase;

fn is_match(candidate: &Candidate<'_>, semantics: &dyn SemanticContext, marker: &str) -> bool {
    candidate.method.visibility.is_public()
        && candidate
            .method
            .attributes
            .iter()
            .any(|written| semantics.resolve_attribute(written) == Some(marker))
}

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve marker attributes against the semantic context"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let cancel = ctx.cancel.clone();
        let semantics = ctx.semantics;
        let marker = ctx.options.marker_attribute.as_str();

        ctx.matched = ctx
            .candidates
            .par_iter()
            .filter(|candidate| !cancel.is_cancelled() && is_match(candidate, semantics, marker))
            .cloned()
            .collect();

        tracing::debug!(matched = ctx.matched.len(), "resolve complete");
        Ok(())
    }
}
