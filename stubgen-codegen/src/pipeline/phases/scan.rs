//! Scan phase - syntactic candidate filter.

use eyre::Result;
use rayon::prelude::*;
use stubgen_syntax::{Candidate, candidates};

use crate::pipeline::{GenerationContext, Phase};

/// Phase that collects attribute-bearing methods from every source unit.
///
/// Purely syntactic: no semantic context is consulted, so the phase is cheap
/// enough to re-run on every evaluation. Units are independent and scanned
/// in parallel; results keep unit order so downstream stages stay
/// deterministic.
pub struct ScanPhase;

impl Phase for ScanPhase {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn description(&self) -> &'static str {
        "Collect attribute-bearing method declarations"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let cancel = ctx.cancel.clone();
        let per_unit: Vec<Vec<Candidate<'_>>> = ctx
            .units
            .par_iter()
            .map(|unit| {
                if cancel.is_cancelled() {
                    return Vec::new();
                }
                candidates(unit).collect()
            })
            .collect();

        ctx.candidates = per_unit.into_iter().flatten().collect();
        tracing::debug!(candidates = ctx.candidates.len(), "scan complete");
        Ok(())
    }
}
