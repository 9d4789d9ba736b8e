//! Pipeline orchestrator.

use eyre::Result;
use rayon::prelude::*;
use serde::Serialize;
use stubgen_semantic::SemanticContext;
use stubgen_syntax::SourceUnit;

use super::{
    Diagnostic, GenerationContext, Phase,
    phases::{GroupPhase, LowerPhase, ResolvePhase, ScanPhase},
};
use crate::{
    CancelToken, emit::render_file, naming, options::GeneratorOptions, sink::OutputSink,
};

/// Summary of one generator run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Attribute-bearing methods found by the scan.
    pub scanned: usize,
    /// Methods whose marker attribute resolved.
    pub matched: usize,
    /// Names of the units registered into the sink, in registration order.
    pub generated: Vec<String>,
    /// Diagnostics collected during the run.
    pub diagnostics: Vec<Diagnostic>,
    /// True if the run was cancelled. A cancelled run registers nothing.
    pub cancelled: bool,
}

impl RunReport {
    fn cancelled() -> Self {
        Self {
            scanned: 0,
            matched: 0,
            generated: Vec::new(),
            diagnostics: Vec::new(),
            cancelled: true,
        }
    }

    /// Check if any error diagnostics were recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

/// The generation orchestrator.
///
/// One evaluation runs the built-in phases in order, then renders every
/// grouped file model and registers the results into the output sink. The
/// run is a pure function of its inputs up to that final registration step:
/// identical units and semantics yield byte-identical `(name, text)` pairs.
///
/// A failure while rendering or registering one unit is recorded as a
/// diagnostic and never aborts the remaining units.
///
/// # Example
///
/// ```ignore
/// let generator = Generator::new();
/// let mut sink = MemorySink::new();
/// let report = generator.run(&units, &semantics, &mut sink, CancelToken::new())?;
///
/// for diag in &report.diagnostics {
///     eprintln!("{diag}");
/// }
/// ```
pub struct Generator {
    options: GeneratorOptions,
}

impl Generator {
    /// Create a generator with default options.
    pub fn new() -> Self {
        Self {
            options: GeneratorOptions::default(),
        }
    }

    /// Create a generator with explicit options.
    pub fn with_options(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// The options this generator runs with.
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Run one evaluation over the given source units.
    ///
    /// # Errors
    ///
    /// Returns an error only on fatal phase failure. Unit-local problems
    /// surface as diagnostics on the report; cancellation yields a report
    /// with `cancelled` set and nothing registered.
    pub fn run(
        &self,
        units: &[SourceUnit],
        semantics: &dyn SemanticContext,
        sink: &mut dyn OutputSink,
        cancel: CancelToken,
    ) -> Result<RunReport> {
        let mut ctx = GenerationContext::new(units, semantics, &self.options, cancel);

        let phases: [&dyn Phase; 4] = [&ScanPhase, &ResolvePhase, &LowerPhase, &GroupPhase];
        for phase in phases {
            if ctx.cancel.is_cancelled() {
                return Ok(RunReport::cancelled());
            }
            tracing::debug!(phase = phase.name(), "running phase");
            phase.run(&mut ctx)?;
        }

        // Rendering is independent per file model.
        let cancel = ctx.cancel.clone();
        let rendered: Vec<(String, Option<Result<String>>)> = ctx
            .files
            .par_iter()
            .map(|file| {
                let name = naming::output_name(
                    file.namespace.as_deref(),
                    &file.type_chain,
                    &self.options.extension,
                );
                if cancel.is_cancelled() {
                    return (name, None);
                }
                (name, Some(render_file(file, &self.options)))
            })
            .collect();

        // A cancelled evaluation is void: register nothing.
        if ctx.cancel.is_cancelled() {
            return Ok(RunReport::cancelled());
        }

        let mut generated = Vec::with_capacity(rendered.len());
        for (name, result) in rendered {
            match result {
                Some(Ok(text)) => match sink.add_source(&name, &text) {
                    Ok(()) => {
                        tracing::debug!(unit = %name, "registered generated unit");
                        generated.push(name);
                    }
                    Err(e) => ctx.diagnostics.push(
                        Diagnostic::error("register", format!("failed to register unit: {e}"))
                            .at(name),
                    ),
                },
                Some(Err(e)) => ctx.diagnostics.push(
                    Diagnostic::error("emit", format!("failed to render unit: {e}")).at(name),
                ),
                None => {}
            }
        }

        Ok(RunReport {
            scanned: ctx.candidates.len(),
            matched: ctx.matched.len(),
            generated,
            diagnostics: ctx.diagnostics,
            cancelled: false,
        })
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use stubgen_semantic::SymbolTable;
    use stubgen_syntax::{Declaration, MethodDecl, SourceUnit};

    use super::*;
    use crate::{MARKER_ATTRIBUTE, MemorySink};

    fn units() -> Vec<SourceUnit> {
        vec![SourceUnit::new(
            "Test.cs",
            vec![Declaration::namespace(
                "NS",
                vec![Declaration::class(
                    "A",
                    vec![
                        Declaration::method(
                            MethodDecl::new("Foo", "void").public().with_attribute("Cmd"),
                        ),
                        Declaration::method(MethodDecl::new("Skipped", "void").public()),
                    ],
                )],
            )],
        )]
    }

    fn semantics() -> SymbolTable {
        SymbolTable::new().with_attribute("Cmd", MARKER_ATTRIBUTE)
    }

    #[test]
    fn test_run_registers_one_unit_per_group() {
        let generator = Generator::new();
        let mut sink = MemorySink::new();
        let report = generator
            .run(&units(), &semantics(), &mut sink, CancelToken::new())
            .expect("run");

        assert_eq!(report.scanned, 1);
        assert_eq!(report.matched, 1);
        assert_eq!(report.generated, vec!["NS.A.g.cs"]);
        assert!(!report.cancelled);
        assert!(!report.has_errors());

        let text = sink.get("NS.A.g.cs").expect("unit registered");
        assert!(text.contains("public partial void Foo();"));
    }

    #[test]
    fn test_run_with_no_units_registers_nothing() {
        let generator = Generator::new();
        let mut sink = MemorySink::new();
        let report = generator
            .run(&[], &semantics(), &mut sink, CancelToken::new())
            .expect("run");

        assert_eq!(report.scanned, 0);
        assert!(report.generated.is_empty());
        assert!(sink.sources().is_empty());
    }

    #[test]
    fn test_pre_cancelled_run_is_void() {
        let generator = Generator::new();
        let mut sink = MemorySink::new();
        let cancel = CancelToken::new();
        cancel.cancel();

        let report = generator
            .run(&units(), &semantics(), &mut sink, cancel)
            .expect("run");

        assert!(report.cancelled);
        assert!(report.generated.is_empty());
        assert!(sink.sources().is_empty());
    }
}
