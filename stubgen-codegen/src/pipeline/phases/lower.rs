//! Lower phase - matched declarations into method models.

use eyre::Result;
use rayon::prelude::*;
use stubgen_semantic::SemanticContext;
use stubgen_syntax::{Candidate, DefaultExpr, ParamDecl};

use crate::{
    model::{MethodModel, ParamModel},
    pipeline::{Diagnostic, GenerationContext, Phase},
};

/// Phase that lowers every matched declaration into an immutable
/// [`MethodModel`].
///
/// Lowering is total for any method with at least one enclosing type:
/// unresolved parameter types become empty text and unresolved member
/// defaults fall back to their source text, so every matched declaration
/// still produces a model. A method with no enclosing type is the one
/// explicit error condition; it yields a diagnostic instead of a model and
/// does not affect its siblings.
pub struct LowerPhase;

fn lower_param(param: &ParamDecl, semantics: &dyn SemanticContext) -> ParamModel {
    let type_text = semantics.resolve_type(&param.ty).unwrap_or_default().to_string();
    let default_text = match &param.default {
        Some(DefaultExpr::Literal(text)) => Some(text.clone()),
        Some(DefaultExpr::Member(path)) => Some(
            semantics
                .resolve_member(path)
                .unwrap_or(path.as_str())
                .to_string(),
        ),
        Some(DefaultExpr::Other(_)) | None => None,
    };

    ParamModel {
        variadic: param.variadic,
        type_text,
        name: param.name.clone(),
        default_text,
    }
}

fn lower_candidate(
    candidate: &Candidate<'_>,
    semantics: &dyn SemanticContext,
) -> std::result::Result<MethodModel, Diagnostic> {
    if candidate.types.is_empty() {
        return Err(Diagnostic::error(
            "lower",
            format!("method `{}` has no enclosing type", candidate.method.name),
        )
        .at(candidate.unit));
    }

    let namespace = if candidate.namespaces.is_empty() {
        None
    } else {
        Some(candidate.namespaces.join("."))
    };

    Ok(MethodModel {
        namespace,
        type_chain: candidate.types.iter().map(ToString::to_string).collect(),
        return_type: candidate.method.return_type.clone(),
        name: candidate.method.name.clone(),
        params: candidate
            .method
            .params
            .iter()
            .map(|param| lower_param(param, semantics))
            .collect(),
    })
}

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Lower matched declarations into method models"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let cancel = ctx.cancel.clone();
        let semantics = ctx.semantics;

        let lowered: Vec<Option<std::result::Result<MethodModel, Diagnostic>>> = ctx
            .matched
            .par_iter()
            .map(|candidate| {
                if cancel.is_cancelled() {
                    return None;
                }
                Some(lower_candidate(candidate, semantics))
            })
            .collect();

        for item in lowered.into_iter().flatten() {
            match item {
                Ok(model) => ctx.methods.push(model),
                Err(diagnostic) => ctx.diagnostics.push(diagnostic),
            }
        }

        tracing::debug!(methods = ctx.methods.len(), "lower complete");
        Ok(())
    }
}
