//! Group phase - partition method models by enclosing scope key.

use eyre::Result;
use indexmap::IndexMap;

use crate::{
    model::FileModel,
    pipeline::{GenerationContext, Phase},
};

/// Phase that partitions method models into one [`FileModel`] per distinct
/// `(namespace, type chain)` key.
///
/// This is the pipeline's synchronization barrier: it needs the complete set
/// of models before any group can be finalized. Groups keep first-seen order
/// and methods keep lowering order, so identical input always produces
/// identical grouping.
pub struct GroupPhase;

impl Phase for GroupPhase {
    fn name(&self) -> &'static str {
        "group"
    }

    fn description(&self) -> &'static str {
        "Partition method models by namespace and type chain"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let methods = std::mem::take(&mut ctx.methods);
        let mut groups: IndexMap<String, FileModel> = IndexMap::new();

        for method in methods {
            if ctx.cancel.is_cancelled() {
                ctx.files.clear();
                return Ok(());
            }

            let key = method.group_key();
            groups
                .entry(key)
                .or_insert_with(|| FileModel {
                    namespace: method.namespace.clone(),
                    type_chain: method.type_chain.clone(),
                    methods: Vec::new(),
                })
                .methods
                .push(method);
        }

        ctx.files = groups.into_values().collect();
        tracing::debug!(files = ctx.files.len(), "group complete");
        Ok(())
    }
}
