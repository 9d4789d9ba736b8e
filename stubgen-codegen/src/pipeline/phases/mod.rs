//! Built-in pipeline phases.
//!
//! - [`ScanPhase`] - syntactic candidate filter, parallel per source unit
//! - [`ResolvePhase`] - marker resolution and visibility check
//! - [`LowerPhase`] - matched declarations into method models
//! - [`GroupPhase`] - partition by enclosing scope key (barrier stage)

mod group;
mod lower;
mod resolve;
mod scan;

pub use group::GroupPhase;
pub use lower::LowerPhase;
pub use resolve::ResolvePhase;
pub use scan::ScanPhase;
