//! Scope definition: the loaded range lists and the classifier over them.

mod classifier;
mod list;

pub use classifier::{classify, Scope};
pub use list::{ExclusionList, RangeEntry, RangeList, ScopeList};
