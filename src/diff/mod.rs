//! Diff module - Structural comparison of two values.
//!
//! [`diff`] walks both trees depth first and returns one [`ChangeRecord`]
//! per divergent node. Recursion stops at the first node where the trees
//! disagree, so no two records of the same kind ever address overlapping
//! paths.

mod differ;
mod operation;
mod record;


pub use differ::*;
pub use operation::*;
pub use record::*;
