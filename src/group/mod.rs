//! Group module - Regrouping change records by operation kind.

mod assign;
mod changeset;
mod grouper;


pub use assign::*;
pub use changeset::*;
pub use grouper::*;
