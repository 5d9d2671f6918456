//! Path module - Locations of nodes inside a value tree.

mod path;

pub use path::*;
