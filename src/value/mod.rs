//! Value module - In-memory representation of JSON/YAML documents.
//!
//! Values are a closed tagged union; maps keep insertion order.

mod value;

pub use value::*;
