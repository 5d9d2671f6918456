//! # JSON Changes
//!
//! Structural diff of two JSON values, regrouped into a changeset keyed by
//! operation kind.
//!
//! ```
//! use json_changes::{diff, group, value::from_json};
//!
//! let before = from_json(r#"{"list": [1, 2]}"#).unwrap();
//! let after = from_json(r#"{"list": [1, 2, 3]}"#).unwrap();
//! let changeset = group(&diff(&before, &after).unwrap());
//! assert_eq!(
//!     serde_json::to_string(&changeset).unwrap(),
//!     r#"{"ADDED":{"list":{"2":3}}}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of JSON/YAML documents
//! - [`path`] - Locations of nodes inside a document
//! - [`diff`] - Structural comparison producing change records
//! - [`group`] - Regrouping change records into a changeset
//! - [`item`] - Per-item orchestration: input parsing, merging, failure policy
//! - [`config`] - Run options loaded from YAML or JSON

pub mod config;
pub mod diff;
pub mod error;
pub mod group;
pub mod item;
pub mod path;
pub mod value;

pub use config::Options;
pub use diff::{diff, diff_optional, ChangeRecord, DiffOptions, Differ, OperationKind};
pub use error::{BatchError, Error, Result};
pub use group::{group, group_with, Changeset, GroupOptions, IndexNodes};
pub use item::{compare_item, parse_items, run, FailurePolicy, Input, Invocation, Item};
pub use path::{Path, PathElement};
pub use value::{Map, Value};
