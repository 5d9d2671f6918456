//! Operation kinds reported by the differ.

use serde::{Deserialize, Serialize};
use std::fmt;

/// OperationKind is the closed set of outcomes for one path.
///
/// The uppercase spelling (`"ADDED"`, ...) is used everywhere the kind is
/// rendered: serialized records, changeset keys and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationKind {
    /// The path exists only in `after`.
    Added,
    /// The path exists only in `before`.
    Removed,
    /// The path exists in both with unequal values, or with values of
    /// different kinds.
    Changed,
    /// The path holds equal leaves. Only reported when asked for.
    Unchanged,
}

impl OperationKind {
    /// All kinds, in their canonical order.
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Added,
        OperationKind::Removed,
        OperationKind::Changed,
        OperationKind::Unchanged,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Added => "ADDED",
            OperationKind::Removed => "REMOVED",
            OperationKind::Changed => "CHANGED",
            OperationKind::Unchanged => "UNCHANGED",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
