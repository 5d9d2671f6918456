//! Change records.

use super::operation::OperationKind;
use crate::path::Path;
use crate::value::Value;
use serde::Serialize;
use std::fmt;

static NULL: Value = Value::Null;

/// ChangeRecord describes one operation at one path.
///
/// The constructors are the only way to build a record, so `was` and `is`
/// always match the operation: `Added` has only `is`, `Removed` has only
/// `was`, `Changed` and `Unchanged` have both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeRecord {
    operation: OperationKind,
    path: Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    was: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is: Option<Value>,
}

impl ChangeRecord {
    pub fn added(path: Path, is: Value) -> Self {
        ChangeRecord {
            operation: OperationKind::Added,
            path,
            was: None,
            is: Some(is),
        }
    }

    pub fn removed(path: Path, was: Value) -> Self {
        ChangeRecord {
            operation: OperationKind::Removed,
            path,
            was: Some(was),
            is: None,
        }
    }

    pub fn changed(path: Path, was: Value, is: Value) -> Self {
        ChangeRecord {
            operation: OperationKind::Changed,
            path,
            was: Some(was),
            is: Some(is),
        }
    }

    pub fn unchanged(path: Path, value: Value) -> Self {
        ChangeRecord {
            operation: OperationKind::Unchanged,
            path,
            was: Some(value.clone()),
            is: Some(value),
        }
    }

    pub fn operation(&self) -> OperationKind {
        self.operation
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The value before the change, absent for `Added`.
    pub fn was(&self) -> Option<&Value> {
        self.was.as_ref()
    }

    /// The value after the change, absent for `Removed`.
    pub fn is(&self) -> Option<&Value> {
        self.is.as_ref()
    }

    /// The value a changeset stores for this record: `was` for `Removed`,
    /// `is` for everything else.
    pub fn value(&self) -> &Value {
        let value = match self.operation {
            OperationKind::Removed => self.was.as_ref(),
            _ => self.is.as_ref(),
        };
        // Every constructor fills the side read above.
        value.unwrap_or(&NULL)
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operation, self.path)
    }
}
