//! Structural differ.

use super::operation::OperationKind;
use super::record::ChangeRecord;
use crate::error::{Error, Result};
use crate::path::{Path, PathElement};
use crate::value::{Map, Value};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Default bound on nesting depth accepted by the differ.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// DiffOptions controls what the differ reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffOptions {
    /// Report equal leaves as `UNCHANGED` records.
    pub include_unchanged: bool,
    /// Inputs nested deeper than this are rejected.
    pub max_depth: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            include_unchanged: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Differ compares two values and produces an ordered list of change
/// records.
///
/// Maps are compared key by key: `before`'s keys first in their insertion
/// order, then the keys only `after` has in its insertion order. Lists are
/// compared index by index with no attempt to match moved elements. Values
/// of different kinds produce a single `CHANGED` record at the point where
/// they diverge.
#[derive(Debug, Clone, Default)]
pub struct Differ {
    options: DiffOptions,
}

impl Differ {
    pub fn new(options: DiffOptions) -> Self {
        Differ { options }
    }

    /// Compares `before` with `after`.
    ///
    /// Both values are checked before any comparison happens, so an error
    /// means no records were produced.
    pub fn diff(&self, before: &Value, after: &Value) -> Result<Vec<ChangeRecord>> {
        debug!(
            before = %before.kind(),
            after = %after.kind(),
            include_unchanged = self.options.include_unchanged,
            "diff start"
        );

        check_json_compatible(before, "before", self.options.max_depth)?;
        check_json_compatible(after, "after", self.options.max_depth)?;

        let mut walk = Walk {
            include_unchanged: self.options.include_unchanged,
            path: Path::new(),
            records: Vec::new(),
        };
        walk.compare(before, after);

        debug!(records = walk.records.len(), "diff done");
        Ok(walk.records)
    }

    /// Compares two possibly missing values. A missing value is treated as
    /// an empty map; `Null` is not missing.
    pub fn diff_optional(
        &self,
        before: Option<&Value>,
        after: Option<&Value>,
    ) -> Result<Vec<ChangeRecord>> {
        let empty = Value::Map(Map::new());
        self.diff(before.unwrap_or(&empty), after.unwrap_or(&empty))
    }
}

/// Compares two values with the default options.
pub fn diff(before: &Value, after: &Value) -> Result<Vec<ChangeRecord>> {
    Differ::default().diff(before, after)
}

/// Compares two possibly missing values with the default options.
pub fn diff_optional(before: Option<&Value>, after: Option<&Value>) -> Result<Vec<ChangeRecord>> {
    Differ::default().diff_optional(before, after)
}

struct Walk {
    include_unchanged: bool,
    path: Path,
    records: Vec<ChangeRecord>,
}

impl Walk {
    fn compare(&mut self, before: &Value, after: &Value) {
        match (before, after) {
            (Value::Map(b), Value::Map(a)) => {
                if b == a && !self.include_unchanged {
                    return;
                }
                if b.is_empty() && a.is_empty() {
                    self.emit_unchanged(after);
                    return;
                }
                self.compare_maps(b, a);
            }
            (Value::List(b), Value::List(a)) => {
                if b == a && !self.include_unchanged {
                    return;
                }
                if b.is_empty() && a.is_empty() {
                    self.emit_unchanged(after);
                    return;
                }
                self.compare_lists(b, a);
            }
            _ if before.kind() != after.kind() || before != after => {
                self.emit(ChangeRecord::changed(
                    self.path.clone(),
                    before.clone(),
                    after.clone(),
                ));
            }
            _ => self.emit_unchanged(after),
        }
    }

    fn compare_maps(&mut self, before: &Map, after: &Map) {
        for (key, old) in before.iter() {
            self.path.push(PathElement::Key(key.clone()));
            match after.get(key) {
                Some(new) => self.compare(old, new),
                None => self.emit(ChangeRecord::removed(self.path.clone(), old.clone())),
            }
            self.path.pop();
        }

        for (key, new) in after.iter().filter(|(key, _)| !before.has(key)) {
            self.path.push(PathElement::Key(key.clone()));
            self.emit(ChangeRecord::added(self.path.clone(), new.clone()));
            self.path.pop();
        }
    }

    fn compare_lists(&mut self, before: &[Value], after: &[Value]) {
        for i in 0..before.len().max(after.len()) {
            self.path.push(PathElement::Index(i));
            match (before.get(i), after.get(i)) {
                (Some(old), Some(new)) => self.compare(old, new),
                (Some(old), None) => self.emit(ChangeRecord::removed(self.path.clone(), old.clone())),
                (None, Some(new)) => self.emit(ChangeRecord::added(self.path.clone(), new.clone())),
                (None, None) => {}
            }
            self.path.pop();
        }
    }

    fn emit_unchanged(&mut self, value: &Value) {
        if self.include_unchanged {
            self.emit(ChangeRecord::unchanged(self.path.clone(), value.clone()));
        }
    }

    fn emit(&mut self, record: ChangeRecord) {
        trace!(operation = %record.operation(), path = %record.path(), "change");
        debug_assert!(
            record.operation() != OperationKind::Changed || record.was() != record.is()
        );
        self.records.push(record);
    }
}

/// Rejects values that have no JSON representation: non-finite numbers and
/// nesting deeper than `max_depth`.
pub fn check_json_compatible(value: &Value, side: &str, max_depth: usize) -> Result<()> {
    let mut path = Path::new();
    check_node(value, side, max_depth, &mut path)
}

fn check_node(value: &Value, side: &str, max_depth: usize, path: &mut Path) -> Result<()> {
    if path.len() > max_depth {
        return Err(Error::invalid_input(
            path.clone(),
            format!("{} is nested deeper than {} levels", side, max_depth),
        ));
    }

    match value {
        Value::Float(f) if !f.is_finite() => Err(Error::invalid_input(
            path.clone(),
            format!("{} holds a non-finite number ({})", side, f),
        )),
        Value::List(items) => {
            for (i, item) in items.iter().enumerate() {
                path.push(PathElement::Index(i));
                check_node(item, side, max_depth, path)?;
                path.pop();
            }
            Ok(())
        }
        Value::Map(map) => {
            for (key, item) in map.iter() {
                path.push(PathElement::Key(key.clone()));
                check_node(item, side, max_depth, path)?;
                path.pop();
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
