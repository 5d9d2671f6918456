//! Folding change records into a changeset.

use super::assign::{assign, IndexNodes};
use super::changeset::Changeset;
use crate::diff::ChangeRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// GroupOptions controls the shape of the changeset trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroupOptions {
    /// Container created for list indices.
    pub index_nodes: IndexNodes,
}

/// Groups records with the default options.
pub fn group(changes: &[ChangeRecord]) -> Changeset {
    group_with(changes, &GroupOptions::default())
}

/// Groups records by operation kind, storing each record's value at its
/// path inside the bucket for its kind.
///
/// Records are applied in order, so when two records of one kind address
/// the same or overlapping paths the later one wins. A correct diff never
/// produces such records.
pub fn group_with(changes: &[ChangeRecord], options: &GroupOptions) -> Changeset {
    debug!(records = changes.len(), index_nodes = ?options.index_nodes, "group start");

    let changeset = changes.iter().fold(Changeset::new(), |mut changeset, change| {
        let bucket = changeset.bucket_mut(change.operation());
        assign(
            bucket,
            change.path().as_slice(),
            change.value().clone(),
            options.index_nodes,
        );
        changeset
    });

    debug!(kinds = changeset.len(), "group done");
    changeset
}
