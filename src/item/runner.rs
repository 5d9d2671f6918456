//! Running diff and group over a batch of items.

use super::input::Input;
use super::item::Item;
use crate::config::Options;
use crate::diff::Differ;
use crate::error::{BatchError, Result};
use crate::group::group_with;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// FailurePolicy decides what happens to a batch when one item fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failing item and return its error.
    #[default]
    Abort,
    /// Emit the failing item unchanged and continue.
    Skip,
}

/// Invocation pairs an item with the two inputs to compare for it.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub item: Item,
    pub value1: Input,
    pub value2: Input,
}

impl Invocation {
    pub fn new(item: Item, value1: impl Into<Input>, value2: impl Into<Input>) -> Self {
        Invocation {
            item,
            value1: value1.into(),
            value2: value2.into(),
        }
    }

    /// Builds an invocation whose inputs are read from two of the item's
    /// own JSON fields.
    pub fn from_fields(item: Item, field1: &str, field2: &str) -> Self {
        let value1 = Input::from_field(item.field(field1));
        let value2 = Input::from_field(item.field(field2));
        Invocation {
            item,
            value1,
            value2,
        }
    }
}

/// Compares the two inputs of one invocation and returns a copy of its
/// item with the changeset merged in.
pub fn compare_item(invocation: &Invocation, options: &Options) -> Result<Item> {
    let before = invocation.value1.resolve("value1")?;
    let after = invocation.value2.resolve("value2")?;

    let records = Differ::new(options.diff).diff(&before, &after)?;
    let changeset = group_with(&records, &options.group);

    let mut item = invocation.item.clone();
    item.merge_changeset(changeset);
    Ok(item)
}

/// Processes invocations in order, returning one output item per input
/// item.
pub fn run(invocations: &[Invocation], options: &Options) -> std::result::Result<Vec<Item>, BatchError> {
    debug!(items = invocations.len(), on_failure = ?options.on_failure, "run start");

    let mut output = Vec::with_capacity(invocations.len());
    for (index, invocation) in invocations.iter().enumerate() {
        match compare_item(invocation, options) {
            Ok(item) => output.push(item),
            Err(source) => match options.on_failure {
                FailurePolicy::Abort => return Err(BatchError { index, source }),
                FailurePolicy::Skip => {
                    warn!(index, error = %source, "item failed, passing it through unchanged");
                    output.push(invocation.item.clone());
                }
            },
        }
    }

    debug!(items = output.len(), "run done");
    Ok(output)
}
