//! Path-based assignment into a value tree.

use crate::path::PathElement;
use crate::value::{Map, Value};
use serde::{Deserialize, Serialize};

/// Largest list index `IndexNodes::Sequence` pads a list up to. Indices at or
/// beyond it become decimal map keys.
pub const MAX_SEQUENCE_INDEX: usize = 1 << 16;

/// IndexNodes selects the container created for a list index along a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexNodes {
    /// Indices become decimal keys of a map: `{"list": {"2": 3}}`.
    #[default]
    Mapping,
    /// Indices create lists padded with nulls: `{"list": [null, null, 3]}`.
    /// Indices of [`MAX_SEQUENCE_INDEX`] and above fall back to map keys.
    Sequence,
}

/// Stores `value` at `path` below `root`, creating intermediate nodes.
///
/// Never fails. A node of the wrong shape in the way is replaced by a fresh
/// container, and whatever already sits at `path` is overwritten. In
/// `Sequence` mode a list reached by a key, or by an index too large to
/// pad, is turned into a map keyed by its indices instead. An empty path
/// replaces `root` itself.
pub fn assign(root: &mut Value, path: &[PathElement], value: Value, index_nodes: IndexNodes) {
    let Some((head, rest)) = path.split_first() else {
        *root = value;
        return;
    };

    let slot = ensure_child(root, head, index_nodes);
    if rest.is_empty() {
        *slot = value;
    } else {
        assign(slot, rest, value, index_nodes);
    }
}

/// Returns the child of `node` addressed by `element`, turning `node` into
/// a suitable container first if it is not one.
fn ensure_child<'a>(node: &'a mut Value, element: &PathElement, index_nodes: IndexNodes) -> &'a mut Value {
    match (element, index_nodes) {
        (PathElement::Index(i), IndexNodes::Sequence) if !node.is_map() && *i < MAX_SEQUENCE_INDEX => {
            if !node.is_list() {
                *node = Value::List(Vec::new());
            }
            let Value::List(items) = node else {
                unreachable!("node was just made a list");
            };
            if items.len() <= *i {
                items.resize(*i + 1, Value::Null);
            }
            &mut items[*i]
        }
        _ => {
            match node {
                Value::Map(_) => {}
                // A padded list keeps its elements under their decimal keys.
                Value::List(items) if index_nodes == IndexNodes::Sequence => {
                    let map = std::mem::take(items)
                        .into_iter()
                        .enumerate()
                        .map(|(i, item)| (i.to_string(), item))
                        .collect();
                    *node = Value::Map(map);
                }
                _ => *node = Value::Map(Map::new()),
            }
            let Value::Map(map) = node else {
                unreachable!("node was just made a map");
            };
            map.entry_or_null(element.to_key())
        }
    }
}
