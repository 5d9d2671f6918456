//! Work items.

use crate::error::{Error, Result};
use crate::group::Changeset;
use crate::value::{Map, Value};
use serde::{Deserialize, Serialize};

/// Item is one record flowing through a batch: its JSON fields plus any
/// attached binary data and pairing link, both carried along untouched.
///
/// Envelope keys other than these are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub json: Map,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<Map>,
    /// Link back to the input item this one was produced from.
    #[serde(default, rename = "pairedItem", skip_serializing_if = "Option::is_none")]
    pub paired_item: Option<Value>,
}

impl Item {
    /// Creates an item with the given JSON fields and nothing attached.
    pub fn new(json: Map) -> Self {
        Item {
            json,
            binary: None,
            paired_item: None,
        }
    }

    /// Returns a JSON field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.json.get(name)
    }

    /// Shallow-merges a changeset into the JSON fields. Changeset keys
    /// replace fields of the same name.
    pub fn merge_changeset(&mut self, changeset: Changeset) {
        for (key, value) in changeset.into_map() {
            self.json.set(key, value);
        }
    }
}

/// An entry of an items document: a full item envelope, or a bare object
/// taken as the item's JSON fields.
#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    Full(Item),
    Bare(Map),
}

/// Parses a JSON array of items. Objects with a `json` object are item
/// envelopes; any other object becomes the JSON fields of a new item.
pub fn parse_items(text: &str) -> Result<Vec<Item>> {
    let entries: Vec<Entry> = serde_json::from_str(text).map_err(|e| Error::parse("items", e))?;
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            Entry::Full(item) => item,
            Entry::Bare(json) => Item::new(json),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff;
    use crate::group::group;
    use serde_json::json;

    #[test]
    fn test_merge_overrides_same_name() {
        let json = Value::from(json!({"id": 7, "ADDED": "stale"}));
        let mut item = Item::new(json.as_map().cloned().unwrap());

        let records = diff(
            &Value::from(json!({"a": 1})),
            &Value::from(json!({"a": 1, "b": 2})),
        )
        .unwrap();
        item.merge_changeset(group(&records));

        assert_eq!(
            Value::Map(item.json),
            Value::from(json!({"id": 7, "ADDED": {"b": 2}}))
        );
    }

    #[test]
    fn test_binary_roundtrips_untouched() {
        let raw = r#"{"json":{"a":1},"binary":{"file":{"data":"aGk=","mimeType":"text/plain"}}}"#;
        let item: Item = serde_json::from_str(raw).unwrap();
        assert!(item.binary.is_some());
        assert_eq!(serde_json::to_string(&item).unwrap(), raw);
    }

    #[test]
    fn test_paired_item_roundtrips() {
        let raw = r#"{"json":{"a":1},"pairedItem":{"item":0}}"#;
        let item: Item = serde_json::from_str(raw).unwrap();
        assert_eq!(item.json.get("a"), Some(&Value::Int(1)));
        assert_eq!(item.paired_item, Some(Value::from(json!({"item": 0}))));
        assert_eq!(serde_json::to_string(&item).unwrap(), raw);
    }

    #[test]
    fn test_parse_items_envelopes_and_bare_objects() {
        let items = parse_items(
            r#"[
                {"json": {"a": "{}"}, "pairedItem": {"item": 0}, "index": 3},
                {"a": "{}"},
                {"json": "not an object"}
            ]"#,
        )
        .unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].field("a"), Some(&Value::from("{}")));
        assert_eq!(items[0].paired_item, Some(Value::from(json!({"item": 0}))));
        assert_eq!(items[1], Item::new(Value::from(json!({"a": "{}"})).as_map().cloned().unwrap()));
        assert_eq!(items[2].field("json"), Some(&Value::from("not an object")));
    }

    #[test]
    fn test_parse_items_rejects_non_array() {
        let err = parse_items(r#"{"json": {}}"#).unwrap_err();
        assert!(matches!(err, Error::Parse { ref input, .. } if input == "items"));
    }
}
