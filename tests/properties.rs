//! Properties that hold for arbitrary pairs of documents.

use json_changes::{
    diff, group, ChangeRecord, DiffOptions, Differ, OperationKind, PathElement, Value,
};
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(Value::Int),
        (-1000.0f64..1000.0).prop_map(Value::Float),
        "[a-z]{0,4}".prop_map(Value::String),
    ]
}

fn document() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::vec(("[a-d]", inner), 0..4)
                .prop_map(|pairs| Value::Map(pairs.into_iter().collect())),
        ]
    })
}

/// Writes `value` at `path`, appending when an index is one past the end.
fn set_at(node: &mut Value, path: &[PathElement], value: Value) {
    let Some((head, rest)) = path.split_first() else {
        *node = value;
        return;
    };
    let child = match (node, head) {
        (Value::Map(map), PathElement::Key(key)) => map.entry_or_null(key.clone()),
        (Value::List(items), PathElement::Index(i)) => {
            if *i == items.len() {
                items.push(Value::Null);
            }
            &mut items[*i]
        }
        (node, head) => panic!("{} does not fit {:?}", head, node),
    };
    set_at(child, rest, value);
}

fn remove_at(node: &mut Value, path: &[PathElement]) {
    let (last, parents) = path.split_last().expect("removal below the root");
    let mut node = node;
    for element in parents {
        node = match (node, element) {
            (Value::Map(map), PathElement::Key(key)) => map.get_mut(key).expect("parent exists"),
            (Value::List(items), PathElement::Index(i)) => &mut items[*i],
            (node, element) => panic!("{} does not fit {:?}", element, node),
        };
    }
    match (node, last) {
        (Value::Map(map), PathElement::Key(key)) => {
            map.delete(key);
        }
        (Value::List(items), PathElement::Index(i)) => {
            items.remove(*i);
        }
        (node, last) => panic!("{} does not fit {:?}", last, node),
    }
}

/// Applies records to `before`: writes in order, then removals from the
/// last record backwards so list indices stay valid.
fn replay(before: &Value, records: &[ChangeRecord]) -> Value {
    let mut doc = before.clone();
    for record in records
        .iter()
        .filter(|r| r.operation() != OperationKind::Removed)
    {
        set_at(&mut doc, record.path().as_slice(), record.value().clone());
    }
    for record in records
        .iter()
        .rev()
        .filter(|r| r.operation() == OperationKind::Removed)
    {
        remove_at(&mut doc, record.path().as_slice());
    }
    doc
}

proptest! {
    #[test]
    fn diff_of_a_value_with_itself_is_empty(v in document()) {
        prop_assert!(diff(&v, &v).unwrap().is_empty());
    }

    #[test]
    fn replaying_a_diff_reconstructs_after(a in document(), b in document()) {
        let records = diff(&a, &b).unwrap();
        prop_assert_eq!(replay(&a, &records), b);
    }

    #[test]
    fn changeset_has_exactly_the_occurring_kinds(a in document(), b in document()) {
        let records = diff(&a, &b).unwrap();
        let changeset = group(&records);
        for kind in OperationKind::ALL {
            let occurs = records.iter().any(|r| r.operation() == kind);
            prop_assert_eq!(changeset.contains(kind), occurs);
        }
    }

    #[test]
    fn output_is_deterministic(a in document(), b in document()) {
        let first = serde_json::to_string(&group(&diff(&a, &b).unwrap())).unwrap();
        let second = serde_json::to_string(&group(&diff(&a, &b).unwrap())).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn record_shapes_match_their_kind(a in document(), b in document()) {
        let differ = Differ::new(DiffOptions { include_unchanged: true, ..DiffOptions::default() });
        for record in differ.diff(&a, &b).unwrap() {
            match record.operation() {
                OperationKind::Added => {
                    prop_assert!(record.was().is_none() && record.is().is_some());
                }
                OperationKind::Removed => {
                    prop_assert!(record.was().is_some() && record.is().is_none());
                }
                OperationKind::Changed => {
                    prop_assert!(record.was().is_some() && record.was() != record.is());
                }
                OperationKind::Unchanged => {
                    prop_assert!(record.was().is_some() && record.was() == record.is());
                }
            }
        }
    }

    #[test]
    fn unchanged_records_do_not_affect_replay(a in document(), b in document()) {
        let differ = Differ::new(DiffOptions { include_unchanged: true, ..DiffOptions::default() });
        let records = differ.diff(&a, &b).unwrap();
        prop_assert_eq!(replay(&a, &records), b);
    }
}
