use json_changes::value::from_json;
use json_changes::{
    compare_item, diff, group, parse_items, run, FailurePolicy, Invocation, Item, Options, Value,
};
use pretty_assertions::assert_eq;

fn changeset(before: &str, after: &str) -> String {
    let records = diff(&from_json(before).unwrap(), &from_json(after).unwrap()).unwrap();
    serde_json::to_string(&group(&records)).unwrap()
}

fn item(json: &str) -> Item {
    serde_json::from_str(json).unwrap()
}

#[test]
fn changed_scalar() {
    assert_eq!(changeset(r#"{"x": 1}"#, r#"{"x": 2}"#), r#"{"CHANGED":{"x":2}}"#);
}

#[test]
fn added_key() {
    assert_eq!(changeset(r#"{"x": 1}"#, r#"{"x": 1, "y": 2}"#), r#"{"ADDED":{"y":2}}"#);
}

#[test]
fn removed_key() {
    assert_eq!(changeset(r#"{"x": 1, "y": 2}"#, r#"{"x": 1}"#), r#"{"REMOVED":{"y":2}}"#);
}

#[test]
fn appended_list_element() {
    assert_eq!(
        changeset(r#"{"list": [1, 2]}"#, r#"{"list": [1, 2, 3]}"#),
        r#"{"ADDED":{"list":{"2":3}}}"#
    );
}

#[test]
fn malformed_input_skipped_passes_item_through() {
    let original = item(r#"{"json": {"name": "first"}, "binary": {"data": {"fileName": "a.txt"}}}"#);
    let invocations = vec![Invocation::new(original.clone(), "{\"a\": ", "{}")];
    let options = Options {
        on_failure: FailurePolicy::Skip,
        ..Options::default()
    };

    let out = run(&invocations, &options).unwrap();
    assert_eq!(out, vec![original]);
}

#[test]
fn changeset_merges_over_item_fields() {
    let invocation = Invocation::new(
        item(r#"{"json": {"REMOVED": true, "keep": 1}}"#),
        Value::from(serde_json::json!({"a": 1, "b": 2})),
        r#"{"a": 1}"#,
    );
    let out = compare_item(&invocation, &Options::default()).unwrap();
    assert_eq!(
        serde_json::to_string(&out).unwrap(),
        r#"{"json":{"REMOVED":{"b":2},"keep":1}}"#
    );
}

#[test]
fn paired_items_from_an_items_document() {
    let items = parse_items(
        r#"[{"json": {"a": "{\"x\": 1}", "b": "{\"x\": 2}"}, "pairedItem": {"item": 0}}]"#,
    )
    .unwrap();
    let invocations: Vec<Invocation> = items
        .into_iter()
        .map(|item| Invocation::from_fields(item, "a", "b"))
        .collect();

    let out = run(&invocations, &Options::default()).unwrap();
    assert_eq!(
        serde_json::to_string(&out).unwrap(),
        r#"[{"json":{"a":"{\"x\": 1}","b":"{\"x\": 2}","CHANGED":{"x":2}},"pairedItem":{"item":0}}]"#
    );
}
