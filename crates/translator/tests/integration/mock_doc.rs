//! Behavior of the in-memory document the other tests rely on.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use tandem_translator::{ClientError, DocumentClient, SourceTag};

use crate::common::MockDoc;

#[test]
fn can_be_created() {
	let doc = MockDoc::uncreated();
	doc.create(json!(""), "text").unwrap();
	assert_eq!(doc.type_name().as_deref(), Some("text"));
	assert!(doc.create(json!(""), "text").is_err());
}

#[rstest]
#[case::insert_at_beginning(json!(["123"]), "123abcdefg")]
#[case::insert_in_middle(json!([2, "123"]), "ab123cdefg")]
#[case::insert_at_end(json!([7, "123"]), "abcdefg123")]
#[case::remove_from_beginning(json!([{ "d": 2 }]), "cdefg")]
#[case::remove_from_middle(json!([2, { "d": 3 }]), "abfg")]
#[case::remove_from_end(json!([5, { "d": 2 }]), "abcde")]
fn applies_text_operations(#[case] op: Value, #[case] expected: &str) {
	let doc = MockDoc::text("abcdefg");
	doc.submit_op(op, &SourceTag::named("test")).unwrap();
	assert_eq!(doc.text_data(), expected);
}

#[test]
fn can_error_out_subscribe() {
	let doc = MockDoc::text("abcdefg");
	doc.fail_subscribe("Bleh");
	assert_eq!(doc.subscribe(), Err(ClientError::new("Bleh")));
	assert!(!doc.is_subscribed());
}

#[test]
fn records_submissions_with_source() {
	let doc = MockDoc::text("");
	let tag = SourceTag::named("me");
	doc.submit_op(json!(["x"]), &tag).unwrap();
	assert_eq!(doc.submissions(), vec![(json!(["x"]), tag)]);
}

#[test]
fn rejects_out_of_bounds_operation() {
	let doc = MockDoc::text("ab");
	assert!(doc.submit_op(json!([5, "x"]), &SourceTag::named("test")).is_err());
	assert_eq!(doc.text_data(), "ab");
}
