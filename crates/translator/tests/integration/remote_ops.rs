use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use serde_json::json;
use tandem_translator::{ApplyOutcome, Editor, Position, TranslateError};

use crate::common::{MockDoc, attach_editor, deliver, peer, record_values};

#[test]
fn adds_text() {
	let doc = MockDoc::text("");
	let (editor, translator) = attach_editor(&doc);

	let text = "aaaa\nbbbb\ncccc\ndddd";
	let outcome = deliver(&doc, &translator, &json!([text]));

	assert_eq!(outcome, ApplyOutcome::Applied { matched: true });
	assert_eq!(editor.borrow().value(), text);
	assert!(doc.submissions().is_empty());
}

#[test]
fn can_edit_a_doc_that_has_been_empty() {
	let doc = MockDoc::text("");
	let (editor, translator) = attach_editor(&doc);

	assert_eq!(deliver(&doc, &translator, &json!([""])), ApplyOutcome::Applied { matched: true });
	assert_eq!(editor.borrow().value(), "");

	assert_eq!(deliver(&doc, &translator, &json!(["a"])), ApplyOutcome::Applied { matched: true });
	assert_eq!(editor.borrow().value(), "a");
}

#[test]
fn replaces_a_line() {
	let doc = MockDoc::text("hi");
	let (editor, translator) = attach_editor(&doc);

	let outcome = deliver(&doc, &translator, &json!([{ "d": 2 }, "hello"]));

	assert_eq!(outcome, ApplyOutcome::Applied { matched: true });
	assert_eq!(editor.borrow().value(), "hello");
}

#[test]
fn replaces_a_couple_of_lines() {
	let doc = MockDoc::text("three\nblind\nmice\nsee\nhow\nthey\nrun\n");
	let (editor, translator) = attach_editor(&doc);

	let outcome = deliver(&doc, &translator, &json!([6, { "d": 11 }, "evil\nrats\n"]));

	assert_eq!(outcome, ApplyOutcome::Applied { matched: true });
	assert_eq!(editor.borrow().value(), "three\nevil\nrats\nsee\nhow\nthey\nrun\n");
	assert!(doc.submissions().is_empty());
}

#[test]
fn routed_op_edits_in_place_without_reset() {
	let doc = MockDoc::text("three\nblind\nmice\n");
	let (editor, _translator) = attach_editor(&doc);
	let values = record_values(&editor);

	doc.remote_op(json!([6, { "d": 6 }, "evil\n"]), Some(&peer())).unwrap();

	assert_eq!(
		*values.borrow(),
		vec!["three\nmice\n".to_string(), "three\nevil\nmice\n".to_string()]
	);
}

#[test]
fn missing_source_is_an_error() {
	let doc = MockDoc::text("hi");
	let (editor, _translator) = attach_editor(&doc);

	let result = doc.remote_op(json!([2, "!"]), None);

	assert!(matches!(result, Err(TranslateError::MissingSource)));
	assert_eq!(editor.borrow().value(), "hi");
}

#[test]
fn malformed_operation_is_an_error() {
	let doc = MockDoc::text("hi");
	let (editor, translator) = attach_editor(&doc);

	let result = translator.apply_wire(&json!([{ "x": 1 }]), Some(&peer()));

	assert!(matches!(result, Err(TranslateError::Operation(_))));
	assert_eq!(editor.borrow().value(), "hi");
}

#[test]
fn echo_of_local_operation_is_skipped() {
	let doc = MockDoc::text("hi");
	let (editor, translator) = attach_editor(&doc);

	let outcome = translator
		.apply_wire(&json!([2, "!!"]), Some(translator.source_tag()))
		.unwrap();

	assert_eq!(outcome, ApplyOutcome::SkippedEcho);
	assert_eq!(editor.borrow().value(), "hi");
}

#[test]
fn two_editors_converge() {
	let doc = MockDoc::text("shared\n");
	let (left, _left_translator) = attach_editor(&doc);
	let (right, _right_translator) = attach_editor(&doc);

	left.borrow_mut()
		.replace_range("left ", Position::new(0, 0), Position::new(0, 0));
	right
		.borrow_mut()
		.replace_range("right", Position::new(1, 0), Position::new(1, 0));

	assert_eq!(doc.text_data(), "left shared\nright");
	assert_eq!(left.borrow().value(), doc.text_data());
	assert_eq!(right.borrow().value(), doc.text_data());
	assert_eq!(doc.submissions().len(), 2);
}

#[test]
fn remote_apply_does_not_resubmit_even_when_listener_sees_it() {
	let doc = MockDoc::text("abc");
	let (editor, _translator) = attach_editor(&doc);
	let seen = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&seen);
	editor
		.borrow_mut()
		.on_change(Box::new(move |_, change| sink.borrow_mut().push(change.clone())));

	doc.remote_op(json!([1, { "d": 1 }, "B"]), Some(&peer())).unwrap();

	assert_eq!(editor.borrow().value(), "aBc");
	assert!(!seen.borrow().is_empty());
	assert!(doc.submissions().is_empty());
}
