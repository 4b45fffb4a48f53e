//! Where in a shared document the synchronized text lives.

use serde_json::{Map, Value, json};
use tandem_primitives::{LinearOperation, OperationError};

use crate::config::TranslatorOptions;

/// Type name of a plain text document.
pub const TEXT_TYPE: &str = "text";
/// Type name of a structured JSON document.
pub const JSON_TYPE: &str = "json0";

/// Subtype marker written on keyed operation components.
const TEXT_SUBTYPE: &str = "text";
/// Subtype markers accepted on incoming keyed components.
const ACCEPTED_SUBTYPES: [&str; 2] = ["text", "text0"];

/// Binding of the editor to a document.
///
/// [`Whole`](Self::Whole) documents are plain text and carry bare linear
/// operations. [`Field`](Self::Field) documents are JSON objects; their
/// operations wrap the text operation per component:
/// `[{"p": [key], "t": "text", "o": <linear operation>}]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentBinding {
	/// The document data is the text.
	Whole,
	/// The text is the named string field of the document data.
	Field(String),
}

impl DocumentBinding {
	/// Chooses the binding selected by `options.key`.
	pub fn from_options(options: &TranslatorOptions) -> Self {
		match &options.key {
			Some(key) => Self::Field(key.clone()),
			None => Self::Whole,
		}
	}

	/// Document type this binding requires.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Whole => TEXT_TYPE,
			Self::Field(_) => JSON_TYPE,
		}
	}

	/// Data a freshly created document starts with.
	pub fn initial_data(&self) -> Value {
		match self {
			Self::Whole => Value::String(String::new()),
			Self::Field(key) => {
				let mut fields = Map::new();
				fields.insert(key.clone(), Value::String(String::new()));
				Value::Object(fields)
			}
		}
	}

	/// Extracts the bound text from document data.
	pub fn read(&self, data: &Value) -> Option<String> {
		let text = match self {
			Self::Whole => data,
			Self::Field(key) => data.get(key)?,
		};
		text.as_str().map(str::to_string)
	}

	/// Wraps a text operation into the document's operation form.
	pub fn wrap(&self, op: &LinearOperation) -> Value {
		match self {
			Self::Whole => op.to_json(),
			Self::Field(key) => json!([{ "p": [key], "t": TEXT_SUBTYPE, "o": op.to_json() }]),
		}
	}

	/// Extracts the text operations that target the bound text.
	///
	/// Returns `None` when the operation leaves the bound text alone.
	/// Otherwise returns the text operations found, which may be empty when
	/// the bound field is touched in some other way (replaced, removed, or
	/// edited under a non-text subtype). Components of a keyed operation
	/// that address another path are skipped. Text components that address
	/// the bound field must be well formed.
	pub fn extract(&self, wire: &Value) -> Result<Option<Vec<LinearOperation>>, OperationError> {
		let key = match self {
			Self::Whole => return Ok(Some(vec![LinearOperation::from_json(wire)?])),
			Self::Field(key) => key,
		};

		let components = wire
			.as_array()
			.ok_or_else(|| OperationError::not_a_sequence(wire))?;

		let mut touched = false;
		let mut ops = Vec::new();
		for (index, component) in components.iter().enumerate() {
			let malformed = || OperationError::malformed(index, component);
			let object = component.as_object().ok_or_else(malformed)?;

			let path = object.get("p").and_then(Value::as_array).map(Vec::as_slice);
			let (targets_key, touches_key) = match path {
				Some([]) => (false, true),
				Some([Value::String(head), rest @ ..]) if head == key => (rest.is_empty(), true),
				_ => (false, false),
			};
			touched |= touches_key;

			let is_text = object
				.get("t")
				.and_then(Value::as_str)
				.is_some_and(|t| ACCEPTED_SUBTYPES.contains(&t));
			if !targets_key || !is_text {
				continue;
			}

			let inner = object.get("o").ok_or_else(malformed)?;
			ops.push(LinearOperation::from_json(inner)?);
		}
		Ok(touched.then_some(ops))
	}
}
