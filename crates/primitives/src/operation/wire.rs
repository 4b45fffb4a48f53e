//! JSON surface syntax of the shared text type.
//!
//! An operation is a JSON array. Each element is a non-negative integer
//! (retain), a string (insert) or an object `{"d": n}` (delete).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::{Component, LinearOperation};
use crate::error::OperationError;
use crate::range::CharLen;

/// Longest rendering of a rejected value carried in an error.
const MAX_DESCRIBED_CHARS: usize = 80;

impl LinearOperation {
	/// Encodes this operation in its wire form.
	pub fn to_json(&self) -> Value {
		Value::Array(self.components.iter().map(component_to_json).collect())
	}

	/// Decodes an operation from its wire form.
	///
	/// # Errors
	///
	/// Returns [`OperationError::NotASequence`] if `value` is not an array,
	/// and [`OperationError::MalformedComponent`] for the first element that
	/// is not a retain, insert or delete, or whose count pushes the total
	/// consumed length past `usize::MAX`.
	pub fn from_json(value: &Value) -> Result<Self, OperationError> {
		let Value::Array(items) = value else {
			return Err(OperationError::not_a_sequence(value));
		};

		let mut op = Self::new();
		let mut consumed: CharLen = 0;
		for (index, item) in items.iter().enumerate() {
			let component = component_from_json(index, item)?;
			consumed = consumed
				.checked_add(component.consumed())
				.ok_or_else(|| OperationError::malformed(index, item))?;
			op.push(component);
		}
		Ok(op)
	}
}

fn component_to_json(component: &Component) -> Value {
	match component {
		Component::Retain(n) => Value::from(*n),
		Component::Insert(text) => Value::String(text.clone()),
		Component::Delete(n) => {
			let mut map = Map::new();
			map.insert("d".to_string(), Value::from(*n));
			Value::Object(map)
		}
	}
}

fn component_from_json(index: usize, value: &Value) -> Result<Component, OperationError> {
	let component = match value {
		Value::Number(n) => count(n.as_u64()).map(Component::Retain),
		Value::String(text) => Some(Component::Insert(text.clone())),
		Value::Object(map) if map.len() == 1 => map
			.get("d")
			.and_then(|d| count(d.as_u64()))
			.map(Component::Delete),
		_ => None,
	};

	component.ok_or_else(|| OperationError::malformed(index, value))
}

fn count(n: Option<u64>) -> Option<CharLen> {
	n.and_then(|n| CharLen::try_from(n).ok())
}

impl OperationError {
	/// Rejects a wire value that is not an array.
	pub fn not_a_sequence(value: &Value) -> Self {
		Self::NotASequence {
			found: describe(value),
		}
	}

	/// Rejects the wire component at `index`.
	pub fn malformed(index: usize, value: &Value) -> Self {
		Self::MalformedComponent {
			index,
			found: describe(value),
		}
	}
}

fn describe(value: &Value) -> String {
	let rendered = value.to_string();
	if rendered.chars().count() <= MAX_DESCRIBED_CHARS {
		return rendered;
	}
	let mut short: String = rendered.chars().take(MAX_DESCRIBED_CHARS).collect();
	short.push_str("...");
	short
}

impl Serialize for LinearOperation {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.to_json().serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for LinearOperation {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = Value::deserialize(deserializer)?;
		Self::from_json(&value).map_err(serde::de::Error::custom)
	}
}
