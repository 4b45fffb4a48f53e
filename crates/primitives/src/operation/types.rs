use crate::range::CharLen;

/// A single component of a [`super::LinearOperation`].
///
/// Components are read left to right against a cursor into the
/// pre-operation text. Retain and delete consume characters of that text;
/// insert does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
	/// Skip the next N characters unchanged.
	Retain(CharLen),
	/// Insert text at the cursor.
	Insert(String),
	/// Remove the next N characters.
	Delete(CharLen),
}

impl Component {
	/// Returns true if this component neither moves the cursor nor edits.
	pub fn is_empty(&self) -> bool {
		match self {
			Component::Retain(n) | Component::Delete(n) => *n == 0,
			Component::Insert(text) => text.is_empty(),
		}
	}

	/// Number of characters this component consumes from the input text.
	pub fn consumed(&self) -> CharLen {
		match self {
			Component::Retain(n) | Component::Delete(n) => *n,
			Component::Insert(_) => 0,
		}
	}

	/// Number of characters this component contributes to the output text.
	pub fn produced(&self) -> CharLen {
		match self {
			Component::Retain(n) => *n,
			Component::Delete(_) => 0,
			Component::Insert(text) => text.chars().count(),
		}
	}
}
