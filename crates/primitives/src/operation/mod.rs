//! Linear text operations: ordered retain/insert/delete components over a
//! flat character offset.

mod types;
pub mod wire;


use ropey::Rope;
pub use types::Component;

use crate::error::OperationError;
use crate::range::CharLen;

/// A sequence of components describing an edit to a string.
///
/// Built through [`LinearOperation::retain`], [`LinearOperation::delete`]
/// and [`LinearOperation::insert`], which keep the sequence canonical:
/// zero-length retains and deletes and empty inserts are dropped, and
/// adjacent components of the same kind are merged. Component order is
/// never rearranged, so a delete pushed before an insert stays before it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LinearOperation {
	components: Vec<Component>,
}

impl LinearOperation {
	/// Creates an empty operation.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds an operation from raw components, canonicalizing as it goes.
	pub fn from_components<I: IntoIterator<Item = Component>>(components: I) -> Self {
		let mut op = Self::new();
		for component in components {
			op.push(component);
		}
		op
	}

	/// Returns the components in application order.
	pub fn components(&self) -> &[Component] {
		&self.components
	}

	/// Returns true if this operation contains no components.
	pub fn is_empty(&self) -> bool {
		self.components.is_empty()
	}

	/// Returns true if applying this operation leaves any text unchanged.
	pub fn is_noop(&self) -> bool {
		self.components
			.iter()
			.all(|c| matches!(c, Component::Retain(_)))
	}

	/// Number of characters consumed from the input text.
	///
	/// Saturates at `usize::MAX`, which no text can hold.
	pub fn base_len(&self) -> CharLen {
		self.components
			.iter()
			.fold(0, |total: CharLen, c| total.saturating_add(c.consumed()))
	}

	/// Length of the output text when applied to an input of exactly
	/// [`Self::base_len`] characters.
	pub fn target_len(&self) -> CharLen {
		self.components
			.iter()
			.fold(0, |total: CharLen, c| total.saturating_add(c.produced()))
	}

	/// Appends a retain of `n` characters.
	pub fn retain(&mut self, n: CharLen) -> &mut Self {
		self.push(Component::Retain(n))
	}

	/// Appends a delete of `n` characters.
	pub fn delete(&mut self, n: CharLen) -> &mut Self {
		self.push(Component::Delete(n))
	}

	/// Appends an insert of `text`.
	pub fn insert(&mut self, text: impl Into<String>) -> &mut Self {
		self.push(Component::Insert(text.into()))
	}

	fn push(&mut self, component: Component) -> &mut Self {
		if component.is_empty() {
			return self;
		}

		match (self.components.last_mut(), &component) {
			(Some(Component::Retain(count)), Component::Retain(n))
			| (Some(Component::Delete(count)), Component::Delete(n)) => {
				*count = count.saturating_add(*n);
				return self;
			}
			(Some(Component::Insert(prev)), Component::Insert(text)) => {
				prev.push_str(text);
				return self;
			}
			_ => {}
		}

		self.components.push(component);
		self
	}

	/// Applies this operation to `doc` in place.
	///
	/// A cursor starts at zero. Retain advances it, insert writes at it and
	/// advances past the inserted text, delete removes at it without
	/// advancing. Fails without touching `doc` if the operation consumes
	/// more characters than `doc` holds.
	pub fn apply(&self, doc: &mut Rope) -> Result<(), OperationError> {
		let len = doc.len_chars();
		let end = self.base_len();
		if end > len {
			return Err(OperationError::OutOfBounds { end, len });
		}

		let mut pos: usize = 0;
		for component in &self.components {
			match component {
				Component::Retain(n) => {
					pos = pos.saturating_add(*n);
				}
				Component::Insert(text) => {
					doc.insert(pos, text);
					pos += text.chars().count();
				}
				Component::Delete(n) => {
					doc.remove(pos..pos.saturating_add(*n));
				}
			}
		}
		Ok(())
	}

	/// Applies this operation to a string, returning the edited copy.
	pub fn apply_to_str(&self, text: &str) -> Result<String, OperationError> {
		let mut doc = Rope::from(text);
		self.apply(&mut doc)?;
		Ok(doc.to_string())
	}
}

impl FromIterator<Component> for LinearOperation {
	fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
		Self::from_components(iter)
	}
}

impl<'a> IntoIterator for &'a LinearOperation {
	type Item = &'a Component;
	type IntoIter = std::slice::Iter<'a, Component>;

	fn into_iter(self) -> Self::IntoIter {
		self.components.iter()
	}
}
