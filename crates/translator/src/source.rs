//! Source tags: opaque identities attached to submitted operations.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix of tags minted by [`SourceTag::fresh`].
const FRESH_PREFIX: &str = "tandem";

/// Identifies where an operation came from.
///
/// The document client carries the tag alongside each operation without
/// interpreting it. A translator mints one tag when it is created and skips
/// incoming operations that carry it, since the editor already reflects them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceTag(Arc<str>);

impl SourceTag {
	/// Mints a tag no other translator instance shares.
	pub fn fresh() -> Self {
		Self(format!("{FRESH_PREFIX}:{}", Uuid::new_v4()).into())
	}

	/// Wraps an externally chosen identity.
	pub fn named(name: impl AsRef<str>) -> Self {
		Self(name.as_ref().into())
	}

	/// Returns the tag's string form.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for SourceTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
