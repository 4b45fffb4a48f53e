//! Error types for the translator and its collaborators.

use tandem_primitives::OperationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Failure reported by a document client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("document client error: {0}")]
pub struct ClientError(pub String);

impl ClientError {
	/// Creates a client error from any displayable message.
	pub fn new(message: impl Into<String>) -> Self {
		Self(message.into())
	}
}

/// Contract violations reported synchronously to the caller.
///
/// Divergence between the editor and the shared value is not an error; it
/// is logged and repaired by the reconciler.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TranslateError {
	/// An incoming operation carried no source tag.
	#[error("incoming operation has no source tag")]
	MissingSource,

	/// An incoming operation is not a well-formed text operation.
	#[error("malformed operation: {0}")]
	Operation(#[from] OperationError),

	/// The shared document exists with a type the translator cannot bind to.
	#[error("cannot attach to a document of type '{found}' (expected '{expected}')")]
	TypeMismatch {
		/// Type name the binding requires.
		expected: &'static str,
		/// Type name the document reported.
		found: String,
	},

	/// The document client failed.
	#[error(transparent)]
	Client(#[from] ClientError),

	/// The translator options are invalid.
	#[error("invalid options: {0}")]
	Config(#[from] ConfigError),
}
