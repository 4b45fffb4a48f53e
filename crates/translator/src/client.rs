//! The shared-document client contract.

use std::rc::Rc;

use serde_json::Value;
use tandem_primitives::ListenerId;

use crate::error::{ClientError, TranslateError};
use crate::source::SourceTag;

/// Callback invoked for every operation the document applies, local or
/// remote, with the source it was submitted under.
///
/// An error means the operation violated the translator's contract. The
/// client should hand it to whoever delivered the operation.
pub type OpListener = Rc<dyn Fn(&Value, Option<&SourceTag>) -> Result<(), TranslateError>>;

/// A handle to one shared document.
///
/// Methods take `&self`: clients are shared between the attach wiring and
/// the host. Implementations must not hold internal borrows while invoking
/// an [`OpListener`], since listeners may call back into the client.
pub trait DocumentClient {
	/// Fetches the document and starts receiving its operations.
	fn subscribe(&self) -> Result<(), ClientError>;

	/// Type name of the document, or `None` if it has not been created.
	fn type_name(&self) -> Option<String>;

	/// Creates the document with initial `data` of type `type_name`.
	fn create(&self, data: Value, type_name: &str) -> Result<(), ClientError>;

	/// Current document data, or `None` if it has not been created.
	fn data(&self) -> Option<Value>;

	/// Submits an operation tagged with `source`.
	fn submit_op(&self, op: Value, source: &SourceTag) -> Result<(), ClientError>;

	/// Registers an operation listener.
	fn on_op(&self, listener: OpListener) -> ListenerId;

	/// Removes an operation listener, returning whether it was registered.
	fn remove_op_listener(&self, id: ListenerId) -> bool;
}
