use serde_json::Value;
use tandem_primitives::LinearOperation;

use super::{ApplyOutcome, Suppression, Translator, TranslatorState};
use crate::apply::apply_operation;
use crate::editor::Editor;
use crate::error::TranslateError;
use crate::source::SourceTag;

impl<E: Editor + 'static> Translator<E> {
	/// Decodes a wire operation and applies it as [`Self::apply_op`] does.
	///
	/// A missing source is reported before the operation is inspected.
	pub fn apply_wire(
		&self,
		op: &Value,
		source: Option<&SourceTag>,
	) -> Result<ApplyOutcome, TranslateError> {
		let source = source.ok_or(TranslateError::MissingSource)?;
		let op = LinearOperation::from_json(op)?;
		self.apply_op(&op, Some(source))
	}

	/// Replays an operation from the shared document onto the editor.
	///
	/// Checks run in order: missing source is an error, an idle translator
	/// ignores the operation, and the local source tag marks an echo that is
	/// skipped. Otherwise the operation is applied with encoding suppressed
	/// and the editor is reconciled afterwards.
	pub fn apply_op(
		&self,
		op: &LinearOperation,
		source: Option<&SourceTag>,
	) -> Result<ApplyOutcome, TranslateError> {
		self.apply_ops(std::slice::from_ref(op), source)
	}

	/// Replays the text operations carried by one document operation.
	///
	/// The operations apply in order inside a single suppressed scope and
	/// the editor is reconciled once, after the last of them. An empty slice
	/// only reconciles, which covers document operations that changed the
	/// bound text without carrying a text operation. Checks run as for
	/// [`Self::apply_op`].
	pub fn apply_ops(
		&self,
		ops: &[LinearOperation],
		source: Option<&SourceTag>,
	) -> Result<ApplyOutcome, TranslateError> {
		let source = source.ok_or(TranslateError::MissingSource)?;
		let inner = &self.inner;

		match inner.state.get() {
			TranslatorState::Listening => {}
			TranslatorState::Idle => {
				verbose!(inner, %source, "ignoring operation while idle");
				return Ok(ApplyOutcome::Ignored);
			}
			TranslatorState::Suppressed => {
				tracing::warn!(%source, ops = ops.len(), "operation arrived mid-apply, ignoring");
				return Ok(ApplyOutcome::Ignored);
			}
		}

		if *source == inner.tag {
			verbose!(inner, %source, "skipping echo of local operation");
			return Ok(ApplyOutcome::SkippedEcho);
		}

		let Ok(mut editor) = inner.editor.try_borrow_mut() else {
			tracing::warn!(%source, ops = ops.len(), "editor busy, leaving operation to reconciliation");
			return Ok(ApplyOutcome::Ignored);
		};

		{
			let _guard = Suppression::enter(&inner.state);
			for op in ops {
				verbose!(inner, %source, op = %op.to_json(), "applying remote operation");
				apply_operation(op, &mut *editor);
			}
		}
		let matched = inner.reconcile_editor(&mut *editor);
		Ok(ApplyOutcome::Applied { matched })
	}
}
