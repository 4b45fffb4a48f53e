//! The translator: keeps one editor and one shared text value in step.
//!
//! # Mental model
//!
//! A [`Translator`] is a cloneable handle over single-threaded shared state.
//! It attaches one change listener to the editor while listening, and talks
//! to the document side only through [`TranslatorHooks`].
//!
//! # Invariants
//!
//! - While [`TranslatorState::Suppressed`], editor notifications are not
//!   encoded. Every programmatic editor mutation (remote apply, seeding,
//!   repair) runs under a [`Suppression`] guard.
//! - Operations carrying this translator's [`SourceTag`] are never replayed
//!   onto the editor.
//! - After every remote apply and every local submit the editor is compared
//!   with the authoritative value and overwritten on mismatch.
//! - Operations arriving while idle are ignored.

/// Emits a `debug!` event only when the translator is verbose.
macro_rules! verbose {
	($inner:expr, $($arg:tt)+) => {
		if $inner.options.verbose {
			::tracing::debug!($($arg)+);
		}
	};
}

mod lifecycle;
mod local;
mod reconcile;
mod remote;
mod suppress;


use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use tandem_primitives::{LinearOperation, ListenerId};

pub use self::suppress::Suppression;
use crate::config::TranslatorOptions;
use crate::editor::Editor;
use crate::error::TranslateError;
use crate::source::SourceTag;

/// Where the translator stands with respect to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslatorState {
	/// Not attached; editor changes and incoming operations are ignored.
	Idle,
	/// Attached; user edits are encoded and incoming operations applied.
	Listening,
	/// Attached, but the editor is being mutated programmatically and its
	/// change notifications must not be encoded.
	Suppressed,
}

/// Result of offering an incoming operation to the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
	/// The operation was replayed onto the editor. `matched` is false when
	/// the reconciler had to overwrite the editor afterwards.
	Applied {
		/// Whether the editor agreed with the authoritative value.
		matched: bool,
	},
	/// The operation carried the local source tag and was skipped.
	SkippedEcho,
	/// The translator was not in a state to apply it.
	Ignored,
}

/// Document-side callbacks of a translator.
pub trait TranslatorHooks {
	/// Forwards a locally produced operation. `source` must travel with it.
	fn submit(&self, op: &LinearOperation, source: &SourceTag) -> Result<(), TranslateError>;

	/// Current authoritative value of the synchronized text, if known.
	fn authoritative_value(&self) -> Option<String> {
		None
	}

	/// Called once the translator starts listening.
	fn on_start(&self) {}

	/// Called once the translator stops listening.
	fn on_stop(&self) {}
}

pub(crate) struct Inner<E: Editor + 'static> {
	editor: Rc<RefCell<E>>,
	hooks: Rc<dyn TranslatorHooks>,
	state: Cell<TranslatorState>,
	listener: Cell<Option<ListenerId>>,
	tag: SourceTag,
	options: TranslatorOptions,
}

/// Bidirectional translator between one editor and one shared text value.
pub struct Translator<E: Editor + 'static> {
	inner: Rc<Inner<E>>,
}

/// Non-owning handle to a [`Translator`].
pub struct WeakTranslator<E: Editor + 'static> {
	inner: Weak<Inner<E>>,
}

impl<E: Editor + 'static> Translator<E> {
	/// Creates an idle translator bound to `editor`, minting a fresh source tag.
	pub fn new(
		editor: Rc<RefCell<E>>,
		hooks: Rc<dyn TranslatorHooks>,
		options: TranslatorOptions,
	) -> Self {
		Self::with_source_tag(editor, hooks, options, SourceTag::fresh())
	}

	/// Creates an idle translator that submits under `tag`.
	pub fn with_source_tag(
		editor: Rc<RefCell<E>>,
		hooks: Rc<dyn TranslatorHooks>,
		options: TranslatorOptions,
		tag: SourceTag,
	) -> Self {
		Self {
			inner: Rc::new(Inner {
				editor,
				hooks,
				state: Cell::new(TranslatorState::Idle),
				listener: Cell::new(None),
				tag,
				options,
			}),
		}
	}

	/// Returns the current state.
	pub fn state(&self) -> TranslatorState {
		self.inner.state.get()
	}

	/// Returns true between [`Self::start`] and [`Self::stop`].
	pub fn is_listening(&self) -> bool {
		self.state() != TranslatorState::Idle
	}

	/// Tag attached to every operation this translator submits.
	pub fn source_tag(&self) -> &SourceTag {
		&self.inner.tag
	}

	/// Options this translator was built with.
	pub fn options(&self) -> &TranslatorOptions {
		&self.inner.options
	}

	/// The bound editor.
	pub fn editor(&self) -> &Rc<RefCell<E>> {
		&self.inner.editor
	}

	/// Creates a non-owning handle.
	pub fn downgrade(&self) -> WeakTranslator<E> {
		WeakTranslator {
			inner: Rc::downgrade(&self.inner),
		}
	}
}

impl<E: Editor + 'static> WeakTranslator<E> {
	/// Returns the translator if it is still alive.
	pub fn upgrade(&self) -> Option<Translator<E>> {
		self.inner.upgrade().map(|inner| Translator { inner })
	}
}

impl<E: Editor + 'static> Clone for Translator<E> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<E: Editor + 'static> Clone for WeakTranslator<E> {
	fn clone(&self) -> Self {
		Self {
			inner: Weak::clone(&self.inner),
		}
	}
}

impl<E: Editor + 'static> fmt::Debug for Translator<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Translator")
			.field("state", &self.state())
			.field("source", &self.inner.tag)
			.field("options", &self.inner.options)
			.finish()
	}
}

impl<E: Editor + 'static> Drop for Inner<E> {
	fn drop(&mut self) {
		if let Some(id) = self.listener.take()
			&& let Ok(mut editor) = self.editor.try_borrow_mut()
		{
			editor.off_change(id);
		}
		if self.state.replace(TranslatorState::Idle) != TranslatorState::Idle {
			self.hooks.on_stop();
		}
	}
}
