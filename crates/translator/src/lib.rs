//! Bidirectional translator between an editor and a shared text document.
//!
//! # Purpose
//!
//! - Encode each local editor change as a linear text operation and submit it tagged with this translator's source.
//! - Replay operations from the shared document onto the editor without re-encoding them.
//! - Detect divergence between the editor and the authoritative value and repair it by overwriting the editor.
//!
//! # Mental model
//!
//! - An [`Editor`] reports every mutation as an [`EditorChange`] in line/column space.
//! - [`encode_change`] turns a change into a [`LinearOperation`]; [`apply_operation`] turns an operation back into editor edits.
//! - A [`Translator`] owns the listening state and routes between the two through [`TranslatorHooks`].
//! - [`attach`] supplies hooks backed by a [`DocumentClient`] and a [`DocumentBinding`].
//!
//! # Key types
//!
//! | Type | Meaning | Constraints | Constructed / mutated in |
//! |---|---|---|---|
//! | [`Translator`] | Cloneable handle over one editor binding | Single-threaded; drop of the last handle stops it | [`Translator::new`], [`attach`] |
//! | [`TranslatorState`] | Idle / listening / suppressed | Suppressed only inside a [`Suppression`] scope | `start`, `stop`, `apply_ops`, `set_value`, `reconcile` |
//! | [`SourceTag`] | Opaque identity attached to submitted operations | One per translator, never shared | [`SourceTag::fresh`] |
//! | [`DocumentBinding`] | Whole document or one field of a JSON document | Field key must be non-empty | [`DocumentBinding::from_options`] |
//! | [`RopeEditor`] | Headless in-memory editor | Clips positions; no event for empty edits | [`RopeEditor::with_text`] |
//!
//! # Invariants
//!
//! - Must not encode changes made while suppressed.
//! - Must not replay operations carrying the local source tag.
//! - Must ignore incoming operations while idle.
//! - Must reject incoming operations without a source tag, or not shaped as a linear operation.
//! - Must reconcile after every remote apply and every local submit.
//!
//! # Data flow
//!
//! - Local: editor mutation → change listener → [`encode_change`] → hooks submit (with tag) → reconcile.
//! - Remote: document op event → [`DocumentBinding::extract`] → [`Translator::apply_ops`] → suppressed [`apply_operation`] per text op → one reconcile.
//!
//! # Failure modes
//!
//! - Contract violations return [`TranslateError`] to the immediate caller.
//! - Submit failures inside the editor listener are logged at `error` and the edit stays local until the next reconcile.
//! - Divergence is logged at `warn` and repaired; it is never an error.

pub mod apply;
pub mod attach;
pub mod binding;
pub mod change;
pub mod client;
pub mod config;
pub mod editor;
pub mod encode;
pub mod error;
pub mod source;
pub mod translator;

pub use apply::apply_operation;
pub use attach::attach;
pub use binding::{DocumentBinding, JSON_TYPE, TEXT_TYPE};
pub use change::{EditorChange, split_lines};
pub use client::{DocumentClient, OpListener};
pub use config::{ConfigError, TranslatorOptions};
pub use editor::{ChangeListener, Editor, RopeEditor};
pub use encode::encode_change;
pub use error::{ClientError, TranslateError};
pub use source::SourceTag;
pub use tandem_primitives::{LinearOperation, Position};
pub use translator::{
	ApplyOutcome, Suppression, Translator, TranslatorHooks, TranslatorState, WeakTranslator,
};
