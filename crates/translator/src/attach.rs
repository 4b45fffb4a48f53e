//! One-call wiring of an editor to a shared document.

use std::cell::{Cell, OnceCell, RefCell};
use std::rc::Rc;

use serde_json::Value;
use tandem_primitives::{LinearOperation, ListenerId};
use tracing::debug;

use crate::binding::DocumentBinding;
use crate::client::DocumentClient;
use crate::config::TranslatorOptions;
use crate::editor::Editor;
use crate::error::TranslateError;
use crate::source::SourceTag;
use crate::translator::{Translator, TranslatorHooks, WeakTranslator};

/// Hooks that route a translator through a [`DocumentClient`].
struct DocHooks<D: DocumentClient, E: Editor + 'static> {
	doc: Rc<D>,
	binding: DocumentBinding,
	translator: OnceCell<WeakTranslator<E>>,
	listener: Cell<Option<ListenerId>>,
}

impl<D: DocumentClient, E: Editor + 'static> DocHooks<D, E> {
	fn new(doc: Rc<D>, binding: DocumentBinding) -> Self {
		Self {
			doc,
			binding,
			translator: OnceCell::new(),
			listener: Cell::new(None),
		}
	}

	fn bind(&self, translator: WeakTranslator<E>) {
		let _ = self.translator.set(translator);
	}
}

impl<D: DocumentClient, E: Editor + 'static> TranslatorHooks for DocHooks<D, E> {
	fn submit(&self, op: &LinearOperation, source: &SourceTag) -> Result<(), TranslateError> {
		self.doc.submit_op(self.binding.wrap(op), source)?;
		Ok(())
	}

	fn authoritative_value(&self) -> Option<String> {
		self.doc.data().and_then(|data| self.binding.read(&data))
	}

	fn on_start(&self) {
		let Some(translator) = self.translator.get().cloned() else {
			return;
		};
		let binding = self.binding.clone();
		let id = self.doc.on_op(Rc::new(move |wire: &Value, source: Option<&SourceTag>| {
			let Some(translator) = translator.upgrade() else {
				return Ok(());
			};
			route(&translator, &binding, wire, source)
		}));
		if let Some(previous) = self.listener.replace(Some(id)) {
			self.doc.remove_op_listener(previous);
		}
	}

	fn on_stop(&self) {
		if let Some(id) = self.listener.take() {
			self.doc.remove_op_listener(id);
		}
	}
}

fn route<E: Editor + 'static>(
	translator: &Translator<E>,
	binding: &DocumentBinding,
	wire: &Value,
	source: Option<&SourceTag>,
) -> Result<(), TranslateError> {
	let source = source.ok_or(TranslateError::MissingSource)?;
	if let Some(ops) = binding.extract(wire)? {
		translator.apply_ops(&ops, Some(source))?;
	}
	Ok(())
}

/// Binds `editor` to `doc` and returns the listening translator.
///
/// Subscribes to the document, creates it as empty text of the binding's
/// type if it does not exist yet, and seeds the editor with the current
/// text without producing an operation.
///
/// # Errors
///
/// - [`TranslateError::Config`] if `options` are invalid.
/// - [`TranslateError::Client`] if subscribing or creating fails.
/// - [`TranslateError::TypeMismatch`] if the document exists with a type
///   the binding cannot use.
pub fn attach<D, E>(
	doc: Rc<D>,
	editor: Rc<RefCell<E>>,
	options: TranslatorOptions,
) -> Result<Translator<E>, TranslateError>
where
	D: DocumentClient + 'static,
	E: Editor + 'static,
{
	options.validate()?;
	let binding = DocumentBinding::from_options(&options);
	let verbose = options.verbose;

	let hooks = Rc::new(DocHooks::new(Rc::clone(&doc), binding.clone()));
	let translator = Translator::new(editor, Rc::clone(&hooks) as Rc<dyn TranslatorHooks>, options);
	hooks.bind(translator.downgrade());

	doc.subscribe()?;
	let expected = binding.type_name();
	match doc.type_name() {
		None => {
			if verbose {
				debug!(type_name = expected, "creating shared document");
			}
			doc.create(binding.initial_data(), expected)?;
		}
		Some(found) if found != expected => {
			return Err(TranslateError::TypeMismatch { expected, found });
		}
		Some(_) => {}
	}

	let initial = doc
		.data()
		.and_then(|data| binding.read(&data))
		.unwrap_or_default();
	if verbose {
		debug!(source = %translator.source_tag(), ?binding, "attached to shared document");
	}
	translator.set_value(&initial);
	Ok(translator)
}
