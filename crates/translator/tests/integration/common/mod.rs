//! Common utilities for translator integration tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde_json::Value;
use tandem_primitives::ListenerId;
use tandem_translator::{
	ApplyOutcome, ClientError, DocumentClient, Editor, JSON_TYPE, LinearOperation, OpListener,
	RopeEditor, SourceTag, TEXT_TYPE, TranslateError, Translator, TranslatorOptions, attach,
};

#[derive(Default)]
struct DocState {
	type_name: Option<String>,
	data: Option<Value>,
	subscribed: bool,
	subscribe_error: Option<String>,
}

/// In-memory shared document speaking the `text` and `json0` types.
///
/// Emits every applied operation, local or remote, to all listeners.
#[derive(Default)]
pub struct MockDoc {
	state: RefCell<DocState>,
	listeners: RefCell<Vec<(ListenerId, OpListener)>>,
	next_listener: Cell<u64>,
	submissions: RefCell<Vec<(Value, SourceTag)>>,
}

impl MockDoc {
	/// A created plain text document.
	pub fn text(text: &str) -> Rc<Self> {
		let doc = Self::default();
		{
			let mut state = doc.state.borrow_mut();
			state.type_name = Some(TEXT_TYPE.into());
			state.data = Some(Value::String(text.into()));
		}
		Rc::new(doc)
	}

	/// A created JSON document.
	pub fn json(data: Value) -> Rc<Self> {
		let doc = Self::default();
		{
			let mut state = doc.state.borrow_mut();
			state.type_name = Some(JSON_TYPE.into());
			state.data = Some(data);
		}
		Rc::new(doc)
	}

	/// A document that does not exist yet.
	pub fn uncreated() -> Rc<Self> {
		Rc::new(Self::default())
	}

	pub fn fail_subscribe(&self, message: &str) {
		self.state.borrow_mut().subscribe_error = Some(message.into());
	}

	pub fn is_subscribed(&self) -> bool {
		self.state.borrow().subscribed
	}

	pub fn data_value(&self) -> Option<Value> {
		self.state.borrow().data.clone()
	}

	/// Text of a plain text document.
	pub fn text_data(&self) -> String {
		self.data_value()
			.and_then(|data| data.as_str().map(str::to_string))
			.unwrap_or_default()
	}

	/// Text of one field of a JSON document.
	pub fn field(&self, key: &str) -> String {
		self.data_value()
			.and_then(|data| data.get(key).and_then(Value::as_str).map(str::to_string))
			.unwrap_or_default()
	}

	/// Replaces the data without emitting an operation.
	pub fn overwrite(&self, data: Value) {
		self.state.borrow_mut().data = Some(data);
	}

	pub fn listener_count(&self) -> usize {
		self.listeners.borrow().len()
	}

	pub fn submissions(&self) -> Vec<(Value, SourceTag)> {
		self.submissions.borrow().clone()
	}

	/// Applies an operation from another participant and emits it.
	pub fn remote_op(&self, op: Value, source: Option<&SourceTag>) -> Result<(), TranslateError> {
		self.apply(&op)?;
		self.emit(&op, source)
	}

	/// Applies an operation without telling any listener, as if it arrived
	/// while nobody was subscribed.
	pub fn apply_quietly(&self, op: &Value) -> Result<(), ClientError> {
		self.apply(op)
	}

	fn apply(&self, op: &Value) -> Result<(), ClientError> {
		let mut state = self.state.borrow_mut();
		let type_name = state.type_name.clone();
		let data = state
			.data
			.as_mut()
			.ok_or_else(|| ClientError::new("document does not exist"))?;

		match type_name.as_deref() {
			Some(TEXT_TYPE) => {
				let text = data.as_str().unwrap_or_default();
				*data = Value::String(apply_text(op, text)?);
			}
			Some(JSON_TYPE) => {
				let components = op
					.as_array()
					.ok_or_else(|| ClientError::new("json0 operation must be an array"))?;
				for component in components {
					let key = component
						.get("p")
						.and_then(|p| p.get(0))
						.and_then(Value::as_str)
						.ok_or_else(|| ClientError::new("unsupported json0 path"))?;
					if let Some(inserted) = component.get("oi") {
						let fields = data
							.as_object_mut()
							.ok_or_else(|| ClientError::new("json0 data must be an object"))?;
						fields.insert(key.to_string(), inserted.clone());
						continue;
					}
					let inner = component
						.get("o")
						.ok_or_else(|| ClientError::new("unsupported json0 component"))?;
					let field = data
						.get_mut(key)
						.ok_or_else(|| ClientError::new(format!("no field '{key}'")))?;
					let text = field.as_str().unwrap_or_default();
					*field = Value::String(apply_text(inner, text)?);
				}
			}
			other => return Err(ClientError::new(format!("unsupported type {other:?}"))),
		}
		Ok(())
	}

	fn emit(&self, op: &Value, source: Option<&SourceTag>) -> Result<(), TranslateError> {
		let listeners: Vec<OpListener> = self
			.listeners
			.borrow()
			.iter()
			.map(|(_, listener)| Rc::clone(listener))
			.collect();
		for listener in listeners {
			listener(op, source)?;
		}
		Ok(())
	}
}

fn apply_text(op: &Value, text: &str) -> Result<String, ClientError> {
	LinearOperation::from_json(op)
		.and_then(|op| op.apply_to_str(text))
		.map_err(|error| ClientError::new(error.to_string()))
}

impl DocumentClient for MockDoc {
	fn subscribe(&self) -> Result<(), ClientError> {
		let mut state = self.state.borrow_mut();
		if let Some(message) = &state.subscribe_error {
			return Err(ClientError::new(message.clone()));
		}
		state.subscribed = true;
		Ok(())
	}

	fn type_name(&self) -> Option<String> {
		self.state.borrow().type_name.clone()
	}

	fn create(&self, data: Value, type_name: &str) -> Result<(), ClientError> {
		let mut state = self.state.borrow_mut();
		if state.type_name.is_some() {
			return Err(ClientError::new("document already exists"));
		}
		state.type_name = Some(type_name.into());
		state.data = Some(data);
		Ok(())
	}

	fn data(&self) -> Option<Value> {
		self.data_value()
	}

	fn submit_op(&self, op: Value, source: &SourceTag) -> Result<(), ClientError> {
		self.apply(&op)?;
		self.submissions.borrow_mut().push((op.clone(), source.clone()));
		self.emit(&op, Some(source))
			.map_err(|error| ClientError::new(error.to_string()))
	}

	fn on_op(&self, listener: OpListener) -> ListenerId {
		let mut next = self.next_listener.get();
		let id = ListenerId::next(&mut next);
		self.next_listener.set(next);
		self.listeners.borrow_mut().push((id, listener));
		id
	}

	fn remove_op_listener(&self, id: ListenerId) -> bool {
		let mut listeners = self.listeners.borrow_mut();
		let before = listeners.len();
		listeners.retain(|(l, _)| *l != id);
		listeners.len() != before
	}
}

/// Editor handle shared between a test and its translator.
pub type SharedEditor = Rc<RefCell<RopeEditor>>;

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt::try_init();
}

/// Attaches a fresh editor to `doc` with default options.
pub fn attach_editor(doc: &Rc<MockDoc>) -> (SharedEditor, Translator<RopeEditor>) {
	attach_editor_with(doc, TranslatorOptions::new().with_verbose(true))
}

pub fn attach_editor_with(
	doc: &Rc<MockDoc>,
	options: TranslatorOptions,
) -> (SharedEditor, Translator<RopeEditor>) {
	init_tracing();
	let editor = Rc::new(RefCell::new(RopeEditor::new()));
	let translator =
		attach(Rc::clone(doc), Rc::clone(&editor), options).expect("attach succeeds");
	(editor, translator)
}

pub fn peer() -> SourceTag {
	SourceTag::named("peer")
}

/// Applies a plain text operation to `doc` quietly, then hands it to
/// `translator` directly so the outcome of the apply is visible.
pub fn deliver(doc: &MockDoc, translator: &Translator<RopeEditor>, op: &Value) -> ApplyOutcome {
	doc.apply_quietly(op).expect("operation applies to the document");
	translator
		.apply_wire(op, Some(&peer()))
		.expect("translator accepts the operation")
}

/// Records the editor contents after every change it reports.
pub fn record_values(editor: &SharedEditor) -> Rc<RefCell<Vec<String>>> {
	let values = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&values);
	editor
		.borrow_mut()
		.on_change(Box::new(move |editor, _| sink.borrow_mut().push(editor.value())));
	values
}
