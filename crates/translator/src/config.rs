//! Translator options and their TOML form.
//!
//! ```toml
//! key = "body"    # bind to one field of a structured document
//! verbose = true  # log every encode/apply/suppress/reconcile decision
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading options.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an unknown option.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading an options file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// `key` was given but empty.
	#[error("option 'key' must not be empty")]
	EmptyKey,
}

/// Recognized translator options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranslatorOptions {
	/// Field of a structured document holding the text, or `None` to bind
	/// the whole document.
	pub key: Option<String>,
	/// Emit diagnostic events for every translation decision.
	pub verbose: bool,
}

impl TranslatorOptions {
	/// Default options: whole document, quiet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Binds to the named field.
	pub fn with_key(mut self, key: impl Into<String>) -> Self {
		self.key = Some(key.into());
		self
	}

	/// Sets verbose diagnostics.
	pub fn with_verbose(mut self, verbose: bool) -> Self {
		self.verbose = verbose;
		self
	}

	/// Checks option values that the type system cannot.
	pub fn validate(&self) -> Result<(), ConfigError> {
		match self.key.as_deref() {
			Some("") => Err(ConfigError::EmptyKey),
			_ => Ok(()),
		}
	}

	/// Parses and validates options from TOML.
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		let options: Self = toml::from_str(text)?;
		options.validate()?;
		Ok(options)
	}

	/// Reads options from a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&text)
	}
}
