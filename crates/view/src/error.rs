use thiserror::Error;

/// Errors raised while extending a view's template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
	/// The view has no template to merge into.
	#[error("view has no template; assign one before extending it")]
	NotSet,

	/// A child extension targets something that is not an element.
	#[error("cannot extend child {index} of <{tag}>: no element at that position")]
	ChildMismatch {
		/// Tag of the element whose children were being extended.
		tag: String,
		/// Index of the offending child.
		index: usize,
	},
}

/// Errors raised by the observable property store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObservableError {
	/// The property was written before being declared.
	#[error("observable property `{0}` has not been declared")]
	Undeclared(String),
}

/// Errors raised while loading template descriptors.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error parsing JSON syntax or shape.
	#[error("JSON parse error: {0}")]
	Json(#[from] serde_json::Error),
}
