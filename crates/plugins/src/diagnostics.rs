//! Structured diagnostics emitted by plugins.

use tracing::{error, info, warn};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
	#[default]
	Info,
	Warn,
	Error,
}

/// One diagnostic event: a stable identifier plus the context that raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	/// Stable identifier, e.g. `insert-ui-no-integrations`.
	pub id: &'static str,
	pub level: Level,
	/// Name of the owning context (editor instance, host view).
	pub context: String,
}

/// Collects diagnostics and mirrors each one to `tracing`.
#[derive(Debug, Default)]
pub struct Diagnostics {
	entries: Vec<Diagnostic>,
}

impl Diagnostics {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn emit(&mut self, diagnostic: Diagnostic) {
		match diagnostic.level {
			Level::Info => info!(id = diagnostic.id, context = %diagnostic.context, "diagnostic"),
			Level::Warn => warn!(id = diagnostic.id, context = %diagnostic.context, "diagnostic"),
			Level::Error => error!(id = diagnostic.id, context = %diagnostic.context, "diagnostic"),
		}
		self.entries.push(diagnostic);
	}

	pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
		self.entries.iter()
	}

	pub fn contains(&self, id: &str) -> bool {
		self.entries.iter().any(|d| d.id == id)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
