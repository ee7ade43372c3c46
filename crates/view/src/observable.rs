use core::fmt;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::ObservableError;

/// Value held by an observable property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
	Bool(bool),
	Int(i64),
	Str(String),
}

impl Value {
	/// Returns whether the value counts as "set" for conditional bindings.
	///
	/// `false`, `0` and the empty string are falsy.
	pub fn is_truthy(&self) -> bool {
		match self {
			Self::Bool(b) => *b,
			Self::Int(i) => *i != 0,
			Self::Str(s) => !s.is_empty(),
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(b) => Some(*b),
			_ => None,
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool(b) => write!(f, "{b}"),
			Self::Int(i) => write!(f, "{i}"),
			Self::Str(s) => f.write_str(s),
		}
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Self::Bool(b)
	}
}

impl From<i64> for Value {
	fn from(i: i64) -> Self {
		Self::Int(i)
	}
}

impl From<&str> for Value {
	fn from(s: &str) -> Self {
		Self::Str(s.to_string())
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Self::Str(s)
	}
}

/// A single effective write, passed to change listeners.
#[derive(Debug, Clone, Copy)]
pub struct PropertyChange<'a> {
	pub name: &'a str,
	pub old: &'a Value,
	pub new: &'a Value,
	/// Store revision after the write.
	pub revision: u64,
}

type Listener = Box<dyn FnMut(&PropertyChange<'_>)>;

/// Ordered store of named observable properties.
///
/// Writes go through [`Observables::set`], which bumps the store revision and
/// notifies listeners synchronously when the value actually changes. Renderers
/// compare revisions to decide whether an update pass is due.
#[derive(Default)]
pub struct Observables {
	props: IndexMap<String, Value>,
	listeners: Vec<Listener>,
	revision: u64,
}

impl fmt::Debug for Observables {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Observables")
			.field("props", &self.props)
			.field("listeners", &self.listeners.len())
			.field("revision", &self.revision)
			.finish()
	}
}

impl Observables {
	pub fn new() -> Self {
		Self::default()
	}

	/// Declares `name` with an initial value.
	///
	/// Declaring an existing property replaces its value without notifying
	/// listeners.
	pub fn declare(&mut self, name: impl Into<String>, initial: impl Into<Value>) {
		let name = name.into();
		let initial = initial.into();
		let previous = self.props.insert(name.clone(), initial);
		self.revision = self.revision.wrapping_add(1);
		if let Some(previous) = previous {
			debug!(property = %name, previous = %previous, "observable.redeclare");
		} else {
			trace!(property = %name, "observable.declare");
		}
	}

	/// Writes a declared property, returning whether the value changed.
	pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<bool, ObservableError> {
		let value = value.into();
		let slot = self.props.get_mut(name).ok_or_else(|| ObservableError::Undeclared(name.to_string()))?;
		if *slot == value {
			return Ok(false);
		}

		let old = core::mem::replace(slot, value);
		self.revision = self.revision.wrapping_add(1);
		trace!(property = name, old = %old, new = %slot, revision = self.revision, "observable.set");

		let change = PropertyChange {
			name,
			old: &old,
			new: &*slot,
			revision: self.revision,
		};
		for listener in &mut self.listeners {
			listener(&change);
		}
		Ok(true)
	}

	pub fn get(&self, name: &str) -> Option<&Value> {
		self.props.get(name)
	}

	/// Returns whether `name` is declared and truthy.
	pub fn is_truthy(&self, name: &str) -> bool {
		self.props.get(name).is_some_and(Value::is_truthy)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.props.contains_key(name)
	}

	/// Monotonic counter bumped by every declaration and effective write.
	pub fn revision(&self) -> u64 {
		self.revision
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.props.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Registers a listener called after every effective write.
	pub fn on_change(&mut self, listener: impl FnMut(&PropertyChange<'_>) + 'static) {
		self.listeners.push(Box::new(listener));
	}
}
