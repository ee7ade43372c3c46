use rustc_hash::FxHashMap;
use tracing::debug;

use crate::diagnostics::{Diagnostic, Diagnostics, Level};
use crate::error::PluginError;

/// Init hook run once per registry initialization.
pub type PluginInit = fn(&mut PluginContext<'_>) -> Result<(), PluginError>;

/// Static plugin descriptor.
#[derive(Debug)]
pub struct PluginDef {
	/// Unique name other plugins look this one up by.
	pub name: &'static str,
	pub init: PluginInit,
}

impl PluginDef {
	pub const fn new(name: &'static str, init: PluginInit) -> Self {
		Self { name, init }
	}
}

/// What a plugin sees while initializing.
pub struct PluginContext<'a> {
	registry: &'a PluginRegistry,
	diagnostics: &'a mut Diagnostics,
}

impl PluginContext<'_> {
	/// Whether a plugin named `name` is registered.
	pub fn has(&self, name: &str) -> bool {
		self.registry.has(name)
	}

	/// Name of the context owning the registry.
	pub fn owner(&self) -> &str {
		&self.registry.owner
	}

	/// Emits a warning tagged with the owning context.
	pub fn warn(&mut self, id: &'static str) {
		self.diagnostics.emit(Diagnostic {
			id,
			level: Level::Warn,
			context: self.registry.owner.clone(),
		});
	}
}

/// Named set of plugins belonging to one owning context.
#[derive(Debug)]
pub struct PluginRegistry {
	owner: String,
	plugins: Vec<&'static PluginDef>,
	by_name: FxHashMap<&'static str, usize>,
}

impl PluginRegistry {
	pub fn new(owner: impl Into<String>) -> Self {
		Self {
			owner: owner.into(),
			plugins: Vec::new(),
			by_name: FxHashMap::default(),
		}
	}

	pub fn owner(&self) -> &str {
		&self.owner
	}

	pub fn register(&mut self, def: &'static PluginDef) -> Result<(), PluginError> {
		if self.by_name.contains_key(def.name) {
			return Err(PluginError::Duplicate(def.name));
		}
		self.by_name.insert(def.name, self.plugins.len());
		self.plugins.push(def);
		Ok(())
	}

	pub fn has(&self, name: &str) -> bool {
		self.by_name.contains_key(name)
	}

	pub fn get(&self, name: &str) -> Option<&'static PluginDef> {
		self.by_name.get(name).map(|&idx| self.plugins[idx])
	}

	pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.plugins.iter().map(|p| p.name)
	}

	/// Runs every init hook in registration order, stopping at the first error.
	pub fn init_all(&self, diagnostics: &mut Diagnostics) -> Result<(), PluginError> {
		let mut ctx = PluginContext { registry: self, diagnostics };
		for plugin in &self.plugins {
			debug!(plugin = plugin.name, owner = %self.owner, "plugin.init");
			(plugin.init)(&mut ctx)?;
		}
		Ok(())
	}
}
