use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluginError {
	/// A plugin with the same name is already registered.
	#[error("plugin `{0}` is already registered")]
	Duplicate(&'static str),

	/// A plugin's init hook failed.
	#[error("plugin `{plugin}` failed to initialize: {message}")]
	Init {
		plugin: &'static str,
		message: String,
	},
}
