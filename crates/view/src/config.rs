//! Loading template descriptors from configuration text.
//!
//! Literal attribute values are plain strings; binding rules are tables:
//!
//! ```toml
//! tag = "div"
//!
//! [attributes]
//! class = ["xeno-balloon", { if = "isVisible", value = "xeno-balloon_visible" }]
//! title = [{ to = "label" }]
//! ```

use crate::error::ConfigError;
use crate::template::{TemplateDefinition, TemplateExtension};

impl TemplateDefinition {
	pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(src)?)
	}

	pub fn from_json(src: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(src)?)
	}
}

impl TemplateExtension {
	pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(src)?)
	}
}

#[cfg(test)]
mod tests;
