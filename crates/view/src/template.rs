use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

/// Declarative rule evaluated against a view's observables on every render.
///
/// Rules are plain data. Installing one never evaluates it; the renderer does
/// that when it builds the element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BindingRule {
	/// Emits `value` iff `property` is truthy.
	If {
		#[serde(rename = "if")]
		property: String,
		value: String,
	},
	/// Emits the current value of `property` as text. Unset and `false` emit nothing.
	To {
		#[serde(rename = "to")]
		property: String,
	},
}

impl BindingRule {
	/// Name of the observable the rule reads.
	pub fn property(&self) -> &str {
		match self {
			Self::If { property, .. } | Self::To { property } => property,
		}
	}
}

/// One entry of an attribute's value sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
	Literal(String),
	Bind(BindingRule),
}

impl AttributeValue {
	pub fn as_literal(&self) -> Option<&str> {
		match self {
			Self::Literal(s) => Some(s),
			Self::Bind(_) => None,
		}
	}

	pub fn as_binding(&self) -> Option<&BindingRule> {
		match self {
			Self::Bind(rule) => Some(rule),
			Self::Literal(_) => None,
		}
	}
}

impl From<&str> for AttributeValue {
	fn from(s: &str) -> Self {
		Self::Literal(s.to_string())
	}
}

impl From<String> for AttributeValue {
	fn from(s: String) -> Self {
		Self::Literal(s)
	}
}

impl From<BindingRule> for AttributeValue {
	fn from(rule: BindingRule) -> Self {
		Self::Bind(rule)
	}
}

/// Child of a template element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateNode {
	Text(String),
	Element(TemplateDefinition),
}

impl From<TemplateDefinition> for TemplateNode {
	fn from(def: TemplateDefinition) -> Self {
		Self::Element(def)
	}
}

impl From<&str> for TemplateNode {
	fn from(s: &str) -> Self {
		Self::Text(s.to_string())
	}
}

/// Declarative description of a view's element.
///
/// Attribute keys keep insertion order, and every attribute holds an ordered
/// sequence of values that the renderer joins with spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDefinition {
	pub tag: String,
	#[serde(default, skip_serializing_if = "IndexMap::is_empty")]
	pub attributes: IndexMap<String, Vec<AttributeValue>>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub children: Vec<TemplateNode>,
}

impl TemplateDefinition {
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			attributes: IndexMap::new(),
			children: Vec::new(),
		}
	}

	/// Appends `values` to attribute `name`.
	pub fn attribute<I>(mut self, name: impl Into<String>, values: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<AttributeValue>,
	{
		self.attributes.entry(name.into()).or_default().extend(values.into_iter().map(Into::into));
		self
	}

	pub fn child(mut self, node: impl Into<TemplateNode>) -> Self {
		self.children.push(node.into());
		self
	}

	/// Values of attribute `name`, empty if absent.
	pub fn attribute_values(&self, name: &str) -> &[AttributeValue] {
		self.attributes.get(name).map(Vec::as_slice).unwrap_or_default()
	}

	/// Merges `ext` into this definition.
	///
	/// Attribute sequences are appended to, never replaced; new keys land after
	/// existing ones. Child extensions apply by index to element children. The
	/// merge is all-or-nothing: a mismatched child leaves `self` untouched.
	pub fn extend(&mut self, ext: TemplateExtension) -> Result<(), TemplateError> {
		self.check_extension(&ext)?;
		self.apply_extension(ext);
		Ok(())
	}

	fn check_extension(&self, ext: &TemplateExtension) -> Result<(), TemplateError> {
		for (index, child_ext) in ext.children.iter().enumerate() {
			match self.children.get(index) {
				Some(TemplateNode::Element(child)) => child.check_extension(child_ext)?,
				_ if child_ext.is_empty() => {}
				_ => {
					return Err(TemplateError::ChildMismatch {
						tag: self.tag.clone(),
						index,
					});
				}
			}
		}
		Ok(())
	}

	fn apply_extension(&mut self, ext: TemplateExtension) {
		for (name, values) in ext.attributes {
			self.attributes.entry(name).or_default().extend(values);
		}
		for (child, child_ext) in self.children.iter_mut().zip(ext.children) {
			if let TemplateNode::Element(child) = child {
				child.apply_extension(child_ext);
			}
		}
	}
}

/// Partial template merged into an existing [`TemplateDefinition`].
///
/// `children[i]` extends element child `i` of the target; use an empty
/// extension to skip a position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateExtension {
	#[serde(default, skip_serializing_if = "IndexMap::is_empty")]
	pub attributes: IndexMap<String, Vec<AttributeValue>>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub children: Vec<TemplateExtension>,
}

impl TemplateExtension {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn attribute<I>(mut self, name: impl Into<String>, values: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<AttributeValue>,
	{
		self.attributes.entry(name.into()).or_default().extend(values.into_iter().map(Into::into));
		self
	}

	pub fn child(mut self, ext: TemplateExtension) -> Self {
		self.children.push(ext);
		self
	}

	pub fn is_empty(&self) -> bool {
		self.attributes.values().all(Vec::is_empty) && self.children.iter().all(TemplateExtension::is_empty)
	}
}
