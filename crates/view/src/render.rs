use core::fmt;

use indexmap::IndexMap;

use crate::observable::{Observables, Value};
use crate::template::{AttributeValue, BindingRule, TemplateDefinition, TemplateNode};

/// Element produced by evaluating a template against observable state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedElement {
	pub tag: String,
	pub attributes: IndexMap<String, String>,
	pub children: Vec<RenderedNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedNode {
	Element(RenderedElement),
	Text(String),
}

impl RenderedElement {
	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes.get(name).map(String::as_str)
	}

	/// Whitespace-separated tokens of the `class` attribute.
	pub fn classes(&self) -> impl Iterator<Item = &str> {
		self.attribute("class").unwrap_or_default().split_whitespace()
	}

	pub fn has_class(&self, token: &str) -> bool {
		self.classes().any(|class| class == token)
	}
}

impl fmt::Display for RenderedElement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "<{}", self.tag)?;
		for (name, value) in &self.attributes {
			write!(f, " {name}=\"{}\"", value.replace('"', "&quot;"))?;
		}
		f.write_str(">")?;
		for child in &self.children {
			match child {
				RenderedNode::Element(el) => write!(f, "{el}")?,
				RenderedNode::Text(text) => f.write_str(text)?,
			}
		}
		write!(f, "</{}>", self.tag)
	}
}

/// Evaluates `def` against the current values in `observables`.
///
/// Each attribute's evaluated values are joined with a single space. Empty
/// values are dropped, and an attribute left with nothing is omitted.
pub fn render(def: &TemplateDefinition, observables: &Observables) -> RenderedElement {
	let mut attributes = IndexMap::with_capacity(def.attributes.len());
	for (name, values) in &def.attributes {
		let parts: Vec<String> = values
			.iter()
			.filter_map(|value| evaluate(value, observables))
			.filter(|part| !part.is_empty())
			.collect();
		if !parts.is_empty() {
			attributes.insert(name.clone(), parts.join(" "));
		}
	}

	let children = def
		.children
		.iter()
		.map(|child| match child {
			TemplateNode::Element(el) => RenderedNode::Element(render(el, observables)),
			TemplateNode::Text(text) => RenderedNode::Text(text.clone()),
		})
		.collect();

	RenderedElement {
		tag: def.tag.clone(),
		attributes,
		children,
	}
}

fn evaluate(value: &AttributeValue, observables: &Observables) -> Option<String> {
	match value {
		AttributeValue::Literal(s) => Some(s.clone()),
		AttributeValue::Bind(BindingRule::If { property, value }) => observables.is_truthy(property).then(|| value.clone()),
		AttributeValue::Bind(BindingRule::To { property }) => match observables.get(property)? {
			Value::Bool(false) => None,
			Value::Str(s) if s.is_empty() => None,
			other => Some(other.to_string()),
		},
	}
}
