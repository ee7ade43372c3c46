use tracing::trace;

use crate::error::TemplateError;
use crate::observable::{Observables, Value};
use crate::render::{RenderedElement, render};
use crate::template::{AttributeValue, BindingRule, TemplateDefinition, TemplateExtension};

/// Builds a rule that emits `value` iff `property` is truthy.
pub fn bind_if(property: impl Into<String>, value: impl Into<String>) -> AttributeValue {
	AttributeValue::Bind(BindingRule::If {
		property: property.into(),
		value: value.into(),
	})
}

/// Builds a rule that emits the current value of `property`.
pub fn bind_to(property: impl Into<String>) -> AttributeValue {
	AttributeValue::Bind(BindingRule::To {
		property: property.into(),
	})
}

/// A UI element backed by a template and observable state.
///
/// Implementors own both; capabilities layered on top of a view only go
/// through these operations.
pub trait View {
	fn observables(&self) -> &Observables;

	fn observables_mut(&mut self) -> &mut Observables;

	/// The current template, if one has been assigned.
	fn template(&self) -> Option<&TemplateDefinition>;

	/// Merges `ext` into the current template.
	///
	/// Fails with [`TemplateError::NotSet`] before a template is assigned.
	fn extend_template(&mut self, ext: TemplateExtension) -> Result<(), TemplateError>;

	fn declare_observable(&mut self, name: &str, initial: Value) {
		self.observables_mut().declare(name, initial);
	}

	/// Evaluates the template against the current state.
	fn render(&self) -> Result<RenderedElement, TemplateError> {
		let def = self.template().ok_or(TemplateError::NotSet)?;
		Ok(render(def, self.observables()))
	}
}

/// Plain view with an optional template and deferred render bookkeeping.
///
/// State writes are visible immediately through [`View::observables`]; the
/// rendered element only catches up on the next [`BaseView::render_pass`].
#[derive(Debug, Default)]
pub struct BaseView {
	template: Option<TemplateDefinition>,
	observables: Observables,
	template_epoch: u64,
	rendered_at: Option<(u64, u64)>,
	last_rendered: Option<RenderedElement>,
}

impl BaseView {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_template(template: TemplateDefinition) -> Self {
		let mut view = Self::new();
		view.set_template(template);
		view
	}

	/// Assigns or replaces the template.
	pub fn set_template(&mut self, template: TemplateDefinition) {
		self.template = Some(template);
		self.template_epoch = self.template_epoch.wrapping_add(1);
	}

	/// Whether state or template changed since the last render pass.
	pub fn needs_render(&self) -> bool {
		self.template.is_some() && self.rendered_at != Some(self.stamp())
	}

	/// Runs a render pass if anything changed, returning the new element.
	pub fn render_pass(&mut self) -> Result<Option<&RenderedElement>, TemplateError> {
		if !self.needs_render() {
			return match self.template {
				Some(_) => Ok(None),
				None => Err(TemplateError::NotSet),
			};
		}

		let rendered = View::render(self)?;
		trace!(tag = %rendered.tag, revision = self.observables.revision(), "view.render_pass");
		self.rendered_at = Some(self.stamp());
		Ok(Some(&*self.last_rendered.insert(rendered)))
	}

	/// Element produced by the most recent render pass.
	pub fn last_rendered(&self) -> Option<&RenderedElement> {
		self.last_rendered.as_ref()
	}

	fn stamp(&self) -> (u64, u64) {
		(self.template_epoch, self.observables.revision())
	}
}

impl View for BaseView {
	fn observables(&self) -> &Observables {
		&self.observables
	}

	fn observables_mut(&mut self) -> &mut Observables {
		&mut self.observables
	}

	fn template(&self) -> Option<&TemplateDefinition> {
		self.template.as_ref()
	}

	fn extend_template(&mut self, ext: TemplateExtension) -> Result<(), TemplateError> {
		let template = self.template.as_mut().ok_or(TemplateError::NotSet)?;
		template.extend(ext)?;
		self.template_epoch = self.template_epoch.wrapping_add(1);
		Ok(())
	}
}
