use core::fmt;
use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};

use tracing::{debug, trace};
use xeno_view::{Observables, TemplateDefinition, TemplateError, TemplateExtension, View};

use crate::aspect::{self, Aspect, AspectControl};

/// View type `V` composed with aspect `A` from construction.
///
/// `Mixin<V, A>` is the derived type: it carries the flag and the control
/// methods as soon as it exists. The template binding is not installed until
/// [`Mixin::initialize_binding`] runs, because the template is assigned by
/// whoever builds the view, after composition.
///
/// The flag is written only by the [`AspectControl`] methods; writing
/// `A::FLAG` through `observables_mut()` bypasses them and is unsupported.
///
/// ```ignore
/// let mut view = CssTransitionDisablerMixin::compose(BaseView::new());
/// view.set_template(template);
/// view.initialize_binding()?;
/// ```
pub struct Mixin<V, A> {
	base: V,
	_aspect: PhantomData<fn() -> A>,
}

/// Composes aspect `A` onto `base`. See [`Mixin::compose`].
pub fn compose<A: Aspect, V: View>(base: V) -> Mixin<V, A> {
	Mixin::compose(base)
}

impl<V: View, A: Aspect> Mixin<V, A> {
	/// Declares the flag as `false` on `base`. The template is left alone.
	pub fn compose(mut base: V) -> Self {
		aspect::declare_flag::<A, _>(&mut base);
		trace!(aspect = A::NAME, flag = A::FLAG, "aspect.compose");
		Self {
			base,
			_aspect: PhantomData,
		}
	}

	/// Installs the binding rule into the view's template.
	///
	/// Must be called exactly once, after the template has been assigned.
	/// Without it the flag still toggles but the rendered output never shows
	/// the token.
	pub fn initialize_binding(&mut self) -> Result<(), TemplateError> {
		self.base.extend_template(A::binding_extension())?;
		debug!(aspect = A::NAME, flag = A::FLAG, token = A::TOKEN, "aspect.initialize_binding");
		Ok(())
	}

	/// Whether the current template carries the binding rule.
	///
	/// Read from the template itself, so replacing the template after
	/// [`Mixin::initialize_binding`] reports `false` again.
	pub fn is_binding_initialized(&self) -> bool {
		let Some(template) = self.base.template() else {
			return false;
		};
		A::binding_extension()
			.attributes
			.iter()
			.all(|(name, rules)| rules.iter().all(|rule| template.attribute_values(name).contains(rule)))
	}
}

impl<V, A> Mixin<V, A> {
	pub fn into_inner(self) -> V {
		self.base
	}
}

impl<V, A> Deref for Mixin<V, A> {
	type Target = V;

	fn deref(&self) -> &V {
		&self.base
	}
}

impl<V, A> DerefMut for Mixin<V, A> {
	fn deref_mut(&mut self) -> &mut V {
		&mut self.base
	}
}

impl<V: fmt::Debug + View, A: Aspect> fmt::Debug for Mixin<V, A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Mixin")
			.field("aspect", &A::NAME)
			.field("binding_initialized", &self.is_binding_initialized())
			.field("base", &self.base)
			.finish()
	}
}

impl<V: View, A: Aspect> AspectControl<A> for Mixin<V, A> {
	fn enable_aspect(&mut self) {
		aspect::write_flag::<A, _>(&mut self.base, false);
	}

	fn disable_aspect(&mut self) {
		aspect::write_flag::<A, _>(&mut self.base, true);
	}

	fn is_aspect_disabled(&self) -> bool {
		aspect::read_flag::<A, _>(&self.base)
	}
}

impl<V: View, A: Aspect> View for Mixin<V, A> {
	fn observables(&self) -> &Observables {
		self.base.observables()
	}

	fn observables_mut(&mut self) -> &mut Observables {
		self.base.observables_mut()
	}

	fn template(&self) -> Option<&TemplateDefinition> {
		self.base.template()
	}

	fn extend_template(&mut self, ext: TemplateExtension) -> Result<(), TemplateError> {
		self.base.extend_template(ext)
	}
}
