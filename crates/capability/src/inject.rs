use core::fmt;
use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};

use tracing::debug;
use xeno_view::{Observables, TemplateDefinition, TemplateError, TemplateExtension, View};

use crate::aspect::{self, Aspect, AspectControl};
use crate::error::InjectError;

/// A view that had aspect `A` injected after construction.
///
/// Derefs to the wrapped view, so everything the view offered is still there.
/// The flag is written only by the [`AspectControl`] methods; writing
/// `A::FLAG` through `observables_mut()` bypasses them and is unsupported.
pub struct Injected<V, A> {
	view: V,
	_aspect: PhantomData<fn() -> A>,
}

/// Injects aspect `A` into a view that already has a template.
///
/// Installs the binding rule through [`View::extend_template`], then declares
/// the flag as `false`. If the extension fails (with no template this is
/// [`TemplateError::NotSet`]) the view comes back untouched inside
/// [`InjectError`], next to the unchanged error.
///
/// Calling this on a view that already carries `A` installs the rule a second
/// time. Don't.
pub fn inject<A: Aspect, V: View>(mut view: V) -> Result<Injected<V, A>, InjectError<V>> {
	if let Err(source) = view.extend_template(A::binding_extension()) {
		return Err(InjectError { view, source });
	}
	aspect::declare_flag::<A, _>(&mut view);
	debug!(aspect = A::NAME, flag = A::FLAG, token = A::TOKEN, "aspect.inject");
	Ok(Injected {
		view,
		_aspect: PhantomData,
	})
}

impl<V, A> Injected<V, A> {
	pub fn into_inner(self) -> V {
		self.view
	}
}

impl<V, A> Deref for Injected<V, A> {
	type Target = V;

	fn deref(&self) -> &V {
		&self.view
	}
}

impl<V, A> DerefMut for Injected<V, A> {
	fn deref_mut(&mut self) -> &mut V {
		&mut self.view
	}
}

impl<V: fmt::Debug, A: Aspect> fmt::Debug for Injected<V, A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Injected").field("aspect", &A::NAME).field("view", &self.view).finish()
	}
}

impl<V: View, A: Aspect> AspectControl<A> for Injected<V, A> {
	fn enable_aspect(&mut self) {
		aspect::write_flag::<A, _>(&mut self.view, false);
	}

	fn disable_aspect(&mut self) {
		aspect::write_flag::<A, _>(&mut self.view, true);
	}

	fn is_aspect_disabled(&self) -> bool {
		aspect::read_flag::<A, _>(&self.view)
	}
}

impl<V: View, A: Aspect> View for Injected<V, A> {
	fn observables(&self) -> &Observables {
		self.view.observables()
	}

	fn observables_mut(&mut self) -> &mut Observables {
		self.view.observables_mut()
	}

	fn template(&self) -> Option<&TemplateDefinition> {
		self.view.template()
	}

	fn extend_template(&mut self, ext: TemplateExtension) -> Result<(), TemplateError> {
		self.view.extend_template(ext)
	}
}

#[cfg(test)]
mod tests;
