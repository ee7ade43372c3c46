//! Suppressing CSS transitions on a view.
//!
//! Views that animate size or position changes sometimes need those
//! animations off for a moment, for example while being repositioned before
//! their first paint. The [`CssTransitions`] aspect adds the
//! `xeno-transitions-disabled` class while its flag is set; the stylesheet
//! turns transitions off for that class.

use xeno_view::View;

use crate::aspect::{Aspect, AspectControl};
use crate::error::InjectError;
use crate::inject::{Injected, inject};
use crate::mixin::Mixin;

/// The CSS transitions aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CssTransitions;

impl Aspect for CssTransitions {
	const NAME: &'static str = "css-transitions";
	const FLAG: &'static str = "isCssTransitionsDisabled";
	const TOKEN: &'static str = "xeno-transitions-disabled";
}

/// Named control methods for views carrying [`CssTransitions`].
pub trait CssTransitionControl {
	fn disable_css_transitions(&mut self);

	fn enable_css_transitions(&mut self);

	fn is_css_transitions_disabled(&self) -> bool;
}

impl<T: AspectControl<CssTransitions> + ?Sized> CssTransitionControl for T {
	fn disable_css_transitions(&mut self) {
		self.disable_aspect();
	}

	fn enable_css_transitions(&mut self) {
		self.enable_aspect();
	}

	fn is_css_transitions_disabled(&self) -> bool {
		self.is_aspect_disabled()
	}
}

/// Injects [`CssTransitions`] into a view that already has a template.
pub fn inject_css_transition_disabler<V: View>(view: V) -> Result<Injected<V, CssTransitions>, InjectError<V>> {
	inject::<CssTransitions, V>(view)
}

/// `V` composed with [`CssTransitions`].
pub type CssTransitionDisablerMixin<V> = Mixin<V, CssTransitions>;
