//! Capability bundles layered onto views.
//!
//! An [`Aspect`] names one observable boolean flag on a view together with a
//! class token that the view's template shows while the flag is set. Two entry
//! points deliver the same bundle:
//!
//! - [`inject`] takes an existing view that already has a template, installs
//!   the binding rule, declares the flag, and hands back the same view wrapped
//!   in [`Injected`]. On failure the view is returned inside [`InjectError`].
//! - [`Mixin`] wraps a view type before it has a template. The flag and control
//!   methods exist from construction, and the owner calls
//!   [`Mixin::initialize_binding`] once its template is in place.
//!
//! Both wrappers implement [`AspectControl`] by writing the flag through the
//! view's observables. They never render; the new class shows up on the
//! view's next render pass.
//!
//! Neither path guards against misuse. Injecting twice installs a duplicate
//! rule, and a mixin whose binding is never initialized keeps working state
//! that never reaches the rendered output.

mod aspect;
mod error;
mod inject;
mod mixin;
/// The CSS transitions aspect.
pub mod transitions;

pub use aspect::{Aspect, AspectControl};
pub use error::InjectError;
pub use inject::{Injected, inject};
pub use mixin::{Mixin, compose};
pub use transitions::{CssTransitionControl, CssTransitionDisablerMixin, CssTransitions, inject_css_transition_disabler};
