use tracing::{trace, warn};
use xeno_view::{TemplateExtension, Value, View, bind_if};

/// Compile-time description of one injectable capability.
pub trait Aspect: 'static {
	/// Short name used in logs.
	const NAME: &'static str;
	/// Observable property holding the "disabled" flag.
	const FLAG: &'static str;
	/// Template attribute receiving the conditional token.
	const ATTRIBUTE: &'static str = "class";
	/// Token present in [`Self::ATTRIBUTE`] while the flag is set.
	const TOKEN: &'static str;

	/// Partial template installing `bind_if(FLAG, TOKEN)` under `ATTRIBUTE`.
	fn binding_extension() -> TemplateExtension {
		TemplateExtension::new().attribute(Self::ATTRIBUTE, [bind_if(Self::FLAG, Self::TOKEN)])
	}
}

/// Control methods shared by every view carrying aspect `A`.
pub trait AspectControl<A: Aspect> {
	/// Clears the flag.
	fn enable_aspect(&mut self);

	/// Sets the flag.
	fn disable_aspect(&mut self);

	fn is_aspect_disabled(&self) -> bool;
}

pub(crate) fn declare_flag<A: Aspect, V: View + ?Sized>(view: &mut V) {
	view.declare_observable(A::FLAG, Value::Bool(false));
}

pub(crate) fn write_flag<A: Aspect, V: View + ?Sized>(view: &mut V, disabled: bool) {
	match view.observables_mut().set(A::FLAG, disabled) {
		Ok(changed) => trace!(aspect = A::NAME, disabled, changed, "aspect.flag"),
		Err(err) => warn!(aspect = A::NAME, %err, "aspect flag missing; control call ignored"),
	}
}

pub(crate) fn read_flag<A: Aspect, V: View + ?Sized>(view: &V) -> bool {
	view.observables().is_truthy(A::FLAG)
}
