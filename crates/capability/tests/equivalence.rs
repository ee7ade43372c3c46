//! Injected and mixin-composed views must behave identically.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use xeno_capability::{Aspect, CssTransitionControl, CssTransitionDisablerMixin, CssTransitions, Injected, inject_css_transition_disabler};
use xeno_view::{BaseView, RenderedElement, TemplateDefinition, View};

fn template() -> TemplateDefinition {
	TemplateDefinition::new("div")
		.attribute("class", ["xeno-dropdown__panel", "xeno-reset"])
		.attribute("tabindex", ["-1"])
		.child(TemplateDefinition::new("ul").attribute("class", ["xeno-list"]))
}

fn injected() -> Injected<BaseView, CssTransitions> {
	inject_css_transition_disabler(BaseView::with_template(template())).expect("template is set")
}

fn mixed() -> CssTransitionDisablerMixin<BaseView> {
	let mut view = CssTransitionDisablerMixin::compose(BaseView::new());
	view.set_template(template());
	view.initialize_binding().expect("template is set");
	view
}

fn apply(view: &mut impl CssTransitionControl, disable: bool) {
	if disable {
		view.disable_css_transitions();
	} else {
		view.enable_css_transitions();
	}
}

fn rendered(view: &impl View) -> RenderedElement {
	view.render().expect("template is set")
}

#[test]
fn both_strategies_expose_the_same_flag_and_template() {
	let a = injected();
	let b = mixed();

	let flags_a: Vec<&str> = a.observables().iter().map(|(name, _)| name).collect();
	let flags_b: Vec<&str> = b.observables().iter().map(|(name, _)| name).collect();
	assert_eq!(flags_a, vec!["isCssTransitionsDisabled"]);
	assert_eq!(flags_a, flags_b);
	assert_eq!(a.template(), b.template());
}

#[rstest]
#[case::untouched(&[])]
#[case::disable(&[true])]
#[case::disable_twice(&[true, true])]
#[case::disable_then_enable(&[true, false])]
#[case::enable_twice(&[false, false])]
#[case::flapping(&[true, false, true, false, true])]
fn token_present_iff_disabled(#[case] calls: &[bool]) {
	let mut a = injected();
	let mut b = mixed();
	for &disable in calls {
		apply(&mut a, disable);
		apply(&mut b, disable);
	}

	let expected = calls.last().copied().unwrap_or(false);
	assert_eq!(a.is_css_transitions_disabled(), expected);
	assert_eq!(b.is_css_transitions_disabled(), expected);
	assert_eq!(rendered(&a).has_class(CssTransitions::TOKEN), expected);
	assert_eq!(rendered(&b).has_class(CssTransitions::TOKEN), expected);
}

proptest! {
	#[test]
	fn strategies_agree_on_every_call_sequence(calls in prop::collection::vec(any::<bool>(), 0..32)) {
		let mut a = injected();
		let mut b = mixed();
		prop_assert_eq!(rendered(&a), rendered(&b));

		for disable in calls {
			apply(&mut a, disable);
			apply(&mut b, disable);

			prop_assert_eq!(a.is_css_transitions_disabled(), disable);
			prop_assert_eq!(b.is_css_transitions_disabled(), disable);

			let (ra, rb) = (rendered(&a), rendered(&b));
			prop_assert_eq!(ra.has_class(CssTransitions::TOKEN), disable);
			prop_assert_eq!(ra, rb);
		}
	}
}
