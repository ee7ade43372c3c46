use pretty_assertions::assert_eq;
use xeno_view::{AttributeValue, BaseView, TemplateDefinition, Value, bind_if};

use super::*;
use crate::transitions::{CssTransitionControl, CssTransitions};

struct ReadOnly;

impl Aspect for ReadOnly {
	const NAME: &'static str = "read-only";
	const FLAG: &'static str = "isReadOnly";
	const ATTRIBUTE: &'static str = "data-state";
	const TOKEN: &'static str = "read-only";
}

fn toolbar() -> BaseView {
	BaseView::with_template(TemplateDefinition::new("div").attribute("class", ["a", "b"]))
}

#[test]
fn fresh_injection_starts_enabled() {
	let view = inject::<CssTransitions, _>(toolbar()).unwrap();

	assert_eq!(view.observables().get(CssTransitions::FLAG), Some(&Value::Bool(false)));
	assert!(!view.is_css_transitions_disabled());
	assert!(!view.render().unwrap().has_class(CssTransitions::TOKEN));
}

#[test]
fn injection_appends_rule_after_existing_classes() {
	let view = inject::<CssTransitions, _>(toolbar()).unwrap();

	assert_eq!(
		view.template().unwrap().attribute_values("class"),
		&[
			AttributeValue::from("a"),
			AttributeValue::from("b"),
			bind_if(CssTransitions::FLAG, CssTransitions::TOKEN),
		]
	);
}

#[test]
fn toggles_are_idempotent() {
	let mut view = inject::<CssTransitions, _>(toolbar()).unwrap();

	view.disable_css_transitions();
	view.disable_css_transitions();
	assert!(view.is_css_transitions_disabled());
	assert_eq!(view.render().unwrap().attribute("class"), Some("a b xeno-transitions-disabled"));

	view.enable_css_transitions();
	view.enable_css_transitions();
	assert!(!view.is_css_transitions_disabled());
	assert_eq!(view.render().unwrap().attribute("class"), Some("a b"));
}

#[test]
fn injection_without_template_surfaces_extension_error() {
	let err = inject::<CssTransitions, _>(BaseView::new()).unwrap_err();
	assert_eq!(err.source, TemplateError::NotSet);
}

#[test]
fn failed_injection_hands_the_view_back_untouched() {
	let mut view = BaseView::new();
	view.declare_observable("label", Value::from("Bold"));

	let (mut view, source) = inject::<CssTransitions, _>(view).unwrap_err().into_parts();
	assert_eq!(source, TemplateError::NotSet);
	assert_eq!(view.observables().get("label"), Some(&Value::from("Bold")));
	assert!(!view.observables().contains(CssTransitions::FLAG));

	view.set_template(TemplateDefinition::new("div"));
	let mut view = inject::<CssTransitions, _>(view).unwrap();
	view.disable_css_transitions();
	assert!(view.render().unwrap().has_class(CssTransitions::TOKEN));
}

#[test]
fn double_injection_duplicates_rule() {
	let once = inject::<CssTransitions, _>(toolbar()).unwrap();
	let mut twice = inject::<CssTransitions, _>(once).unwrap();

	let rule = bind_if(CssTransitions::FLAG, CssTransitions::TOKEN);
	let count = twice.template().unwrap().attribute_values("class").iter().filter(|v| **v == rule).count();
	assert_eq!(count, 2);

	AspectControl::<CssTransitions>::disable_aspect(&mut twice);
	let rendered = twice.render().unwrap();
	assert_eq!(rendered.classes().filter(|c| *c == CssTransitions::TOKEN).count(), 2);
}

#[test]
fn distinct_aspects_stack_on_one_view() {
	let view = inject::<CssTransitions, _>(toolbar()).unwrap();
	let mut view = inject::<ReadOnly, _>(view).unwrap();

	view.disable_aspect();
	let rendered = view.render().unwrap();
	assert_eq!(rendered.attribute("data-state"), Some("read-only"));
	assert!(!rendered.has_class(CssTransitions::TOKEN));

	view.disable_css_transitions();
	assert!(view.render().unwrap().has_class(CssTransitions::TOKEN));
}

#[test]
fn flag_write_is_visible_before_render_pass() {
	let mut view = inject::<CssTransitions, _>(toolbar()).unwrap();
	view.render_pass().unwrap();

	view.disable_css_transitions();
	assert!(view.observables().is_truthy(CssTransitions::FLAG));
	assert!(view.needs_render());
	assert!(!view.last_rendered().unwrap().has_class(CssTransitions::TOKEN));

	let rendered = view.render_pass().unwrap().unwrap();
	assert!(rendered.has_class(CssTransitions::TOKEN));
}

#[test]
fn into_inner_keeps_state() {
	let mut view = inject::<CssTransitions, _>(toolbar()).unwrap();
	view.disable_css_transitions();

	let base = view.into_inner();
	assert!(base.observables().is_truthy(CssTransitions::FLAG));
	assert!(base.render().unwrap().has_class(CssTransitions::TOKEN));
}
