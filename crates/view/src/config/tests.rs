use pretty_assertions::assert_eq;

use crate::error::ConfigError;
use crate::template::{AttributeValue, BindingRule, TemplateDefinition, TemplateExtension, TemplateNode};
use crate::view::{bind_if, bind_to};

const BALLOON: &str = r#"
tag = "div"
children = ["Hello", { tag = "span", attributes = { class = ["xeno-balloon__arrow"] } }]

[attributes]
class = ["xeno-balloon", { if = "isVisible", value = "xeno-balloon_visible" }]
title = [{ to = "label" }]
"#;

#[test]
fn parses_literals_and_rules_from_toml() {
	let def = TemplateDefinition::from_toml(BALLOON).unwrap();

	assert_eq!(def.tag, "div");
	assert_eq!(
		def.attribute_values("class"),
		&[AttributeValue::from("xeno-balloon"), bind_if("isVisible", "xeno-balloon_visible")]
	);
	assert_eq!(def.attribute_values("title"), &[bind_to("label")]);
	assert_eq!(def.children[0], TemplateNode::Text("Hello".into()));
	assert_eq!(
		def.children[1],
		TemplateNode::Element(TemplateDefinition::new("span").attribute("class", ["xeno-balloon__arrow"]))
	);
}

#[test]
fn parses_json_descriptor() {
	let def = TemplateDefinition::from_json(r#"{"tag":"i","attributes":{"class":["a",{"if":"on","value":"b"}]}}"#).unwrap();
	assert_eq!(
		def.attribute_values("class")[1],
		AttributeValue::Bind(BindingRule::If {
			property: "on".into(),
			value: "b".into(),
		})
	);
}

#[test]
fn extension_from_toml_merges() {
	let mut def = TemplateDefinition::from_toml(BALLOON).unwrap();
	let ext = TemplateExtension::from_toml(r#"attributes = { class = [{ if = "isOff", value = "off" }] }"#).unwrap();
	def.extend(ext).unwrap();

	assert_eq!(def.attribute_values("class").last(), Some(&bind_if("isOff", "off")));
}

#[test]
fn missing_tag_is_a_config_error() {
	let err = TemplateDefinition::from_toml("[attributes]\nclass = [\"a\"]\n").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)), "{err}");
}
