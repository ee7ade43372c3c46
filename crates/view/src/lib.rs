//! View abstraction for declarative UI templates.
//!
//! A view owns a [`TemplateDefinition`] describing its element and a set of
//! [`Observables`] holding named state. Attribute values inside a template are
//! either literals or [`BindingRule`]s; rules are evaluated against the view's
//! observables on each render pass, so state changes reach the rendered output
//! without the view touching it imperatively.

/// Template descriptor loading from TOML and JSON.
pub mod config;
/// Error types for templates, observables and configuration.
pub mod error;
/// Named observable state with change notification.
pub mod observable;
/// Evaluation of template descriptors into rendered elements.
pub mod render;
/// Template descriptors, binding rules and the extension merge.
pub mod template;
/// The `View` trait and the concrete `BaseView`.
pub mod view;

pub use error::{ConfigError, ObservableError, TemplateError};
pub use observable::{Observables, PropertyChange, Value};
pub use render::{RenderedElement, RenderedNode, render};
pub use template::{AttributeValue, BindingRule, TemplateDefinition, TemplateExtension, TemplateNode};
pub use view::{BaseView, View, bind_if, bind_to};
