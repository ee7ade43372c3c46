//! Plugin registry for view plugins.
//!
//! Plugins are static [`PluginDef`]s registered by name. Initialization runs
//! in registration order and hands each plugin a [`PluginContext`] for
//! presence checks and for reporting [`Diagnostic`]s.

pub mod diagnostics;
pub mod error;
pub mod insert_ui;
pub mod registry;

pub use diagnostics::{Diagnostic, Diagnostics, Level};
pub use error::PluginError;
pub use registry::{PluginContext, PluginDef, PluginRegistry};
