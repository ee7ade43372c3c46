//! Insert UI glue plugin.
//!
//! `InsertUi` only provides the dropdown shell; the actual insertion methods
//! come from the upload and URL plugins. When neither is loaded the dropdown
//! would be empty, so init reports it once and otherwise does nothing.

use crate::error::PluginError;
use crate::registry::{PluginContext, PluginDef};

pub const NAME: &str = "InsertUi";
pub const UPLOAD_UI: &str = "UploadUi";
pub const URL_INSERT_UI: &str = "UrlInsertUi";

/// Emitted when neither integration plugin is registered.
pub const NO_INTEGRATIONS: &str = "insert-ui-no-integrations";

pub static PLUGIN: PluginDef = PluginDef::new(NAME, init);

fn init(ctx: &mut PluginContext<'_>) -> Result<(), PluginError> {
	if !ctx.has(UPLOAD_UI) && !ctx.has(URL_INSERT_UI) {
		ctx.warn(NO_INTEGRATIONS);
	}
	Ok(())
}
