use thiserror::Error;
use xeno_view::TemplateError;

/// A failed injection, carrying the view back to its owner.
///
/// `source` is the error from the view's template extension, unchanged.
#[derive(Debug, Error)]
#[error("aspect injection failed: {source}")]
pub struct InjectError<V> {
	pub view: V,
	pub source: TemplateError,
}

impl<V> InjectError<V> {
	pub fn into_view(self) -> V {
		self.view
	}

	pub fn into_parts(self) -> (V, TemplateError) {
		(self.view, self.source)
	}
}
