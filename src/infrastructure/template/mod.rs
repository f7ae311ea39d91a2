//! Redirect-page template storage.
//!
//! Provides a [`TemplateStore`] trait with one production implementation:
//! - [`FsTemplateStore`] - reads the template from a configured directory

mod fs_template_store;
mod service;

pub use fs_template_store::FsTemplateStore;
pub use service::{TemplateError, TemplateResult, TemplateStore};
