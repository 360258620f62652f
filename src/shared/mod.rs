//! Shared utilities

pub mod error;
pub mod logging;

pub use error::{PreviewError, RenderTarget, Result};
