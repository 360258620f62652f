pub mod resources;
pub mod types;

pub use types::{AppProject, Application};
