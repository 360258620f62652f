pub mod application;
pub mod namespace;
pub mod project;
pub mod traits;

pub use application::{InfraApplicationBuilder, ServiceApplicationBuilder};
pub use namespace::NamespaceBuilder;
pub use project::ProjectBuilder;
pub use traits::PreviewResourceBuilder;
