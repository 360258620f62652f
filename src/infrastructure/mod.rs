pub mod argocd;
pub mod constants;
pub mod yaml;
