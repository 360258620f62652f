// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::manifest::ManifestKind;
use std::fmt;
use thiserror::Error;
pub type Result<T> = std::result::Result<T, PreviewError>;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to render {target}: {source}")]
    Template {
        target: RenderTarget,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Serialization error in {context}: {source}")]
    Serialization {
        context: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The manifest a render failure belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTarget {
    pub kind: ManifestKind,
    pub service: Option<String>,
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.service {
            Some(name) => write!(f, "{} manifest for service '{}'", self.kind, name),
            None => write!(f, "{} manifest", self.kind),
        }
    }
}

impl PreviewError {
    pub fn config_error(context: impl Into<String>) -> Self {
        Self::ConfigError(context.into())
    }

    pub fn template(kind: ManifestKind, service: Option<&str>, source: serde_yaml::Error) -> Self {
        Self::Template {
            target: RenderTarget {
                kind,
                service: service.map(str::to_string),
            },
            source,
        }
    }

    /// A structured value embedded in the given manifest failed to serialize
    pub fn values_serialization(
        kind: ManifestKind,
        service: Option<&str>,
        source: serde_yaml::Error,
    ) -> Self {
        let target = RenderTarget {
            kind,
            service: service.map(str::to_string),
        };
        Self::serialization(format!("{} values", target), source)
    }

    pub fn serialization(context: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml_error() -> serde_yaml::Error {
        serde_yaml::from_str::<Vec<String>>("{{invalid").unwrap_err()
    }

    #[test]
    fn test_template_error_names_service() {
        let err = PreviewError::template(ManifestKind::Application, Some("api"), yaml_error());
        let message = err.to_string();
        assert!(message.starts_with("Failed to render Application manifest for service 'api'"));
        match err {
            PreviewError::Template { target, .. } => {
                assert_eq!(target.kind, ManifestKind::Application);
                assert_eq!(target.service.as_deref(), Some("api"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_template_error_without_service() {
        let err = PreviewError::template(ManifestKind::AppProject, None, yaml_error());
        assert!(err
            .to_string()
            .starts_with("Failed to render AppProject manifest:"));
    }

    #[test]
    fn test_values_serialization_names_manifest() {
        let err = PreviewError::values_serialization(
            ManifestKind::Application,
            Some("postgres"),
            yaml_error(),
        );
        assert!(err.to_string().starts_with(
            "Serialization error in Application manifest for service 'postgres' values:"
        ));
    }

    #[test]
    fn test_config_error_message() {
        let err = PreviewError::config_error("ARGOCD_APP_SOURCE_PATH not set");
        assert_eq!(
            err.to_string(),
            "Configuration error: ARGOCD_APP_SOURCE_PATH not set"
        );
    }
}
