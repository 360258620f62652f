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

use crate::infrastructure::constants::DEFAULT_CHARTS_DIR;
use crate::shared::error::{PreviewError, Result};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::Path;
use tracing::debug;

// ============================================================================
// Preview configuration
// ============================================================================

/// Declarative description of one preview environment (`apps.yaml`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PreviewConfig {
    /// Git repository holding the service charts
    pub repo_url: String,
    /// Directory inside `repo_url` containing one chart per service
    pub charts_dir: String,
    pub services: Vec<ServiceSpec>,
    pub infra: Vec<InfraSpec>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            repo_url: String::new(),
            charts_dir: DEFAULT_CHARTS_DIR.to_string(),
            services: Vec::new(),
            infra: Vec::new(),
        }
    }
}

impl PreviewConfig {
    /// Load from a YAML file, or TOML when the extension is `.toml`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = read_to_string(path).map_err(|e| {
            PreviewError::config_error(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let conf = if is_toml {
            toml::from_str(&content).map_err(|e| {
                PreviewError::config_error(format!(
                    "Failed to parse config file {}: {}",
                    path.display(),
                    e
                ))
            })?
        } else {
            Self::from_yaml_str(&content).map_err(|e| {
                PreviewError::config_error(format!(
                    "Failed to parse config file {}: {}",
                    path.display(),
                    e
                ))
            })?
        };

        debug!(
            "Loaded {} with {} services and {} infra components",
            path.display(),
            conf.services.len(),
            conf.infra.len()
        );
        Ok(conf)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

// ============================================================================
// Services
// ============================================================================

/// One deployable service of the preview
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_parameters: Vec<HelmParameter>,
}

impl ServiceSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_image_tag(mut self, tag: impl Into<String>) -> Self {
        self.image_tag = Some(tag.into());
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_parameters.push(HelmParameter::new(name, value));
        self
    }

    /// The pinned tag, if any. An empty tag counts as no tag.
    pub fn pinned_tag(&self) -> Option<&str> {
        self.image_tag.as_deref().filter(|tag| !tag.is_empty())
    }
}

/// A Helm `--set` style parameter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HelmParameter {
    pub name: String,
    pub value: String,
}

impl HelmParameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

// ============================================================================
// Infrastructure components
// ============================================================================

/// Third-party chart deployed alongside the services (databases, queues...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InfraSpec {
    pub name: String,
    pub chart: String,
    #[serde(rename = "repoURL")]
    pub repo_url: String,
    #[serde(rename = "targetRevision")]
    pub target_revision: String,
    #[serde(default, skip_serializing_if = "serde_yaml::Value::is_null")]
    pub values: serde_yaml::Value,
}

// ============================================================================
// Slug
// ============================================================================

/// Derive the preview slug from the application source path
///
/// `previews/feature-add-pricing` and `previews/feature-add-pricing/`
/// both yield `feature-add-pricing`.
pub fn slug_from_source_path(source_path: &str) -> Result<String> {
    Path::new(source_path)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            PreviewError::config_error(format!(
                "Cannot derive preview slug from source path '{}'",
                source_path
            ))
        })
}
