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

//! Manifest generation domain

pub mod generator;
pub mod parameters;
pub mod revision;

use crate::infrastructure::argocd::{AppProject, Application};
use k8s_openapi::api::core::v1::Namespace;
use serde::Serialize;
use std::fmt;

pub use self::generator::{generate, generate_json, plan, render_manifests, ServicePlan};
pub use self::parameters::{
    application_name, database_name, requires_database_name, service_parameters,
};
pub use self::revision::Revision;

/// Kind of a rendered manifest, used to locate render failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    AppProject,
    Namespace,
    Application,
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ManifestKind::AppProject => "AppProject",
            ManifestKind::Namespace => "Namespace",
            ManifestKind::Application => "Application",
        };
        f.write_str(name)
    }
}

/// ArgoCD sync-wave ordering hint, fixed per resource role
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SyncWave(i32);

impl SyncWave {
    pub const PROJECT: SyncWave = SyncWave(-3);
    pub const NAMESPACE: SyncWave = SyncWave(-2);
    pub const INFRA: SyncWave = SyncWave(0);
    pub const SERVICE: SyncWave = SyncWave(1);

    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for SyncWave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A structured manifest ready to be written out
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Resource {
    AppProject(AppProject),
    Namespace(Namespace),
    Application(Application),
}

/// One generated manifest and the service it belongs to, if any
#[derive(Debug, Clone)]
pub struct Manifest {
    pub kind: ManifestKind,
    pub service: Option<String>,
    pub resource: Resource,
}

impl Manifest {
    pub fn project(project: AppProject) -> Self {
        Self {
            kind: ManifestKind::AppProject,
            service: None,
            resource: Resource::AppProject(project),
        }
    }

    pub fn namespace(namespace: Namespace) -> Self {
        Self {
            kind: ManifestKind::Namespace,
            service: None,
            resource: Resource::Namespace(namespace),
        }
    }

    pub fn application(service: impl Into<String>, application: Application) -> Self {
        Self {
            kind: ManifestKind::Application,
            service: Some(service.into()),
            resource: Resource::Application(application),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match &self.resource {
            Resource::AppProject(project) => project.metadata.name.as_deref(),
            Resource::Namespace(namespace) => namespace.metadata.name.as_deref(),
            Resource::Application(app) => app.metadata.name.as_deref(),
        }
    }
}
