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

use super::traits::PreviewResourceBuilder;
use crate::domain::manifest::SyncWave;
use crate::infrastructure::argocd::types::{
    AppProject, AppProjectSpec, ApplicationDestination, GroupKind,
};
use crate::infrastructure::constants::{
    ARGOCD_API_VERSION, ARGOCD_NAMESPACE, COMPONENT_PROJECT, IN_CLUSTER_SERVER, KIND_APP_PROJECT,
};

/// Builds the AppProject scoping every Application of one preview
pub struct ProjectBuilder {
    slug: String,
}

impl ProjectBuilder {
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }

    pub fn build(&self) -> AppProject {
        AppProject {
            api_version: ARGOCD_API_VERSION.to_string(),
            kind: KIND_APP_PROJECT.to_string(),
            metadata: self.build_metadata(self.slug.clone(), Some(ARGOCD_NAMESPACE)),
            spec: AppProjectSpec {
                description: Some(format!("Preview environment {}", self.slug)),
                source_repos: vec!["*".to_string()],
                destinations: vec![ApplicationDestination {
                    server: IN_CLUSTER_SERVER.to_string(),
                    namespace: self.slug.clone(),
                }],
                // The preview namespace is the only cluster-scoped object a
                // preview may own.
                cluster_resource_whitelist: vec![GroupKind::new("", "Namespace")],
                namespace_resource_whitelist: vec![GroupKind::new("*", "*")],
            },
        }
    }
}

impl PreviewResourceBuilder for ProjectBuilder {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn component_name(&self) -> &'static str {
        COMPONENT_PROJECT
    }

    fn sync_wave(&self) -> SyncWave {
        SyncWave::PROJECT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_named_after_slug() {
        let project = ProjectBuilder::new("my-feature").build();

        assert_eq!(project.kind, "AppProject");
        assert_eq!(project.metadata.name.as_deref(), Some("my-feature"));
        assert_eq!(project.metadata.namespace.as_deref(), Some("argocd"));
        assert_eq!(project.spec.destinations[0].namespace, "my-feature");
        assert_eq!(
            project.metadata.annotations.unwrap()["argocd.argoproj.io/sync-wave"],
            "-3"
        );
    }
}
