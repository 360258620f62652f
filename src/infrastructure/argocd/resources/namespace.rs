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
use crate::infrastructure::constants::COMPONENT_NAMESPACE;
use k8s_openapi::api::core::v1::Namespace;

pub struct NamespaceBuilder {
    slug: String,
}

impl NamespaceBuilder {
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }

    pub fn build(&self) -> Namespace {
        Namespace {
            metadata: self.build_metadata(self.slug.clone(), None),
            ..Default::default()
        }
    }
}

impl PreviewResourceBuilder for NamespaceBuilder {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn component_name(&self) -> &'static str {
        COMPONENT_NAMESPACE
    }

    fn sync_wave(&self) -> SyncWave {
        SyncWave::NAMESPACE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_is_cluster_scoped() {
        let namespace = NamespaceBuilder::new("my-feature").build();

        assert_eq!(namespace.metadata.name.as_deref(), Some("my-feature"));
        assert_eq!(namespace.metadata.namespace, None);
        assert_eq!(
            namespace.metadata.labels.unwrap()["preview/slug"],
            "my-feature"
        );
    }
}
