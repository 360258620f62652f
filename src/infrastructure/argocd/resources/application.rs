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
use crate::domain::config::{InfraSpec, ServiceSpec};
use crate::domain::manifest::{
    application_name, service_parameters, ManifestKind, Revision, SyncWave,
};
use crate::infrastructure::argocd::types::{
    Application, ApplicationDestination, ApplicationSource, ApplicationSpec, AutomatedSync,
    HelmSource, RetryStrategy, SyncPolicy,
};
use crate::infrastructure::constants::{
    ARGOCD_API_VERSION, ARGOCD_NAMESPACE, COMPONENT_INFRA, COMPONENT_SERVICE, IN_CLUSTER_SERVER,
    KIND_APPLICATION, RESOURCES_FINALIZER, SYNC_RETRY_LIMIT,
};
use crate::infrastructure::yaml::serialize_indented;
use crate::shared::error::{PreviewError, Result};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::sync::LazyLock;

static PREVIEW_SYNC_POLICY: LazyLock<SyncPolicy> = LazyLock::new(|| SyncPolicy {
    automated: Some(AutomatedSync {
        prune: true,
        self_heal: true,
    }),
    sync_options: Vec::new(),
    retry: Some(RetryStrategy {
        limit: SYNC_RETRY_LIMIT,
    }),
});

fn application(slug: &str, mut metadata: ObjectMeta, source: ApplicationSource) -> Application {
    metadata.finalizers = Some(vec![RESOURCES_FINALIZER.to_string()]);

    Application {
        api_version: ARGOCD_API_VERSION.to_string(),
        kind: KIND_APPLICATION.to_string(),
        metadata,
        spec: ApplicationSpec {
            project: slug.to_string(),
            source,
            destination: ApplicationDestination {
                server: IN_CLUSTER_SERVER.to_string(),
                namespace: slug.to_string(),
            },
            sync_policy: Some(PREVIEW_SYNC_POLICY.clone()),
        },
    }
}

// ============================================================================
// Service applications
// ============================================================================

/// Builds the Application deploying one of the preview's own services
pub struct ServiceApplicationBuilder<'a> {
    slug: &'a str,
    repo_url: &'a str,
    charts_dir: &'a str,
    service: &'a ServiceSpec,
}

impl<'a> ServiceApplicationBuilder<'a> {
    pub fn new(
        slug: &'a str,
        repo_url: &'a str,
        charts_dir: &'a str,
        service: &'a ServiceSpec,
    ) -> Self {
        Self {
            slug,
            repo_url,
            charts_dir,
            service,
        }
    }

    pub fn build(&self) -> Application {
        let revision = Revision::for_service(self.service);
        let parameters = service_parameters(self.service, &revision, self.slug);

        let source = ApplicationSource {
            repo_url: self.repo_url.to_string(),
            path: Some(self.chart_path()),
            chart: None,
            target_revision: revision.target_revision().to_string(),
            helm: Some(HelmSource {
                parameters,
                values: None,
            }),
        };

        let metadata = self.build_metadata(
            application_name(self.slug, &self.service.name),
            Some(ARGOCD_NAMESPACE),
        );
        application(self.slug, metadata, source)
    }

    fn chart_path(&self) -> String {
        let dir = self.charts_dir.trim_end_matches('/');
        if dir.is_empty() {
            self.service.name.clone()
        } else {
            format!("{}/{}", dir, self.service.name)
        }
    }
}

impl PreviewResourceBuilder for ServiceApplicationBuilder<'_> {
    fn slug(&self) -> &str {
        self.slug
    }

    fn component_name(&self) -> &'static str {
        COMPONENT_SERVICE
    }

    fn sync_wave(&self) -> SyncWave {
        SyncWave::SERVICE
    }
}

// ============================================================================
// Infra applications
// ============================================================================

/// Builds the Application deploying a third-party chart (database, cache...)
pub struct InfraApplicationBuilder<'a> {
    slug: &'a str,
    infra: &'a InfraSpec,
}

impl<'a> InfraApplicationBuilder<'a> {
    pub fn new(slug: &'a str, infra: &'a InfraSpec) -> Self {
        Self { slug, infra }
    }

    pub fn build(&self) -> Result<Application> {
        let helm = if self.infra.values.is_null() {
            None
        } else {
            let values = serialize_indented(&self.infra.values, 0).map_err(|e| {
                PreviewError::values_serialization(
                    ManifestKind::Application,
                    Some(&self.infra.name),
                    e,
                )
            })?;
            Some(HelmSource {
                parameters: Vec::new(),
                values: Some(values),
            })
        };

        let source = ApplicationSource {
            repo_url: self.infra.repo_url.clone(),
            path: None,
            chart: Some(self.infra.chart.clone()),
            target_revision: self.infra.target_revision.clone(),
            helm,
        };

        let metadata = self.build_metadata(
            application_name(self.slug, &self.infra.name),
            Some(ARGOCD_NAMESPACE),
        );
        Ok(application(self.slug, metadata, source))
    }
}

impl PreviewResourceBuilder for InfraApplicationBuilder<'_> {
    fn slug(&self) -> &str {
        self.slug
    }

    fn component_name(&self) -> &'static str {
        COMPONENT_INFRA
    }

    fn sync_wave(&self) -> SyncWave {
        SyncWave::INFRA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::HelmParameter;

    fn postgres() -> InfraSpec {
        InfraSpec {
            name: "postgres".to_string(),
            chart: "postgresql".to_string(),
            repo_url: "https://charts.bitnami.com/bitnami".to_string(),
            target_revision: "*".to_string(),
            values: serde_yaml::from_str("auth:\n  postgresPassword: postgres\n").unwrap(),
        }
    }

    #[test]
    fn test_pinned_service_application() {
        let service = ServiceSpec::new("api").with_image_tag("sha123");
        let app = ServiceApplicationBuilder::new(
            "svc-only",
            "https://git.example.com/previews.git",
            "charts/",
            &service,
        )
        .build();

        assert_eq!(app.metadata.name.as_deref(), Some("svc-only-api"));
        assert_eq!(app.metadata.namespace.as_deref(), Some("argocd"));
        assert_eq!(app.spec.project, "svc-only");
        assert_eq!(app.spec.destination.namespace, "svc-only");
        assert_eq!(app.spec.source.path.as_deref(), Some("charts/api"));
        assert_eq!(app.spec.source.target_revision, "sha123");
        assert_eq!(
            app.spec.source.helm.unwrap().parameters,
            vec![HelmParameter::new("image.tag", "sha123")]
        );
        assert_eq!(
            app.metadata.annotations.unwrap()["argocd.argoproj.io/sync-wave"],
            "1"
        );
    }

    #[test]
    fn test_service_application_shares_sync_policy() {
        let a = ServiceSpec::new("a");
        let b = ServiceSpec::new("b");
        let first = ServiceApplicationBuilder::new("s", "", "charts", &a).build();
        let second = ServiceApplicationBuilder::new("s", "", "charts", &b).build();

        assert_eq!(first.spec.sync_policy, second.spec.sync_policy);
        assert_eq!(
            first.spec.sync_policy.unwrap().automated,
            Some(AutomatedSync {
                prune: true,
                self_heal: true
            })
        );
    }

    #[test]
    fn test_infra_application_embeds_values() {
        let infra = postgres();
        let app = InfraApplicationBuilder::new("my-feature", &infra)
            .build()
            .unwrap();

        assert_eq!(app.metadata.name.as_deref(), Some("my-feature-postgres"));
        assert_eq!(app.spec.source.chart.as_deref(), Some("postgresql"));
        assert_eq!(app.spec.source.path, None);
        assert_eq!(app.spec.source.target_revision, "*");

        let values = app.spec.source.helm.unwrap().values.unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&values).unwrap();
        assert_eq!(parsed, infra.values);
        assert_eq!(
            app.metadata.annotations.unwrap()["argocd.argoproj.io/sync-wave"],
            "0"
        );
    }

    #[test]
    fn test_infra_without_values_has_no_helm_section() {
        let mut infra = postgres();
        infra.values = serde_yaml::Value::Null;
        let app = InfraApplicationBuilder::new("my-feature", &infra)
            .build()
            .unwrap();

        assert_eq!(app.spec.source.helm, None);
    }
}
