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

//! Preview manifest generation
//!
//! A generation call is a pure function of the configuration and the slug:
//! it renders the AppProject, the Namespace, one Application per infra
//! component and one Application per service, in that order. The first
//! failure aborts the whole call.

use super::parameters::{application_name, service_parameters};
use super::revision::Revision;
use super::{Manifest, ManifestKind};
use crate::domain::config::{HelmParameter, PreviewConfig};
use crate::infrastructure::argocd::resources::{
    InfraApplicationBuilder, NamespaceBuilder, ProjectBuilder, ServiceApplicationBuilder,
};
use crate::infrastructure::yaml::to_document;
use crate::shared::error::{PreviewError, Result};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

/// Build every manifest of the preview, in output order
pub fn render_manifests(config: &PreviewConfig, slug: &str) -> Result<Vec<Manifest>> {
    let mut manifests = Vec::with_capacity(2 + config.infra.len() + config.services.len());

    manifests.push(Manifest::project(ProjectBuilder::new(slug).build()));
    manifests.push(Manifest::namespace(NamespaceBuilder::new(slug).build()));

    for infra in &config.infra {
        let app = InfraApplicationBuilder::new(slug, infra).build()?;
        manifests.push(Manifest::application(&infra.name, app));
    }

    for service in &config.services {
        let app =
            ServiceApplicationBuilder::new(slug, &config.repo_url, &config.charts_dir, service)
                .build();
        manifests.push(Manifest::application(&service.name, app));
    }

    Ok(manifests)
}

/// Render the preview as a stream of YAML documents
pub fn generate(config: &PreviewConfig, slug: &str) -> Result<String> {
    let manifests = render_manifests(config, slug)?;

    let mut out = String::new();
    for manifest in &manifests {
        let document = render_document(
            manifest.kind,
            manifest.service.as_deref(),
            &manifest.resource,
        )?;
        debug!(
            "Rendered {} {}",
            manifest.kind,
            manifest.name().unwrap_or_default()
        );
        out.push_str(&document);
    }

    info!(
        "Generated {} manifests for preview '{}'",
        manifests.len(),
        slug
    );
    Ok(out)
}

fn render_document<T>(
    kind: ManifestKind,
    service: Option<&str>,
    value: &T,
) -> Result<String>
where
    T: Serialize + ?Sized,
{
    to_document(value).map_err(|e| PreviewError::template(kind, service, e))
}

/// Render the preview as a single Kubernetes `List` in JSON
pub fn generate_json(config: &PreviewConfig, slug: &str) -> Result<String> {
    let items = render_manifests(config, slug)?
        .iter()
        .map(|manifest| serde_json::to_value(&manifest.resource))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let list = json!({
        "apiVersion": "v1",
        "kind": "List",
        "items": items,
    });
    Ok(serde_json::to_string_pretty(&list)?)
}

/// What a generation call would deploy for one service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePlan {
    pub application: String,
    pub service: String,
    pub revision: Revision,
    pub parameters: Vec<HelmParameter>,
}

/// Revision decisions for every service, without rendering anything
pub fn plan(config: &PreviewConfig, slug: &str) -> Vec<ServicePlan> {
    config
        .services
        .iter()
        .map(|service| {
            let revision = Revision::for_service(service);
            ServicePlan {
                application: application_name(slug, &service.name),
                service: service.name.clone(),
                parameters: service_parameters(service, &revision, slug),
                revision,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::ServiceSpec;

    fn config(services: Vec<ServiceSpec>) -> PreviewConfig {
        PreviewConfig {
            repo_url: "https://git.example.com/previews.git".to_string(),
            services,
            ..Default::default()
        }
    }

    #[test]
    fn test_manifest_order() {
        let conf = config(vec![ServiceSpec::new("b"), ServiceSpec::new("a")]);
        let manifests = render_manifests(&conf, "s").unwrap();

        let kinds: Vec<_> = manifests.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ManifestKind::AppProject,
                ManifestKind::Namespace,
                ManifestKind::Application,
                ManifestKind::Application,
            ]
        );
        let names: Vec<_> = manifests.iter().filter_map(|m| m.name()).collect();
        assert_eq!(names, vec!["s", "s", "s-b", "s-a"]);
        assert_eq!(manifests[2].service.as_deref(), Some("b"));
    }

    #[test]
    fn test_generate_documents() {
        let conf = config(vec![ServiceSpec::new("api").with_image_tag("sha123")]);
        let out = generate(&conf, "svc-only").unwrap();

        assert!(out.starts_with("---\n"));
        assert_eq!(out.matches("---\n").count(), 3);
        assert!(out.contains("kind: AppProject"));
        assert!(out.contains("kind: Namespace"));
        assert!(out.contains("name: svc-only-api"));
        assert!(out.contains("targetRevision: sha123"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let conf = config(vec![
            ServiceSpec::new("backend-1"),
            ServiceSpec::new("front").with_image_tag("v2"),
        ]);
        assert_eq!(
            generate(&conf, "stable").unwrap(),
            generate(&conf, "stable").unwrap()
        );
    }

    #[test]
    fn test_generate_json_list() {
        let conf = config(vec![ServiceSpec::new("front")]);
        let out = generate_json(&conf, "my-feature").unwrap();
        let list: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(list["kind"], "List");
        let items = list["items"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1]["kind"], "Namespace");
        assert_eq!(items[2]["spec"]["source"]["targetRevision"], "main");
    }

    #[test]
    fn test_plan() {
        let conf = config(vec![
            ServiceSpec::new("backend-1").with_image_tag("abc123"),
            ServiceSpec::new("front"),
        ]);
        let plans = plan(&conf, "my-feature");

        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].application, "my-feature-backend-1");
        assert_eq!(plans[0].revision, Revision::Pinned("abc123".to_string()));
        assert_eq!(plans[0].parameters.len(), 2);
        assert_eq!(plans[1].revision, Revision::TrackMain);
        assert_eq!(plans[1].parameters.len(), 1);
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            Err(serde::ser::Error::custom("value cannot be rendered"))
        }
    }

    #[test]
    fn test_render_document_failure_names_manifest() {
        let err = render_document(ManifestKind::Application, Some("api"), &Unserializable)
            .unwrap_err();

        match &err {
            PreviewError::Template { target, .. } => {
                assert_eq!(target.kind, ManifestKind::Application);
                assert_eq!(target.service.as_deref(), Some("api"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().contains("value cannot be rendered"));
    }

    #[test]
    fn test_render_document_success() {
        let doc = render_document(ManifestKind::Namespace, None, &vec!["a"]).unwrap();
        assert_eq!(doc, "---\n- a\n");
    }
}
