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

use super::revision::Revision;
use crate::domain::config::{HelmParameter, ServiceSpec};
use crate::infrastructure::constants::{DATABASE_SERVICE, PARAM_DATABASE_NAME, PARAM_IMAGE_TAG};
use tracing::warn;

/// Parameters computed by the generator; config cannot set them.
const RESERVED_PARAMETERS: &[&str] = &[PARAM_IMAGE_TAG, PARAM_DATABASE_NAME];

/// Name of the Application deploying `component` in preview `slug`
pub fn application_name(slug: &str, component: &str) -> String {
    format!("{}-{}", slug, component)
}

/// Only the exact service name gets a per-preview database.
pub fn requires_database_name(service_name: &str) -> bool {
    service_name == DATABASE_SERVICE
}

pub fn database_name(slug: &str) -> String {
    format!("{}-{}", DATABASE_SERVICE, slug)
}

/// Helm parameters for a service Application, in emission order:
/// image tag, database name when applicable, then the service's own extras.
///
/// Extras named like a reserved parameter are dropped.
pub fn service_parameters(
    service: &ServiceSpec,
    revision: &Revision,
    slug: &str,
) -> Vec<HelmParameter> {
    let mut parameters = Vec::with_capacity(2 + service.extra_parameters.len());
    parameters.push(HelmParameter::new(
        PARAM_IMAGE_TAG,
        revision.image_tag_value(),
    ));

    if requires_database_name(&service.name) {
        parameters.push(HelmParameter::new(PARAM_DATABASE_NAME, database_name(slug)));
    }

    for extra in &service.extra_parameters {
        if is_reserved(&extra.name) {
            warn!(
                "Service '{}' sets reserved parameter '{}', ignoring it",
                service.name, extra.name
            );
            continue;
        }
        parameters.push(extra.clone());
    }
    parameters
}

pub fn is_reserved(parameter_name: &str) -> bool {
    RESERVED_PARAMETERS.contains(&parameter_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_name() {
        assert_eq!(application_name("my-feature", "api"), "my-feature-api");
    }

    #[test]
    fn test_database_service_exact_match_only() {
        assert!(requires_database_name("backend-1"));
        assert!(!requires_database_name("backend-10"));
        assert!(!requires_database_name("my-backend-1"));
        assert!(!requires_database_name("Backend-1"));
        assert!(!requires_database_name("front"));
    }

    #[test]
    fn test_backend_parameters() {
        let service = ServiceSpec::new("backend-1").with_image_tag("abc123");
        let revision = Revision::for_service(&service);

        assert_eq!(
            service_parameters(&service, &revision, "my-feature"),
            vec![
                HelmParameter::new("image.tag", "abc123"),
                HelmParameter::new("database.name", "backend-1-my-feature"),
            ]
        );
    }

    #[test]
    fn test_extra_parameters_follow_derived_ones() {
        let service = ServiceSpec::new("worker")
            .with_parameter("replicas", "2")
            .with_parameter("queue", "jobs");
        let revision = Revision::for_service(&service);

        assert_eq!(
            service_parameters(&service, &revision, "s"),
            vec![
                HelmParameter::new("image.tag", "$ARGOCD_APP_REVISION"),
                HelmParameter::new("replicas", "2"),
                HelmParameter::new("queue", "jobs"),
            ]
        );
    }

    #[test]
    fn test_reserved_extras_are_dropped() {
        let service = ServiceSpec::new("front")
            .with_parameter("database.name", "x")
            .with_parameter("image.tag", "evil")
            .with_parameter("ingress.host", "front.preview");
        let revision = Revision::for_service(&service);

        assert_eq!(
            service_parameters(&service, &revision, "s"),
            vec![
                HelmParameter::new("image.tag", "$ARGOCD_APP_REVISION"),
                HelmParameter::new("ingress.host", "front.preview"),
            ]
        );
    }

    #[test]
    fn test_backend_keeps_derived_database_name() {
        let service = ServiceSpec::new("backend-1")
            .with_image_tag("abc123")
            .with_parameter("database.name", "shared");
        let revision = Revision::for_service(&service);

        assert_eq!(
            service_parameters(&service, &revision, "my-feature"),
            vec![
                HelmParameter::new("image.tag", "abc123"),
                HelmParameter::new("database.name", "backend-1-my-feature"),
            ]
        );
    }

    #[test]
    fn test_is_reserved() {
        assert!(is_reserved("image.tag"));
        assert!(is_reserved("database.name"));
        assert!(!is_reserved("image.repository"));
    }
}
