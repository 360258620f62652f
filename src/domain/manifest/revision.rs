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

use crate::domain::config::ServiceSpec;
use crate::infrastructure::constants::{APP_REVISION_PLACEHOLDER, MAIN_REVISION};
use tracing::warn;

/// Which revision a service Application deploys
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    /// A fixed tag that never moves on its own
    Pinned(String),
    /// Follow `main`, with the image tag resolved by ArgoCD at sync time
    TrackMain,
}

impl Revision {
    pub fn for_service(service: &ServiceSpec) -> Self {
        if service.image_tag.as_deref() == Some("") {
            warn!(
                "Service '{}' has an empty image_tag, tracking {}",
                service.name, MAIN_REVISION
            );
        }

        match service.pinned_tag() {
            Some(tag) => Revision::Pinned(tag.to_string()),
            None => Revision::TrackMain,
        }
    }

    pub fn is_pinned(&self) -> bool {
        matches!(self, Revision::Pinned(_))
    }

    /// Value for the Application's `targetRevision`
    pub fn target_revision(&self) -> &str {
        match self {
            Revision::Pinned(tag) => tag,
            Revision::TrackMain => MAIN_REVISION,
        }
    }

    /// Value for the image tag override parameter
    pub fn image_tag_value(&self) -> &str {
        match self {
            Revision::Pinned(tag) => tag,
            Revision::TrackMain => APP_REVISION_PLACEHOLDER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_revision() {
        let revision = Revision::for_service(&ServiceSpec::new("api").with_image_tag("sha123"));

        assert_eq!(revision, Revision::Pinned("sha123".to_string()));
        assert!(revision.is_pinned());
        assert_eq!(revision.target_revision(), "sha123");
        assert_eq!(revision.image_tag_value(), "sha123");
    }

    #[test]
    fn test_track_main_revision() {
        let revision = Revision::for_service(&ServiceSpec::new("front"));

        assert_eq!(revision, Revision::TrackMain);
        assert!(!revision.is_pinned());
        assert_eq!(revision.target_revision(), "main");
        assert_eq!(revision.image_tag_value(), "$ARGOCD_APP_REVISION");
    }

    #[test]
    fn test_empty_tag_tracks_main() {
        let revision = Revision::for_service(&ServiceSpec::new("front").with_image_tag(""));
        assert_eq!(revision, Revision::TrackMain);
    }
}
