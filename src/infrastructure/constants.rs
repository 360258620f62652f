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

/// CLI defaults
pub const DEFAULT_CONFIG_FILE: &str = "apps.yaml";
pub const SOURCE_PATH_ENV: &str = "ARGOCD_APP_SOURCE_PATH";
pub const SOURCE_REPO_URL_ENV: &str = "ARGOCD_APP_SOURCE_REPO_URL";

/// Configuration defaults
pub const DEFAULT_CHARTS_DIR: &str = "charts";

/// ArgoCD API
pub const ARGOCD_API_VERSION: &str = "argoproj.io/v1alpha1";
pub const KIND_APP_PROJECT: &str = "AppProject";
pub const KIND_APPLICATION: &str = "Application";
pub const ARGOCD_NAMESPACE: &str = "argocd";
pub const IN_CLUSTER_SERVER: &str = "https://kubernetes.default.svc";
pub const RESOURCES_FINALIZER: &str = "resources-finalizer.argocd.argoproj.io";

/// Annotations
pub const ANNOTATION_SYNC_WAVE: &str = "argocd.argoproj.io/sync-wave";

/// Revisions
pub const MAIN_REVISION: &str = "main";
pub const APP_REVISION_PLACEHOLDER: &str = "$ARGOCD_APP_REVISION";

/// Helm parameters
pub const PARAM_IMAGE_TAG: &str = "image.tag";
pub const PARAM_DATABASE_NAME: &str = "database.name";

/// The one service whose database is provisioned per preview
pub const DATABASE_SERVICE: &str = "backend-1";

/// Resource labels
pub const LABEL_PREVIEW: &str = "preview/slug";
pub const LABEL_COMPONENT: &str = "app.kubernetes.io/component";
pub const LABEL_MANAGED_BY: &str = "app.kubernetes.io/managed-by";
pub const LABEL_MANAGED_BY_VALUE: &str = "preview-gen";

/// Components
pub const COMPONENT_PROJECT: &str = "project";
pub const COMPONENT_NAMESPACE: &str = "namespace";
pub const COMPONENT_INFRA: &str = "infra";
pub const COMPONENT_SERVICE: &str = "service";

/// Sync policy
pub const SYNC_RETRY_LIMIT: i64 = 5;
