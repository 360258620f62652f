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

use crate::domain::manifest::SyncWave;
use crate::infrastructure::constants::{
    ANNOTATION_SYNC_WAVE, LABEL_COMPONENT, LABEL_MANAGED_BY, LABEL_MANAGED_BY_VALUE,
    LABEL_PREVIEW,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

/// Common metadata for every resource of a preview environment
pub trait PreviewResourceBuilder {
    fn slug(&self) -> &str;

    fn component_name(&self) -> &'static str;

    fn sync_wave(&self) -> SyncWave;

    fn get_labels(&self) -> BTreeMap<String, String> {
        let mut labels = BTreeMap::new();
        labels.insert(LABEL_PREVIEW.to_string(), self.slug().to_string());
        labels.insert(LABEL_COMPONENT.to_string(), self.component_name().to_string());
        labels.insert(
            LABEL_MANAGED_BY.to_string(),
            LABEL_MANAGED_BY_VALUE.to_string(),
        );
        labels
    }

    fn get_annotations(&self) -> BTreeMap<String, String> {
        let mut annotations = BTreeMap::new();
        annotations.insert(
            ANNOTATION_SYNC_WAVE.to_string(),
            self.sync_wave().to_string(),
        );
        annotations
    }

    fn build_metadata(&self, name: String, namespace: Option<&str>) -> ObjectMeta {
        ObjectMeta {
            name: Some(name),
            namespace: namespace.map(str::to_string),
            labels: Some(self.get_labels()),
            annotations: Some(self.get_annotations()),
            ..Default::default()
        }
    }
}
