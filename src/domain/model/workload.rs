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

use super::pod::{PodMetadata, PodSpecFragment};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Template for one instance of the merged pod. Its metadata never carries a
/// name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodTemplate {
    pub metadata: PodMetadata,
    pub spec: PodSpecFragment,
}

/// Result of merging several descriptors: a pod template and the selector a
/// workload controller uses to find its pods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedWorkload {
    pub selector: BTreeMap<String, String>,
    pub pod_template: PodTemplate,
}

impl MergedWorkload {
    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.pod_template.metadata.labels
    }

    /// Every selector pair appears identically in the template labels.
    pub fn selector_matches_labels(&self) -> bool {
        self.selector
            .iter()
            .all(|(k, v)| self.labels().get(k) == Some(v))
    }
}
