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

use crate::domain::model::{MergedWorkload, PodMetadata, PodSpecFragment, PodTemplate};
use tracing::warn;

/// Builds the pod template and derives the selector as an exact copy of the
/// merged labels, so the selector is always a subset of the template labels.
pub fn assemble(metadata: PodMetadata, spec: PodSpecFragment) -> MergedWorkload {
    let selector = metadata.labels.clone();
    if selector.is_empty() {
        warn!("Merged pods carry no labels, the derived selector is empty");
    }

    MergedWorkload {
        selector,
        pod_template: PodTemplate {
            metadata: PodMetadata {
                name: None,
                ..metadata
            },
            spec,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_selector_copies_labels() {
        let metadata = PodMetadata {
            labels: BTreeMap::from([
                ("app".to_string(), "web".to_string()),
                ("tier".to_string(), "front".to_string()),
            ]),
            ..Default::default()
        };

        let workload = assemble(metadata, PodSpecFragment::default());
        assert_eq!(workload.selector, *workload.labels());
        assert!(workload.selector_matches_labels());
    }

    #[test]
    fn test_empty_labels_give_empty_selector() {
        let workload = assemble(PodMetadata::default(), PodSpecFragment::default());
        assert!(workload.selector.is_empty());
    }

    #[test]
    fn test_template_has_no_name() {
        let metadata = PodMetadata {
            name: Some("leftover".to_string()),
            ..Default::default()
        };
        let workload = assemble(metadata, PodSpecFragment::default());
        assert!(workload.pod_template.metadata.name.is_none());
    }
}
