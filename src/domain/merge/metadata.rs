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

use crate::domain::model::{
    AdditionalProperties, PodDescriptor, PodMetadata, RESERVED_METADATA_KEYS,
};
use std::collections::BTreeMap;
use tracing::warn;

/// Unions labels, annotations and additional properties of all descriptors in
/// input order. Later descriptors win on key collision. Descriptor names are
/// dropped.
pub fn merge_metadata(descriptors: &[PodDescriptor]) -> PodMetadata {
    PodMetadata {
        name: None,
        labels: union_maps(descriptors.iter().map(|d| &d.metadata.labels)),
        annotations: union_maps(descriptors.iter().map(|d| &d.metadata.annotations)),
        additional_properties: union_properties(
            descriptors.iter().map(|d| &d.metadata.additional_properties),
            &RESERVED_METADATA_KEYS,
        ),
    }
}

/// Unions open property maps, later maps winning. Keys naming a modeled field
/// are dropped so they cannot shadow it on output.
pub(crate) fn union_properties<'a>(
    maps: impl IntoIterator<Item = &'a AdditionalProperties>,
    reserved: &[&str],
) -> AdditionalProperties {
    let mut merged = union_maps(maps);
    merged.retain(|key, _| {
        let keep = !reserved.contains(&key.as_str());
        if !keep {
            warn!(key = %key, "Ignored additional property naming a modeled field");
        }
        keep
    });
    merged
}

fn union_maps<'a, K, V>(maps: impl IntoIterator<Item = &'a BTreeMap<K, V>>) -> BTreeMap<K, V>
where
    K: Ord + Clone + 'a,
    V: Clone + 'a,
{
    let mut merged = BTreeMap::new();
    for map in maps {
        for (k, v) in map {
            merged.insert(k.clone(), v.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_labels_from_all_descriptors() {
        let descriptors = vec![
            PodDescriptor::builder().label("ann1", "v1").build(),
            PodDescriptor::builder().label("ann2", "v2").build(),
        ];

        let metadata = merge_metadata(&descriptors);
        assert_eq!(metadata.labels.get("ann1").map(String::as_str), Some("v1"));
        assert_eq!(metadata.labels.get("ann2").map(String::as_str), Some("v2"));
    }

    #[test]
    fn test_later_descriptor_wins() {
        let descriptors = vec![
            PodDescriptor::builder()
                .label("app", "first")
                .annotation("owner", "a")
                .metadata_property("generateName", json!("first-"))
                .build(),
            PodDescriptor::builder()
                .label("app", "second")
                .annotation("owner", "b")
                .metadata_property("generateName", json!("second-"))
                .build(),
        ];

        let metadata = merge_metadata(&descriptors);
        assert_eq!(metadata.labels["app"], "second");
        assert_eq!(metadata.annotations["owner"], "b");
        assert_eq!(
            metadata.additional_properties["generateName"],
            json!("second-")
        );
    }

    #[test]
    fn test_descriptor_names_are_discarded() {
        let descriptors = vec![PodDescriptor::builder().name("runtime").build()];
        assert!(merge_metadata(&descriptors).name.is_none());
    }

    #[test]
    fn test_reserved_metadata_properties_are_dropped() {
        let descriptors = vec![PodDescriptor::builder()
            .label("app", "web")
            .metadata_property("name", json!("sneaky"))
            .metadata_property("labels", json!({"other": "x"}))
            .metadata_property("namespace", json!("apps"))
            .build()];

        let metadata = merge_metadata(&descriptors);
        assert!(metadata.name.is_none());
        assert!(!metadata.additional_properties.contains_key("name"));
        assert!(!metadata.additional_properties.contains_key("labels"));
        assert_eq!(metadata.additional_properties["namespace"], json!("apps"));

        let value = serde_json::to_value(&metadata).unwrap();
        assert!(value.get("name").is_none());
        assert_eq!(value["labels"], json!({"app": "web"}));
    }
}
