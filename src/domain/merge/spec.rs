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

use super::metadata::union_properties;
use super::names::{resolve_names, Rename, SuffixStrategy};
use super::secrets::dedupe_secrets;
use super::volumes::validate_volume_names;
use crate::domain::model::{Named, PodDescriptor, PodSpecFragment, RESERVED_SPEC_KEYS};
use crate::shared::error::Result;

#[derive(Debug, Clone)]
pub struct MergedSpec {
    pub spec: PodSpecFragment,
    pub container_renames: Vec<Rename>,
    pub init_container_renames: Vec<Rename>,
    pub dropped_secrets: Vec<String>,
}

/// Concatenates the spec fragments of all descriptors.
///
/// Containers and init containers are renamed on collision, each list with
/// its own used-name set. Duplicate volume names abort the merge. Image pull
/// secrets are deduplicated by name and additional properties are unioned
/// with later descriptors winning.
pub fn merge_specs(descriptors: &[PodDescriptor], strategy: &SuffixStrategy) -> Result<MergedSpec> {
    let containers = resolve_names(
        concat(descriptors, |spec| &spec.containers),
        strategy.source().as_mut(),
    );

    let init_containers = resolve_names(
        concat(descriptors, |spec| &spec.init_containers),
        strategy.source().as_mut(),
    );

    let volumes = concat(descriptors, |spec| &spec.volumes);
    validate_volume_names(&volumes)?;

    let secrets = dedupe_secrets(concat(descriptors, |spec| &spec.image_pull_secrets));

    let additional_properties =
        union_properties(
            descriptors.iter().map(|d| &d.spec.additional_properties),
            &RESERVED_SPEC_KEYS,
        );

    Ok(MergedSpec {
        spec: PodSpecFragment {
            containers: containers.items,
            init_containers: init_containers.items,
            volumes,
            image_pull_secrets: secrets.secrets,
            additional_properties,
        },
        container_renames: containers.renames,
        init_container_renames: init_containers.renames,
        dropped_secrets: secrets.dropped,
    })
}

fn concat<T, F>(descriptors: &[PodDescriptor], field: F) -> Vec<T>
where
    T: Named + Clone,
    F: Fn(&PodSpecFragment) -> &Vec<T>,
{
    descriptors
        .iter()
        .flat_map(|d| field(&d.spec).iter().cloned().map(Named::normalized))
        .collect()
}
