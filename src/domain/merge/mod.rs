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

//! Merge engine: combines pod descriptors into one workload.

pub mod assembler;
pub mod metadata;
pub mod names;
pub mod secrets;
pub mod spec;
pub mod volumes;

pub use self::assembler::assemble;
pub use self::metadata::merge_metadata;
pub use self::names::{
    resolve_names, RandomSuffix, Rename, Resolution, SequentialSuffix, SuffixSource,
    SuffixStrategy,
};
pub use self::secrets::{dedupe_secrets, Deduplicated};
pub use self::spec::{merge_specs, MergedSpec};
pub use self::volumes::validate_volume_names;

use crate::domain::config::MergeConf;
use crate::domain::model::{MergedWorkload, PodDescriptor};
use crate::shared::error::{MergeError, Result};
use tracing::info;

/// What a merge changed on the way: renamed containers and dropped
/// image-pull-secret duplicates.
#[derive(Debug, Clone)]
pub struct MergeReport {
    pub workload: MergedWorkload,
    pub container_renames: Vec<Rename>,
    pub init_container_renames: Vec<Rename>,
    pub dropped_secrets: Vec<String>,
}

impl MergeReport {
    pub fn has_changes(&self) -> bool {
        !self.container_renames.is_empty()
            || !self.init_container_renames.is_empty()
            || !self.dropped_secrets.is_empty()
    }
}

/// Merges pod descriptors. Holds only configuration; every call builds its
/// own working state, so one merger can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct PodMerger {
    strategy: SuffixStrategy,
}

impl PodMerger {
    pub fn new(strategy: SuffixStrategy) -> Self {
        Self { strategy }
    }

    pub fn from_conf(conf: &MergeConf) -> Self {
        Self::new(conf.merge.strategy())
    }

    pub fn strategy(&self) -> &SuffixStrategy {
        &self.strategy
    }

    pub fn merge(&self, descriptors: &[PodDescriptor]) -> Result<MergedWorkload> {
        self.merge_with_report(descriptors)
            .map(|report| report.workload)
    }

    pub fn merge_with_report(&self, descriptors: &[PodDescriptor]) -> Result<MergeReport> {
        if descriptors.is_empty() {
            return Err(MergeError::EmptyInput);
        }

        let metadata = merge_metadata(descriptors);
        let merged_spec = merge_specs(descriptors, &self.strategy)?;
        let workload = assemble(metadata, merged_spec.spec);

        info!(
            descriptors = descriptors.len(),
            containers = workload.pod_template.spec.containers.len(),
            init_containers = workload.pod_template.spec.init_containers.len(),
            volumes = workload.pod_template.spec.volumes.len(),
            renamed = merged_spec.container_renames.len() + merged_spec.init_container_renames.len(),
            "Merged pod descriptors"
        );

        Ok(MergeReport {
            workload,
            container_renames: merged_spec.container_renames,
            init_container_renames: merged_spec.init_container_renames,
            dropped_secrets: merged_spec.dropped_secrets,
        })
    }
}

/// Merges with the default configuration.
pub fn merge(descriptors: &[PodDescriptor]) -> Result<MergedWorkload> {
    PodMerger::default().merge(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Container, Volume};

    fn container(name: &str) -> Container {
        Container {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(merge(&[]), Err(MergeError::EmptyInput)));
    }

    #[test]
    fn test_report_lists_renames() {
        let merger = PodMerger::new(SuffixStrategy::Sequential {
            separator: "-".to_string(),
        });
        let descriptors = vec![
            PodDescriptor::builder()
                .label("app", "web")
                .container(container("c"))
                .build(),
            PodDescriptor::builder()
                .container(container("c"))
                .image_pull_secret("s")
                .image_pull_secret("s")
                .build(),
        ];

        let report = merger.merge_with_report(&descriptors).unwrap();
        assert!(report.has_changes());
        assert_eq!(report.container_renames[0].assigned, "c-1");
        assert_eq!(report.dropped_secrets, vec!["s".to_string()]);
        assert_eq!(report.workload.selector.get("app").map(String::as_str), Some("web"));
    }

    #[test]
    fn test_volume_failure_produces_no_report() {
        let descriptors = vec![
            PodDescriptor::builder()
                .volume(Volume {
                    name: "v".to_string(),
                    ..Default::default()
                })
                .build();
            2
        ];
        let err = PodMerger::default()
            .merge_with_report(&descriptors)
            .unwrap_err();
        assert_eq!(err.duplicate_volume_name(), Some("v"));
    }
}
