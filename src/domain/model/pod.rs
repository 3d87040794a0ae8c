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

use super::entry::{AdditionalProperties, Container, SecretReference, Volume};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata keys that are modeled fields and never valid as additional
/// properties.
pub const RESERVED_METADATA_KEYS: [&str; 3] = ["name", "labels", "annotations"];

/// Spec keys that are modeled fields and never valid as additional
/// properties.
pub const RESERVED_SPEC_KEYS: [&str; 4] =
    ["containers", "initContainers", "volumes", "imagePullSecrets"];

/// One caller-supplied pod definition to be merged with others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodDescriptor {
    #[serde(default)]
    pub metadata: PodMetadata,
    #[serde(default)]
    pub spec: PodSpecFragment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodMetadata {
    /// Accepted on input, never produced by a merge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodSpecFragment {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub containers: Vec<Container>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub init_containers: Vec<Container>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<Volume>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_pull_secrets: Vec<SecretReference>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl PodDescriptor {
    pub fn new(metadata: PodMetadata, spec: PodSpecFragment) -> Self {
        Self { metadata, spec }
    }

    pub fn builder() -> PodDescriptorBuilder {
        PodDescriptorBuilder::new()
    }
}

#[derive(Debug, Default)]
pub struct PodDescriptorBuilder {
    metadata: PodMetadata,
    spec: PodSpecFragment,
}

impl PodDescriptorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.metadata.name = Some(name.into());
        self
    }

    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.labels.insert(key.into(), value.into());
        self
    }

    pub fn annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.annotations.insert(key.into(), value.into());
        self
    }

    pub fn metadata_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.additional_properties.insert(key.into(), value);
        self
    }

    pub fn container(mut self, container: Container) -> Self {
        self.spec.containers.push(container);
        self
    }

    pub fn init_container(mut self, container: Container) -> Self {
        self.spec.init_containers.push(container);
        self
    }

    pub fn volume(mut self, volume: Volume) -> Self {
        self.spec.volumes.push(volume);
        self
    }

    pub fn image_pull_secret(mut self, name: impl Into<String>) -> Self {
        self.spec.image_pull_secrets.push(SecretReference::new(name));
        self
    }

    pub fn spec_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.spec.additional_properties.insert(key.into(), value);
        self
    }

    pub fn build(self) -> PodDescriptor {
        PodDescriptor {
            metadata: self.metadata,
            spec: self.spec,
        }
    }
}
