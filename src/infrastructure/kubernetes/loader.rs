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

use crate::domain::model::PodDescriptor;
use crate::shared::error::MergeError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Controller kinds whose pod definition lives under `spec.template`.
const TEMPLATED_KINDS: [&str; 5] = ["Deployment", "StatefulSet", "DaemonSet", "ReplicaSet", "Job"];

/// Loads every pod descriptor in a YAML file. Multiple documents separated by
/// `---` are supported; empty documents are skipped.
pub fn load_descriptors_from_file(file_path: &str) -> Result<Vec<PodDescriptor>, MergeError> {
    let path = resolve_descriptor_path(file_path)?;

    if !path.exists() {
        return Err(MergeError::ConfigError(format!(
            "Pod descriptor file does not exist: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| {
        MergeError::ConfigError(format!(
            "Failed to read pod descriptor file {}: {}",
            path.display(),
            e
        ))
    })?;

    let descriptors = parse_descriptors(&content).map_err(|e| {
        MergeError::ConfigError(format!(
            "Failed to parse pod descriptor file {}: {}",
            path.display(),
            e
        ))
    })?;

    if descriptors.is_empty() {
        return Err(MergeError::ConfigError(format!(
            "Pod descriptor file {} contains no documents",
            path.display()
        )));
    }

    debug!(file = %path.display(), count = descriptors.len(), "Loaded pod descriptors");
    Ok(descriptors)
}

/// Loads all files in order, concatenating their descriptors.
pub fn load_descriptors_from_files<S: AsRef<str>>(
    file_paths: &[S],
) -> Result<Vec<PodDescriptor>, MergeError> {
    let mut descriptors = Vec::new();
    for file_path in file_paths {
        descriptors.extend(load_descriptors_from_file(file_path.as_ref())?);
    }
    Ok(descriptors)
}

/// Parses YAML documents into descriptors. Pod manifests and bare
/// `{metadata, spec}` documents are taken as-is; workload controllers
/// contribute their `spec.template`.
pub fn parse_descriptors(content: &str) -> Result<Vec<PodDescriptor>, serde_yaml::Error> {
    let mut descriptors = Vec::new();

    for document in serde_yaml::Deserializer::from_str(content) {
        let value = serde_yaml::Value::deserialize(document)?;
        if value.is_null() {
            continue;
        }
        descriptors.push(serde_yaml::from_value(pod_section(value))?);
    }

    Ok(descriptors)
}

fn pod_section(value: serde_yaml::Value) -> serde_yaml::Value {
    let templated = value
        .get("kind")
        .and_then(|k| k.as_str())
        .is_some_and(|kind| TEMPLATED_KINDS.contains(&kind));

    if templated {
        if let Some(template) = value.get("spec").and_then(|s| s.get("template")) {
            return template.clone();
        }
    }
    value
}

pub fn resolve_descriptor_path(path: &str) -> Result<PathBuf, MergeError> {
    let path = Path::new(path);

    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        std::env::current_dir()
            .map_err(|e| MergeError::ConfigError(format!("Cannot get current directory: {}", e)))?
            .join(path)
            .canonicalize()
            .map_err(|e| {
                MergeError::ConfigError(format!(
                    "Cannot resolve pod descriptor path {}: {}",
                    path.display(),
                    e
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_pod_manifest() {
        let yaml = r#"
apiVersion: v1
kind: Pod
metadata:
  name: runtime
  labels:
    component: runtime
spec:
  containers:
    - name: runtime
      image: node:20
  volumes:
    - name: projects
      emptyDir: {}
"#;
        let descriptors = parse_descriptors(yaml).unwrap();
        assert_eq!(descriptors.len(), 1);

        let descriptor = &descriptors[0];
        assert_eq!(descriptor.metadata.labels["component"], "runtime");
        assert_eq!(
            descriptor.spec.containers[0].property("image"),
            Some(&serde_json::json!("node:20"))
        );
        assert_eq!(descriptor.spec.volumes[0].name, "projects");
        assert!(descriptor.spec.additional_properties.is_empty());
    }

    #[test]
    fn test_parse_multiple_documents() {
        let yaml = r#"
metadata:
  labels:
    a: "1"
spec:
  containers:
    - name: a
---
---
metadata:
  labels:
    b: "2"
spec:
  containers:
    - name: b
"#;
        let descriptors = parse_descriptors(yaml).unwrap();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[1].spec.containers[0].name, "b");
    }

    #[test]
    fn test_parse_deployment_uses_template() {
        let yaml = r#"
apiVersion: apps/v1
kind: Deployment
metadata:
  name: web
  labels:
    outer: "true"
spec:
  replicas: 2
  template:
    metadata:
      labels:
        app: web
    spec:
      containers:
        - name: web
      terminationGracePeriodSeconds: 5
"#;
        let descriptors = parse_descriptors(yaml).unwrap();
        assert_eq!(descriptors[0].metadata.labels.get("app").map(String::as_str), Some("web"));
        assert!(!descriptors[0].metadata.labels.contains_key("outer"));
        assert_eq!(
            descriptors[0].spec.additional_properties["terminationGracePeriodSeconds"],
            json!(5)
        );
    }

    #[test]
    fn test_parse_invalid_yaml() {
        assert!(parse_descriptors("spec: [unclosed").is_err());
    }

    #[test]
    fn test_absolute_path_preserved() {
        let path = resolve_descriptor_path("/tmp/pod.yaml").unwrap();
        assert_eq!(path, PathBuf::from("/tmp/pod.yaml"));
    }
}
