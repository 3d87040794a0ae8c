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

use crate::domain::config::DeploymentConf;
use crate::domain::model::MergedWorkload;
use crate::infrastructure::constants::DEFAULT_REPLICAS;
use crate::shared::error::{MergeError, Result};
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};

/// Wraps a merged workload into an `apps/v1` Deployment. The result is a JSON
/// value so that properties unknown to the Kubernetes schema survive.
#[derive(Debug, Clone)]
pub struct DeploymentBuilder {
    name: String,
    namespace: Option<String>,
    replicas: u32,
}

impl DeploymentBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            replicas: DEFAULT_REPLICAS,
        }
    }

    /// `None` when no deployment name is configured.
    pub fn from_conf(conf: &DeploymentConf) -> Option<Self> {
        conf.name.as_ref().map(|name| Self {
            name: name.clone(),
            namespace: conf.namespace.clone(),
            replicas: conf.replicas,
        })
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_replicas(mut self, replicas: u32) -> Self {
        self.replicas = replicas;
        self
    }

    pub fn build(&self, workload: &MergedWorkload) -> Result<serde_json::Value> {
        if workload.selector.is_empty() {
            return Err(MergeError::ValidationError(format!(
                "Deployment '{}' needs a non-empty selector, but the merged pods carry no labels",
                self.name
            )));
        }

        let replicas = i32::try_from(self.replicas).map_err(|_| {
            MergeError::ValidationError(format!("replicas out of range: {}", self.replicas))
        })?;

        let deployment = Deployment {
            metadata: ObjectMeta {
                name: Some(self.name.clone()),
                namespace: self.namespace.clone(),
                labels: Some(workload.selector.clone()),
                ..Default::default()
            },
            spec: Some(DeploymentSpec {
                replicas: Some(replicas),
                selector: LabelSelector {
                    match_labels: Some(workload.selector.clone()),
                    ..Default::default()
                },
                ..Default::default()
            }),
            ..Default::default()
        };

        let mut value = serde_json::to_value(&deployment)?;
        let template = serde_json::to_value(&workload.pod_template)?;
        if let Some(spec) = value.get_mut("spec").and_then(|s| s.as_object_mut()) {
            spec.insert("template".to_string(), template);
        }

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{PodMetadata, PodTemplate};
    use crate::infrastructure::constants::{DEPLOYMENT_API_VERSION, DEPLOYMENT_KIND};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn workload_with_labels(labels: &[(&str, &str)]) -> MergedWorkload {
        let labels: BTreeMap<String, String> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut metadata = PodMetadata {
            labels: labels.clone(),
            ..Default::default()
        };
        metadata
            .additional_properties
            .insert("x-custom".to_string(), json!({"keep": true}));

        MergedWorkload {
            selector: labels,
            pod_template: PodTemplate {
                metadata,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_build_deployment() {
        let workload = workload_with_labels(&[("app", "env")]);
        let value = DeploymentBuilder::new("env")
            .with_namespace("dev")
            .with_replicas(2)
            .build(&workload)
            .unwrap();

        assert_eq!(value["apiVersion"], json!(DEPLOYMENT_API_VERSION));
        assert_eq!(value["kind"], json!(DEPLOYMENT_KIND));
        assert_eq!(value["metadata"]["name"], json!("env"));
        assert_eq!(value["metadata"]["namespace"], json!("dev"));
        assert_eq!(value["spec"]["replicas"], json!(2));
        assert_eq!(value["spec"]["selector"]["matchLabels"]["app"], json!("env"));
        assert_eq!(
            value["spec"]["template"]["metadata"]["labels"]["app"],
            json!("env")
        );
        assert_eq!(
            value["spec"]["template"]["metadata"]["x-custom"],
            json!({"keep": true})
        );
    }

    #[test]
    fn test_empty_selector_rejected() {
        let workload = workload_with_labels(&[]);
        let err = DeploymentBuilder::new("env").build(&workload).unwrap_err();
        assert!(matches!(err, MergeError::ValidationError(_)));
    }

    #[test]
    fn test_from_conf_requires_name() {
        assert!(DeploymentBuilder::from_conf(&DeploymentConf::default()).is_none());

        let conf = DeploymentConf {
            name: Some("env".to_string()),
            namespace: None,
            replicas: 4,
        };
        let builder = DeploymentBuilder::from_conf(&conf).unwrap();
        assert_eq!(builder.replicas, 4);
    }
}
