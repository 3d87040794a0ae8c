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

//! Named pod entries: containers, volumes and image-pull-secret references.
//!
//! Only `name` is modeled. Every other field lands in `properties` and is
//! written back unchanged, including fields newer than the Kubernetes API
//! version this crate is built against.

use crate::shared::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Open map for fields this crate does not model. Entries are carried through
/// a merge verbatim.
pub type AdditionalProperties = BTreeMap<String, serde_json::Value>;

/// Key of the modeled name field.
pub const NAME_KEY: &str = "name";

/// Items identified by their `name` field.
pub trait Named {
    fn name(&self) -> &str;

    /// Returns the same item carrying `name`; every other field is untouched.
    fn with_name(self, name: String) -> Self;

    /// Drops a `name` entry from the open map so it cannot shadow the
    /// modeled field on output.
    fn normalized(self) -> Self;
}

macro_rules! named_entry {
    ($(#[$doc:meta])* $ty:ident, $k8s:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct $ty {
            pub name: String,
            #[serde(flatten)]
            pub properties: AdditionalProperties,
        }

        impl $ty {
            pub fn new(name: impl Into<String>) -> Self {
                Self {
                    name: name.into(),
                    properties: AdditionalProperties::new(),
                }
            }

            pub fn with_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
                self.properties.insert(key.into(), value);
                self
            }

            pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
                self.properties.get(key)
            }

            /// Converts the typed Kubernetes object, keeping every field it
            /// serializes.
            pub fn from_k8s(value: &$k8s) -> Result<Self> {
                Ok(serde_json::from_value(serde_json::to_value(value)?)?)
            }

            /// Converts to the typed Kubernetes object. Fields the typed
            /// object does not know are lost.
            pub fn to_k8s(&self) -> Result<$k8s> {
                Ok(serde_json::from_value(serde_json::to_value(self)?)?)
            }
        }

        impl Named for $ty {
            fn name(&self) -> &str {
                &self.name
            }

            fn with_name(self, name: String) -> Self {
                Self { name, ..self }
            }

            fn normalized(mut self) -> Self {
                self.properties.remove(NAME_KEY);
                self
            }
        }
    };
}

named_entry!(
    /// A container or init container.
    Container,
    k8s_openapi::api::core::v1::Container
);

named_entry!(
    /// A pod volume. Mounts refer to it by name.
    Volume,
    k8s_openapi::api::core::v1::Volume
);

named_entry!(
    /// Reference to an image-pull secret. Two references with the same name
    /// denote the same credential.
    SecretReference,
    k8s_openapi::api::core::v1::LocalObjectReference
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_round_trip() {
        let container: Container = serde_json::from_value(json!({
            "name": "c",
            "image": "x",
            "futureField": 42
        }))
        .unwrap();
        assert_eq!(container.property("futureField"), Some(&json!(42)));

        let value = serde_json::to_value(&container).unwrap();
        assert_eq!(value, json!({"name": "c", "image": "x", "futureField": 42}));
    }

    #[test]
    fn test_volume_with_unknown_source_keeps_source() {
        let volume: Volume = serde_json::from_value(json!({
            "name": "v",
            "image": {"reference": "foo"}
        }))
        .unwrap();

        let value = serde_json::to_value(&volume).unwrap();
        assert_eq!(value["image"]["reference"], json!("foo"));
    }

    #[test]
    fn test_with_name_keeps_payload() {
        let container = Container::new("app").with_property("image", json!("nginx:1.27"));

        let renamed = container.with_name("app-x1".to_string());
        assert_eq!(renamed.name, "app-x1");
        assert_eq!(renamed.property("image"), Some(&json!("nginx:1.27")));
    }

    #[test]
    fn test_normalized_drops_name_property() {
        let volume = Volume::new("data").with_property("name", json!("other"));

        let value = serde_json::to_value(volume.normalized()).unwrap();
        assert_eq!(value, json!({"name": "data"}));
    }

    #[test]
    fn test_k8s_conversion() {
        let typed = k8s_openapi::api::core::v1::Container {
            name: "web".to_string(),
            image: Some("nginx".to_string()),
            ..Default::default()
        };

        let container = Container::from_k8s(&typed).unwrap();
        assert_eq!(container.name, "web");
        assert_eq!(container.property("image"), Some(&json!("nginx")));
        assert_eq!(container.to_k8s().unwrap(), typed);
    }
}
