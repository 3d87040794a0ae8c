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

use crate::domain::config::merge::{MergeConf, OutputFormat, SuffixKind};
use crate::shared::error::{MergeError, Result};
use std::collections::HashMap;

/// Parse dynamic configuration properties from -D key=value format
pub fn parse_dynamic_configs(configs: &[String]) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();

    for config in configs {
        let Some((key, value)) = config.split_once('=') else {
            return Err(MergeError::config_error(format!(
                "Invalid config format: '{}'. Expected 'key=value'",
                config
            )));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(MergeError::config_error(format!(
                "Empty key in config: '{}'",
                config
            )));
        }

        map.insert(key.to_string(), value.trim().to_string());
    }

    Ok(map)
}

/// Unparsable values leave the previous setting in place.
pub fn apply_to_merge_conf(configs: &HashMap<String, String>, conf: &mut MergeConf) {
    if let Some(strategy) = configs.get("merge.suffix-strategy") {
        if let Ok(kind) = strategy.parse::<SuffixKind>() {
            conf.merge.suffix_strategy = kind;
        }
    }

    if let Some(length_str) = configs.get("merge.suffix-length") {
        if let Ok(length) = length_str.parse::<usize>() {
            conf.merge.suffix_length = length;
        }
    }

    if let Some(separator) = configs.get("merge.suffix-separator") {
        conf.merge.suffix_separator = separator.clone();
    }

    if let Some(format) = configs.get("output.format") {
        if let Ok(format) = format.parse::<OutputFormat>() {
            conf.output.format = format;
        }
    }

    if let Some(name) = configs.get("deployment.name") {
        conf.deployment.name = Some(name.clone());
    }

    if let Some(namespace) = configs.get("deployment.namespace") {
        conf.deployment.namespace = Some(namespace.clone());
    }

    if let Some(replicas_str) = configs.get("deployment.replicas") {
        if let Ok(replicas) = replicas_str.parse::<u32>() {
            conf.deployment.replicas = replicas;
        }
    }
}
