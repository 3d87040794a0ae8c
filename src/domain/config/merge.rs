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

//! Merge tool configuration loaded from TOML

use crate::domain::merge::SuffixStrategy;
use crate::infrastructure::constants::{
    CONF_FILE_ENV, DEFAULT_REPLICAS, DEFAULT_SUFFIX_LENGTH, DEFAULT_SUFFIX_SEPARATOR,
    MAX_SUFFIX_LENGTH,
};
use crate::shared::error::{MergeError, Result};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConf {
    pub merge: NamingConf,
    pub output: OutputConf,
    pub deployment: DeploymentConf,
}

impl MergeConf {
    /// Load configuration from TOML file
    pub fn from_file<T: AsRef<str>>(path: T) -> Result<Self> {
        let content = read_to_string(path.as_ref()).map_err(|e| {
            MergeError::config_error(format!(
                "Failed to read config file {}: {}",
                path.as_ref(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            MergeError::config_error(format!(
                "Failed to parse config file {}: {}",
                path.as_ref(),
                e
            ))
        })
    }

    /// Explicit path first, then the environment variable, then defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(path) = path {
            Self::from_file(path)
        } else if let Ok(env_path) = std::env::var(CONF_FILE_ENV) {
            Self::from_file(env_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        let length = self.merge.suffix_length;
        if length == 0 || length > MAX_SUFFIX_LENGTH {
            return Err(MergeError::validation_error(format!(
                "merge.suffix_length must be between 1 and {}, got {}",
                MAX_SUFFIX_LENGTH, length
            )));
        }

        if self.deployment.replicas == 0 {
            return Err(MergeError::validation_error(
                "deployment.replicas must be > 0",
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConf {
    pub suffix_strategy: SuffixKind,
    pub suffix_length: usize,
    pub suffix_separator: String,
}

impl Default for NamingConf {
    fn default() -> Self {
        Self {
            suffix_strategy: SuffixKind::Random,
            suffix_length: DEFAULT_SUFFIX_LENGTH,
            suffix_separator: DEFAULT_SUFFIX_SEPARATOR.to_string(),
        }
    }
}

impl NamingConf {
    pub fn strategy(&self) -> SuffixStrategy {
        match self.suffix_strategy {
            SuffixKind::Random => SuffixStrategy::Random {
                length: self.suffix_length,
                separator: self.suffix_separator.clone(),
            },
            SuffixKind::Sequential => SuffixStrategy::Sequential {
                separator: self.suffix_separator.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuffixKind {
    #[default]
    Random,
    Sequential,
}

impl std::str::FromStr for SuffixKind {
    type Err = MergeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "random" => Ok(SuffixKind::Random),
            "sequential" => Ok(SuffixKind::Sequential),
            _ => Err(MergeError::ConfigError(format!(
                "Invalid suffix strategy: {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConf {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = MergeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "yaml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(MergeError::ConfigError(format!(
                "Invalid output format: {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentConf {
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub replicas: u32,
}

impl Default for DeploymentConf {
    fn default() -> Self {
        Self {
            name: None,
            namespace: None,
            replicas: DEFAULT_REPLICAS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let conf = MergeConf::default();
        assert_eq!(conf.merge.suffix_strategy, SuffixKind::Random);
        assert_eq!(conf.merge.suffix_length, DEFAULT_SUFFIX_LENGTH);
        assert_eq!(conf.output.format, OutputFormat::Yaml);
        assert_eq!(conf.deployment.replicas, 1);
        assert!(conf.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let conf: MergeConf = toml::from_str(
            r#"
[merge]
suffix_strategy = "sequential"
suffix_separator = "--"

[deployment]
name = "env"
"#,
        )
        .unwrap();

        assert_eq!(
            conf.merge.strategy(),
            SuffixStrategy::Sequential {
                separator: "--".to_string()
            }
        );
        assert_eq!(conf.merge.suffix_length, DEFAULT_SUFFIX_LENGTH);
        assert_eq!(conf.deployment.name.as_deref(), Some("env"));
        assert_eq!(conf.deployment.replicas, 1);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut conf = MergeConf::default();
        conf.merge.suffix_length = 0;
        assert!(conf.validate().is_err());

        let mut conf = MergeConf::default();
        conf.merge.suffix_length = MAX_SUFFIX_LENGTH + 1;
        assert!(conf.validate().is_err());

        let mut conf = MergeConf::default();
        conf.deployment.replicas = 0;
        assert!(conf.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"json\"").unwrap();

        let conf = MergeConf::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(conf.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_from_missing_file() {
        let err = MergeConf::from_file("/nonexistent/podmerge.toml").unwrap_err();
        assert!(matches!(err, MergeError::ConfigError(_)));
    }

    #[test]
    fn test_malformed_file_names_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[merge\nsuffix-length = ").unwrap();
        let path = file.path().to_str().unwrap();

        let err = MergeConf::from_file(path).unwrap_err();
        assert!(matches!(err, MergeError::ConfigError(_)));
        assert!(err.to_string().contains(path));
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("sequential".parse::<SuffixKind>().unwrap(), SuffixKind::Sequential);
        assert!("counter".parse::<SuffixKind>().is_err());
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
