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

use thiserror::Error;
pub type Result<T> = std::result::Result<T, MergeError>;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Duplicate volume name: volume `{0}` is defined more than once across the merged pods")]
    DuplicateVolumeName(String),

    #[error("No pod descriptors to merge: at least one descriptor is required")]
    EmptyInput,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl MergeError {
    pub fn config_error(context: impl Into<String>) -> Self {
        Self::ConfigError(context.into())
    }

    pub fn validation_error(context: impl Into<String>) -> Self {
        Self::ValidationError(context.into())
    }

    pub fn duplicate_volume(name: impl Into<String>) -> Self {
        Self::DuplicateVolumeName(name.into())
    }

    /// Returns the offending volume name for a duplicate-volume failure.
    pub fn duplicate_volume_name(&self) -> Option<&str> {
        match self {
            Self::DuplicateVolumeName(name) => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_volume_message_quotes_name() {
        let err = MergeError::duplicate_volume("data");
        assert!(err.to_string().contains("`data`"));
        assert_eq!(err.duplicate_volume_name(), Some("data"));
    }

    #[test]
    fn test_other_errors_have_no_volume_name() {
        assert_eq!(MergeError::EmptyInput.duplicate_volume_name(), None);
        let err = MergeError::config_error("bad");
        assert_eq!(err.to_string(), "Configuration error: bad");
    }
}
