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

use crate::domain::model::Named;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Deduplicated<T> {
    pub secrets: Vec<T>,
    /// Names of references dropped because an earlier one had the same name.
    pub dropped: Vec<String>,
}

/// Keeps the first reference for each distinct name, in input order.
pub fn dedupe_secrets<T: Named>(secrets: Vec<T>) -> Deduplicated<T> {
    let mut seen = HashSet::with_capacity(secrets.len());
    let mut result = Deduplicated {
        secrets: Vec::with_capacity(secrets.len()),
        dropped: Vec::new(),
    };

    for secret in secrets {
        if seen.insert(secret.name().to_string()) {
            result.secrets.push(secret);
        } else {
            debug!(name = %secret.name(), "Dropped duplicate image pull secret");
            result.dropped.push(secret.name().to_string());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SecretReference;
    use serde_json::json;

    fn secret(name: &str) -> SecretReference {
        SecretReference::new(name)
    }

    #[test]
    fn test_collapses_same_name() {
        let result = dedupe_secrets(vec![secret("secret"), secret("secret")]);
        assert_eq!(result.secrets, vec![secret("secret")]);
        assert_eq!(result.dropped, vec!["secret".to_string()]);
    }

    #[test]
    fn test_preserves_first_seen_order() {
        let result = dedupe_secrets(vec![secret("b"), secret("a"), secret("b"), secret("c")]);
        let names: Vec<&str> = result.secrets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_first_reference_wins_with_its_fields() {
        let first = secret("registry").with_property("note", json!("first"));
        let second = secret("registry").with_property("note", json!("second"));

        let result = dedupe_secrets(vec![first.clone(), second]);
        assert_eq!(result.secrets, vec![first]);
    }
}
