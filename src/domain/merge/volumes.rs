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
use crate::shared::error::{MergeError, Result};
use std::collections::HashSet;

/// Fails on the first volume whose name was already seen. Volumes are
/// referenced by name from mounts, so a duplicate is never renamed.
pub fn validate_volume_names<T: Named>(volumes: &[T]) -> Result<()> {
    let mut seen = HashSet::with_capacity(volumes.len());
    for volume in volumes {
        if !seen.insert(volume.name()) {
            return Err(MergeError::duplicate_volume(volume.name()));
        }
    }
    Ok(())
}
