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

/// Name collision suffixes
pub const DEFAULT_SUFFIX_LENGTH: usize = 5;
pub const MAX_SUFFIX_LENGTH: usize = 16;
pub const DEFAULT_SUFFIX_SEPARATOR: &str = "-";

/// Configuration file
pub const CONF_FILE_ENV: &str = "KUBE_PODMERGE_CONF";

/// Deployment envelope
pub const DEPLOYMENT_API_VERSION: &str = "apps/v1";
pub const DEPLOYMENT_KIND: &str = "Deployment";
pub const DEFAULT_REPLICAS: u32 = 1;
