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

//! Pod descriptor and merged workload types

pub mod entry;
pub mod pod;
pub mod workload;

pub use self::entry::{AdditionalProperties, Container, Named, SecretReference, Volume};
pub use self::pod::{
    PodDescriptor, PodDescriptorBuilder, PodMetadata, PodSpecFragment, RESERVED_METADATA_KEYS,
    RESERVED_SPEC_KEYS,
};
pub use self::workload::{MergedWorkload, PodTemplate};
