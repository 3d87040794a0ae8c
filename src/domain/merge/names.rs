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

//! Name-collision resolution for containers and init containers.
//!
//! Items are processed in input order against a used-name set owned by a
//! single call. The first holder of a name keeps it; every later holder is
//! renamed to `original + suffix`, retrying until the candidate is unused.

use crate::domain::model::Named;
use crate::infrastructure::constants::{DEFAULT_SUFFIX_LENGTH, DEFAULT_SUFFIX_SEPARATOR};
use rand::distr::Alphanumeric;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// Produces candidate suffixes for colliding names.
pub trait SuffixSource {
    fn next_suffix(&mut self) -> String;
}

/// Random lowercase alphanumeric suffixes drawn from the thread-local RNG.
#[derive(Debug, Clone)]
pub struct RandomSuffix {
    length: usize,
    separator: String,
}

impl RandomSuffix {
    pub fn new(length: usize, separator: impl Into<String>) -> Self {
        Self {
            length: length.max(1),
            separator: separator.into(),
        }
    }
}

impl SuffixSource for RandomSuffix {
    fn next_suffix(&mut self) -> String {
        let token: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect();
        format!("{}{}", self.separator, token)
    }
}

/// Counter suffixes `-1`, `-2`, ... starting over for every new source.
#[derive(Debug, Clone)]
pub struct SequentialSuffix {
    next: u64,
    separator: String,
}

impl SequentialSuffix {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            next: 1,
            separator: separator.into(),
        }
    }
}

impl SuffixSource for SequentialSuffix {
    fn next_suffix(&mut self) -> String {
        let suffix = format!("{}{}", self.separator, self.next);
        self.next += 1;
        suffix
    }
}

/// How suffixes are generated. Each call to [`SuffixStrategy::source`] yields
/// an independent source, so concurrent merges never share state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuffixStrategy {
    Random { length: usize, separator: String },
    Sequential { separator: String },
}

impl Default for SuffixStrategy {
    fn default() -> Self {
        SuffixStrategy::Random {
            length: DEFAULT_SUFFIX_LENGTH,
            separator: DEFAULT_SUFFIX_SEPARATOR.to_string(),
        }
    }
}

impl SuffixStrategy {
    pub fn source(&self) -> Box<dyn SuffixSource> {
        match self {
            SuffixStrategy::Random { length, separator } => {
                Box::new(RandomSuffix::new(*length, separator.clone()))
            }
            SuffixStrategy::Sequential { separator } => {
                Box::new(SequentialSuffix::new(separator.clone()))
            }
        }
    }
}

/// A name change applied to the item at `position` of the merged list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub position: usize,
    pub original: String,
    pub assigned: String,
}

#[derive(Debug, Clone)]
pub struct Resolution<T> {
    pub items: Vec<T>,
    pub renames: Vec<Rename>,
}

pub fn resolve_names<T: Named>(items: Vec<T>, suffixes: &mut dyn SuffixSource) -> Resolution<T> {
    let mut used: HashSet<String> = HashSet::with_capacity(items.len());
    let mut resolved = Vec::with_capacity(items.len());
    let mut renames = Vec::new();

    for (position, item) in items.into_iter().enumerate() {
        if used.insert(item.name().to_string()) {
            resolved.push(item);
            continue;
        }

        let original = item.name().to_string();
        let assigned = loop {
            let candidate = format!("{}{}", original, suffixes.next_suffix());
            if !used.contains(&candidate) {
                break candidate;
            }
        };
        used.insert(assigned.clone());

        debug!(%original, %assigned, position, "Renamed colliding item");
        renames.push(Rename {
            position,
            original,
            assigned: assigned.clone(),
        });
        resolved.push(item.with_name(assigned));
    }

    Resolution {
        items: resolved,
        renames,
    }
}
