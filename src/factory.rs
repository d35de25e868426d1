// Copyright 2024 Saptak Santra
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

//! Backend selection.
//!
//! Callers that do not care about the storage representation go through
//! these entry points and receive a boxed [`BitSet`] of the best backend
//! available. Selection is a pure function with no caching; calling it
//! repeatedly is cheap.

use crate::bitset::{BitSet, DEFAULT_CAPACITY};
use crate::sparse::SparseBitSet;

/// Available storage strategies.
///
/// Additional backends (dense word-packed, arbitrary-precision integer)
/// slot in here behind the same [`BitSet`] contract without touching
/// callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Sparse-index storage ([`SparseBitSet`]).
    Sparse,
}

impl Backend {
    /// Pick the best backend for this build.
    pub fn best() -> Self {
        Backend::Sparse
    }
}

/// Create an empty bit set of the given capacity using the best backend.
pub fn create(capacity: usize) -> Box<dyn BitSet> {
    match Backend::best() {
        Backend::Sparse => Box::new(SparseBitSet::with_capacity(capacity)),
    }
}

/// Create an empty bit set with the default capacity (64).
pub fn create_default() -> Box<dyn BitSet> {
    create(DEFAULT_CAPACITY)
}

/// Parse a literal bit string; see [`SparseBitSet::from_string`].
pub fn from_string(s: &str) -> Box<dyn BitSet> {
    match Backend::best() {
        Backend::Sparse => Box::new(SparseBitSet::from_string(s)),
    }
}

/// Build a bit set from set positions; see [`SparseBitSet::from_array`].
pub fn from_array(indices: &[usize]) -> Box<dyn BitSet> {
    match Backend::best() {
        Backend::Sparse => Box::new(SparseBitSet::from_array(indices)),
    }
}

/// Rebuild a bit set from packed bytes; see [`SparseBitSet::from_bytes`].
pub fn from_bytes(bytes: &[u8]) -> Box<dyn BitSet> {
    match Backend::best() {
        Backend::Sparse => Box::new(SparseBitSet::from_bytes(bytes)),
    }
}
