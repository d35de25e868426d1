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

//! Sparse-index storage backend.
//!
//! Stores only the set positions in a `BTreeSet`, so memory scales with
//! cardinality rather than capacity. The ordered set gives ascending
//! `to_array` output and O(log n) scans to the nearest set bit for free.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bitset::{BitSet, DEFAULT_CAPACITY};
use crate::error::{BitSetError, Result};

/// Sparse-index [`BitSet`] backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseBitSet {
    capacity: usize,
    bits: BTreeSet<usize>,
}

impl SparseBitSet {
    /// Create an empty set that can address `capacity` bit positions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            bits: BTreeSet::new(),
        }
    }

    /// Build a set directly from a capacity and an initial position set.
    ///
    /// Positions are trusted as-is; the `from_array` capacity formula can
    /// hand over an index equal to the capacity (see `from_array`).
    pub(crate) fn from_parts(capacity: usize, bits: BTreeSet<usize>) -> Self {
        Self { capacity, bits }
    }

    /// Parse a literal bit string: any `'1'` at position `i` sets bit `i`,
    /// every other character reads as 0.
    ///
    /// Capacity is the string length rounded up to a multiple of 8, or the
    /// default (64) for an empty string.
    pub fn from_string(s: &str) -> Self {
        let len = s.chars().count();
        let capacity = if len > 0 {
            8 * len.div_ceil(8)
        } else {
            DEFAULT_CAPACITY
        };
        let bits = s
            .chars()
            .enumerate()
            .filter(|&(_, c)| c == '1')
            .map(|(i, _)| i)
            .collect();

        Self::from_parts(capacity, bits)
    }

    /// Build a set from bit positions; duplicates collapse.
    ///
    /// Empty input yields a default-capacity empty set. Otherwise the
    /// capacity is `8 * ceil(max/8)`, matching the encoding width of the
    /// highest position. When `max` is itself a multiple of 8 that formula
    /// admits one position equal to the capacity; `to_array` still reports
    /// it, while `get` at that position reports out of range.
    pub fn from_array(indices: &[usize]) -> Self {
        let Some(&max) = indices.iter().max() else {
            return Self::default();
        };
        let capacity = 8 * max.div_ceil(8);

        Self::from_parts(capacity, indices.iter().copied().collect())
    }

    /// Rebuild a set from the packed little-endian bytes produced by
    /// [`BitSet::to_bytes`]: bit `k` of byte `j` maps to position `8j + k`.
    ///
    /// Capacity is `8 * len(bytes)`, or the default (64) for empty input.
    /// Trailing zero bytes are never encoded, so positions above the
    /// highest encoded bit come back clear regardless of the original
    /// declared capacity.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::default();
        }

        let mut bits = BTreeSet::new();
        for (j, &byte) in bytes.iter().enumerate() {
            for k in 0..8 {
                if byte & (1 << k) != 0 {
                    bits.insert(8 * j + k);
                }
            }
        }

        Self::from_parts(8 * bytes.len(), bits)
    }

    fn check_capacity(&self, index: usize) -> Result<()> {
        if index >= self.capacity {
            return Err(BitSetError::OutOfRange {
                index,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    fn check_scan_start(&self, index: usize) -> Result<()> {
        if index >= self.capacity {
            return Err(BitSetError::InvalidArgument {
                index,
                size: self.capacity,
            });
        }
        Ok(())
    }
}

impl Default for SparseBitSet {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl BitSet for SparseBitSet {
    fn and(&mut self, other: &dyn BitSet) {
        let theirs: BTreeSet<usize> = other.to_array().into_iter().collect();
        self.bits.retain(|i| theirs.contains(i));
    }

    fn and_not(&mut self, other: &dyn BitSet) {
        let theirs: BTreeSet<usize> = other.to_array().into_iter().collect();
        self.bits.retain(|i| !theirs.contains(i));
    }

    fn or(&mut self, other: &dyn BitSet) {
        // Foreign positions past our own capacity stay absent.
        let capacity = self.capacity;
        self.bits
            .extend(other.to_array().into_iter().filter(|&i| i < capacity));
    }

    fn xor(&mut self, other: &dyn BitSet) {
        for i in other.to_array() {
            if i >= self.capacity {
                continue;
            }
            if !self.bits.remove(&i) {
                self.bits.insert(i);
            }
        }
    }

    fn cardinality(&self) -> usize {
        self.bits.len()
    }

    fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    fn intersects(&self, other: &dyn BitSet) -> bool {
        other.to_array().iter().any(|i| self.bits.contains(i))
    }

    fn get(&self, index: usize) -> Result<bool> {
        self.check_capacity(index)?;
        Ok(self.bits.contains(&index))
    }

    fn set(&mut self, index: usize) -> Result<()> {
        self.check_capacity(index)?;
        self.bits.insert(index);
        Ok(())
    }

    fn set_range(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_capacity(from)?;
        if from > to {
            return Ok(());
        }
        self.check_capacity(to)?;
        self.bits.extend(from..=to);
        Ok(())
    }

    fn set_all(&mut self) {
        self.bits.extend(0..self.capacity);
    }

    fn clear(&mut self, index: usize) -> Result<()> {
        self.check_capacity(index)?;
        self.bits.remove(&index);
        Ok(())
    }

    fn clear_range(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_capacity(from)?;
        self.bits.retain(|&i| i < from || i > to);
        Ok(())
    }

    fn clear_all(&mut self) {
        self.bits.clear();
    }

    fn length(&self) -> usize {
        self.bits.last().map_or(0, |&highest| highest + 1)
    }

    fn size(&self) -> usize {
        self.capacity
    }

    fn next_set_bit(&self, from: usize) -> Result<Option<usize>> {
        self.check_scan_start(from)?;
        Ok(self.bits.range(from..).next().copied())
    }

    fn next_clear_bit(&self, from: usize) -> Result<Option<usize>> {
        self.check_scan_start(from)?;
        Ok((from..self.capacity).find(|i| !self.bits.contains(i)))
    }

    fn previous_set_bit(&self, from: usize) -> Option<usize> {
        self.bits.range(..=from).next_back().copied()
    }

    fn previous_clear_bit(&self, from: usize) -> Option<usize> {
        (0..=from).rev().find(|i| !self.bits.contains(i))
    }

    fn to_array(&self) -> Vec<usize> {
        self.bits.iter().copied().collect()
    }

    fn to_hex(&self) -> String {
        self.to_bytes().iter().map(|b| format!("{b:02x}")).collect()
    }

    fn to_bytes(&self) -> Vec<u8> {
        let Some(&highest) = self.bits.last() else {
            return Vec::new();
        };
        // Dense buffer through the highest set bit's byte; gaps stay zero.
        let mut bytes = vec![0u8; highest / 8 + 1];
        for &bit in &self.bits {
            bytes[bit / 8] |= 1 << (bit % 8);
        }
        bytes
    }
}

impl fmt::Display for SparseBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.capacity {
            let c = if self.bits.contains(&i) { '1' } else { '0' };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
