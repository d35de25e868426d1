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

//! The `BitSet` capability contract.
//!
//! Every storage backend implements this trait; callers hold a
//! `Box<dyn BitSet>` (or the concrete type) and never depend on the
//! representation. Binary operations read the operand through
//! [`BitSet::to_array`], so two different backends interoperate freely.

use std::fmt;

use crate::error::Result;

/// Default capacity when none is requested (64 bits).
pub const DEFAULT_CAPACITY: usize = 64;

/// A fixed-capacity, mutable boolean vector.
///
/// Indices run `0..capacity`. Mutating operations that take an index
/// validate it against the capacity and return
/// [`BitSetError::OutOfRange`](crate::BitSetError::OutOfRange) on misuse;
/// forward scans validate their start against `size()` and return
/// [`BitSetError::InvalidArgument`](crate::BitSetError::InvalidArgument).
/// "Not found" in a scan is `Ok(None)`, never an error.
///
/// The `Display` rendering is exactly `size()` characters of `'0'`/`'1'`,
/// index 0 leftmost.
pub trait BitSet: fmt::Display {
    /// Logical AND with `other`: retain only the positions set in both.
    ///
    /// Positions set in `other` beyond this set's capacity are harmless;
    /// they can never be present here.
    fn and(&mut self, other: &dyn BitSet);

    /// Clear every position here that is also set in `other`.
    fn and_not(&mut self, other: &dyn BitSet);

    /// Logical OR with `other`: union of the two position sets.
    fn or(&mut self, other: &dyn BitSet);

    /// Logical XOR with `other`: keep positions set in exactly one side.
    fn xor(&mut self, other: &dyn BitSet);

    /// Number of set positions.
    fn cardinality(&self) -> usize;

    /// True iff no position is set.
    fn is_empty(&self) -> bool;

    /// True iff this set and `other` share at least one set position.
    fn intersects(&self, other: &dyn BitSet) -> bool;

    /// Value of the bit at `index`.
    fn get(&self, index: usize) -> Result<bool>;

    /// Set the single bit at `index`.
    fn set(&mut self, index: usize) -> Result<()>;

    /// Set every bit in the inclusive range `[from, to]`.
    ///
    /// Both endpoints must be within capacity. `from > to` sets nothing.
    fn set_range(&mut self, from: usize, to: usize) -> Result<()>;

    /// Set every bit `0..size()`.
    fn set_all(&mut self);

    /// Clear the single bit at `index`; no-op when already clear.
    fn clear(&mut self, index: usize) -> Result<()>;

    /// Clear every set bit in the inclusive range `[from, to]`.
    ///
    /// Only `from` is validated; a `to` past the end clears nothing extra.
    fn clear_range(&mut self, from: usize, to: usize) -> Result<()>;

    /// Clear every bit, resetting the set to empty.
    fn clear_all(&mut self);

    /// Highest set position plus one, or 0 when empty.
    fn length(&self) -> usize;

    /// The declared capacity.
    fn size(&self) -> usize;

    /// First set position in `[from, length())`, scanning forward.
    fn next_set_bit(&self, from: usize) -> Result<Option<usize>>;

    /// First clear position in `[from, size())`, scanning forward.
    fn next_clear_bit(&self, from: usize) -> Result<Option<usize>>;

    /// First set position in `[0, from]`, scanning backward from `from`.
    ///
    /// Infallible: the only invalid start the reference semantics define
    /// is a negative index, which `usize` rules out. Positions at or past
    /// the capacity count as clear.
    fn previous_set_bit(&self, from: usize) -> Option<usize>;

    /// First clear position in `[0, from]`, scanning backward from `from`.
    fn previous_clear_bit(&self, from: usize) -> Option<usize>;

    /// Set positions in ascending order.
    fn to_array(&self) -> Vec<usize>;

    /// Little-endian hex encoding of the bit pattern, lowercase.
    ///
    /// One byte (two hex chars) per 8 bits, byte 0 covering bits 0-7.
    /// Runs of zero bytes between set bits are encoded as `"00"`; trailing
    /// zero bytes past the highest set bit are dropped, so a non-empty set
    /// encodes to exactly `highest/8 + 1` bytes. An empty set encodes to
    /// `""`.
    fn to_hex(&self) -> String;

    /// The packed bytes behind [`BitSet::to_hex`].
    fn to_bytes(&self) -> Vec<u8>;
}
