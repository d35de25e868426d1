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

//! Error types

use std::fmt;

/// Bit set error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitSetError {
    /// An index or range start is outside `[0, capacity)` for an
    /// operation that checks capacity (`get`, `set`, `clear`).
    OutOfRange { index: usize, capacity: usize },

    /// A scan start index is outside `[0, size())` for `next_set_bit`
    /// or `next_clear_bit`.
    InvalidArgument { index: usize, size: usize },
}

impl fmt::Display for BitSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitSetError::OutOfRange { index, capacity } => {
                write!(
                    f,
                    "Index {index} exceeds the total number of bits available ({capacity})"
                )
            }
            BitSetError::InvalidArgument { index, size } => {
                write!(
                    f,
                    "There are no bits at or after index {index} (size {size})"
                )
            }
        }
    }
}

impl std::error::Error for BitSetError {}

/// Result type alias
pub type Result<T> = std::result::Result<T, BitSetError>;
