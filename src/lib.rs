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

//! Fixed-capacity bit set with pluggable storage backends.
//!
//! The [`BitSet`] trait is the contract: set algebra (AND, OR, XOR,
//! AND-NOT), single-bit and range mutation, forward/backward bit scans,
//! and the little-endian byte/hex wire encoding. [`SparseBitSet`] is the
//! production backend; [`factory`] hands out the best backend behind a
//! `Box<dyn BitSet>` so alternatives can be added without touching
//! callers.

pub mod bitset;
pub mod error;
pub mod factory;
pub mod prelude;
pub mod sparse;

pub use bitset::*;
pub use error::*;
pub use sparse::*;
