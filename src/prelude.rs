//! Convenient re-exports of commonly used types.
//!
//! The prelude can be imported with:
//! ```
//! use sparse_bitset::prelude::*;
//! ```

pub use crate::bitset::{BitSet, DEFAULT_CAPACITY};
pub use crate::error::{BitSetError, Result};
pub use crate::factory::{self, Backend};
pub use crate::sparse::SparseBitSet;
