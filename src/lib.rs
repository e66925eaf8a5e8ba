//! # intset
//!
//! An insertion-ordered set of distinct `i32` values backed by an owned,
//! explicitly grown contiguous buffer.
//!
//! ## Overview
//!
//! - **`IntegerSet`**: membership, insertion and removal over a buffer whose
//!   capacity is managed by the crate's own growth policy
//!   (`floor(1.5 × capacity) + 1`)
//! - **Set algebra**: union, intersection, subtraction, subset test and
//!   order-independent equality
//! - **Insertion order**: members are kept in the order they joined the set,
//!   and that order is what [`IntegerSet::dump_contents`] writes
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `IntegerSet`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use intset::prelude::*;
//!
//! let left: IntegerSet = [1, 2, 3].into();
//! let right: IntegerSet = [2, 3, 4].into();
//!
//! assert_eq!(left.union_with(&right).to_string(), "1  2  3  4");
//! assert_eq!(left.intersect(&right).to_string(), "2  3");
//! assert_eq!(left.subtract(&right).to_string(), "1");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use intset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::*;
}

pub mod set;
