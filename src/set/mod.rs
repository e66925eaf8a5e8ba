//! Insertion-ordered integer set.
//!
//! This module provides [`IntegerSet`], a set of distinct `i32` values stored
//! contiguously in the order they became members:
//!
//! - Membership is a linear scan over the live prefix of the buffer
//! - Insertion appends, growing the buffer to `floor(1.5 × capacity) + 1`
//!   slots when it is full
//! - Removal closes the hole by shifting later members down one slot
//!
//! # Buffer Layout
//!
//! ```text
//!   index:   0    1    2    3    4    5    6
//!          ┌────┬────┬────┬────┬────┬────┬────┐
//!          │ 7  │ -2 │ 40 │ 3  │ ?  │ ?  │ ?  │
//!          └────┴────┴────┴────┴────┴────┴────┘
//!          └──────── live ─────┘└─ unspecified ┘
//!                  len() == 4      capacity() == 7
//! ```
//!
//! # Examples
//!
//! ```rust
//! use intset::set::IntegerSet;
//!
//! let mut set = IntegerSet::new();
//! assert!(set.add(3));
//! assert!(set.add(1));
//! assert!(!set.add(3)); // already a member
//!
//! assert!(set.contains(1));
//! assert_eq!(set.to_string(), "3  1");
//!
//! // Copies are deep and independent
//! let mut copy = set.clone();
//! copy.remove(3);
//! assert!(set.contains(3));
//! assert!(!copy.contains(3));
//! ```
//!
//! # Allocation Failure
//!
//! Operations that may allocate come in two flavours. The `try_*` forms
//! return [`CapacityError`] and leave the set untouched on failure. The plain
//! forms treat exhaustion as fatal: the failure is reported and the process
//! aborts.

mod algebra;
mod error;
mod integer_set;
mod storage;

pub use error::CapacityError;
pub use integer_set::IntegerSet;
pub use storage::DEFAULT_CAPACITY;
