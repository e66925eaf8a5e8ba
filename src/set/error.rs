//! Error types for buffer allocation.
//!
//! Allocation failure is the only error an [`IntegerSet`](super::IntegerSet)
//! can produce. The `try_*` operations surface it as a [`CapacityError`];
//! every other operation treats it as fatal through [`unwrap_or_abort`].

/// Represents a failure to obtain the buffer a set operation needed.
///
/// # Examples
///
/// ```rust
/// use intset::set::{CapacityError, IntegerSet};
///
/// let mut set = IntegerSet::new();
/// let error = set.try_resize(usize::MAX).unwrap_err();
/// assert_eq!(error, CapacityError::AllocationFailed { requested: usize::MAX });
/// assert_eq!(
///     format!("{error}"),
///     format!("failed to allocate a buffer of {} slots", usize::MAX)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapacityError {
    /// The growth formula overflowed `usize` for the given capacity.
    Overflow {
        /// The capacity that could not be grown.
        capacity: usize,
    },
    /// The allocator refused a buffer of `requested` slots.
    AllocationFailed {
        /// The number of slots requested.
        requested: usize,
    },
}

impl std::fmt::Display for CapacityError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow { capacity } => {
                write!(formatter, "capacity overflow while growing from {capacity} slots")
            }
            Self::AllocationFailed { requested } => {
                write!(formatter, "failed to allocate a buffer of {requested} slots")
            }
        }
    }
}

impl std::error::Error for CapacityError {}

/// Returns the value, or reports the exhaustion and aborts the process.
///
/// Callers only hand over results of operations that left the set untouched
/// on error, so nothing torn is observable when the process goes down.
pub(crate) fn unwrap_or_abort<T>(result: Result<T, CapacityError>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => {
            log::error!("unrecoverable resource exhaustion: {error}");
            eprintln!("intset: unrecoverable resource exhaustion: {error}");
            std::process::abort()
        }
    }
}
