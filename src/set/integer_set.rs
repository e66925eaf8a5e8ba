//! Core [`IntegerSet`] type: construction, queries and mutators.

use std::fmt;
use std::io;

use super::error::{CapacityError, unwrap_or_abort};
use super::storage::{DEFAULT_CAPACITY, SlotBuffer, clamp_capacity, grown_capacity};

/// A set of distinct `i32` values kept in insertion order.
///
/// Members occupy the front of an owned buffer with no holes between them,
/// earliest member first. Re-adding an existing member does not move it; a
/// value that is removed and added again goes to the back.
///
/// The buffer grows to `floor(1.5 × capacity) + 1` slots whenever an
/// insertion finds it full. It never shrinks on its own; see
/// [`resize`](Self::resize).
///
/// # Examples
///
/// ```rust
/// use intset::set::IntegerSet;
///
/// let mut set = IntegerSet::with_capacity(2);
/// set.add(5);
/// set.add(8);
/// set.add(13); // grows 2 -> 4
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.capacity(), 4);
/// assert_eq!(set.to_string(), "5  8  13");
/// ```
pub struct IntegerSet {
    buffer: SlotBuffer,
}

impl IntegerSet {
    /// Creates an empty set with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::set::{IntegerSet, DEFAULT_CAPACITY};
    ///
    /// let set = IntegerSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), DEFAULT_CAPACITY);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty set with room for `initial_capacity` members.
    ///
    /// A capacity of 0 falls back to [`DEFAULT_CAPACITY`]. Aborts the process
    /// if the buffer cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::set::{IntegerSet, DEFAULT_CAPACITY};
    ///
    /// assert_eq!(IntegerSet::with_capacity(16).capacity(), 16);
    /// assert_eq!(IntegerSet::with_capacity(0).capacity(), DEFAULT_CAPACITY);
    /// ```
    #[must_use]
    pub fn with_capacity(initial_capacity: usize) -> Self {
        unwrap_or_abort(Self::try_with_capacity(initial_capacity))
    }

    /// Fallible form of [`with_capacity`](Self::with_capacity).
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::AllocationFailed`] if the buffer cannot be
    /// allocated.
    pub fn try_with_capacity(initial_capacity: usize) -> Result<Self, CapacityError> {
        let capacity = if initial_capacity < 1 {
            log::debug!("capacity hint {initial_capacity} replaced by {DEFAULT_CAPACITY}");
            DEFAULT_CAPACITY
        } else {
            initial_capacity
        };
        Ok(Self {
            buffer: SlotBuffer::try_with_capacity(capacity)?,
        })
    }

    /// Returns the number of members.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the set has no members.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    /// Returns the number of slots in the buffer. Always at least 1.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns `true` if `value` is a member.
    ///
    /// # Complexity
    ///
    /// O(n), a linear scan over the members.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.buffer.live().contains(&value)
    }

    /// Returns `true` if every member of `self` is a member of `other`.
    ///
    /// The empty set is a subset of every set, including another empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::set::IntegerSet;
    ///
    /// let small: IntegerSet = [2, 1].into();
    /// let large: IntegerSet = [1, 2, 3].into();
    ///
    /// assert!(small.is_subset_of(&large));
    /// assert!(!large.is_subset_of(&small));
    /// assert!(IntegerSet::new().is_subset_of(&IntegerSet::new()));
    /// ```
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        if self.is_empty() {
            return true;
        }
        self.live().iter().all(|&member| other.contains(member))
    }

    /// Writes the members to `sink` in insertion order, separated by two
    /// spaces. Nothing is written for an empty set.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `sink`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::set::IntegerSet;
    ///
    /// let set: IntegerSet = [4, -1, 9].into();
    /// let mut output = Vec::new();
    /// set.dump_contents(&mut output).unwrap();
    /// assert_eq!(output, b"4  -1  9");
    /// ```
    pub fn dump_contents<W: io::Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        let mut members = self.live().iter();
        if let Some(first) = members.next() {
            write!(sink, "{first}")?;
            for member in members {
                write!(sink, "  {member}")?;
            }
        }
        Ok(())
    }

    /// Adds `value` as the newest member.
    ///
    /// Returns `false` and leaves the set unchanged if `value` is already a
    /// member. Grows the buffer when it is full; aborts the process if the
    /// larger buffer cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::set::IntegerSet;
    ///
    /// let mut set = IntegerSet::new();
    /// assert!(set.add(1));
    /// assert!(set.add(2));
    /// assert!(!set.add(1));
    /// assert_eq!(set.to_string(), "1  2");
    /// ```
    pub fn add(&mut self, value: i32) -> bool {
        unwrap_or_abort(self.try_add(value))
    }

    /// Fallible form of [`add`](Self::add).
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if the buffer was full and could not be
    /// grown. The set is unchanged in that case.
    pub fn try_add(&mut self, value: i32) -> Result<bool, CapacityError> {
        if self.contains(value) {
            return Ok(false);
        }
        if self.buffer.is_full() {
            let capacity = self.buffer.capacity();
            let grown = grown_capacity(capacity).ok_or(CapacityError::Overflow { capacity })?;
            self.try_resize(grown)?;
        }
        self.buffer.push(value);
        Ok(true)
    }

    /// Removes `value`, shifting later members down to close the gap.
    ///
    /// Returns `false` and leaves the set unchanged if `value` is not a
    /// member. The relative order of the remaining members is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::set::IntegerSet;
    ///
    /// let mut set: IntegerSet = [1, 2, 3].into();
    /// assert!(set.remove(2));
    /// assert!(!set.remove(2));
    /// assert_eq!(set.to_string(), "1  3");
    /// ```
    pub fn remove(&mut self, value: i32) -> bool {
        let Some(index) = self.position(value) else {
            return false;
        };
        self.buffer.remove_at(index);
        true
    }

    /// Removes every member. The capacity is kept.
    #[inline]
    pub const fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Moves the members into a buffer of `new_capacity` slots.
    ///
    /// A capacity smaller than [`len`](Self::len) is raised to `len`, and a
    /// resulting capacity of 0 becomes [`DEFAULT_CAPACITY`]. Aborts the
    /// process if the buffer cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::set::{IntegerSet, DEFAULT_CAPACITY};
    ///
    /// let mut set: IntegerSet = [1, 2, 3].into();
    /// set.resize(1);
    /// assert_eq!(set.capacity(), 3);
    ///
    /// set.reset();
    /// set.resize(0);
    /// assert_eq!(set.capacity(), DEFAULT_CAPACITY);
    /// ```
    pub fn resize(&mut self, new_capacity: usize) {
        unwrap_or_abort(self.try_resize(new_capacity));
    }

    /// Fallible form of [`resize`](Self::resize).
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::AllocationFailed`] if the buffer cannot be
    /// allocated. The set is unchanged in that case.
    pub fn try_resize(&mut self, new_capacity: usize) -> Result<(), CapacityError> {
        let capacity = clamp_capacity(new_capacity, self.len());
        if capacity != new_capacity {
            log::debug!(
                "resize request {new_capacity} clamped to {capacity} ({} members)",
                self.len()
            );
        }
        self.buffer.try_reallocate(capacity)
    }

    /// Fallible form of [`Clone::clone`].
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::AllocationFailed`] if the copy's buffer cannot
    /// be allocated.
    pub fn try_clone(&self) -> Result<Self, CapacityError> {
        Ok(Self {
            buffer: self.buffer.try_duplicate()?,
        })
    }

    /// Fallible form of [`Clone::clone_from`].
    ///
    /// The copy is built in full before the previous buffer is released.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::AllocationFailed`] if the new buffer cannot be
    /// allocated. `self` is unchanged in that case.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), CapacityError> {
        self.buffer = source.buffer.try_duplicate()?;
        Ok(())
    }

    /// The members in insertion order.
    #[inline]
    pub(crate) fn live(&self) -> &[i32] {
        self.buffer.live()
    }

    fn position(&self, value: i32) -> Option<usize> {
        self.live().iter().position(|&member| member == value)
    }
}

static_assertions::assert_impl_all!(IntegerSet: Send, Sync, Clone, Default);

impl Clone for IntegerSet {
    fn clone(&self) -> Self {
        unwrap_or_abort(self.try_clone())
    }

    fn clone_from(&mut self, source: &Self) {
        unwrap_or_abort(self.try_clone_from(source));
    }
}

impl Default for IntegerSet {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IntegerSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.live()).finish()
    }
}

impl fmt::Display for IntegerSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut members = self.live().iter();
        if let Some(first) = members.next() {
            write!(formatter, "{first}")?;
            for member in members {
                write!(formatter, "  {member}")?;
            }
        }
        Ok(())
    }
}

impl FromIterator<i32> for IntegerSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<i32> for IntegerSet {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a> Extend<&'a i32> for IntegerSet {
    fn extend<I: IntoIterator<Item = &'a i32>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<const N: usize> From<[i32; N]> for IntegerSet {
    fn from(values: [i32; N]) -> Self {
        values.into_iter().collect()
    }
}

impl From<&[i32]> for IntegerSet {
    fn from(values: &[i32]) -> Self {
        values.iter().copied().collect()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for IntegerSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for member in self.live() {
            seq.serialize_element(member)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct IntegerSetVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for IntegerSetVisitor {
    type Value = IntegerSet;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of integers")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Grows through the regular policy; the length hint is untrusted input.
        let mut set = IntegerSet::new();
        while let Some(value) = seq.next_element()? {
            set.try_add(value)
                .map_err(<A::Error as serde::de::Error>::custom)?;
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IntegerSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(IntegerSetVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct FailingSink;

    impl io::Write for FailingSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn dump(set: &IntegerSet) -> String {
        let mut output = Vec::new();
        set.dump_contents(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[rstest]
    fn test_new_uses_default_capacity() {
        let set = IntegerSet::new();
        assert_eq!(set.capacity(), DEFAULT_CAPACITY);
        assert!(set.is_empty());
    }

    #[rstest]
    #[case(0, DEFAULT_CAPACITY)]
    #[case(1, 1)]
    #[case(25, 25)]
    fn test_with_capacity_clamps_zero(#[case] hint: usize, #[case] expected: usize) {
        assert_eq!(IntegerSet::with_capacity(hint).capacity(), expected);
    }

    #[rstest]
    fn test_try_with_capacity_reports_allocation_failure() {
        let result = IntegerSet::try_with_capacity(usize::MAX);
        assert_eq!(
            result.err(),
            Some(CapacityError::AllocationFailed {
                requested: usize::MAX
            })
        );
    }

    // =========================================================================
    // Growth
    // =========================================================================

    #[rstest]
    fn test_add_grows_by_policy() {
        let mut set = IntegerSet::new();
        let mut capacities = Vec::new();
        for value in 0..12 {
            set.add(value);
            capacities.push(set.capacity());
        }
        // 1 -> 2 -> 4 -> 7 -> 11 -> 17
        assert_eq!(capacities, vec![1, 2, 4, 4, 7, 7, 7, 11, 11, 11, 11, 17]);
    }

    #[rstest]
    fn test_add_duplicate_does_not_grow() {
        let mut set = IntegerSet::with_capacity(2);
        set.add(1);
        set.add(2);
        assert!(!set.add(1));
        assert_eq!(set.capacity(), 2);
    }

    #[rstest]
    fn test_try_resize_failure_leaves_set_unchanged() {
        let mut set: IntegerSet = [3, 1, 2].into();
        let capacity = set.capacity();

        assert!(set.try_resize(usize::MAX).is_err());

        assert_eq!(set.capacity(), capacity);
        assert_eq!(dump(&set), "3  1  2");
    }

    #[rstest]
    fn test_resize_grows_and_keeps_order() {
        let mut set: IntegerSet = [9, 8, 7].into();
        set.resize(40);
        assert_eq!(set.capacity(), 40);
        assert_eq!(dump(&set), "9  8  7");
    }

    // =========================================================================
    // Remove
    // =========================================================================

    #[rstest]
    #[case(1, "2  3  4")]
    #[case(2, "1  3  4")]
    #[case(4, "1  2  3")]
    fn test_remove_shifts_later_members(#[case] value: i32, #[case] expected: &str) {
        let mut set: IntegerSet = [1, 2, 3, 4].into();
        assert!(set.remove(value));
        assert_eq!(dump(&set), expected);
        assert_eq!(set.len(), 3);
    }

    #[rstest]
    fn test_readded_value_goes_last() {
        let mut set: IntegerSet = [1, 2, 3].into();
        set.remove(1);
        set.add(1);
        assert_eq!(dump(&set), "2  3  1");
    }

    #[rstest]
    fn test_reset_keeps_capacity() {
        let mut set: IntegerSet = (0..10).collect();
        let capacity = set.capacity();
        set.reset();
        assert!(set.is_empty());
        assert_eq!(set.capacity(), capacity);
        assert!(!set.contains(0));
    }

    // =========================================================================
    // Copy and Assign
    // =========================================================================

    #[rstest]
    fn test_clone_keeps_capacity() {
        let set = IntegerSet::with_capacity(30);
        assert_eq!(set.clone().capacity(), 30);
    }

    #[rstest]
    fn test_clone_from_adopts_source_capacity_and_members() {
        let source: IntegerSet = [5, 6].into();
        let mut target = IntegerSet::with_capacity(50);
        target.add(1);

        target.clone_from(&source);

        assert_eq!(target.capacity(), source.capacity());
        assert_eq!(dump(&target), "5  6");
    }

    // =========================================================================
    // Dump and Formatting
    // =========================================================================

    #[rstest]
    fn test_dump_empty_writes_nothing() {
        assert_eq!(dump(&IntegerSet::new()), "");
    }

    #[rstest]
    fn test_dump_single_member_has_no_separator() {
        let set: IntegerSet = [42].into();
        assert_eq!(dump(&set), "42");
    }

    #[rstest]
    fn test_dump_propagates_sink_error() {
        let set: IntegerSet = [1].into();
        let error = set.dump_contents(&mut FailingSink).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::Other);
    }

    #[rstest]
    fn test_dump_empty_never_touches_sink() {
        assert!(IntegerSet::new().dump_contents(&mut FailingSink).is_ok());
    }

    #[rstest]
    fn test_display_matches_dump() {
        let set: IntegerSet = [i32::MIN, 0, i32::MAX].into();
        assert_eq!(set.to_string(), dump(&set));
    }

    #[rstest]
    fn test_debug_formats_as_set() {
        let set: IntegerSet = [3, 1].into();
        assert_eq!(format!("{set:?}"), "{3, 1}");
    }

    // =========================================================================
    // Construction from Iterators
    // =========================================================================

    #[rstest]
    fn test_from_iter_drops_duplicates_keeping_first_occurrence() {
        let set: IntegerSet = vec![4, 2, 4, 1, 2].into_iter().collect();
        assert_eq!(dump(&set), "4  2  1");
    }

    #[rstest]
    fn test_extend_by_reference() {
        let mut set: IntegerSet = [1].into();
        set.extend(&[1, 5, 6]);
        assert_eq!(dump(&set), "1  5  6");
    }

    #[rstest]
    fn test_from_slice() {
        let values: &[i32] = &[7, 7, 8];
        assert_eq!(dump(&IntegerSet::from(values)), "7  8");
    }
}
