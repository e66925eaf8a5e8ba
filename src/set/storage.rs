//! Slot buffer backing [`IntegerSet`](super::IntegerSet).
//!
//! [`SlotBuffer`] owns a boxed slice whose length *is* the capacity and
//! tracks the live prefix separately. It never grows on its own: callers
//! decide the new capacity through [`grown_capacity`] and [`clamp_capacity`]
//! and then ask for a reallocation.

use super::error::CapacityError;

/// The capacity used when none, or an unusable one, is requested.
pub const DEFAULT_CAPACITY: usize = 1;

/// Returns `floor(1.5 × capacity) + 1`, or `None` on overflow.
#[inline]
pub(crate) const fn grown_capacity(capacity: usize) -> Option<usize> {
    match capacity.checked_add(capacity / 2) {
        Some(scaled) => scaled.checked_add(1),
        None => None,
    }
}

/// Clamps a requested capacity so that `used` live slots still fit and the
/// result is never zero.
#[inline]
pub(crate) const fn clamp_capacity(requested: usize, used: usize) -> usize {
    let capacity = if requested < used { used } else { requested };
    if capacity < 1 {
        DEFAULT_CAPACITY
    } else {
        capacity
    }
}

/// Allocates `capacity` zeroed slots, reporting allocator refusal.
fn allocate(capacity: usize) -> Result<Box<[i32]>, CapacityError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| CapacityError::AllocationFailed {
            requested: capacity,
        })?;
    slots.resize(capacity, 0);
    Ok(slots.into_boxed_slice())
}

/// Owned contiguous slots with a live prefix of length `used`.
///
/// Slots at `[used, capacity)` are unspecified and never read as contents.
#[derive(Debug)]
pub(crate) struct SlotBuffer {
    slots: Box<[i32]>,
    used: usize,
}

impl SlotBuffer {
    /// Allocates an empty buffer of exactly `capacity` slots.
    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        debug_assert!(capacity >= 1, "slot buffers are never zero-sized");
        Ok(Self {
            slots: allocate(capacity)?,
            used: 0,
        })
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.used
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.used == self.slots.len()
    }

    /// The live prefix, in insertion order.
    #[inline]
    pub(crate) fn live(&self) -> &[i32] {
        &self.slots[..self.used]
    }

    /// Deep-copies the live prefix into a new buffer of the same capacity.
    pub(crate) fn try_duplicate(&self) -> Result<Self, CapacityError> {
        let mut slots = allocate(self.capacity())?;
        slots[..self.used].copy_from_slice(self.live());
        Ok(Self {
            slots,
            used: self.used,
        })
    }

    /// Moves the live prefix into a new buffer of `capacity` slots.
    ///
    /// The old slots are released only after the new ones are populated, so
    /// on error the buffer is unchanged.
    pub(crate) fn try_reallocate(&mut self, capacity: usize) -> Result<(), CapacityError> {
        debug_assert!(capacity >= self.used.max(1));
        let mut slots = allocate(capacity)?;
        slots[..self.used].copy_from_slice(self.live());
        log::trace!(
            "reallocated slot buffer: {} -> {} slots ({} live)",
            self.capacity(),
            capacity,
            self.used
        );
        self.slots = slots;
        Ok(())
    }

    /// Stores `value` in the first free slot.
    ///
    /// The buffer must not be full.
    #[inline]
    pub(crate) fn push(&mut self, value: i32) {
        debug_assert!(!self.is_full(), "push into a full slot buffer");
        self.slots[self.used] = value;
        self.used += 1;
    }

    /// Removes the live slot at `index`, shifting later slots down by one.
    pub(crate) fn remove_at(&mut self, index: usize) {
        debug_assert!(index < self.used);
        self.slots.copy_within(index + 1..self.used, index);
        self.used -= 1;
    }

    #[inline]
    pub(crate) const fn clear(&mut self) {
        self.used = 0;
    }
}
