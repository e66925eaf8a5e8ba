//! Set algebra over [`IntegerSet`].
//!
//! Every operation starts from a deep copy of `self` and edits it with the
//! primitive [`add`](IntegerSet::add) and [`remove`](IntegerSet::remove), so
//! results keep insertion order:
//!
//! | Operation   | Result order                                          |
//! |-------------|-------------------------------------------------------|
//! | `union_with`| `self`'s members, then `other`'s new members in order |
//! | `intersect` | `self`'s order                                        |
//! | `subtract`  | `self`'s order                                        |
//!
//! Equality ignores order: two sets are equal when each is a subset of the
//! other.

use std::ops::{BitAnd, BitOr, Sub};

use super::IntegerSet;

impl IntegerSet {
    /// Returns the members of `self` followed by the members of `other` that
    /// `self` lacks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::set::IntegerSet;
    ///
    /// let left: IntegerSet = [1, 2, 3].into();
    /// let right: IntegerSet = [5, 2, 4].into();
    ///
    /// assert_eq!(left.union_with(&right).to_string(), "1  2  3  5  4");
    /// ```
    #[must_use]
    pub fn union_with(&self, other: &Self) -> Self {
        let mut union = self.clone();
        for &member in other.live() {
            if !union.contains(member) {
                union.add(member);
            }
        }
        union
    }

    /// Returns the members of `self` that are also members of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::set::IntegerSet;
    ///
    /// let left: IntegerSet = [4, 1, 3, 2].into();
    /// let right: IntegerSet = [2, 3, 4].into();
    ///
    /// assert_eq!(left.intersect(&right).to_string(), "4  3  2");
    /// ```
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let mut intersection = self.clone();
        for &member in self.live() {
            if !other.contains(member) {
                intersection.remove(member);
            }
        }
        intersection
    }

    /// Returns the members of `self` that are not members of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::set::IntegerSet;
    ///
    /// let left: IntegerSet = [1, 2, 3].into();
    /// let right: IntegerSet = [2, 3, 4].into();
    ///
    /// assert_eq!(left.subtract(&right).to_string(), "1");
    /// ```
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        let mut difference = self.clone();
        for &member in other.live() {
            if difference.contains(member) {
                difference.remove(member);
            }
        }
        difference
    }
}

impl PartialEq for IntegerSet {
    fn eq(&self, other: &Self) -> bool {
        self.is_subset_of(other) && other.is_subset_of(self)
    }
}

impl Eq for IntegerSet {}

impl BitOr<&IntegerSet> for &IntegerSet {
    type Output = IntegerSet;

    /// Returns [`union_with`](IntegerSet::union_with).
    fn bitor(self, rhs: &IntegerSet) -> IntegerSet {
        self.union_with(rhs)
    }
}

impl BitAnd<&IntegerSet> for &IntegerSet {
    type Output = IntegerSet;

    /// Returns [`intersect`](IntegerSet::intersect).
    fn bitand(self, rhs: &IntegerSet) -> IntegerSet {
        self.intersect(rhs)
    }
}

impl Sub<&IntegerSet> for &IntegerSet {
    type Output = IntegerSet;

    /// Returns [`subtract`](IntegerSet::subtract).
    fn sub(self, rhs: &IntegerSet) -> IntegerSet {
        self.subtract(rhs)
    }
}
