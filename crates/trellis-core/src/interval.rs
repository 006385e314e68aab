//! A closed integer range and its relational algebra.

use std::fmt;

/// An inclusive range of integers `a..=b`.
///
/// `b < a` denotes the empty interval. Intervals are plain values:
/// equality and hashing are structural on the bounds, and copies are free.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
pub struct Interval {
    pub a: i32,
    pub b: i32,
}

impl Interval {
    /// Canonical empty interval, usable as a padding marker.
    pub const INVALID: Interval = Interval { a: -1, b: -2 };

    pub const fn of(a: i32, b: i32) -> Interval {
        Interval { a, b }
    }

    /// Number of integers in `a..=b`; 0 for empty intervals.
    pub fn length(&self) -> usize {
        if self.b < self.a {
            0
        } else {
            (self.b - self.a + 1) as usize
        }
    }

    /// Does `self` lie entirely before `other` starts?
    pub fn starts_before_disjoint(&self, other: &Interval) -> bool {
        self.a < other.a && self.b < other.a
    }

    /// Does `self` start at or before `other` and reach into it?
    pub fn starts_before_non_disjoint(&self, other: &Interval) -> bool {
        self.a <= other.a && self.b >= other.a
    }

    pub fn starts_after(&self, other: &Interval) -> bool {
        self.a > other.a
    }

    /// Does `self` start past the end of `other`?
    pub fn starts_after_disjoint(&self, other: &Interval) -> bool {
        self.a > other.b
    }

    /// Does `self` start inside `other` (after its start, at or before its
    /// end)?
    pub fn starts_after_non_disjoint(&self, other: &Interval) -> bool {
        self.a > other.a && self.a <= other.b
    }

    pub fn disjoint(&self, other: &Interval) -> bool {
        self.starts_before_disjoint(other) || self.starts_after_disjoint(other)
    }

    /// Do the two intervals touch with no gap and no overlap?
    pub fn adjacent(&self, other: &Interval) -> bool {
        self.a == other.b + 1 || self.b == other.a - 1
    }

    pub fn properly_contains(&self, other: &Interval) -> bool {
        other.a >= self.a && other.b <= self.b
    }

    /// Smallest interval covering both.
    pub fn union(&self, other: &Interval) -> Interval {
        Interval::of(self.a.min(other.a), self.b.max(other.b))
    }

    /// Overlapping sub-range; empty if the intervals are disjoint.
    pub fn intersection(&self, other: &Interval) -> Interval {
        Interval::of(self.a.max(other.a), self.b.min(other.b))
    }

    /// Remainder of `self` after removing a one-sided overlap with `other`.
    ///
    /// Handles exactly the two cases where the remainder is a single
    /// contiguous range: `other` overlapping `self`'s start, or `other`
    /// overlapping `self`'s end. When the intervals are disjoint there is
    /// no overlap to remove and the result is `None`; when `other` covers
    /// all of `self` the remainder comes back empty. This is a partial
    /// operation, not a general set difference.
    pub fn difference_not_properly_contained(&self, other: &Interval) -> Option<Interval> {
        if other.starts_before_non_disjoint(self) {
            Some(Interval::of(self.a.max(other.b + 1), self.b))
        } else if other.starts_after_non_disjoint(self) {
            Some(Interval::of(self.a, other.a - 1))
        } else {
            None
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.a, self.b)
    }
}
