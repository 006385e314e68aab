//! A set of integers backed by sorted, disjoint intervals.
//!
//! Particularly efficient for vocabularies where most members fall into a
//! few sequential runs: `{ 1, 2, 3, 4, 7, 8 }` is stored as
//! `{ [1..4], [7..8] }`. Any combination of `i32` values can be
//! represented.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use crate::interval::Interval;
use crate::token;
use crate::vocabulary::Vocabulary;

/// An ordered set of integers stored as sorted, pairwise-disjoint,
/// non-adjacent intervals.
///
/// Every mutator re-establishes the storage invariant immediately, so the
/// interval list is always coalesced between operations. A set can be
/// frozen permanently with [`set_readonly`](IntervalSet::set_readonly);
/// mutating a frozen set is a caller bug and panics.
///
/// Serialization round-trips through the raw interval list and
/// re-normalizes on the way back in; the readonly flag is a runtime
/// property and is not carried.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(from = "Vec<Interval>", into = "Vec<Interval>")]
pub struct IntervalSet {
    intervals: Vec<Interval>,
    readonly: bool,
}

/// The full lexer vocabulary `0..=0x10FFFF`, frozen at first use and shared
/// by all readers.
pub static COMPLETE_CHAR_SET: LazyLock<IntervalSet> = LazyLock::new(|| {
    let mut set = IntervalSet::of_range(token::MIN_CHAR_VALUE, token::MAX_CHAR_VALUE);
    set.set_readonly(true);
    set
});

/// The frozen empty set.
pub static EMPTY_SET: LazyLock<IntervalSet> = LazyLock::new(|| {
    let mut set = IntervalSet::new();
    set.set_readonly(true);
    set
});

impl IntervalSet {
    pub fn new() -> IntervalSet {
        IntervalSet::default()
    }

    /// Set containing the single element `el`.
    pub fn of(el: i32) -> IntervalSet {
        let mut set = IntervalSet::new();
        set.add(el);
        set
    }

    /// Set containing every integer in `a..=b` (inclusive).
    pub fn of_range(a: i32, b: i32) -> IntervalSet {
        let mut set = IntervalSet::new();
        set.add_range(a, b);
        set
    }

    fn check_writable(&self) {
        assert!(!self.readonly, "can't alter readonly IntervalSet");
    }

    /// Add a single element. An isolated element is stored as `el..el`.
    ///
    /// # Panics
    /// Panics if the set is readonly.
    pub fn add(&mut self, el: i32) {
        self.add_range(el, el);
    }

    /// Add every integer in `a..=b`. Does nothing if `b < a`.
    ///
    /// # Panics
    /// Panics if the set is readonly.
    pub fn add_range(&mut self, a: i32, b: i32) {
        self.add_interval(Interval::of(a, b));
    }

    /// Insert an interval, keeping the list sorted by lower bound and
    /// merging any overlap or adjacency. Adding `4..8` to
    /// `{1..5, 10..20}` yields `{1..8, 10..20}`; the merged interval keeps
    /// cascading forward as long as it touches the next one.
    ///
    /// # Panics
    /// Panics if the set is readonly.
    pub fn add_interval(&mut self, addition: Interval) {
        self.check_writable();

        if addition.b < addition.a {
            return;
        }

        let mut i = 0;
        while i < self.intervals.len() {
            let r = self.intervals[i];
            if addition == r {
                return;
            }

            if addition.adjacent(&r) || !addition.disjoint(&r) {
                // next to each other, make a single larger interval
                let mut bigger = addition.union(&r);
                self.intervals[i] = bigger;

                // the grown interval may now bump up against or overlap
                // what follows it; keep merging forward
                while i + 1 < self.intervals.len() {
                    let next = self.intervals[i + 1];
                    if !bigger.adjacent(&next) && bigger.disjoint(&next) {
                        break;
                    }
                    self.intervals.remove(i + 1);
                    bigger = bigger.union(&next);
                    self.intervals[i] = bigger;
                }
                return;
            }

            if addition.starts_before_disjoint(&r) {
                self.intervals.insert(i, addition);
                return;
            }

            // disjoint and after r; a later iteration handles it
            i += 1;
        }

        // after the last interval and disjoint from it
        self.intervals.push(addition);
    }

    /// Union every interval of `other` into `self`.
    ///
    /// # Panics
    /// Panics if the set is readonly.
    pub fn add_all(&mut self, other: &IntervalSet) {
        self.check_writable();
        for iv in &other.intervals {
            self.add_interval(*iv);
        }
    }

    /// Non-mutating union.
    pub fn union(&self, other: &IntervalSet) -> IntervalSet {
        let mut result = IntervalSet::new();
        result.add_all(self);
        result.add_all(other);
        result
    }

    /// Intersection via a two-pointer walk over both sorted interval lists.
    pub fn intersect(&self, other: &IntervalSet) -> IntervalSet {
        let mine = &self.intervals;
        let theirs = &other.intervals;
        let mut intersection = IntervalSet::new();

        let mut i = 0;
        let mut j = 0;
        while i < mine.len() && j < theirs.len() {
            let m = mine[i];
            let t = theirs[j];

            if m.starts_before_disjoint(&t) {
                i += 1;
            } else if t.starts_before_disjoint(&m) {
                j += 1;
            } else if m.properly_contains(&t) {
                intersection.add_interval(m.intersection(&t));
                j += 1;
            } else if t.properly_contains(&m) {
                intersection.add_interval(m.intersection(&t));
                i += 1;
            } else if !m.disjoint(&t) {
                intersection.add_interval(m.intersection(&t));
                // Advance only the side fully consumed by the overlap. If
                // mine=[0..115] and theirs=[115..200], the intersection is
                // 115 and theirs may still collide with the next interval
                // of mine, so only mine moves on.
                if m.starts_after_non_disjoint(&t) {
                    j += 1;
                } else if t.starts_after_non_disjoint(&m) {
                    i += 1;
                }
            }
        }

        intersection
    }

    /// Set difference `self - other`.
    pub fn subtract(&self, other: &IntervalSet) -> IntervalSet {
        if self.is_nil() {
            return IntervalSet::new();
        }

        let mut result = IntervalSet::new();
        result.intervals = self.intervals.clone();

        if other.is_nil() {
            return result;
        }

        let mut result_i = 0;
        let mut right_i = 0;
        while result_i < result.intervals.len() && right_i < other.intervals.len() {
            let left = result.intervals[result_i];
            let right = other.intervals[right_i];

            if right.b < left.a {
                right_i += 1;
                continue;
            }
            if right.a > left.b {
                result_i += 1;
                continue;
            }

            let before = (right.a > left.a).then(|| Interval::of(left.a, right.a - 1));
            let after = (right.b < left.b).then(|| Interval::of(right.b + 1, left.b));

            match (before, after) {
                (Some(before), Some(after)) => {
                    // split the current interval in two
                    result.intervals[result_i] = before;
                    result.intervals.insert(result_i + 1, after);
                    result_i += 1;
                    right_i += 1;
                }
                (Some(before), None) => {
                    result.intervals[result_i] = before;
                    result_i += 1;
                }
                (None, Some(after)) => {
                    result.intervals[result_i] = after;
                    right_i += 1;
                }
                (None, None) => {
                    // nothing of the current interval survives
                    result.intervals.remove(result_i);
                }
            }
        }

        result
    }

    /// Every element of `vocabulary` not in `self`, or `None` when the
    /// universe is empty.
    pub fn complement(&self, vocabulary: &IntervalSet) -> Option<IntervalSet> {
        if vocabulary.is_nil() {
            return None;
        }
        Some(vocabulary.subtract(self))
    }

    /// Complement against the universe `min..=max`.
    pub fn complement_range(&self, min: i32, max: i32) -> Option<IntervalSet> {
        self.complement(&IntervalSet::of_range(min, max))
    }

    /// Binary search over the sorted, disjoint interval list.
    pub fn contains(&self, el: i32) -> bool {
        let mut lo = 0isize;
        let mut hi = self.intervals.len() as isize - 1;
        while lo <= hi {
            let mid = (lo + hi) / 2;
            let iv = self.intervals[mid as usize];
            if iv.b < el {
                lo = mid + 1;
            } else if iv.a > el {
                hi = mid - 1;
            } else {
                return true;
            }
        }
        false
    }

    pub fn is_nil(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Smallest member of the set.
    ///
    /// # Panics
    /// Panics if the set is empty.
    pub fn min_element(&self) -> i32 {
        assert!(!self.is_nil(), "set is empty");
        self.intervals[0].a
    }

    /// Largest member of the set.
    ///
    /// # Panics
    /// Panics if the set is empty.
    pub fn max_element(&self) -> i32 {
        assert!(!self.is_nil(), "set is empty");
        self.intervals[self.intervals.len() - 1].b
    }

    /// Number of distinct integers in the set.
    pub fn size(&self) -> usize {
        self.intervals.iter().map(Interval::length).sum()
    }

    /// The underlying sorted, disjoint intervals.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Iterate members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.intervals.iter().flat_map(|iv| iv.a..=iv.b)
    }

    /// Materialize all members in ascending order. Intended for small sets
    /// (diagnostics, tests), not production-size vocabularies.
    pub fn to_list(&self) -> Vec<i32> {
        self.iter().collect()
    }

    /// Materialize members as a hash set. Small sets only.
    pub fn to_set(&self) -> HashSet<i32> {
        self.iter().collect()
    }

    /// The `i`th member of the ordered set, if any. Small sets only.
    pub fn element(&self, i: usize) -> Option<i32> {
        self.iter().nth(i)
    }

    /// Remove a single element, shrinking or splitting the containing
    /// interval as needed.
    ///
    /// # Panics
    /// Panics if the set is readonly.
    pub fn remove(&mut self, el: i32) {
        self.check_writable();

        for i in 0..self.intervals.len() {
            let iv = self.intervals[i];
            if el < iv.a {
                // list is sorted; el precedes every remaining interval
                break;
            }

            if el == iv.a && el == iv.b {
                self.intervals.remove(i);
                break;
            }
            if el == iv.a {
                self.intervals[i].a += 1;
                break;
            }
            if el == iv.b {
                self.intervals[i].b -= 1;
                break;
            }
            if el > iv.a && el < iv.b {
                // split a..b around el
                let old_b = iv.b;
                self.intervals[i].b = el - 1;
                self.add_range(el + 1, old_b);
                break;
            }
        }
    }

    /// Drop all members.
    ///
    /// # Panics
    /// Panics if the set is readonly.
    pub fn clear(&mut self) {
        self.check_writable();
        self.intervals.clear();
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// Freeze or (fail to) unfreeze the set. Freezing is permanent;
    /// freezing twice is a no-op.
    ///
    /// # Panics
    /// Panics when asked to unfreeze a frozen set.
    pub fn set_readonly(&mut self, readonly: bool) {
        assert!(
            readonly || !self.readonly,
            "can't alter readonly IntervalSet"
        );
        self.readonly = readonly;
    }

    fn format(&self, elems_are_char: bool) -> String {
        if self.intervals.is_empty() {
            return "{}".to_owned();
        }

        let mut buf = String::new();
        let braces = self.size() > 1;
        if braces {
            buf.push('{');
        }

        for (index, iv) in self.intervals.iter().enumerate() {
            if index > 0 {
                buf.push_str(", ");
            }
            if iv.a == iv.b {
                if iv.a == token::EOF {
                    buf.push_str("<EOF>");
                } else if elems_are_char {
                    buf.push('\'');
                    buf.push(char_for(iv.a));
                    buf.push('\'');
                } else {
                    buf.push_str(&iv.a.to_string());
                }
            } else if elems_are_char {
                buf.push('\'');
                buf.push(char_for(iv.a));
                buf.push_str("'..'");
                buf.push(char_for(iv.b));
                buf.push('\'');
            } else {
                buf.push_str(&iv.a.to_string());
                buf.push_str("..");
                buf.push_str(&iv.b.to_string());
            }
        }

        if braces {
            buf.push('}');
        }
        buf
    }

    /// Render members as quoted character literals.
    pub fn to_char_string(&self) -> String {
        self.format(true)
    }

    /// Render members by display name, expanding every member of
    /// multi-element intervals individually.
    pub fn to_token_string(&self, vocabulary: &dyn Vocabulary) -> String {
        if self.intervals.is_empty() {
            return "{}".to_owned();
        }

        let mut buf = String::new();
        let braces = self.size() > 1;
        if braces {
            buf.push('{');
        }

        for (index, iv) in self.intervals.iter().enumerate() {
            if index > 0 {
                buf.push_str(", ");
            }
            if iv.a == iv.b {
                buf.push_str(&element_name(vocabulary, iv.a));
            } else {
                for v in iv.a..=iv.b {
                    if v > iv.a {
                        buf.push_str(", ");
                    }
                    buf.push_str(&element_name(vocabulary, v));
                }
            }
        }

        if braces {
            buf.push('}');
        }
        buf
    }
}

fn element_name(vocabulary: &dyn Vocabulary, token_type: i32) -> String {
    match token_type {
        token::EOF => "<EOF>".to_owned(),
        token::EPSILON => "<EPSILON>".to_owned(),
        _ => vocabulary.display_name(token_type),
    }
}

fn char_for(code: i32) -> char {
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl From<Vec<Interval>> for IntervalSet {
    /// Re-normalizes: out-of-order, overlapping, or adjacent input
    /// intervals are coalesced on the way in.
    fn from(intervals: Vec<Interval>) -> IntervalSet {
        let mut set = IntervalSet::new();
        for iv in intervals {
            set.add_interval(iv);
        }
        set
    }
}

impl From<IntervalSet> for Vec<Interval> {
    fn from(set: IntervalSet) -> Vec<Interval> {
        set.intervals
    }
}

impl FromIterator<i32> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> IntervalSet {
        let mut set = IntervalSet::new();
        for el in iter {
            set.add(el);
        }
        set
    }
}

// All intervals are sorted and disjoint, so equality is a straight compare
// of the two lists. The readonly flag is a runtime property, not part of
// the set's value.
impl PartialEq for IntervalSet {
    fn eq(&self, other: &IntervalSet) -> bool {
        self.intervals == other.intervals
    }
}

impl Eq for IntervalSet {}

impl Hash for IntervalSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for iv in &self.intervals {
            iv.a.hash(state);
            iv.b.hash(state);
        }
    }
}

impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}
