#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Interval algebra and token primitives for the Trellis recognizer.
//!
//! Two layers:
//! - **Interval**: a closed integer range `a..=b` with relational predicates
//! - **IntervalSet**: a sorted, disjoint, coalesced collection of intervals
//!   with full set algebra, used to label transitions and to answer
//!   lookahead queries
//!
//! Reserved token values (`EOF`, `EPSILON`, ...) live in [`token`]; the
//! [`Vocabulary`] trait is the seam to symbolic token names, consumed only
//! by the diagnostic formatter.

pub mod interval;
pub mod interval_set;
pub mod token;
pub mod vocabulary;

#[cfg(test)]
mod interval_tests;

pub use interval::Interval;
pub use interval_set::{COMPLETE_CHAR_SET, EMPTY_SET, IntervalSet};
pub use vocabulary::Vocabulary;
