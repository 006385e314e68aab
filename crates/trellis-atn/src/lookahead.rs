//! The epsilon-closure analyzer seam.

use trellis_core::IntervalSet;

use crate::atn::Atn;
use crate::state::StateId;

/// Full epsilon-closure lookahead, owned by the surrounding prediction
/// engine.
///
/// [`Atn::next_tokens`] delegates to this with no caller context: the
/// result is the set of tokens reachable from `state` while staying in its
/// rule, with `EPSILON` included when the rule can complete without
/// consuming input. The computation must be pure — the ATN memoizes the
/// result per state and a redundant concurrent computation must yield the
/// same value.
pub trait Ll1Lookahead {
    fn look(&self, atn: &Atn, state: StateId) -> IntervalSet;
}
