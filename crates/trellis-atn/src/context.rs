//! The caller-chain seam.

use crate::state::StateId;

/// One frame of the rule invocation chain, read during expected-token
/// queries.
///
/// Implemented by the surrounding parser's context objects; this layer
/// only ever reads the two fields and never mutates a context. `None`
/// from [`invoking_state`](RuleContext::invoking_state) marks a frame with
/// no caller; `None` from [`parent`](RuleContext::parent) marks the
/// outermost frame.
pub trait RuleContext {
    fn invoking_state(&self) -> Option<StateId>;
    fn parent(&self) -> Option<&dyn RuleContext>;
}
