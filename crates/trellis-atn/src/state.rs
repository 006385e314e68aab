//! Nodes of the transition network.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use trellis_core::IntervalSet;

use crate::transition::Transition;

/// Stable index of a state within its owning [`Atn`](crate::Atn).
///
/// Ids are assigned at insertion and never reassigned or compacted, even
/// after removal: the serialized grammar form and caller contexts hold
/// them, so a removed state leaves a tombstoned slot behind.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StateId(u32);

impl StateId {
    pub fn from_index(index: usize) -> StateId {
        StateId(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of state roles.
///
/// Every state is either a structural marker (rule boundaries, block
/// boundaries, loop plumbing) or a decision point. Decision variants carry
/// their decision number, assigned by
/// [`Atn::define_decision_state`](crate::Atn::define_decision_state).
/// Cross-links (`stop_state`, `end_state`, `loop_back`) are wired by the
/// deserializer after all states exist.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StateKind {
    Basic,
    RuleStart {
        stop_state: Option<StateId>,
        is_left_recursive: bool,
    },
    /// Last state in a rule; epsilon edges out of it return to callers.
    RuleStop,
    BlockStart {
        end_state: Option<StateId>,
        decision: Option<u32>,
    },
    PlusBlockStart {
        end_state: Option<StateId>,
        loop_back: Option<StateId>,
        decision: Option<u32>,
    },
    StarBlockStart {
        end_state: Option<StateId>,
        decision: Option<u32>,
    },
    /// Lexer mode entry point.
    TokenStart {
        decision: Option<u32>,
    },
    BlockEnd {
        start_state: Option<StateId>,
    },
    StarLoopBack,
    StarLoopEntry {
        loop_back: Option<StateId>,
        is_precedence_decision: bool,
        decision: Option<u32>,
    },
    PlusLoopBack {
        decision: Option<u32>,
    },
    LoopEnd {
        loop_back: Option<StateId>,
    },
}

impl StateKind {
    pub fn is_decision(&self) -> bool {
        matches!(
            self,
            StateKind::BlockStart { .. }
                | StateKind::PlusBlockStart { .. }
                | StateKind::StarBlockStart { .. }
                | StateKind::TokenStart { .. }
                | StateKind::StarLoopEntry { .. }
                | StateKind::PlusLoopBack { .. }
        )
    }

    pub fn decision(&self) -> Option<u32> {
        match *self {
            StateKind::BlockStart { decision, .. }
            | StateKind::PlusBlockStart { decision, .. }
            | StateKind::StarBlockStart { decision, .. }
            | StateKind::TokenStart { decision }
            | StateKind::StarLoopEntry { decision, .. }
            | StateKind::PlusLoopBack { decision } => decision,
            _ => None,
        }
    }

    fn decision_slot(&mut self) -> Option<&mut Option<u32>> {
        match self {
            StateKind::BlockStart { decision, .. }
            | StateKind::PlusBlockStart { decision, .. }
            | StateKind::StarBlockStart { decision, .. }
            | StateKind::TokenStart { decision }
            | StateKind::StarLoopEntry { decision, .. }
            | StateKind::PlusLoopBack { decision } => Some(decision),
            _ => None,
        }
    }
}

/// A node of the transition network.
///
/// States are arena-resident: they are created through
/// [`Atn::add_state`](crate::Atn::add_state), which assigns the stable id,
/// and reference each other only by id. Equality and hashing go by id
/// alone.
#[derive(Debug)]
pub struct AtnState {
    id: StateId,
    rule_index: usize,
    kind: StateKind,
    transitions: Vec<Transition>,
    epsilon_only_transitions: bool,
    /// Tokens reachable while staying in this state's rule. Computed once
    /// during parsing, frozen, then shared; never used during
    /// construction.
    next_token_within_rule: OnceLock<IntervalSet>,
}

impl AtnState {
    pub(crate) fn new(id: StateId, kind: StateKind, rule_index: usize) -> AtnState {
        AtnState {
            id,
            rule_index,
            kind,
            transitions: Vec::new(),
            epsilon_only_transitions: false,
            next_token_within_rule: OnceLock::new(),
        }
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn rule_index(&self) -> usize {
        self.rule_index
    }

    pub fn set_rule_index(&mut self, rule_index: usize) {
        self.rule_index = rule_index;
    }

    pub fn kind(&self) -> &StateKind {
        &self.kind
    }

    /// Mutable role access for the deserializer's link-patching pass.
    pub fn kind_mut(&mut self) -> &mut StateKind {
        &mut self.kind
    }

    pub fn is_decision(&self) -> bool {
        self.kind.is_decision()
    }

    pub fn decision(&self) -> Option<u32> {
        self.kind.decision()
    }

    pub(crate) fn set_decision(&mut self, decision: u32) {
        let slot = self.kind.decision_slot();
        debug_assert!(slot.is_some(), "state {} is not a decision state", self.id);
        if let Some(slot) = slot {
            *slot = Some(decision);
        }
    }

    /// Append an outgoing edge.
    pub fn add_transition(&mut self, transition: Transition) {
        self.add_transition_at(self.transitions.len(), transition);
    }

    /// Insert an outgoing edge at `index`.
    ///
    /// Maintains the all-epsilon flag: the first non-epsilon edge added to
    /// a previously all-epsilon state is reported (grammars should not mix
    /// the two from one state) and clears the flag. Inserting an edge that
    /// duplicates an existing one — same target with equal labels, or a
    /// second epsilon edge to the same target — is a silent no-op.
    pub fn add_transition_at(&mut self, index: usize, transition: Transition) {
        if self.transitions.is_empty() {
            self.epsilon_only_transitions = transition.is_epsilon();
        } else if self.epsilon_only_transitions != transition.is_epsilon() {
            log::warn!(
                "ATN state {} has both epsilon and non-epsilon transitions",
                self.id
            );
            self.epsilon_only_transitions = false;
        }

        let already_present = self.transitions.iter().any(|existing| {
            existing.target() == transition.target()
                && match (existing.label(), transition.label()) {
                    (Some(a), Some(b)) => a == b,
                    _ => existing.is_epsilon() && transition.is_epsilon(),
                }
        });

        if !already_present {
            self.transitions.insert(index, transition);
        }
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn num_transitions(&self) -> usize {
        self.transitions.len()
    }

    /// The `i`th outgoing edge.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    pub fn transition(&self, i: usize) -> &Transition {
        &self.transitions[i]
    }

    /// Replace the `i`th outgoing edge.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    pub fn set_transition(&mut self, i: usize, transition: Transition) {
        self.transitions[i] = transition;
    }

    /// Remove and return the `i`th outgoing edge.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    pub fn remove_transition(&mut self, i: usize) -> Transition {
        self.transitions.remove(i)
    }

    pub fn only_has_epsilon_transitions(&self) -> bool {
        self.epsilon_only_transitions
    }

    /// The frozen rule-local lookahead set, if it has been computed.
    pub fn next_token_within_rule(&self) -> Option<&IntervalSet> {
        self.next_token_within_rule.get()
    }

    pub(crate) fn next_token_cache(&self) -> &OnceLock<IntervalSet> {
        &self.next_token_within_rule
    }
}

impl PartialEq for AtnState {
    fn eq(&self, other: &AtnState) -> bool {
        self.id == other.id
    }
}

impl Eq for AtnState {}

impl Hash for AtnState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for AtnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
