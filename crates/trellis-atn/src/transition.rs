//! Tagged edges of the transition network.

use trellis_core::IntervalSet;

use crate::state::StateId;

/// A directed edge between two ATN states.
///
/// Edges are one-way links fixed at construction; only the DFA layer of
/// the surrounding engine ever relabels edges, never the ATN. The target
/// is a mandatory state id, so the corrupt-graph case of an absent target
/// cannot be constructed.
///
/// Epsilon-family edges (epsilon, rule, predicate, precedence-predicate,
/// action) consume no input; the label-bearing family (range, atom, set,
/// not-set, wildcard) matches input symbols.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    Epsilon {
        target: StateId,
        /// Rule index of a precedence rule for which this transition is
        /// returning from, where the transition target is the outermost
        /// follow state.
        outermost_precedence_return: Option<usize>,
    },
    Range {
        target: StateId,
        start: i32,
        stop: i32,
    },
    Atom {
        target: StateId,
        label: i32,
    },
    Set {
        target: StateId,
        set: IntervalSet,
    },
    NotSet {
        target: StateId,
        set: IntervalSet,
    },
    Wildcard {
        target: StateId,
    },
    Rule {
        /// Start state of the called rule.
        target: StateId,
        rule_index: usize,
        precedence: i32,
        /// State to resume at after the called rule returns.
        follow_state: StateId,
    },
    Predicate {
        target: StateId,
        rule_index: usize,
        pred_index: usize,
        is_ctx_dependent: bool,
    },
    PrecedencePredicate {
        target: StateId,
        precedence: i32,
    },
    Action {
        target: StateId,
        rule_index: usize,
        action_index: usize,
        is_ctx_dependent: bool,
    },
}

impl Transition {
    pub fn epsilon(target: StateId) -> Transition {
        Transition::Epsilon {
            target,
            outermost_precedence_return: None,
        }
    }

    pub fn target(&self) -> StateId {
        match *self {
            Transition::Epsilon { target, .. }
            | Transition::Range { target, .. }
            | Transition::Atom { target, .. }
            | Transition::Set { target, .. }
            | Transition::NotSet { target, .. }
            | Transition::Wildcard { target }
            | Transition::Rule { target, .. }
            | Transition::Predicate { target, .. }
            | Transition::PrecedencePredicate { target, .. }
            | Transition::Action { target, .. } => target,
        }
    }

    /// Whether traversing this edge consumes no input symbol.
    pub fn is_epsilon(&self) -> bool {
        matches!(
            self,
            Transition::Epsilon { .. }
                | Transition::Rule { .. }
                | Transition::Predicate { .. }
                | Transition::PrecedencePredicate { .. }
                | Transition::Action { .. }
        )
    }

    /// The set of input symbols this edge matches, for the variants that
    /// carry one. Wildcard has no explicit label — its coverage depends on
    /// the vocabulary bounds passed to [`matches`](Transition::matches).
    pub fn label(&self) -> Option<IntervalSet> {
        match self {
            Transition::Range { start, stop, .. } => Some(IntervalSet::of_range(*start, *stop)),
            Transition::Atom { label, .. } => Some(IntervalSet::of(*label)),
            Transition::Set { set, .. } | Transition::NotSet { set, .. } => Some(set.clone()),
            _ => None,
        }
    }

    /// Does this edge match `symbol` within the vocabulary
    /// `min_vocab..=max_vocab`? Epsilon-family edges never match.
    pub fn matches(&self, symbol: i32, min_vocab: i32, max_vocab: i32) -> bool {
        match self {
            Transition::Range { start, stop, .. } => symbol >= *start && symbol <= *stop,
            Transition::Atom { label, .. } => *label == symbol,
            Transition::Set { set, .. } => set.contains(symbol),
            Transition::NotSet { set, .. } => {
                symbol >= min_vocab && symbol <= max_vocab && !set.contains(symbol)
            }
            Transition::Wildcard { .. } => symbol >= min_vocab && symbol <= max_vocab,
            Transition::Epsilon { .. }
            | Transition::Rule { .. }
            | Transition::Predicate { .. }
            | Transition::PrecedencePredicate { .. }
            | Transition::Action { .. } => false,
        }
    }
}
