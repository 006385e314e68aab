//! The transition network graph and its lookahead queries.

use indexmap::IndexMap;
use trellis_core::{IntervalSet, token};

use crate::context::RuleContext;
use crate::error::AtnError;
use crate::lexer_action::LexerAction;
use crate::lookahead::Ll1Lookahead;
use crate::state::{AtnState, StateId, StateKind};
use crate::transition::Transition;

/// Which kind of grammar produced this network.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GrammarType {
    Lexer,
    Parser,
}

/// Sentinel alternative number meaning "no alternative predicted yet".
pub const INVALID_ALT_NUMBER: u32 = 0;

/// The complete recognition graph of one grammar.
///
/// Populated once by the external deserializer — states inserted in final
/// numeric order, transitions wired, derived indices filled — and treated
/// as immutable afterwards. The only runtime mutation is each state's
/// write-once lookahead cache, so a shared `&Atn` can serve concurrent
/// lookahead queries.
#[derive(Debug)]
pub struct Atn {
    /// State arena indexed by [`StateId`]. Removed states leave `None`
    /// tombstones; slots never shift.
    states: Vec<Option<AtnState>>,
    /// Decision number -> state. Every subrule/rule alternative fork is
    /// registered here so the prediction engine can build a DFA per
    /// decision.
    decision_to_state: Vec<StateId>,
    /// Rule index -> rule start state.
    pub rule_to_start_state: Vec<StateId>,
    /// Rule index -> rule stop state.
    pub rule_to_stop_state: Vec<StateId>,
    /// For lexer grammars, rule index -> emitted token type. For parser
    /// grammars, rule index -> bypass token type when bypass edges were
    /// requested at deserialization.
    pub rule_to_token_type: Vec<i32>,
    /// Lexer mode name -> mode start state, in declaration order.
    pub mode_name_to_start_state: IndexMap<String, StateId>,
    /// Lexer mode number -> mode start state.
    pub mode_to_start_state: Vec<StateId>,
    /// Lexer commands referenced by index from action transitions.
    pub lexer_actions: Vec<LexerAction>,
    grammar_type: GrammarType,
    max_token_type: i32,
}

impl Atn {
    pub fn new(grammar_type: GrammarType, max_token_type: i32) -> Atn {
        Atn {
            states: Vec::new(),
            decision_to_state: Vec::new(),
            rule_to_start_state: Vec::new(),
            rule_to_stop_state: Vec::new(),
            rule_to_token_type: Vec::new(),
            mode_name_to_start_state: IndexMap::new(),
            mode_to_start_state: Vec::new(),
            lexer_actions: Vec::new(),
            grammar_type,
            max_token_type,
        }
    }

    pub fn grammar_type(&self) -> GrammarType {
        self.grammar_type
    }

    pub fn max_token_type(&self) -> i32 {
        self.max_token_type
    }

    /// Append a state to the arena, assigning it the next sequential id.
    pub fn add_state(&mut self, kind: StateKind, rule_index: usize) -> StateId {
        let id = StateId::from_index(self.states.len());
        self.states.push(Some(AtnState::new(id, kind, rule_index)));
        id
    }

    /// Tombstone a state's slot. Other states keep their numbers: ids are
    /// referenced externally and must stay stable.
    pub fn remove_state(&mut self, id: StateId) {
        if let Some(slot) = self.states.get_mut(id.index()) {
            *slot = None;
        }
    }

    pub fn state(&self, id: StateId) -> Option<&AtnState> {
        self.states.get(id.index()).and_then(Option::as_ref)
    }

    pub fn state_mut(&mut self, id: StateId) -> Option<&mut AtnState> {
        self.states.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Number of state slots, tombstones included.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// All live states.
    pub fn states(&self) -> impl Iterator<Item = &AtnState> {
        self.states.iter().filter_map(Option::as_ref)
    }

    /// Register a decision point, assigning it the next decision number.
    pub fn define_decision_state(&mut self, id: StateId) -> u32 {
        self.decision_to_state.push(id);
        let decision = (self.decision_to_state.len() - 1) as u32;
        if let Some(state) = self.state_mut(id) {
            state.set_decision(decision);
        }
        decision
    }

    pub fn decision_state(&self, decision: usize) -> Option<StateId> {
        self.decision_to_state.get(decision).copied()
    }

    pub fn num_decisions(&self) -> usize {
        self.decision_to_state.len()
    }

    /// Tokens that can occur starting in `state` without leaving its rule.
    /// `EPSILON` is in the set when the rule can complete from here
    /// without consuming input.
    ///
    /// The first query runs the analyzer, freezes the result, and caches
    /// it on the state; later queries return the frozen set.
    pub fn next_tokens<'a>(
        &'a self,
        state: &'a AtnState,
        analyzer: &dyn Ll1Lookahead,
    ) -> &'a IntervalSet {
        state.next_token_cache().get_or_init(|| {
            let mut tokens = analyzer.look(self, state.id());
            tokens.set_readonly(true);
            tokens
        })
    }

    /// Input symbols that could follow `state` given the full caller
    /// chain `context`.
    ///
    /// Starts from the rule-local lookahead; while that set says the rule
    /// can complete (`EPSILON`), climbs one context frame at a time,
    /// merging in the lookahead at each caller's follow state. If the
    /// chain runs out with `EPSILON` still pending, the outermost rule can
    /// complete and `EOF` joins the result. The returned set never
    /// contains `EPSILON`.
    ///
    /// Note this answers "what is valid at this parser state", the
    /// question error reporting needs — not "what could follow this
    /// partial input", which is a different computation.
    pub fn expected_tokens(
        &self,
        state: StateId,
        context: Option<&dyn RuleContext>,
        analyzer: &dyn Ll1Lookahead,
    ) -> Result<IntervalSet, AtnError> {
        let s = self
            .state(state)
            .ok_or(AtnError::InvalidStateNumber(state.index()))?;

        let mut following = self.next_tokens(s, analyzer);
        if !following.contains(token::EPSILON) {
            return Ok(following.clone());
        }

        let mut expected = IntervalSet::new();
        expected.add_all(following);
        expected.remove(token::EPSILON);

        let mut ctx = context;
        while let Some(frame) = ctx {
            if !following.contains(token::EPSILON) {
                break;
            }
            let Some(invoking) = frame.invoking_state() else {
                break;
            };
            let invoking_state = self
                .state(invoking)
                .ok_or(AtnError::InvalidStateNumber(invoking.index()))?;
            let Some(Transition::Rule { follow_state, .. }) =
                invoking_state.transitions().first()
            else {
                return Err(AtnError::MissingRuleTransition(invoking.index()));
            };
            let follow = self
                .state(*follow_state)
                .ok_or(AtnError::InvalidStateNumber(follow_state.index()))?;

            following = self.next_tokens(follow, analyzer);
            expected.add_all(following);
            expected.remove(token::EPSILON);

            ctx = frame.parent();
        }

        if following.contains(token::EPSILON) {
            expected.add(token::EOF);
        }

        Ok(expected)
    }
}
