#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Transition network graph model and lookahead for the Trellis recognizer.
//!
//! The [`Atn`] is the graph of a grammar's recognition paths: states
//! ([`AtnState`]) connected by tagged edges ([`Transition`]), built once by
//! an external deserializer and then queried read-only during parsing. The
//! queries implemented here compute which input symbols are valid at a
//! given state — rule-local via [`Atn::next_tokens`], and across the whole
//! caller chain via [`Atn::expected_tokens`].
//!
//! The epsilon-closure analysis itself ([`Ll1Lookahead`]) and the caller
//! chain ([`RuleContext`]) are collaborator seams owned by the surrounding
//! engine.

pub mod atn;
pub mod context;
pub mod error;
pub mod lexer_action;
pub mod lookahead;
pub mod state;
pub mod transition;

#[cfg(test)]
mod transition_tests;

pub use atn::{Atn, GrammarType, INVALID_ALT_NUMBER};
pub use context::RuleContext;
pub use error::AtnError;
pub use lexer_action::LexerAction;
pub use lookahead::Ll1Lookahead;
pub use state::{AtnState, StateId, StateKind};
pub use transition::Transition;
