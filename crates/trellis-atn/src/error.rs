//! Errors surfaced by lookahead queries.

/// Failures of [`Atn::expected_tokens`](crate::Atn::expected_tokens).
///
/// Both variants indicate a caller bug or a corrupt graph; neither is a
/// transient condition worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AtnError {
    /// State number outside the ATN, or pointing at a removed state.
    #[error("invalid state number: {0}")]
    InvalidStateNumber(usize),

    /// A rule context recorded an invoking state that does not begin with
    /// a rule transition, so there is no follow state to resume at.
    #[error("state {0} does not start with a rule transition")]
    MissingRuleTransition(usize),
}
