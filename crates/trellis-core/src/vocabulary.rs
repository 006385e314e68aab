//! Symbolic token-name lookup.

/// Maps token types to human-readable display names.
///
/// Implemented by the surrounding recognizer; this layer only consumes it
/// from [`IntervalSet::to_token_string`](crate::IntervalSet::to_token_string).
/// Reserved values (`EOF`, `EPSILON`) are rendered by the formatter itself
/// and never reach the vocabulary.
pub trait Vocabulary {
    fn display_name(&self, token_type: i32) -> String;
}
