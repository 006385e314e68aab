//! Reserved token-type values shared by the whole recognizer.

/// End of input. May appear in expected-token sets when input can
/// legitimately end at the queried point.
pub const EOF: i32 = -1;

/// Marker for "the surrounding rule can complete without consuming input".
/// Only ever present in rule-local lookahead sets, never in final
/// expected-token sets.
pub const EPSILON: i32 = -2;

/// Token type of unclassified input.
pub const INVALID_TYPE: i32 = 0;

/// Smallest token type a grammar may assign.
pub const MIN_USER_TOKEN_TYPE: i32 = 1;

/// Smallest input symbol a lexer transition can match.
pub const MIN_CHAR_VALUE: i32 = 0;

/// Largest input symbol a lexer transition can match (the last Unicode
/// code point).
pub const MAX_CHAR_VALUE: i32 = 0x10FFFF;
