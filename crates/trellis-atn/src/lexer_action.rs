//! Deserialized lexer command records.

/// A lexer command attached to the ATN and referenced by index from action
/// transitions.
///
/// Opaque at this layer: records are carried through deserialization and
/// executed only by the external lexer engine.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum LexerAction {
    /// Switch the emitted token to the given channel.
    Channel(i32),
    /// Run a grammar-defined action block.
    Custom {
        rule_index: usize,
        action_index: usize,
    },
    /// Set the lexer mode.
    Mode(i32),
    /// Keep matching, extending the current token.
    More,
    /// Pop the mode stack.
    PopMode,
    /// Push the given mode.
    PushMode(i32),
    /// Discard the matched token.
    Skip,
    /// Override the emitted token type.
    TokenType(i32),
}
