use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant records the byte offset in the expression at which the
/// problem was detected.
pub enum ParseError {
    /// A character that starts no token.
    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedCharacter {
        /// The offending character.
        found:    char,
        /// Byte offset of the character.
        position: usize,
    },
    /// A numeric literal without digits after its point or exponent marker.
    #[error("malformed number literal at position {position}")]
    MalformedNumber {
        /// Byte offset where the literal starts.
        position: usize,
    },
    /// Found a token that cannot start an operand.
    #[error("unexpected {found} at position {position}")]
    UnexpectedToken {
        /// Description of the token encountered.
        found:    &'static str,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input while an operand was still required.
    #[error("unexpected end of input at position {position}")]
    UnexpectedEndOfInput {
        /// Length of the expression.
        position: usize,
    },
    /// A specific token was required but something else was found.
    #[error("expected {expected} but found {found} at position {position}")]
    Expected {
        /// Description of the required token.
        expected: &'static str,
        /// Description of the token encountered.
        found:    &'static str,
        /// Byte offset of the token.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("unexpected trailing {found} at position {position}")]
    TrailingInput {
        /// Description of the first extra token.
        found:    &'static str,
        /// Byte offset of the first extra token.
        position: usize,
    },
    /// A call supplied more arguments than the engine can hold.
    #[error("more than {limit} arguments in call at position {position}")]
    TooManyArguments {
        /// Capacity of the argument buffer.
        limit:    usize,
        /// Byte offset of the argument that did not fit.
        position: usize,
    },
    /// The expression nests deeper than the configured limit.
    #[error("maximum nesting depth of {limit} exceeded at position {position}")]
    NestingTooDeep {
        /// The configured depth limit.
        limit:    usize,
        /// Byte offset where the limit was hit.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::MalformedNumber { position }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::Expected { position, .. }
            | Self::TrailingInput { position, .. }
            | Self::TooManyArguments { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}
