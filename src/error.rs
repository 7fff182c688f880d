/// Syntax errors.
///
/// Defines all error types that can occur while lexing and parsing the
/// expression text: unexpected characters, malformed literals, misplaced
/// tokens, trailing input and the engine's own capacity limits.
pub mod parse_error;
/// Resolution errors.
///
/// Contains the errors raised when a variable or function reference is not
/// accepted by the host-supplied lookups.
pub mod resolve_error;

use thiserror::Error;

pub use parse_error::ParseError;
pub use resolve_error::ResolveError;

/// Result type used throughout the parser and evaluator.
///
/// The `'src` lifetime ties resolution errors to the expression text they
/// borrow the offending name from.
pub type EvalResult<'src, T> = Result<T, EvalError<'src>>;

/// Any failure of a single evaluation call.
///
/// Both variants are detected during the one left-to-right pass and abort the
/// evaluation immediately. The value is `Copy` and never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError<'src> {
    /// The expression text is not well formed.
    #[error("syntax error: {0}")]
    Syntax(#[from] ParseError),
    /// A variable or function reference was declined by the resolver.
    #[error("resolution error: {0}")]
    Resolve(ResolveError<'src>),
}

impl EvalError<'_> {
    /// Byte offset into the expression at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Syntax(error) => error.position(),
            Self::Resolve(error) => error.position(),
        }
    }

    /// Returns `true` for errors in the expression text itself.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    /// Returns `true` for references no lookup accepted.
    #[must_use]
    pub const fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolve(_))
    }
}

impl<'src> From<ResolveError<'src>> for EvalError<'src> {
    fn from(error: ResolveError<'src>) -> Self {
        Self::Resolve(error)
    }
}
