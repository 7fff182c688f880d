use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Represents a reference that no host lookup accepted.
///
/// A missing callback and a callback that declines produce the same error.
/// The name borrows from the expression text.
pub enum ResolveError<'src> {
    /// No variable lookup returned a value for the identifier.
    #[error("unknown variable '{name}' at position {position}")]
    UnknownVariable {
        /// The identifier as written in the expression.
        name:     &'src str,
        /// Byte offset of the identifier.
        position: usize,
    },
    /// No function lookup accepted the call.
    ///
    /// Covers unknown names as well as argument counts the host rejects.
    #[error("function '{name}' rejected a call with {arity} argument(s) at position {position}")]
    RejectedCall {
        /// The function name as written in the expression.
        name:     &'src str,
        /// Number of evaluated arguments that were offered.
        arity:    usize,
        /// Byte offset of the function name.
        position: usize,
    },
}

impl<'src> ResolveError<'src> {
    /// The identifier that could not be resolved.
    #[must_use]
    pub const fn name(&self) -> &'src str {
        match self {
            Self::UnknownVariable { name, .. } | Self::RejectedCall { name, .. } => *name,
        }
    }

    /// Byte offset of the identifier in the expression.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnknownVariable { position, .. } | Self::RejectedCall { position, .. } => {
                *position
            },
        }
    }
}
