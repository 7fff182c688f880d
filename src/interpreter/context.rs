use std::fmt;

use logos::{Lexer, Logos, Span};

use crate::{
    error::{EvalError, EvalResult, ParseError, ResolveError},
    interpreter::{
        lexer::{LexError, Token, describe},
        parser::core::parse_complete,
        report::ErrorMessage,
        resolver::Resolver,
    },
};

/// Default limit on how deeply an expression may nest.
///
/// Every prefix operator, parenthesized group, call argument and `^` operand
/// adds one level.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Progress of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum State<'src> {
    /// Initialized, nothing read yet.
    Fresh,
    /// The whole expression was consumed and produced this value.
    Succeeded(f64),
    /// Evaluation stopped at this error.
    Failed(EvalError<'src>),
}

/// Stores the state of a single evaluation.
///
/// The context borrows the expression, owns the resolver and carries the
/// cursor, the current token, the nesting counter and the error slot. It holds
/// no heap memory, so it can live entirely on the caller's stack; the message
/// buffer is a fixed-capacity inline string.
///
/// ## Usage
///
/// A context evaluates one expression. After the first `parse` it is in a
/// terminal state and further calls return the stored outcome; use
/// [`Context::reset`] to evaluate another expression with the same resolver.
///
/// ```
/// use expreval::Context;
///
/// let mut context = Context::new("2^3 + 2.0 - 8.0", ());
/// assert_eq!(context.parse(), 2.0);
/// assert!(context.error().is_none());
///
/// context.reset("1 **/ 34");
/// assert!(context.parse().is_nan());
/// assert!(context.error().is_some());
/// ```
pub struct Context<'src, R = ()> {
    source:    &'src str,
    lexer:     Lexer<'src, Token<'src>>,
    current:   Option<Token<'src>>,
    span:      Span,
    resolver:  R,
    depth:     usize,
    max_depth: usize,
    state:     State<'src>,
    message:   ErrorMessage,
}

impl<'src, R: Resolver> Context<'src, R> {
    /// Creates a fresh context for `expression`.
    ///
    /// Nothing is read until [`Context::parse`] is called, so construction
    /// cannot fail.
    #[must_use]
    pub fn new(expression: &'src str, resolver: R) -> Self {
        Self { source: expression,
               lexer: Token::lexer(expression),
               current: None,
               span: 0..0,
               resolver,
               depth: 0,
               max_depth: DEFAULT_MAX_DEPTH,
               state: State::Fresh,
               message: ErrorMessage::new() }
    }

    /// Sets the nesting limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Re-initializes the context for another expression.
    ///
    /// Clears the cursor, the outcome and the error message. The resolver and
    /// the nesting limit are kept.
    pub fn reset(&mut self, expression: &'src str) {
        self.source = expression;
        self.lexer = Token::lexer(expression);
        self.current = None;
        self.span = 0..0;
        self.depth = 0;
        self.state = State::Fresh;
        self.message.clear();
    }

    /// Evaluates the expression, returning `NaN` on failure.
    ///
    /// Check [`Context::error`] afterwards for the reason.
    pub fn parse(&mut self) -> f64 {
        self.try_parse().unwrap_or(f64::NAN)
    }

    /// Evaluates the expression.
    ///
    /// On a fresh context this runs the parser; on a context that already
    /// finished it returns the stored outcome without reading anything.
    ///
    /// # Errors
    /// Returns the syntax or resolution error that stopped evaluation. The
    /// formatted message is also kept in the context.
    pub fn try_parse(&mut self) -> EvalResult<'src, f64> {
        match self.state {
            State::Succeeded(value) => return Ok(value),
            State::Failed(error) => return Err(error),
            State::Fresh => {},
        }

        log::debug!("evaluating '{}'", self.source);

        match parse_complete(self) {
            Ok(value) => {
                log::debug!("'{}' = {value}", self.source);
                self.state = State::Succeeded(value);
                Ok(value)
            },
            Err(error) => {
                self.message.record(&error);
                self.state = State::Failed(error);
                Err(error)
            },
        }
    }

    /// The error message of a failed evaluation, `None` otherwise.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        matches!(self.state, State::Failed(_)).then(|| self.message.as_str())
    }

    /// The error of a failed evaluation, `None` otherwise.
    #[must_use]
    pub const fn last_error(&self) -> Option<EvalError<'src>> {
        match self.state {
            State::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// The message buffer, including its truncation flag.
    #[must_use]
    pub const fn message(&self) -> &ErrorMessage {
        &self.message
    }

    /// Where the evaluation currently stands.
    #[must_use]
    pub const fn state(&self) -> State<'src> {
        self.state
    }

    /// The expression being evaluated.
    #[must_use]
    pub const fn expression(&self) -> &'src str {
        self.source
    }

    /// Byte offset of the current token; the expression length once all
    /// input is consumed.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.span.start
    }

    /// The configured nesting limit.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The resolver consulted for identifiers and calls.
    #[must_use]
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// The token under the cursor; `None` at the end of input.
    pub(crate) const fn current(&self) -> Option<Token<'src>> {
        self.current
    }

    /// Moves the cursor to the next token.
    ///
    /// # Errors
    /// Returns a syntax error when the input at the cursor is not a token.
    pub(crate) fn advance(&mut self) -> EvalResult<'src, ()> {
        match self.lexer.next() {
            Some(Ok(token)) => {
                self.current = Some(token);
                self.span = self.lexer.span();
                Ok(())
            },
            Some(Err(error)) => {
                self.current = None;
                self.span = self.lexer.span();
                let position = self.span.start;
                Err(match error {
                        LexError::MalformedNumber => ParseError::MalformedNumber { position },
                        LexError::UnrecognizedCharacter => {
                            let found = self.lexer
                                            .slice()
                                            .chars()
                                            .next()
                                            .unwrap_or(char::REPLACEMENT_CHARACTER);
                            ParseError::UnexpectedCharacter { found, position }
                        },
                    }.into())
            },
            None => {
                self.current = None;
                self.span = self.source.len()..self.source.len();
                Ok(())
            },
        }
    }

    /// Consumes the current token if it equals `expected`.
    ///
    /// # Errors
    /// Returns `ParseError::Expected` naming both tokens otherwise.
    pub(crate) fn expect(&mut self, expected: &Token<'src>) -> EvalResult<'src, ()> {
        match self.current {
            Some(token) if token == *expected => self.advance(),
            found => Err(ParseError::Expected { expected: expected.describe(),
                                                found:    describe(found.as_ref()),
                                                position: self.position(), }.into()),
        }
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// # Errors
    /// Returns `ParseError::NestingTooDeep` without running `parse` when the
    /// limit is already reached, otherwise whatever `parse` returns.
    pub(crate) fn descend<T>(&mut self,
                             parse: impl FnOnce(&mut Self) -> EvalResult<'src, T>)
                             -> EvalResult<'src, T> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit:    self.max_depth,
                                                    position: self.position(), }.into());
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Asks the resolver for a variable.
    ///
    /// # Errors
    /// Returns `ResolveError::UnknownVariable` when the resolver declines.
    pub(crate) fn resolve_variable(&self,
                                   name: &'src str,
                                   position: usize)
                                   -> EvalResult<'src, f64> {
        log::trace!("resolving variable '{name}'");
        self.resolver
            .variable(name)
            .ok_or_else(|| ResolveError::UnknownVariable { name, position }.into())
    }

    /// Asks the resolver to call a function.
    ///
    /// # Errors
    /// Returns `ResolveError::RejectedCall` when the resolver declines.
    pub(crate) fn resolve_function(&self,
                                   name: &'src str,
                                   args: &[f64],
                                   position: usize)
                                   -> EvalResult<'src, f64> {
        log::trace!("calling '{name}' with {} argument(s)", args.len());
        self.resolver
            .function(name, args)
            .ok_or_else(|| ResolveError::RejectedCall { name,
                                                        arity: args.len(),
                                                        position }.into())
    }
}

impl<R: fmt::Debug> fmt::Debug for Context<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
         .field("source", &self.source)
         .field("current", &self.current)
         .field("span", &self.span)
         .field("resolver", &self.resolver)
         .field("depth", &self.depth)
         .field("max_depth", &self.max_depth)
         .field("state", &self.state)
         .field("message", &self.message.as_str())
         .finish_non_exhaustive()
    }
}
