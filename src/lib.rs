//! # expreval
//!
//! expreval is an embeddable evaluator for arithmetic and boolean expressions
//! written in Rust. It evaluates a single expression while parsing it, without
//! building a syntax tree and without allocating, and resolves variables and
//! function calls through host-supplied lookups.
//!
//! ```
//! use expreval::{Callbacks, evaluate, evaluate_with_callbacks};
//!
//! assert_eq!(evaluate("2^3 + 2.0 - 8.0"), 2.0);
//! assert_eq!(evaluate("(3.0<2.0)*5.0 + (3.0>=2.0)*6.0"), 6.0);
//!
//! fn variables(_: &(), name: &str) -> Option<f64> {
//!     (name == "a").then_some(1.0)
//! }
//!
//! fn functions(_: &(), name: &str, args: &[f64]) -> Option<f64> {
//!     match (name, args) {
//!         ("hypot", [x, y]) => Some(x.hypot(*y)),
//!         _ => None,
//!     }
//! }
//!
//! let value = evaluate_with_callbacks("hypot(3, 4) + a", Some(variables), Some(functions), &());
//! assert_eq!(value, 6.0);
//!
//! // Failure is signalled by NaN.
//! assert!(evaluate("6.0 (6.0)").is_nan());
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for parsing and resolution.
///
/// This module defines every error that can end an evaluation. It
/// distinguishes errors in the expression text from references the host does
/// not accept, and records the byte position of each failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, resolver).
/// - Attaches positions for context.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates the evaluation of an expression.
///
/// This module ties together lexing, parsing, operator evaluation, name
/// resolution and error reporting.
///
/// # Responsibilities
/// - Coordinates the lexer, grammar, evaluator and resolver.
/// - Provides the explicit, caller-owned evaluation context.
/// - Manages the flow of values and errors between phases.
pub mod interpreter;
/// Operator definitions shared by the parser and the evaluator.
///
/// Declares the unary and binary operators, their precedence levels and the
/// mapping from tokens.
pub mod operator;
/// General numeric helpers.
///
/// Fixes the numeric encoding of booleans used by every comparison and
/// logical operator.
pub mod util;

pub use crate::{
    error::{EvalError, EvalResult, ParseError, ResolveError},
    interpreter::{
        context::{Context, DEFAULT_MAX_DEPTH, State},
        report::{ERROR_CAPACITY, ErrorMessage},
        resolver::{Callbacks, FunctionFn, Resolver, VariableFn},
        MAX_ARGUMENTS,
    },
};

/// Evaluates an expression without variables or functions.
///
/// Any identifier or call in the expression is an error. On failure the
/// diagnostic is logged at error level and `NaN` is returned.
///
/// # Example
/// ```
/// use expreval::evaluate;
///
/// assert_eq!(evaluate("!0.0"), 1.0);
/// assert_eq!(evaluate("1 + + -3"), -2.0);
/// assert!(evaluate("1 **/ 34").is_nan());
/// assert!(evaluate("x + 1").is_nan());
/// ```
#[must_use]
pub fn evaluate(expression: &str) -> f64 {
    evaluate_with(expression, ())
}

/// Evaluates an expression, resolving names through optional callbacks.
///
/// A missing callback declines every lookup. `user_data` is passed unchanged
/// to both callbacks. On failure the diagnostic is logged at error level and
/// `NaN` is returned.
///
/// # Example
/// ```
/// use expreval::evaluate_with_callbacks;
///
/// fn functions(max_args: &usize, name: &str, args: &[f64]) -> Option<f64> {
///     if name != "max_value" || args.len() < 2 || args.len() > *max_args {
///         return None;
///     }
///     args.iter().copied().reduce(f64::max)
/// }
///
/// let expression = "max_value(0, 1, 2)";
/// assert_eq!(evaluate_with_callbacks(expression, None, Some(functions), &3), 2.0);
/// assert!(evaluate_with_callbacks(expression, None, Some(functions), &2).is_nan());
/// ```
#[must_use]
pub fn evaluate_with_callbacks<U>(expression: &str,
                                  variable: Option<VariableFn<U>>,
                                  function: Option<FunctionFn<U>>,
                                  user_data: &U)
                                  -> f64 {
    evaluate_with(expression, Callbacks::from_parts(variable, function, user_data))
}

/// Evaluates an expression with any [`Resolver`].
///
/// On failure the diagnostic is logged at error level and `NaN` is returned.
#[must_use]
pub fn evaluate_with<R: Resolver>(expression: &str, resolver: R) -> f64 {
    let mut context = Context::new(expression, resolver);

    match context.try_parse() {
        Ok(value) => value,
        Err(_) => {
            log::error!("failed to evaluate '{expression}': {}", context.message());
            f64::NAN
        },
    }
}

/// Creates an evaluation context from optional callbacks.
///
/// Nothing is allocated; the context lives wherever the caller puts it. Call
/// [`parse`] (or [`Context::parse`]) to evaluate, then inspect
/// [`Context::error`].
///
/// # Example
/// ```
/// use expreval::{init_context, parse};
///
/// fn variables(_: &(), name: &str) -> Option<f64> {
///     (name == "var2").then_some(2.0)
/// }
///
/// let mut context = init_context("5.0 * var2", Some(variables), None, &());
/// assert_eq!(parse(&mut context), 10.0);
/// assert_eq!(context.error(), None);
///
/// let mut context = init_context("5.0 * var3", Some(variables), None, &());
/// assert!(parse(&mut context).is_nan());
/// assert_eq!(context.error(),
///            Some("resolution error: unknown variable 'var3' at position 6"));
/// ```
#[must_use]
pub fn init_context<'src, 'u, U>(expression: &'src str,
                                 variable: Option<VariableFn<U>>,
                                 function: Option<FunctionFn<U>>,
                                 user_data: &'u U)
                                 -> Context<'src, Callbacks<'u, U>> {
    Context::new(expression, Callbacks::from_parts(variable, function, user_data))
}

/// Evaluates the expression held by `context`, returning `NaN` on failure.
///
/// The error message is left in the context. A context that already finished
/// returns its stored outcome; re-initialize it with [`Context::reset`] or
/// [`init_context`] to evaluate again.
pub fn parse<R: Resolver>(context: &mut Context<'_, R>) -> f64 {
    context.parse()
}
