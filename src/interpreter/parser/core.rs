use crate::{
    error::{EvalResult, ParseError},
    interpreter::{context::Context, parser::binary::parse_logical_or, resolver::Resolver},
};

/// Parses and evaluates a full expression.
///
/// This is the entry point for groups and call arguments. It begins at the
/// lowest-precedence level, logical OR, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `ctx`: Context positioned at the first token of the expression.
///
/// # Returns
/// The value of the expression; the cursor is left on the first token that
/// does not belong to it.
pub fn parse_expression<'src, R>(ctx: &mut Context<'src, R>) -> EvalResult<'src, f64>
    where R: Resolver
{
    parse_logical_or(ctx)
}

/// Evaluates the whole input of a fresh context.
///
/// Reads the first token, evaluates one expression and then requires the end
/// of input. Any remaining token, e.g. the `(6.0)` in `6.0 (6.0)`, is a
/// syntax error rather than being ignored.
///
/// Grammar: `input := expression EOF`
///
/// # Errors
/// - `TrailingInput` if tokens remain after a complete expression.
/// - Propagates every error raised while lexing, parsing or resolving.
pub(crate) fn parse_complete<'src, R>(ctx: &mut Context<'src, R>) -> EvalResult<'src, f64>
    where R: Resolver
{
    ctx.advance()?;
    let value = parse_expression(ctx)?;

    match ctx.current() {
        None => Ok(value),
        Some(token) => Err(ParseError::TrailingInput { found:    token.describe(),
                                                       position: ctx.position(), }.into()),
    }
}
