use heapless::Vec;

use crate::{
    error::{EvalResult, ParseError},
    interpreter::{
        context::Context,
        evaluator::binary::eval_binary,
        lexer::{Token, describe},
        parser::core::parse_expression,
        resolver::Resolver,
    },
    operator::{Precedence, token_to_binary_operator},
};

/// Largest number of arguments a single call can pass.
///
/// Arguments are collected in a stack buffer of this capacity.
pub const MAX_ARGUMENTS: usize = 16;

/// Evaluated call arguments, in source order.
pub type Arguments = Vec<f64, MAX_ARGUMENTS>;

/// Signature shared by every grammar rule.
pub(crate) type Rule<'src, R> = fn(&mut Context<'src, R>) -> EvalResult<'src, f64>;

/// Parses a left-associative chain of operators of one precedence level.
///
/// Evaluates the first operand with `operand`, then, while the current token
/// is a binary operator of `level`, consumes it, evaluates the next operand
/// and folds both values immediately.
///
/// Grammar: `level := operand (op operand)*`
///
/// # Parameters
/// - `ctx`: Context positioned at the first operand.
/// - `level`: The precedence level whose operators are consumed.
/// - `operand`: Rule for the next tighter level.
///
/// # Returns
/// The folded value. Both operands of every operator are always evaluated.
pub(in crate::interpreter::parser) fn parse_left_associative<'src, R>(
    ctx: &mut Context<'src, R>,
    level: Precedence,
    operand: Rule<'src, R>)
    -> EvalResult<'src, f64>
    where R: Resolver
{
    let mut left = operand(ctx)?;

    loop {
        if let Some(token) = ctx.current()
           && let Some(op) = token_to_binary_operator(&token)
           && op.precedence() == level
        {
            ctx.advance()?;
            let right = operand(ctx)?;
            left = eval_binary(op, left, right);
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses the comma-separated argument list of a call.
///
/// Expects the cursor just past `(`. Each argument is a full expression and is
/// evaluated before the next one is read. An immediate `)` produces an empty
/// list.
///
/// Grammar: `arguments := ")" | expression ("," expression)* ")"`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an argument fails to parse or resolve,
/// - a token other than `,` or `)` follows an argument,
/// - more than [`MAX_ARGUMENTS`] arguments are supplied.
pub(in crate::interpreter::parser) fn parse_arguments<'src, R>(ctx: &mut Context<'src, R>)
                                                               -> EvalResult<'src, Arguments>
    where R: Resolver
{
    let mut args = Arguments::new();

    if ctx.current() == Some(Token::RParen) {
        ctx.advance()?;
        return Ok(args);
    }

    loop {
        let position = ctx.position();
        let value = parse_expression(ctx)?;
        args.push(value)
            .map_err(|_| ParseError::TooManyArguments { limit: MAX_ARGUMENTS,
                                                        position })?;

        match ctx.current() {
            Some(Token::Comma) => ctx.advance()?,
            Some(Token::RParen) => {
                ctx.advance()?;
                break;
            },
            found => {
                return Err(ParseError::Expected { expected: "',' or ')'",
                                                  found:    describe(found.as_ref()),
                                                  position: ctx.position(), }.into());
            },
        }
    }

    Ok(args)
}
