use crate::{
    error::EvalResult,
    interpreter::{
        context::Context,
        evaluator::binary::eval_binary,
        parser::{unary::parse_unary, utils::parse_left_associative},
        resolver::Resolver,
    },
    operator::{Precedence, token_to_binary_operator},
};

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `||`. Both sides are always evaluated,
/// so a failing right-hand side fails the whole expression even when the
/// left-hand side is already true.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
pub(crate) fn parse_logical_or<'src, R>(ctx: &mut Context<'src, R>) -> EvalResult<'src, f64>
    where R: Resolver
{
    parse_left_associative(ctx, Precedence::LogicalOr, parse_logical_and)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `&&`. Precedence is higher than OR.
/// As with OR, the right-hand side is evaluated even when the left-hand side
/// is already false.
///
/// Grammar: `logical_and := equality ("&&" equality)*`
pub(crate) fn parse_logical_and<'src, R>(ctx: &mut Context<'src, R>) -> EvalResult<'src, f64>
    where R: Resolver
{
    parse_left_associative(ctx, Precedence::LogicalAnd, parse_equality)
}

/// Parses equality comparisons `==` and `!=`.
///
/// Grammar: `equality := relational (("==" | "!=") relational)*`
pub(crate) fn parse_equality<'src, R>(ctx: &mut Context<'src, R>) -> EvalResult<'src, f64>
    where R: Resolver
{
    parse_left_associative(ctx, Precedence::Equality, parse_relational)
}

/// Parses relational comparisons `<`, `>`, `<=` and `>=`.
///
/// Chains compare the `0.0`/`1.0` result of the previous comparison, so
/// `3 > 2 > 1` is `(3 > 2) > 1`, which is `0.0`.
///
/// Grammar: `relational := additive (("<" | ">" | "<=" | ">=") additive)*`
pub(crate) fn parse_relational<'src, R>(ctx: &mut Context<'src, R>) -> EvalResult<'src, f64>
    where R: Resolver
{
    parse_left_associative(ctx, Precedence::Relational, parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub(crate) fn parse_additive<'src, R>(ctx: &mut Context<'src, R>) -> EvalResult<'src, f64>
    where R: Resolver
{
    parse_left_associative(ctx, Precedence::Additive, parse_multiplicative)
}

/// Parses multiplication and division expressions.
///
/// Division by zero is not an error; it yields an infinity or `NaN`.
///
/// The rule is: `multiplicative := power (("*" | "/") power)*`
pub(crate) fn parse_multiplicative<'src, R>(ctx: &mut Context<'src, R>)
                                            -> EvalResult<'src, f64>
    where R: Resolver
{
    parse_left_associative(ctx, Precedence::Multiplicative, parse_power)
}

/// Parses exponentiation expressions.
///
/// Handles repeated exponentiation with right-associativity:
/// `a ^ b ^ c` evaluates as `a ^ (b ^ c)`. Operands are unary expressions,
/// so `-2 ^ 2` is `(-2) ^ 2` and `2 ^ -1` is `0.5`.
///
/// The rule is: `power := unary ("^" power)?`
///
/// Each `^` adds one nesting level, so long chains hit the depth limit
/// instead of exhausting the stack.
pub(crate) fn parse_power<'src, R>(ctx: &mut Context<'src, R>) -> EvalResult<'src, f64>
    where R: Resolver
{
    let base = parse_unary(ctx)?;

    if let Some(token) = ctx.current()
       && let Some(op) = token_to_binary_operator(&token)
       && op.is_right_associative()
    {
        ctx.advance()?;
        let exponent = ctx.descend(parse_power)?;
        return Ok(eval_binary(op, base, exponent));
    }

    Ok(base)
}
