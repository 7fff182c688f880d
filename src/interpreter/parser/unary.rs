use crate::{
    error::{EvalResult, ParseError},
    interpreter::{
        context::Context,
        evaluator::unary::eval_unary,
        lexer::Token,
        parser::{core::parse_expression, utils::parse_arguments},
        resolver::Resolver,
    },
    operator::token_to_unary_operator,
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+`  (identity)
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators nest, so an input like `+ + -3` is parsed as
/// `+( +( -3 ) )` and `!-x` as `!( -x )`. Every level counts towards the
/// nesting limit.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-" | "!") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'src, R>(ctx: &mut Context<'src, R>) -> EvalResult<'src, f64>
    where R: Resolver
{
    ctx.descend(|ctx| {
           if let Some(token) = ctx.current()
              && let Some(op) = token_to_unary_operator(&token)
           {
               ctx.advance()?;
               let value = parse_unary(ctx)?;
               return Ok(eval_unary(op, value));
           }

           parse_primary(ctx)
       })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - variables
/// - function calls
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := number
///              | identifier
///              | identifier "(" arguments
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedToken` for any other token.
/// - `UnexpectedEndOfInput` if the input ends where an operand is required.
pub(crate) fn parse_primary<'src, R>(ctx: &mut Context<'src, R>) -> EvalResult<'src, f64>
    where R: Resolver
{
    match ctx.current() {
        Some(Token::Number(value)) => {
            ctx.advance()?;
            Ok(value)
        },
        Some(Token::LParen) => parse_grouping(ctx),
        Some(Token::Identifier(name)) => parse_identifier_or_function(ctx, name),
        Some(token) => Err(ParseError::UnexpectedToken { found:    token.describe(),
                                                         position: ctx.position(), }.into()),
        None => Err(ParseError::UnexpectedEndOfInput { position: ctx.position() }.into()),
    }
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Errors
/// Returns `ParseError::Expected` citing `')'` if the group is not closed.
fn parse_grouping<'src, R>(ctx: &mut Context<'src, R>) -> EvalResult<'src, f64>
    where R: Resolver
{
    ctx.advance()?;
    let value = parse_expression(ctx)?;
    ctx.expect(&Token::RParen)?;
    Ok(value)
}

/// Parses an identifier as a variable or a function call.
///
/// If the identifier is followed by `(`, the arguments are evaluated left to
/// right and passed to the resolver's function lookup. Otherwise the
/// identifier is looked up as a variable. Every reference triggers its own
/// lookup.
///
/// # Errors
/// - Resolution errors if the resolver declines the variable or the call.
/// - Propagates any error raised while evaluating the arguments, in which
///   case the function is never called.
fn parse_identifier_or_function<'src, R>(ctx: &mut Context<'src, R>,
                                         name: &'src str)
                                         -> EvalResult<'src, f64>
    where R: Resolver
{
    let position = ctx.position();
    ctx.advance()?;

    if ctx.current() == Some(Token::LParen) {
        ctx.advance()?;
        let args = parse_arguments(ctx)?;
        return ctx.resolve_function(name, &args, position);
    }

    ctx.resolve_variable(name, position)
}
