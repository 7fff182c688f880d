use crate::{
    operator::BinaryOperator,
    util::num::{from_bool, is_truthy},
};

/// Applies a binary operator to two already evaluated operands.
///
/// Arithmetic follows IEEE-754, so division by zero yields an infinity or
/// `NaN` rather than an error. Comparisons and logical operators yield
/// exactly `0.0` or `1.0`.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Example
/// ```
/// use expreval::{interpreter::evaluator::binary::eval_binary, operator::BinaryOperator};
///
/// assert_eq!(eval_binary(BinaryOperator::Pow, 2.0, 3.0), 8.0);
/// assert_eq!(eval_binary(BinaryOperator::Less, 3.0, 2.0), 0.0);
/// assert_eq!(eval_binary(BinaryOperator::Div, 1.0, 0.0), f64::INFINITY);
/// ```
#[must_use]
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Pow, Sub,
    };

    match op {
        Add => left + right,
        Sub => left - right,
        Mul => left * right,
        Div => left / right,
        Pow => left.powf(right),
        Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => {
            eval_comparison(op, left, right)
        },
        And | Or => eval_logic(op, left, right),
    }
}

/// Evaluates a comparison of the form `f64 <Operator> f64`.
///
/// Equality is exact floating-point equality; any comparison involving `NaN`
/// is false except `!=`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn eval_comparison(op: BinaryOperator, left: f64, right: f64) -> f64 {
    from_bool(match op {
                  BinaryOperator::Equal => left == right,
                  BinaryOperator::NotEqual => left != right,
                  BinaryOperator::Less => left < right,
                  BinaryOperator::Greater => left > right,
                  BinaryOperator::LessEqual => left <= right,
                  BinaryOperator::GreaterEqual => left >= right,
                  _ => unreachable!("eval_comparison used with non comparison operator"),
              })
}

/// Evaluates a logical operation between two truthiness values.
///
/// Both operands have already been evaluated by the time this runs; the
/// grammar never skips the right-hand side.
#[must_use]
pub fn eval_logic(op: BinaryOperator, left: f64, right: f64) -> f64 {
    let (left, right) = (is_truthy(left), is_truthy(right));

    from_bool(match op {
                  BinaryOperator::And => left && right,
                  BinaryOperator::Or => left || right,
                  _ => unreachable!("eval_logic used with non logical operator"),
              })
}
