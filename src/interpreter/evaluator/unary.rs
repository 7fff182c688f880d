use crate::{
    operator::UnaryOperator,
    util::num::{from_bool, is_truthy},
};

/// Applies a prefix operator to an evaluated operand.
///
/// - `Identity`: returns the operand unchanged.
/// - `Negate`: arithmetic negation.
/// - `Not`: `1.0` if the operand equals zero, `0.0` otherwise.
///
/// # Example
/// ```
/// use expreval::{interpreter::evaluator::unary::eval_unary, operator::UnaryOperator};
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, 3.0), -3.0);
/// assert_eq!(eval_unary(UnaryOperator::Not, 0.0), 1.0);
/// assert_eq!(eval_unary(UnaryOperator::Not, 3.0), 0.0);
/// ```
#[must_use]
pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
    match op {
        UnaryOperator::Identity => value,
        UnaryOperator::Negate => -value,
        UnaryOperator::Not => from_bool(!is_truthy(value)),
    }
}
