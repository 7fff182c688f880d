/// Canonical value of a true comparison or logical result.
pub const TRUE: f64 = 1.0;
/// Canonical value of a false comparison or logical result.
pub const FALSE: f64 = 0.0;

/// Converts a boolean into the canonical numeric form.
///
/// ## Parameters
/// - `value`: The boolean to convert.
///
/// ## Returns
/// `1.0` for `true`, `0.0` for `false`.
///
/// ## Example
/// ```
/// use expreval::util::num::from_bool;
///
/// assert_eq!(from_bool(true), 1.0);
/// assert_eq!(from_bool(false), 0.0);
/// ```
#[must_use]
pub const fn from_bool(value: bool) -> f64 {
    if value { TRUE } else { FALSE }
}

/// Tests the truthiness of a number.
///
/// Any value that does not compare equal to zero is true, including `NaN`
/// and both infinities. Negative zero is false.
///
/// ## Example
/// ```
/// use expreval::util::num::is_truthy;
///
/// assert!(is_truthy(2.0));
/// assert!(is_truthy(f64::NAN));
/// assert!(!is_truthy(0.0));
/// assert!(!is_truthy(-0.0));
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_truthy(value: f64) -> bool {
    value != 0.0
}

/// Returns `true` if the value is the failure signal of the convenience API.
///
/// `NaN` is the one value unequal to itself, which is the check hosts without
/// access to the error slot rely on.
#[must_use]
#[allow(clippy::eq_op, clippy::float_cmp)]
pub fn is_failure(value: f64) -> bool {
    value != value
}
