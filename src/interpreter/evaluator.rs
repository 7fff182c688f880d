/// Binary operator evaluation.
///
/// Implements arithmetic, comparisons, and logical operators on already
/// evaluated operands.
pub mod binary;

/// Unary operator evaluation.
///
/// Handles the prefix operators `+`, `-` and `!`.
pub mod unary;
