/// Entry points of the grammar.
///
/// Contains the top-level rule that requires the whole input to be consumed
/// and the `expression` rule used for groups and call arguments.
pub mod core;

/// Binary operator levels.
///
/// One function per precedence level, from logical OR down to power.
pub mod binary;

/// Prefix operators and primary operands.
///
/// Handles unary operators, literals, variables, calls and parenthesized
/// groups.
pub mod unary;

/// Shared parsing helpers.
///
/// The left-associative operator loop and the call argument list.
pub mod utils;
