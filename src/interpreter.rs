/// The evaluation context threaded through every grammar rule.
///
/// Holds the cursor, the current token, the resolver, the nesting counter and
/// the error slot of one evaluation. It is the only mutable state of the
/// engine and never allocates.
///
/// # Responsibilities
/// - Advances the lexer and converts lexical failures into syntax errors.
/// - Enforces the nesting limit.
/// - Forwards variable and function references to the resolver.
/// - Records the outcome and formats the error message.
pub mod context;
/// The evaluator module applies operators to evaluated operands.
///
/// There is no syntax tree: the parser calls into this module as soon as both
/// operands of an operator are known.
///
/// # Responsibilities
/// - Implements arithmetic, comparison and logical semantics on `f64`.
/// - Encodes boolean results canonically as `0.0` and `1.0`.
pub mod evaluator;
/// The lexer module tokenizes expression text on demand.
///
/// The lexer reads the raw source text and produces one token at a time as the
/// parser asks for it. Tokens borrow identifiers from the source.
///
/// # Responsibilities
/// - Recognizes numbers, identifiers, operators, parentheses and commas.
/// - Skips whitespace.
/// - Reports unrecognized characters and malformed numeric literals.
pub mod lexer;
/// The parser module walks the grammar and evaluates as it goes.
///
/// Each precedence level is one function that calls the next tighter level
/// and loops while the current token is one of its operators.
///
/// # Responsibilities
/// - Implements operator precedence and associativity.
/// - Evaluates call arguments and dispatches calls and variable references.
/// - Rejects trailing input and missing parentheses.
pub(crate) mod parser;
/// Fixed-capacity error message formatting.
///
/// Turns an [`EvalError`](crate::error::EvalError) into text stored inline in
/// the context.
pub mod report;
/// Host lookups for variables and functions.
///
/// Defines the [`Resolver`](resolver::Resolver) trait and the
/// [`Callbacks`](resolver::Callbacks) adapter built from plain function
/// pointers and user data.
pub mod resolver;

pub use parser::utils::{Arguments, MAX_ARGUMENTS};
