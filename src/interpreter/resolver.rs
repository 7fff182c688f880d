use std::fmt;

/// Variable lookup callback.
///
/// Receives the user context and the identifier as written in the expression.
/// Returns `None` when the variable is unknown.
pub type VariableFn<U> = fn(&U, &str) -> Option<f64>;

/// Function lookup callback.
///
/// Receives the user context, the function name and the evaluated arguments in
/// source order. Returns `None` when the name is unknown or the argument count
/// is not acceptable; the engine imposes no arity rules of its own.
pub type FunctionFn<U> = fn(&U, &str, &[f64]) -> Option<f64>;

/// Resolves identifiers and calls on behalf of the parser.
///
/// Both methods decline by default, so a resolver only implements the lookups
/// it supports. A declined lookup is a resolution error. The parser calls the
/// resolver once per reference and never caches results.
///
/// # Example
/// ```
/// use expreval::{Resolver, evaluate_with};
///
/// struct Circle {
///     radius: f64,
/// }
///
/// impl Resolver for Circle {
///     fn variable(&self, name: &str) -> Option<f64> {
///         match name {
///             "r" => Some(self.radius),
///             "pi" => Some(std::f64::consts::PI),
///             _ => None,
///         }
///     }
/// }
///
/// let area = evaluate_with("pi * r ^ 2", Circle { radius: 2.0 });
/// assert!((area - 12.566_370_614_359_172).abs() < 1e-12);
/// ```
pub trait Resolver {
    /// Looks up the value of a variable.
    fn variable(&self, name: &str) -> Option<f64> {
        let _ = name;
        None
    }

    /// Calls a function with evaluated arguments.
    fn function(&self, name: &str, args: &[f64]) -> Option<f64> {
        let _ = (name, args);
        None
    }
}

/// The resolver with no lookups: every identifier and call is declined.
impl Resolver for () {}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn variable(&self, name: &str) -> Option<f64> {
        (**self).variable(name)
    }

    fn function(&self, name: &str, args: &[f64]) -> Option<f64> {
        (**self).function(name, args)
    }
}

/// Adapter from optional callback functions to [`Resolver`].
///
/// Holds at most one variable callback, at most one function callback and a
/// reference to opaque user data that is passed unchanged to both. A missing
/// callback declines every lookup, exactly like a callback returning `None`.
///
/// # Example
/// ```
/// use expreval::{Callbacks, evaluate_with};
///
/// fn scale(factor: &f64, name: &str) -> Option<f64> {
///     (name == "x").then_some(*factor)
/// }
///
/// let callbacks = Callbacks::new(&10.0).with_variables(scale);
/// assert_eq!(evaluate_with("x * 2", callbacks), 20.0);
/// ```
pub struct Callbacks<'u, U = ()> {
    variable:  Option<VariableFn<U>>,
    function:  Option<FunctionFn<U>>,
    user_data: &'u U,
}

impl<'u, U> Callbacks<'u, U> {
    /// Creates an adapter with no callbacks around the given user data.
    #[must_use]
    pub const fn new(user_data: &'u U) -> Self {
        Self { variable: None,
               function: None,
               user_data }
    }

    /// Creates an adapter from optional callbacks, mirroring the shape of
    /// [`init_context`](crate::init_context).
    #[must_use]
    pub const fn from_parts(variable: Option<VariableFn<U>>,
                            function: Option<FunctionFn<U>>,
                            user_data: &'u U)
                            -> Self {
        Self { variable,
               function,
               user_data }
    }

    /// Sets the variable callback.
    #[must_use]
    pub const fn with_variables(mut self, callback: VariableFn<U>) -> Self {
        self.variable = Some(callback);
        self
    }

    /// Sets the function callback.
    #[must_use]
    pub const fn with_functions(mut self, callback: FunctionFn<U>) -> Self {
        self.function = Some(callback);
        self
    }

    /// The user data handed to every callback.
    #[must_use]
    pub const fn user_data(&self) -> &'u U {
        self.user_data
    }
}

impl<U> Resolver for Callbacks<'_, U> {
    fn variable(&self, name: &str) -> Option<f64> {
        self.variable
            .and_then(|callback| callback(self.user_data, name))
    }

    fn function(&self, name: &str, args: &[f64]) -> Option<f64> {
        self.function
            .and_then(|callback| callback(self.user_data, name, args))
    }
}

impl<U> Clone for Callbacks<'_, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for Callbacks<'_, U> {}

impl<U> fmt::Debug for Callbacks<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
         .field("variable", &self.variable.is_some())
         .field("function", &self.function.is_some())
         .finish_non_exhaustive()
    }
}
