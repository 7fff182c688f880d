use std::cell::{Cell, RefCell};

use expreval::{
    Callbacks, Context, EvalError, ResolveError, Resolver, evaluate_with, evaluate_with_callbacks,
    init_context, parse,
};
use pretty_assertions::assert_eq;

fn user_func_0() -> f64 {
    10.0
}

fn user_func_1(x: f64) -> f64 {
    x.abs()
}

fn user_func_2(x: f64, y: f64) -> f64 {
    x.hypot(y)
}

fn user_func_3(x: f64, y: f64, z: f64) -> f64 {
    (x * x + y * y + z * z).sqrt()
}

fn user_variables(_: &(), name: &str) -> Option<f64> {
    match name {
        "a" => Some(1.0),
        "b0" => Some(2.0),
        "_variable_6__" => Some(5.0),
        _ => None,
    }
}

fn user_functions(_: &(), name: &str, args: &[f64]) -> Option<f64> {
    match (name, args) {
        ("user_func_0", []) => Some(user_func_0()),
        ("user_func_1", [x]) => Some(user_func_1(*x)),
        ("user_func_2", [x, y]) => Some(user_func_2(*x, *y)),
        ("_user_func_3", [x, y, z]) => Some(user_func_3(*x, *y, *z)),
        _ => None,
    }
}

/// Variables of the argument-limit scenario.
fn numbered_variables(_: &usize, name: &str) -> Option<f64> {
    match name {
        "var0" => Some(0.0),
        "var1" => Some(1.0),
        "var2" => Some(2.0),
        "var3" => Some(3.0),
        _ => None,
    }
}

/// `max_value` and `min_value` accept between two and `max_args` arguments.
fn bounded_functions(max_args: &usize, name: &str, args: &[f64]) -> Option<f64> {
    if args.len() < 2 || args.len() > *max_args {
        return None;
    }
    match name {
        "max_value" => args.iter().copied().reduce(f64::max),
        "min_value" => args.iter().copied().reduce(f64::min),
        _ => None,
    }
}

fn resolve_error(expression: &str, resolver: impl Resolver) -> ResolveError<'_> {
    let mut context = Context::new(expression, resolver);
    match context.try_parse() {
        Err(EvalError::Resolve(error)) => error,
        other => panic!("'{expression}' should fail to resolve, got {other:?}"),
    }
}

#[test]
fn user_variables_resolve() {
    let eval = |expression| evaluate_with_callbacks(expression, Some(user_variables), None, &());

    assert_eq!(eval("a"), 1.0);
    assert_eq!(eval("b0"), 2.0);
    assert_eq!(eval("_variable_6__"), 5.0);
    assert_eq!(eval("a + b0 * _variable_6__"), 11.0);
    assert!(eval("c").is_nan());
}

#[test]
fn user_functions_resolve() {
    let eval = |expression| evaluate_with_callbacks(expression, None, Some(user_functions), &());

    assert_eq!(eval("user_func_0()"), user_func_0());
    assert_eq!(eval("user_func_1(user_func_0())"), user_func_1(user_func_0()));
    assert_eq!(eval("user_func_2(user_func_1(2.0), user_func_0())"),
               user_func_2(user_func_1(2.0), user_func_0()));
    assert_eq!(eval("_user_func_3(1.0, 2.0, 3.0)"), user_func_3(1.0, 2.0, 3.0));
    assert_eq!(eval("user_func_1(-4) + 1"), 5.0);
}

#[test]
fn variables_and_functions_combine() {
    let value = evaluate_with_callbacks("_user_func_3(user_func_0(), user_func_2(a, b0), \
                                         user_func_1(_variable_6__))",
                                        Some(user_variables),
                                        Some(user_functions),
                                        &());

    assert_eq!(value, user_func_3(user_func_0(), user_func_2(1.0, 2.0), user_func_1(5.0)));
}

#[test]
fn missing_callbacks_decline_every_reference() {
    assert!(evaluate_with_callbacks("user_func_0()", Some(user_variables), None, &()).is_nan());
    assert!(evaluate_with_callbacks("a", None, Some(user_functions), &()).is_nan());

    assert_eq!(resolve_error("user_func_0()", ()),
               ResolveError::RejectedCall { name:     "user_func_0",
                                            arity:    0,
                                            position: 0, });
}

#[test]
fn declined_calls_report_name_and_arity() {
    let callbacks = Callbacks::new(&()).with_functions(user_functions);

    assert!(evaluate_with("user_func_4(1.0, 2.0, 3.0, 4.0)", callbacks).is_nan());

    let error = resolve_error("1 + user_func_1(1, 2)", callbacks);
    assert_eq!(error,
               ResolveError::RejectedCall { name:     "user_func_1",
                                            arity:    2,
                                            position: 4, });
    assert_eq!(error.name(), "user_func_1");
}

#[test]
fn unknown_variables_report_name_and_position() {
    let callbacks = Callbacks::new(&()).with_variables(user_variables);

    let error = resolve_error("a * (b0 + missing)", callbacks);
    assert_eq!(error,
               ResolveError::UnknownVariable { name:     "missing",
                                               position: 10, });
    assert_eq!(error.to_string(), "unknown variable 'missing' at position 10");
}

#[test]
fn user_data_limits_argument_counts() {
    let three_args = "max_value( var0, var1, var2 )";
    let four_args = "max_value( var0, var1, var2, var3 )";
    let eval = |expression, max_args: usize| {
        evaluate_with_callbacks(expression,
                                Some(numbered_variables),
                                Some(bounded_functions),
                                &max_args)
    };

    assert_eq!(eval(three_args, 3), 2.0);
    assert!(eval(three_args, 2).is_nan());
    assert_eq!(eval(four_args, 4), 3.0);
    assert!(eval("max_value(var1)", 4).is_nan());
}

#[test]
fn explicit_context_reports_rejected_call() {
    let expression = "5.0*( max_value( var0, max_value( var1, var2 ) )/2 + min_value( var1, \
                      var2, var3 )/2 )";
    let min_position = expression.find("min_value").unwrap();

    let mut context = init_context(expression,
                                   Some(numbered_variables),
                                   Some(bounded_functions),
                                   &2);
    assert!(parse(&mut context).is_nan());
    assert_eq!(context.last_error(),
               Some(EvalError::Resolve(ResolveError::RejectedCall { name:     "min_value",
                                                                    arity:    3,
                                                                    position: min_position, })));
    assert_eq!(context.error().map(str::to_string),
               Some(format!("resolution error: function 'min_value' rejected a call with 3 \
                             argument(s) at position {min_position}")));

    let mut context = init_context(expression,
                                   Some(numbered_variables),
                                   Some(bounded_functions),
                                   &3);
    assert_eq!(parse(&mut context), 7.5);
    assert_eq!(context.error(), None);
}

/// Counts lookups and records call arguments.
#[derive(Default)]
struct Recorder {
    lookups: Cell<usize>,
    calls:   RefCell<Vec<(String, Vec<f64>)>>,
}

impl Resolver for Recorder {
    fn variable(&self, name: &str) -> Option<f64> {
        self.lookups.set(self.lookups.get() + 1);
        (name == "x").then_some(3.0)
    }

    fn function(&self, name: &str, args: &[f64]) -> Option<f64> {
        self.calls.borrow_mut().push((name.to_string(), args.to_vec()));
        Some(args.iter().sum())
    }
}

#[test]
fn every_reference_is_resolved_again() {
    let recorder = Recorder::default();

    assert_eq!(evaluate_with("x + x * x", &recorder), 12.0);
    assert_eq!(recorder.lookups.get(), 3);
}

#[test]
fn arguments_arrive_in_source_order() {
    let recorder = Recorder::default();

    assert_eq!(evaluate_with("f(1, 2 + 3, -x, g())", &recorder), 3.0);

    let calls = recorder.calls.borrow();
    assert_eq!(*calls,
               vec![("g".to_string(), vec![]),
                    ("f".to_string(), vec![1.0, 5.0, -3.0, 0.0])]);
}

#[test]
fn logical_operators_evaluate_both_sides() {
    let recorder = Recorder::default();

    assert_eq!(evaluate_with("0 && f(1)", &recorder), 0.0);
    assert_eq!(evaluate_with("1 || f(2)", &recorder), 1.0);
    assert_eq!(recorder.calls.borrow().len(), 2);

    // The right-hand side still fails the whole expression.
    assert!(evaluate_with("0 && unknown", ()).is_nan());
    assert!(evaluate_with("1 || unknown", ()).is_nan());
}

#[test]
fn failing_argument_skips_the_call() {
    let recorder = Recorder::default();

    assert!(evaluate_with("f(1, y)", &recorder).is_nan());
    assert!(recorder.calls.borrow().is_empty());
}

#[test]
fn resolution_error_stops_evaluation() {
    let recorder = Recorder::default();

    assert!(evaluate_with("y + x + x", &recorder).is_nan());
    assert_eq!(recorder.lookups.get(), 1);
}

#[test]
fn user_data_is_passed_unchanged() {
    fn offset(base: &f64, name: &str) -> Option<f64> {
        name.strip_prefix("plus").and_then(|n| n.parse::<f64>().ok()).map(|n| base + n)
    }

    let callbacks = Callbacks::new(&100.0).with_variables(offset);
    assert_eq!(*callbacks.user_data(), 100.0);
    assert_eq!(evaluate_with("plus1 + plus20", callbacks), 221.0);
}
