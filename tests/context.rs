use expreval::{
    Callbacks, Context, DEFAULT_MAX_DEPTH, ERROR_CAPACITY, EvalError, MAX_ARGUMENTS, ParseError,
    State, evaluate_with,
};
use pretty_assertions::assert_eq;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sum(_: &(), _: &str, args: &[f64]) -> Option<f64> {
    Some(args.iter().sum())
}

fn syntax_error(context: &mut Context<'_, impl expreval::Resolver>) -> ParseError {
    match context.try_parse() {
        Err(EvalError::Syntax(error)) => error,
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn fresh_context_reports_nothing() {
    let context = Context::new("1 + 1", ());

    assert_eq!(context.state(), State::Fresh);
    assert_eq!(context.error(), None);
    assert!(context.message().is_empty());
    assert_eq!(context.expression(), "1 + 1");
    assert_eq!(context.max_depth(), DEFAULT_MAX_DEPTH);
}

#[test]
fn successful_parse_consumes_all_input() {
    init_logger();
    let mut context = Context::new("2^3 + 2.0 - 8.0", ());

    assert_eq!(context.parse(), 2.0);
    assert_eq!(context.state(), State::Succeeded(2.0));
    assert_eq!(context.error(), None);
    assert_eq!(context.last_error(), None);
    assert_eq!(context.position(), "2^3 + 2.0 - 8.0".len());
}

#[test]
fn failed_parse_fills_the_error_slot() {
    init_logger();
    let mut context = Context::new("1 **/ 34", ());

    assert!(context.parse().is_nan());
    assert_eq!(context.error(),
               Some("syntax error: unexpected '*' at position 3"));

    let error = context.last_error().unwrap();
    assert!(error.is_syntax());
    assert!(!error.is_resolution());
    assert_eq!(error.position(), 3);
    assert_eq!(context.state(), State::Failed(error));
}

#[test]
fn finished_context_returns_stored_outcome() {
    let mut context = Context::new("4 * 5", ());
    assert_eq!(context.parse(), 20.0);
    assert_eq!(context.parse(), 20.0);
    assert_eq!(context.try_parse(), Ok(20.0));

    let mut context = Context::new("4 *", ());
    let first = context.try_parse();
    assert!(first.is_err());
    assert_eq!(context.try_parse(), first);
    assert!(context.parse().is_nan());
    assert_eq!(context.error(),
               Some("syntax error: unexpected end of input at position 3"));
}

#[test]
fn reset_reuses_the_resolver() {
    init_logger();
    let callbacks = Callbacks::new(&()).with_functions(sum);
    let mut context = Context::new("add(1, 2)", callbacks).with_max_depth(16);
    assert_eq!(context.parse(), 3.0);

    context.reset("add(1, 2) + missing");
    assert_eq!(context.state(), State::Fresh);
    assert!(context.parse().is_nan());
    assert_eq!(context.error(),
               Some("resolution error: unknown variable 'missing' at position 12"));

    context.reset("add(4, 5, 6)");
    assert_eq!(context.error(), None);
    assert!(context.message().is_empty());
    assert_eq!(context.parse(), 15.0);
    assert_eq!(context.max_depth(), 16);
}

#[test]
fn evaluation_is_lazy_until_parse() {
    let mut context = Context::new("1 + $", ());
    assert_eq!(context.error(), None);

    assert_eq!(syntax_error(&mut context),
               ParseError::UnexpectedCharacter { found:    '$',
                                                 position: 4, });
}

#[test]
fn deep_parentheses_hit_the_nesting_limit() {
    init_logger();
    let deep = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    let mut context = Context::new(&deep, ());
    assert_eq!(syntax_error(&mut context),
               ParseError::NestingTooDeep { limit:    DEFAULT_MAX_DEPTH,
                                            position: DEFAULT_MAX_DEPTH, });

    let shallow = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(Context::new(&shallow, ()).parse(), 1.0);
}

#[test]
fn max_depth_is_configurable() {
    assert_eq!(Context::new("((((1))))", ()).with_max_depth(5).parse(), 1.0);

    let mut context = Context::new("((((1))))", ()).with_max_depth(4);
    assert_eq!(syntax_error(&mut context),
               ParseError::NestingTooDeep { limit:    4,
                                            position: 4, });

    let mut context = Context::new("1", ()).with_max_depth(0);
    assert_eq!(syntax_error(&mut context),
               ParseError::NestingTooDeep { limit:    0,
                                            position: 0, });
}

#[test]
fn long_operator_chains_are_bounded() {
    let negations = format!("{}1", "-".repeat(300));
    assert!(Context::new(&negations, ()).parse().is_nan());

    let powers = format!("1{}", "^1".repeat(300));
    assert!(Context::new(&powers, ()).parse().is_nan());

    assert_eq!(Context::new(&format!("1{}", "^1".repeat(50)), ()).parse(), 1.0);
    assert_eq!(Context::new(&format!("{}1", "-".repeat(50)), ()).parse(), 1.0);

    // Left-associative chains do not nest.
    assert_eq!(Context::new(&format!("0{}", " + 1".repeat(1000)), ()).parse(), 1000.0);
}

#[test]
fn argument_count_is_capped() {
    let callbacks = Callbacks::new(&()).with_functions(sum);

    let sixteen = format!("f({})", vec!["1"; MAX_ARGUMENTS].join(", "));
    assert_eq!(evaluate_with(&sixteen, callbacks), 16.0);

    let seventeen = format!("f({})", vec!["1"; MAX_ARGUMENTS + 1].join(", "));
    let mut context = Context::new(&seventeen, callbacks);
    assert_eq!(syntax_error(&mut context),
               ParseError::TooManyArguments { limit:    MAX_ARGUMENTS,
                                              position: 2 + 3 * MAX_ARGUMENTS, });
}

#[test]
fn empty_argument_list_is_allowed() {
    let callbacks = Callbacks::new(&()).with_functions(sum);

    assert_eq!(evaluate_with("f()", callbacks), 0.0);
    assert_eq!(evaluate_with("f( ) + 1", callbacks), 1.0);
    assert!(evaluate_with("f(,)", callbacks).is_nan());
    assert!(evaluate_with("f(1,)", callbacks).is_nan());
}

#[test]
fn long_messages_are_truncated() {
    let name = "x".repeat(2 * ERROR_CAPACITY);
    let expression = format!("1 + {name}");
    let mut context = Context::new(&expression, ());

    let error = context.try_parse().unwrap_err();
    let full = error.to_string();
    let message = context.message();

    assert!(message.is_truncated());
    assert_eq!(message.as_str().len(), ERROR_CAPACITY);
    assert!(full.starts_with(message.as_str()));
    assert_eq!(context.error(), Some(message.as_str()));

    context.reset("1 + y");
    assert!(context.parse().is_nan());
    assert!(!context.message().is_truncated());
    assert_eq!(context.error(),
               Some("resolution error: unknown variable 'y' at position 4"));
}
