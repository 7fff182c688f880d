use std::{collections::HashMap, fs, process::ExitCode};

use clap::Parser;
use expreval::{Context, DEFAULT_MAX_DEPTH, Resolver};

/// expreval evaluates arithmetic and boolean expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Defines a variable, e.g. `-D rate=0.25`. May be repeated.
    #[arg(short = 'D', long = "define", value_parser = parse_binding)]
    define: Vec<(String, f64)>,

    /// Largest argument count accepted by `max_value` and `min_value`.
    #[arg(short, long, default_value_t = 3)]
    max_args: usize,

    /// Nesting depth at which evaluation is aborted.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Tells expreval to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

/// Names available to expressions evaluated from the command line.
struct Session {
    variables: HashMap<String, f64>,
    max_args:  usize,
}

impl Resolver for Session {
    fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    fn function(&self, name: &str, args: &[f64]) -> Option<f64> {
        if args.len() < 2 || args.len() > self.max_args {
            return None;
        }
        match name {
            "max_value" => args.iter().copied().reduce(f64::max),
            "min_value" => args.iter().copied().reduce(f64::min),
            _ => None,
        }
    }
}

fn parse_binding(binding: &str) -> Result<(String, f64), String> {
    let (name, value) = binding.split_once('=')
                               .ok_or_else(|| format!("expected name=value, found '{binding}'"))?;
    let value = value.trim()
                     .parse()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let session = Session { variables: args.define.into_iter().collect(),
                            max_args:  args.max_args, };

    let expressions = script.lines()
                            .map(str::trim)
                            .filter(|line| !line.is_empty() && !line.starts_with('#'));

    let mut status = ExitCode::SUCCESS;
    let mut context = Context::new("", &session).with_max_depth(args.max_depth);

    for expression in expressions {
        context.reset(expression);
        match context.try_parse() {
            Ok(value) => println!("{expression} = {value}"),
            Err(_) => {
                eprintln!("{expression}: {}", context.message());
                status = ExitCode::FAILURE;
            },
        }
    }

    status
}
