use std::fs;

use clap::Parser;
use reckon::{evaluate, expression::Expression};

/// reckon is an easy to use evaluator for typed expressions with parameters,
/// dates, and built-in functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read the expression from a file instead of the command
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Binds a parameter before evaluation; the value is itself an expression.
    #[arg(short, long, value_name = "NAME=EXPR")]
    param: Vec<String>,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut expression = match Expression::new(&source) {
        Ok(expression) => expression,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    for binding in &args.param {
        let Some((name, text)) = binding.split_once('=') else {
            eprintln!("Expected NAME=EXPR for --param, found '{binding}'.");
            std::process::exit(1);
        };

        match evaluate(text) {
            Ok(value) => expression.set_parameter(name.trim(), value),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    }

    match expression.evaluate() {
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("{e}"),
    }
}
