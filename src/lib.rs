//! # reckon
//!
//! reckon is an expression evaluator written in Rust.
//! It parses and evaluates expressions over typed values, with support for
//! parameters, built-in functions, dates, text, and null-aware comparisons.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{expression::Expression, interpreter::value::core::Value};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression, operator, and literal types for all language
///   constructs.
/// - Attaches metadata (such as source locations) to AST nodes for error
///   reporting.
/// - Enables extensible and robust handling of parsed code.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and source
/// locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Couples a parsed expression with its parameter bindings.
///
/// This module provides the main entry point for embedding the evaluator: an
/// `Expression` is parsed once and can then be evaluated repeatedly against
/// changing parameter values.
///
/// # Responsibilities
/// - Parses source text into a reusable expression.
/// - Manages named parameter bindings between evaluations.
/// - Rejects input with tokens left over after the expression ends.
pub mod expression;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for expression evaluation. It exposes the
/// components the public API is built from.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses and evaluates an expression in one step.
///
/// This function tokenizes, parses, and evaluates the provided source string
/// with no parameters bound. It is a convenience wrapper for the common case;
/// use [`Expression`] directly to bind parameters or to evaluate the same
/// expression more than once.
///
/// # Errors
/// Returns an error if parsing fails or if any runtime error occurs during
/// evaluation.
///
/// # Examples
/// ```
/// use reckon::{evaluate, interpreter::value::core::Value};
///
/// // Simple expression: the result is computed and no error should occur.
/// let result = evaluate("2 + 2").unwrap();
/// assert_eq!(result, Value::Int(4));
///
/// // Example with an intentional error (unbound parameter).
/// let result = evaluate("[x] + 1"); // 'x' is not bound
/// assert!(result.is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let expression = Expression::new(source)?;

    Ok(expression.evaluate()?)
}
