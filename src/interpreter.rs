/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, dispatches
/// operators over typed values, resolves parameters and built-in functions,
/// and produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves parameters and built-in function calls.
/// - Reports runtime errors such as division by zero or invalid operations.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, dates, identifiers, operators, and keywords. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric, string, boolean, null, and date literals, identifiers,
///   and operators, including the word aliases `and`, `or`, and `not`.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of an expression. This
/// enables the evaluator to analyze and execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Supports the full operator ladder, conditionals, parameters, and function
///   calls.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value kinds used during evaluation, such as
/// integers of several widths, floating-point numbers, decimals, booleans,
/// text, dates, and null. It also provides the coercion and comparison
/// machinery that decides how two values of different kinds meet under an
/// operator.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements conversion, truthiness, and display behaviour.
/// - Provides widening coercion between numeric kinds and the null-aware
///   equality and ordering rules.
pub mod value;
