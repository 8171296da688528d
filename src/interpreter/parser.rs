/// Core parsing entry points.
///
/// Contains the expression entry point and the conditional-operator rule
/// sitting at the top of the precedence hierarchy.
pub mod core;

/// Unary operator and primary-expression parsing.
///
/// Handles prefix operators, literals, parameters, function calls, and
/// parenthesized groupings.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence ladder for all binary operators, from logical
/// OR down to multiplication.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides helpers shared across parsing rules, such as comma-separated
/// list handling.
pub mod utils;
