/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// arithmetic, comparisons, logical operators, and bitwise operations.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements all unary operations: arithmetic negation, logical NOT, and
/// bitwise complement.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context, parameter
/// resolution, and error propagation.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides helpers and reusable routines shared by evaluation logic.
pub mod utils;

/// Function evaluation.
///
/// Handles built-in function calls, argument checking, and return value
/// computation.
pub mod function;
