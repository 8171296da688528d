/// Built-in function implementations.
///
/// Contains the mathematical and utility functions available by default in
/// expressions.
pub mod builtin;
/// `Min` and `Max` function implementations.
///
/// Returns the smaller or larger of two values, skipping nulls.
pub mod min_max;

pub mod core;
