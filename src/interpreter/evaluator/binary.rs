/// Operator dispatch.
///
/// Routes a binary operation to the handler for its operator family and
/// translates coercion failures into runtime errors.
pub mod core;

/// Arithmetic operator evaluation.
///
/// Implements `+`, `-`, `*`, `/` and `%` over the numeric kinds, plus
/// string concatenation for `+`.
pub mod arithmetic;

/// Bitwise and shift operator evaluation.
///
/// Implements `&`, `|`, `^`, `<<` and `>>` over the integral kinds.
pub mod bitwise;

/// Equality and relational operator evaluation.
///
/// Implements `==`, `!=`, `<`, `>`, `<=` and `>=`.
pub mod comparison;

/// Logical operator evaluation.
///
/// Combines already-evaluated operands for `&&` and `||`.
pub mod logic;
