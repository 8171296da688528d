/// Operand coercion.
///
/// Defines how two operand values are brought to a common kind before an
/// operator is applied. Each operator family (arithmetic, bitwise,
/// comparison) has its own pairing rules; failures are reported as
/// `CoercionError` values without source positions, which the evaluator
/// translates into runtime errors.
pub mod coercion;
/// Equality and ordering.
///
/// Implements the total equality predicate and the three-way partial
/// ordering over runtime values, including the special rules for `null`
/// against strings, booleans and dates.
pub mod comparison;

pub mod core;
