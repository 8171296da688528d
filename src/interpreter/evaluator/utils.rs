use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Checks if the argument list matches the expected count.
/// Returns an error if the argument count does not match.
///
/// Works on both evaluated values and unevaluated argument expressions,
/// which is what the lazily evaluated conditional builtin needs.
///
/// ## Example
/// ```
/// use reckon::interpreter::{evaluator::utils::check_arity, value::core::Value};
///
/// let arg_vals = vec![Value::Int(2), Value::Int(1)];
/// let line = 15;
///
/// assert!(check_arity(&arg_vals, 2, line).is_ok()); // Requires exactly 2 arguments.
/// ```
pub const fn check_arity<T>(args: &[T], expected: usize, line: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { line })
    }
}
