use crate::interpreter::{
    evaluator::{binary::core::comparison_error, core::EvalResult, utils::check_arity},
    value::{coercion::coerce_comparison, comparison::compare_values, core::Value},
};

/// Picks the smaller or larger of two values.
///
/// Both arguments are first coerced to a common kind, so the winner comes
/// back widened: `Min(3, 2.5)` is the double `2.5`, not an integer. A null
/// never wins, it simply yields the other operand, and `Min(null, null)`
/// stays null. When the pair has no order because one side is NaN, the NaN
/// side propagates.
///
/// The operation is selected by the `name` parameter, which must be `"Min"`
/// or `"Max"`. Incomparable arguments produce an `Incomparable` error.
///
/// # Parameters
/// - `name`: Either `"Min"` or `"Max"`.
/// - `args`: Slice containing exactly two arguments.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The winning value in the coerced common kind.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::min_max::min_max, value::core::Value};
///
/// let r = min_max("Min", &[Value::Int(3), Value::Double(2.5)], 1).unwrap();
/// assert_eq!(r, Value::Double(2.5));
///
/// let r = min_max("Max", &[Value::Null, Value::Int(10)], 1).unwrap();
/// assert_eq!(r, Value::Int(10));
/// ```
pub fn min_max(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 2, line)?;

    if args[0].is_null() {
        return Ok(args[1].clone());
    }
    if args[1].is_null() {
        return Ok(args[0].clone());
    }

    let (left, right) = coerce_comparison(&args[0], &args[1])
        .map_err(|error| comparison_error(error, &args[0], &args[1], line))?;
    let ordering = compare_values(&left, &right)
        .map_err(|error| comparison_error(error, &left, &right, line))?;

    let take_left = match ordering {
        Some(ordering) => {
            if name == "Min" {
                ordering.is_le()
            } else {
                ordering.is_ge()
            }
        },
        // The unordered case is NaN against a number; NaN wins either way.
        None => left.is_nan(),
    };

    Ok(if take_left { left } else { right })
}
