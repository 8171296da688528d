use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::{comparison::values_equal, core::Value},
    },
};

/// Applies a unary math builtin to a numeric value.
///
/// The generated functions accept exactly one argument, widen it to double
/// precision, and apply the named `f64` method, so the result is always a
/// `Double`. Non-numeric arguments produce an `ExpectedNumber` error.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::builtin::sqrt, value::core::Value};
///
/// let r = sqrt(&[Value::Int(9)], 1).unwrap();
///
/// assert_eq!(r, Value::Double(3.0));
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[Value], line: usize) -> EvalResult<Value> {
            check_arity(args, 1, line)?;

            Ok(Value::Double(args[0].as_double(line)?.$real_fn()))
        }
    };
}

real_builtin!(acos, acos);
real_builtin!(asin, asin);
real_builtin!(atan, atan);
real_builtin!(ceiling, ceil);
real_builtin!(cos, cos);
real_builtin!(exp, exp);
real_builtin!(floor, floor);
real_builtin!(log10, log10);
real_builtin!(sin, sin);
real_builtin!(sqrt, sqrt);
real_builtin!(tan, tan);
real_builtin!(truncate, trunc);

/// Returns the absolute value of a number, preserving its kind.
///
/// Accepts exactly one argument. The most negative value of each signed
/// integer kind has no positive counterpart and reports overflow.
/// Non-numeric values cause an `ExpectedNumber` error.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// A value of the same kind as the input.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::builtin::abs, value::core::Value};
///
/// let r = abs(&[Value::Int(-42)], 1).unwrap();
/// assert_eq!(r, Value::Int(42));
/// ```
pub fn abs(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 1, line)?;

    match &args[0] {
        Value::Byte(n) => Ok(Value::Byte(*n)),
        Value::Short(n) => n.checked_abs()
                            .map(Value::Short)
                            .ok_or(RuntimeError::Overflow { line }),
        Value::Int(n) => n.checked_abs()
                          .map(Value::Int)
                          .ok_or(RuntimeError::Overflow { line }),
        Value::Long(n) => n.checked_abs()
                           .map(Value::Long)
                           .ok_or(RuntimeError::Overflow { line }),
        Value::Float(r) => Ok(Value::Float(r.abs())),
        Value::Double(r) => Ok(Value::Double(r.abs())),
        Value::Decimal(d) => Ok(Value::Decimal(d.abs())),
        other => Err(RuntimeError::ExpectedNumber { found: other.kind(),
                                                    line }),
    }
}

/// Raises a number to a power in double precision.
///
/// Accepts exactly two numeric arguments: the base and the exponent.
///
/// # Parameters
/// - `args`: Slice containing two arguments.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Double` containing the power.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::builtin::pow, value::core::Value};
///
/// let r = pow(&[Value::Int(2), Value::Int(10)], 1).unwrap();
/// assert_eq!(r, Value::Double(1024.0));
/// ```
pub fn pow(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 2, line)?;

    let base = args[0].as_double(line)?;
    let exponent = args[1].as_double(line)?;

    Ok(Value::Double(base.powf(exponent)))
}

/// Rounds a number to a whole value or to a given number of decimal places.
///
/// With one argument the value rounds to the nearest whole number; with two,
/// the second argument gives the number of decimal places, which must lie
/// between 0 and 15. Halfway cases round away from zero.
///
/// # Parameters
/// - `args`: Slice containing one or two arguments.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Double` containing the rounded value.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::builtin::round, value::core::Value};
///
/// let r = round(&[Value::Double(2.5)], 1).unwrap();
/// assert_eq!(r, Value::Double(3.0));
///
/// let r = round(&[Value::Double(3.14159), Value::Int(2)], 1).unwrap();
/// assert_eq!(r, Value::Double(3.14));
/// ```
pub fn round(args: &[Value], line: usize) -> EvalResult<Value> {
    let digits = match args {
        [_] => 0,
        [_, digits] => digits.as_long(line)?,
        _ => return Err(RuntimeError::ArgumentCountMismatch { line }),
    };

    if !(0..=15).contains(&digits) {
        return Err(RuntimeError::InvalidArgument { details: format!("Round expects between 0 and 15 decimal places, found {digits}"),
                                                   line });
    }

    let value = args[0].as_double(line)?;
    #[allow(clippy::cast_possible_truncation)]
    let factor = 10f64.powi(digits as i32);

    Ok(Value::Double((value * factor).round() / factor))
}

/// Returns the sign of a number as an integer: `-1`, `0` or `1`.
///
/// Accepts exactly one numeric argument. The sign of NaN is undefined and
/// reported as an invalid argument.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Int` containing the sign.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::builtin::sign, value::core::Value};
///
/// let s = sign(&[Value::Double(-0.5)], 1).unwrap();
/// assert_eq!(s, Value::Int(-1));
/// ```
pub fn sign(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 1, line)?;

    let sign = match &args[0] {
        Value::Byte(n) => i32::from(*n != 0),
        Value::Short(n) => i32::from(n.signum()),
        Value::Int(n) => n.signum(),
        Value::Long(n) => {
            if *n > 0 {
                1
            } else if *n < 0 {
                -1
            } else {
                0
            }
        },
        Value::Float(r) => float_sign(f64::from(*r), line)?,
        Value::Double(r) => float_sign(*r, line)?,
        Value::Decimal(d) => {
            if d.is_zero() {
                0
            } else if d.is_sign_positive() {
                1
            } else {
                -1
            }
        },
        other => {
            return Err(RuntimeError::ExpectedNumber { found: other.kind(),
                                                      line });
        },
    };

    Ok(Value::Int(sign))
}
/// Sign of a floating-point number; NaN has none.
fn float_sign(r: f64, line: usize) -> EvalResult<i32> {
    if r.is_nan() {
        return Err(RuntimeError::InvalidArgument { details: "Sign is undefined for NaN".to_string(),
                                                   line });
    }

    Ok(if r > 0.0 {
           1
       } else if r < 0.0 {
           -1
       } else {
           0
       })
}

/// Computes the natural logarithm, or the logarithm in a given base.
///
/// With one argument the natural logarithm is returned; with two, the
/// second argument is the base.
///
/// # Parameters
/// - `args`: Slice containing one or two arguments.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Double` containing the logarithm.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::builtin::log, value::core::Value};
///
/// let r = log(&[Value::Double(1.0)], 1).unwrap();
/// assert_eq!(r, Value::Double(0.0));
/// ```
pub fn log(args: &[Value], line: usize) -> EvalResult<Value> {
    match args {
        [value] => Ok(Value::Double(value.as_double(line)?.ln())),
        [value, base] => Ok(Value::Double(value.as_double(line)?.log(base.as_double(line)?))),
        _ => Err(RuntimeError::ArgumentCountMismatch { line }),
    }
}

/// Tests whether the first argument equals any of the remaining ones.
///
/// Membership uses the same equality as the `==` operator, so `In(1, 1.0)`
/// holds and a null needle only matches another null, the empty string or
/// `false`.
///
/// # Parameters
/// - `args`: Slice containing the needle followed by at least one candidate.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Boolean` reporting membership.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::builtin::in_list, value::core::Value};
///
/// let r = in_list(&[Value::Int(1), Value::Int(3), Value::Double(1.0)], 1).unwrap();
/// assert_eq!(r, Value::Boolean(true));
/// ```
pub fn in_list(args: &[Value], line: usize) -> EvalResult<Value> {
    let (needle, candidates) = match args {
        [needle, candidates @ ..] if !candidates.is_empty() => (needle, candidates),
        _ => return Err(RuntimeError::ArgumentCountMismatch { line }),
    };

    Ok(Value::Boolean(candidates.iter()
                                .any(|candidate| values_equal(needle, candidate))))
}
