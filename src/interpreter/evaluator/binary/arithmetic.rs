use rust_decimal::Decimal;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::operation_error,
            core::{Context, EvalResult},
        },
        value::{coercion::coerce_arithmetic, core::Value},
    },
};

impl Context {
    /// Evaluates an arithmetic operation between two values.
    ///
    /// A null operand is rejected before anything else, so even `'a' + null`
    /// fails. Addition with a string on either side concatenates the display
    /// forms of both operands; this is the only arithmetic that crosses
    /// kinds. Everything else widens both operands to a common numeric kind
    /// and applies the operator there:
    ///
    /// - `Int` and `Long` wrap on overflow for `+`, `-` and `*`, like
    ///   two's-complement machine arithmetic does.
    /// - `Float` and `Double` follow IEEE 754, so dividing by zero yields an
    ///   infinity and `x % 0.0` yields NaN.
    /// - `Decimal` arithmetic is checked; exceeding its range is an error.
    /// - Integer division and remainder report division by zero, and the one
    ///   overflowing quotient (the most negative value divided by `-1`) is
    ///   an error rather than a wrap.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let quotient = Context::eval_arithmetic(BinaryOperator::Div, &Value::Int(10), &Value::Int(4), 1);
    /// assert_eq!(quotient.unwrap(), Value::Int(2));
    ///
    /// let greeting = Context::eval_arithmetic(BinaryOperator::Add,
    ///                                         &Value::Text("n = ".to_string()),
    ///                                         &Value::Int(4),
    ///                                         1);
    /// assert_eq!(greeting.unwrap(), Value::Text("n = 4".to_string()));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        if left.is_null() || right.is_null() {
            return Err(RuntimeError::InvalidOperation { op:    op.to_string(),
                                                        left:  left.kind(),
                                                        right: right.kind(),
                                                        line });
        }

        if matches!(op, Add) && (left.is_text() || right.is_text()) {
            return Ok(Value::Text(format!("{left}{right}")));
        }

        let (a, b) = coerce_arithmetic(left, right).map_err(|e| {
                                                       operation_error(e, op, left, right, line)
                                                   })?;

        match (a, b) {
            (Value::Int(x), Value::Int(y)) => match op {
                Add => Ok(Value::Int(x.wrapping_add(y))),
                Sub => Ok(Value::Int(x.wrapping_sub(y))),
                Mul => Ok(Value::Int(x.wrapping_mul(y))),
                Div | Mod => {
                    if y == 0 {
                        return Err(RuntimeError::DivisionByZero { line });
                    }
                    let result = if matches!(op, Div) {
                        x.checked_div(y)
                    } else {
                        x.checked_rem(y)
                    };
                    result.map(Value::Int)
                          .ok_or(RuntimeError::Overflow { line })
                },
                _ => unreachable!(),
            },

            (Value::Long(x), Value::Long(y)) => match op {
                Add => Ok(Value::Long(x.wrapping_add(y))),
                Sub => Ok(Value::Long(x.wrapping_sub(y))),
                Mul => Ok(Value::Long(x.wrapping_mul(y))),
                Div | Mod => {
                    if y == 0 {
                        return Err(RuntimeError::DivisionByZero { line });
                    }
                    let result = if matches!(op, Div) {
                        x.checked_div(y)
                    } else {
                        x.checked_rem(y)
                    };
                    result.map(Value::Long)
                          .ok_or(RuntimeError::Overflow { line })
                },
                _ => unreachable!(),
            },

            (Value::Float(x), Value::Float(y)) => Ok(Value::Float(match op {
                                                                      Add => x + y,
                                                                      Sub => x - y,
                                                                      Mul => x * y,
                                                                      Div => x / y,
                                                                      Mod => x % y,
                                                                      _ => unreachable!(),
                                                                  })),

            (Value::Double(x), Value::Double(y)) => Ok(Value::Double(match op {
                                                                         Add => x + y,
                                                                         Sub => x - y,
                                                                         Mul => x * y,
                                                                         Div => x / y,
                                                                         Mod => x % y,
                                                                         _ => unreachable!(),
                                                                     })),

            (Value::Decimal(x), Value::Decimal(y)) => decimal_arithmetic(op, x, y, line),

            _ => unreachable!(),
        }
    }
}

/// Applies an arithmetic operator to two decimals with checked semantics.
///
/// Division and remainder by a zero decimal are reported as division by
/// zero; any other `None` from the checked operations means the result left
/// the representable range.
fn decimal_arithmetic(op: BinaryOperator, x: Decimal, y: Decimal, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mod, Mul, Sub};

    if matches!(op, Div | Mod) && y.is_zero() {
        return Err(RuntimeError::DivisionByZero { line });
    }

    let result = match op {
        Add => x.checked_add(y),
        Sub => x.checked_sub(y),
        Mul => x.checked_mul(y),
        Div => x.checked_div(y),
        Mod => x.checked_rem(y),
        _ => unreachable!(),
    };

    result.map(Value::Decimal)
          .ok_or(RuntimeError::Overflow { line })
}
