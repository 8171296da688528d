use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::core::operation_error,
            core::{Context, EvalResult},
        },
        value::{
            coercion::{coerce_bitwise, coerce_shift},
            core::Value,
        },
    },
};

impl Context {
    /// Evaluates a bitwise or shift operation between two values.
    ///
    /// Operands must be integral; booleans participate as `0` and `1`. The
    /// pair widens to `Long` when either side is one, otherwise the
    /// operation runs on `Int`. For shifts the left operand keeps its
    /// integerized kind and the right operand only contributes a count,
    /// which is masked to the width of the left operand, so `1 << 33` on an
    /// `Int` shifts by one.
    ///
    /// # Parameters
    /// - `op`: The bitwise or shift operator.
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
    /// let masked = Context::eval_bitwise(BinaryOperator::BitwiseAnd, &Value::Int(6), &Value::Int(3), 1);
    /// assert_eq!(masked.unwrap(), Value::Int(2));
    ///
    /// let shifted = Context::eval_bitwise(BinaryOperator::LeftShift, &Value::Int(1), &Value::Int(33), 1);
    /// assert_eq!(shifted.unwrap(), Value::Int(2));
    /// ```
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn eval_bitwise(op: BinaryOperator,
                        left: &Value,
                        right: &Value,
                        line: usize)
                        -> EvalResult<Value> {
        use BinaryOperator::{BitwiseAnd, BitwiseOr, BitwiseXor, LeftShift, RightShift};

        match op {
            LeftShift | RightShift => {
                let (value, count) =
                    coerce_shift(left, right).map_err(|e| {
                                                 operation_error(e, op, left, right, line)
                                             })?;

                match value {
                    Value::Int(n) => Ok(Value::Int(if matches!(op, LeftShift) {
                                                       n.wrapping_shl(count as u32)
                                                   } else {
                                                       n.wrapping_shr(count as u32)
                                                   })),
                    Value::Long(n) => Ok(Value::Long(if matches!(op, LeftShift) {
                                                         n.wrapping_shl(count as u32)
                                                     } else {
                                                         n.wrapping_shr(count as u32)
                                                     })),
                    _ => unreachable!(),
                }
            },

            BitwiseAnd | BitwiseOr | BitwiseXor => {
                let (a, b) = coerce_bitwise(left, right).map_err(|e| {
                                                            operation_error(e, op, left, right,
                                                                            line)
                                                        })?;

                match (a, b) {
                    (Value::Int(x), Value::Int(y)) => Ok(Value::Int(match op {
                                                                        BitwiseAnd => x & y,
                                                                        BitwiseOr => x | y,
                                                                        BitwiseXor => x ^ y,
                                                                        _ => unreachable!(),
                                                                    })),
                    (Value::Long(x), Value::Long(y)) => Ok(Value::Long(match op {
                                                                           BitwiseAnd => x & y,
                                                                           BitwiseOr => x | y,
                                                                           BitwiseXor => x ^ y,
                                                                           _ => unreachable!(),
                                                                       })),
                    _ => unreachable!(),
                }
            },

            _ => unreachable!(),
        }
    }
}
