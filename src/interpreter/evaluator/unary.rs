use crate::{
    ast::{BinaryOperator, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: subtracts the value from integer zero, so negation
    ///   carries the exact widening, wrapping and null rules of binary
    ///   subtraction.
    /// - `Not`: boolean negation through `as_bool`; `!null` is true.
    /// - `BitwiseNot`: one's complement for integral kinds. `Byte` and
    ///   `Short` widen to `Int` first.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// // Negation
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Int(5), 1).unwrap();
    /// assert_eq!(v, Value::Int(-5));
    ///
    /// // Logical not treats null as false
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::Null, 1).unwrap();
    /// assert_eq!(v, Value::Boolean(true));
    ///
    /// // Bitwise complement
    /// let v = Context::eval_unary(UnaryOperator::BitwiseNot, &Value::Int(5), 1).unwrap();
    /// assert_eq!(v, Value::Int(-6));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => {
                Self::eval_arithmetic(BinaryOperator::Sub, &Value::Int(0), value, line)
            },
            UnaryOperator::Not => Ok(Value::Boolean(!value.as_bool(line)?)),
            UnaryOperator::BitwiseNot => match value {
                Value::Byte(n) => Ok(Value::Int(!i32::from(*n))),
                Value::Short(n) => Ok(Value::Int(!i32::from(*n))),
                Value::Int(n) => Ok(Value::Int(!n)),
                Value::Long(n) => Ok(Value::Long(!n)),
                _ => Err(RuntimeError::InvalidUnaryOperation { op:      op.to_string(),
                                                               operand: value.kind(),
                                                               line }),
            },
        }
    }
}
