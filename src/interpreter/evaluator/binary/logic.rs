use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a logical operation between two values.
    ///
    /// The operands are converted to booleans using `as_bool`, so numbers,
    /// strings and null all participate. Supported operators are logical AND
    /// and OR. This combines operands that have both been evaluated; the
    /// expression evaluator short-circuits before calling in whenever the
    /// left operand already decides the result.
    ///
    /// # Parameters
    /// - `op`: The logical operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::Boolean(false);
    /// let b = Value::Int(1);
    ///
    /// let result = Context::eval_logic(BinaryOperator::Or, &a, &b, 1);
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_logic(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> EvalResult<Value> {
        use BinaryOperator::{And, Or};

        match op {
            And => Ok(Value::Boolean(left.as_bool(line)? && right.as_bool(line)?)),
            Or => Ok(Value::Boolean(left.as_bool(line)? || right.as_bool(line)?)),
            _ => unreachable!(),
        }
    }
}
