use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{coercion::CoercionError, core::Value},
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending
    /// on the operator family. Arithmetic operators use `eval_arithmetic`,
    /// which widens the operands to a common numeric kind first.
    /// Relational and equality operators use `eval_comparison`.
    /// Bitwise and shift operators use `eval_bitwise`.
    /// Logical operators call `eval_logic`, which combines operands that
    /// have both been evaluated; short-circuiting happens before values
    /// reach this point.
    ///
    /// # Parameters
    /// - `op`: The operator.
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
    /// let left = Value::Int(3);
    /// let right = Value::Int(4);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Int(7));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, BitwiseAnd, BitwiseOr, BitwiseXor, Div, Equal, Greater, GreaterEqual,
            LeftShift, Less, LessEqual, Mod, Mul, NotEqual, Or, RightShift, Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_arithmetic(op, left, right, line),

            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right, line)
            },

            BitwiseAnd | BitwiseOr | BitwiseXor | LeftShift | RightShift => {
                Self::eval_bitwise(op, left, right, line)
            },

            And | Or => Self::eval_logic(op, left, right, line),
        }
    }
}

/// Maps a coercion failure onto the runtime error reported for an operator
/// application.
///
/// Null operands and incompatible kinds both surface as `InvalidOperation`;
/// a value that cannot survive widening surfaces as `Overflow`.
pub(crate) fn operation_error(error: CoercionError,
                              op: BinaryOperator,
                              left: &Value,
                              right: &Value,
                              line: usize)
                              -> RuntimeError {
    match error {
        CoercionError::NullOperand | CoercionError::Incompatible { .. } => {
            RuntimeError::InvalidOperation { op:    op.to_string(),
                                             left:  left.kind(),
                                             right: right.kind(),
                                             line }
        },
        CoercionError::OutOfRange => RuntimeError::Overflow { line },
    }
}

/// Maps a coercion failure onto the runtime error reported for an ordering
/// comparison.
pub(crate) fn comparison_error(error: CoercionError,
                               left: &Value,
                               right: &Value,
                               line: usize)
                               -> RuntimeError {
    match error {
        CoercionError::OutOfRange => RuntimeError::Overflow { line },
        _ => RuntimeError::Incomparable { left:  left.kind(),
                                          right: right.kind(),
                                          line },
    }
}
