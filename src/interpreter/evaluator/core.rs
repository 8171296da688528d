use std::collections::HashMap;

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the parameter values an expression can reference by
/// name.
///
/// ## Usage
///
/// `Context` is created once and reused for evaluating expressions. All
/// evaluation methods (like `eval()`) access this state to resolve
/// parameters.
pub struct Context {
    /// A mapping from parameter names to their values.
    /// Populated through [`Context::set_parameter`].
    pub parameters: HashMap<String, Value>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with no parameters bound.
    #[must_use]
    pub fn new() -> Self {
        Self { parameters: HashMap::new() }
    }
    /// Binds a parameter name to a value, replacing any previous binding.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// context.set_parameter("x", Value::Int(42));
    ///
    /// assert_eq!(context.parameters.get("x"), Some(&Value::Int(42)));
    /// ```
    pub fn set_parameter(&mut self, name: &str, value: impl Into<Value>) {
        self.parameters.insert(name.to_string(), value.into());
    }
    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant:
    /// literals, parameters, unary and binary operations, conditional
    /// expressions and function calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed `Value`, or a `RuntimeError` describing the failure.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Parameter { name, line } => {
                self.parameters
                    .get(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnknownParameter { name: name.clone(),
                                                                    line: *line, })
            },
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left, op, right, line } => self.eval_binary_op(left, *op, right, *line),
            Expr::Ternary { condition,
                            then_branch,
                            else_branch,
                            line, } => {
                if self.eval(condition)?.as_bool(*line)? {
                    self.eval(then_branch)
                } else {
                    self.eval(else_branch)
                }
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line),
        }
    }

    /// Evaluates a binary operation node.
    ///
    /// The logical operators short-circuit here: `&&` skips its right
    /// operand when the left one is already false, and `||` skips it when
    /// the left one is already true. Every other operator evaluates both
    /// operands and dispatches on the values.
    fn eval_binary_op(&self,
                      left: &Expr,
                      op: BinaryOperator,
                      right: &Expr,
                      line: usize)
                      -> EvalResult<Value> {
        let left_value = self.eval(left)?;

        match op {
            BinaryOperator::And => {
                if !left_value.as_bool(line)? {
                    return Ok(Value::Boolean(false));
                }
            },
            BinaryOperator::Or => {
                if left_value.as_bool(line)? {
                    return Ok(Value::Boolean(true));
                }
            },
            _ => {},
        }

        let right_value = self.eval(right)?;
        Self::eval_binary(op, &left_value, &right_value, line)
    }
}
