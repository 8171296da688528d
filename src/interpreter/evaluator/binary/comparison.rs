use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::core::comparison_error,
            core::{Context, EvalResult},
        },
        value::{
            comparison::{compare_values, values_equal},
            core::Value,
        },
    },
};

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Equality is total: it never fails, and operands of kinds that cannot
    /// meet numerically are simply unequal. Null equals only null, the
    /// empty string and `false`.
    ///
    /// The relational operators order null before every date, against text
    /// as the empty string, and not at all against numbers and booleans; an
    /// unordered pair makes all four relational operators false. Kinds that
    /// cannot be coerced together cannot be ordered and produce an
    /// `Incomparable` error.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::Int(3);
    /// let b = Value::Double(5.0);
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less, &a, &b, 1);
    ///
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        Ok(Value::Boolean(match op {
                              Equal => values_equal(left, right),
                              NotEqual => !values_equal(left, right),

                              Less | Greater | LessEqual | GreaterEqual => {
                                  let ordering = compare_values(left, right).map_err(|e| {
                                      comparison_error(e, left, right, line)
                                  })?;

                                  match ordering {
                                      Some(ord) => match op {
                                          Less => ord.is_lt(),
                                          Greater => ord.is_gt(),
                                          LessEqual => ord.is_le(),
                                          GreaterEqual => ord.is_ge(),
                                          _ => unreachable!(),
                                      },
                                      // NaN or null against a number: no order holds.
                                      None => false,
                                  }
                              },

                              _ => unreachable!(),
                          }))
    }
}
