use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::tokenize,
        parser::core::parse_expression,
        value::core::Value,
    },
};

/// A parsed expression together with the parameters it evaluates against.
///
/// Parsing happens once, in [`Expression::new`]; the resulting tree can then
/// be evaluated any number of times, with parameter bindings changed between
/// evaluations.
///
/// # Example
/// ```
/// use reckon::{expression::Expression, interpreter::value::core::Value};
///
/// let mut expression = Expression::new("[rate] * 100").unwrap();
/// expression.set_parameter("rate", Value::Double(0.25));
///
/// assert_eq!(expression.evaluate().unwrap(), Value::Double(25.0));
/// ```
pub struct Expression {
    ast:     Expr,
    context: Context,
}

impl Expression {
    /// Parses `source` into an expression with an empty parameter set.
    ///
    /// # Errors
    /// Returns a `ParseError` if the source cannot be tokenized, does not form
    /// a valid expression, or leaves tokens behind after the expression ends.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let token_pairs = tokenize(source)?;
        let mut tokens = token_pairs.iter().peekable();

        let ast = parse_expression(&mut tokens)?;

        if let Some((token, line)) = tokens.next() {
            return Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                              line:  *line, });
        }

        Ok(Self { ast,
                  context: Context::new() })
    }

    /// Binds a parameter for subsequent evaluations, replacing any earlier
    /// binding with the same name.
    pub fn set_parameter(&mut self, name: &str, value: impl Into<Value>) {
        self.context.set_parameter(name, value);
    }

    /// Evaluates the expression against the current parameter bindings.
    pub fn evaluate(&self) -> EvalResult<Value> {
        self.context.eval(&self.ast)
    }
}
