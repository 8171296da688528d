use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_logical_or},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, the conditional operator, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := ternary`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_ternary(tokens)
}
/// Parses a conditional expression of the form `condition ? then : else`.
///
/// The operator is right-associative, so `a ? b : c ? d : e` parses as
/// `a ? b : (c ? d : e)`. When no `?` follows, the condition is returned
/// unchanged.
///
/// Grammar: `ternary := logical_or ("?" ternary ":" ternary)?`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// An `Expr::Ternary` node, or the bare condition when no `?` follows.
///
/// # Errors
/// - `ExpectedColon` if the `:` separating the branches is missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_ternary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_logical_or(tokens)?;

    if let Some((Token::Question, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let then_branch = parse_ternary(tokens)?;

        match tokens.next() {
            Some((Token::Colon, _)) => {},
            _ => return Err(ParseError::ExpectedColon { line }),
        }

        let else_branch = parse_ternary(tokens)?;

        return Ok(Expr::Ternary { condition:   Box::new(condition),
                                  then_branch: Box::new(then_branch),
                                  else_branch: Box::new(else_branch),
                                  line });
    }

    Ok(condition)
}
