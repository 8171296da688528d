use std::iter::Peekable;

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not, also spelled `not`)
/// - `~`  (bitwise complement)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "!" | "~") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                           expr: Box::new(expr),
                           line: *line, })
    } else if let Some((Token::Bang, line)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op:   UnaryOperator::Not,
                           expr: Box::new(expr),
                           line: *line, })
    } else if let Some((Token::Tilde, line)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op:   UnaryOperator::BitwiseNot,
                           expr: Box::new(expr),
                           line: *line, })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric, boolean, string, date and `null` literals
/// - parameters, plain or bracketed
/// - function calls
/// - parenthesized expressions
///
/// This function does not handle unary or binary operators.
/// It dispatches to specialized parsing functions depending on the leading
/// token.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier_or_function
///              | "[" name "]"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Real(..)
         | Token::Integer(..)
         | Token::Bool(..)
         | Token::Null
         | Token::Text(..)
         | Token::Date(..),
         _) => parse_literal(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::BracketIdentifier(_), _) => parse_bracket_parameter(tokens),
        (Token::Identifier(_), _) => parse_identifier_or_function(tokens),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses a literal expression.
///
/// Supported forms include:
/// - Integer literals
/// - Real literals
/// - Boolean literals (`true`, `false`)
/// - The `null` literal
/// - String literals (`'text'`)
/// - Date literals (`#2012-05-02#`)
///
/// Integer literals keep their digits until this point; values that fit in 64
/// bits stay integral and anything wider degrades to floating point.
/// Date literals are validated here, since the lexer only captures the text
/// between the `#` markers.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a literal.
///
/// # Returns
/// An [`Expr::Literal`] containing the parsed value.
///
/// # Errors
/// Returns a `ParseError` if a date literal holds text no accepted date
/// shape matches.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (tok, line) = tokens.peek().unwrap();
    match tok {
        Token::Real(n) => {
            tokens.next();
            Ok(Expr::Literal { value: n.into(),
                               line:  *line, })
        },
        Token::Integer(digits) => {
            tokens.next();
            Ok(Expr::Literal { value: integer_literal(digits),
                               line:  *line, })
        },
        Token::Bool(b) => {
            tokens.next();
            Ok(Expr::Literal { value: b.into(),
                               line:  *line, })
        },
        Token::Null => {
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Null,
                               line:  *line, })
        },
        Token::Text(s) => {
            tokens.next();
            Ok(Expr::Literal { value: s.into(),
                               line:  *line, })
        },
        Token::Date(text) => {
            tokens.next();
            let stamp = parse_date_literal(text, *line)?;
            Ok(Expr::Literal { value: stamp.into(),
                               line:  *line, })
        },
        _ => unreachable!(),
    }
}

/// Converts the digits of an integer literal into a literal value.
///
/// Digits that fit in 64 bits stay integral; anything wider falls back to
/// floating point. The fallback itself cannot fail: a digit run is always a
/// valid double, and magnitudes past the double range saturate to infinity
/// inside `parse`, leaving the `unwrap_or` default unreachable.
fn integer_literal(digits: &str) -> LiteralValue {
    match digits.parse::<i64>() {
        Ok(n) => LiteralValue::Integer(n),
        Err(_) => LiteralValue::Real(digits.parse().unwrap_or(f64::INFINITY)),
    }
}

/// Parses the inner text of a `#...#` date literal.
///
/// Accepted shapes, tried in order:
/// - `2012-05-02 18:30:00` or `2012/05/02 18:30:00`
/// - `2012-05-02` or `2012/05/02`, which receive a midnight time component
///
/// # Parameters
/// - `text`: The text between the `#` markers, already trimmed.
/// - `line`: Line number of the literal, for error reporting.
///
/// # Returns
/// The parsed timestamp.
///
/// # Errors
/// Returns `ParseError::InvalidDateLiteral` if no accepted shape matches.
fn parse_date_literal(text: &str, line: usize) -> ParseResult<NaiveDateTime> {
    const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y/%m/%d %H:%M:%S"];
    const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

    for format in DATE_TIME_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(stamp);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(day) = NaiveDate::parse_from_str(text, format)
           && let Some(stamp) = day.and_hms_opt(0, 0, 0)
        {
            return Ok(stamp);
        }
    }

    Err(ParseError::InvalidDateLiteral { text: text.to_string(),
                                         line })
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}

/// Parses a bracketed parameter reference such as `[unit price]`.
///
/// Bracketed names may contain spaces and other characters a plain
/// identifier cannot.
fn parse_bracket_parameter<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::BracketIdentifier(name), line)) => {
            Ok(Expr::Parameter { name: name.clone(),
                                 line: *line, })
        },
        _ => unreachable!(),
    }
}

/// Parses an identifier or function call.
///
/// Supported forms:
///
/// - identifier
/// - identifier(arg1, arg2, ...)
///
/// The function first consumes the identifier token.
/// If the next token is `(`, a function-call expression is parsed.
/// Otherwise, the identifier is a parameter reference.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// - [`Expr::FunctionCall`] if followed by parentheses,
/// - [`Expr::Parameter`] otherwise.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the initial token is not an identifier,
/// - function-call arguments fail to parse,
/// - the closing `)` is missing.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(n), line)) => (n.clone(), line),
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                     line:  *line, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { line: 0 });
        },
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
            Ok(Expr::FunctionCall { name,
                                    arguments,
                                    line: *line })
        },
        _ => Ok(Expr::Parameter { name, line: *line }),
    }
}
