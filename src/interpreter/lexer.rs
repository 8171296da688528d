use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.0` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    Real(f64),
    /// Integer literal tokens, such as `42`. The digits are kept as text so
    /// that literals too wide for 64 bits can fall back to floating point
    /// during parsing.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// The `null` literal.
    #[token("null")]
    Null,
    /// String literal tokens, such as `'hello'`, with their escape sequences
    /// already resolved.
    #[regex(r"'(?:[^'\\]|\\.)*'", parse_text)]
    Text(String),
    /// Date literal tokens written between `#` markers, such as
    /// `#2012-05-02#`. The inner text is validated during parsing.
    #[regex(r"#[^#\n]*#", parse_date)]
    Date(String),
    /// Identifier tokens; function or parameter names such as `x` or `Min`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Bracketed parameter names such as `[unit price]`.
    #[regex(r"\[[^\]\n]+\]", parse_bracket_identifier)]
    BracketIdentifier(String),
    /// `&&`, also written `and`
    #[token("&&")]
    #[token("and")]
    And,
    /// `||`, also written `or`
    #[token("||")]
    #[token("or")]
    Or,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `==`, also written `=`
    #[token("==")]
    #[token("=")]
    EqualEqual,
    /// `!=`, also written `<>`
    #[token("!=")]
    #[token("<>")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<<`
    #[token("<<")]
    LeftShift,
    /// `>>`
    #[token(">>")]
    RightShift,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `!`, also written `not`
    #[token("!")]
    #[token("not")]
    Bang,
    /// `~`
    #[token("~")]
    Tilde,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `^`
    #[token("^")]
    Caret,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,

    /// Newlines are whitespace in this grammar but still advance the line
    /// counter used in error reports.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Tabs, spaces and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically resets or increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Parses a boolean literal from the current token slice (`true` or `false`).
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(true)` if the slice is `"true"`.
/// - `Some(false)` if the slice is `"false"`.
/// - `None` otherwise.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
/// Resolves the escape sequences of a quoted string literal.
///
/// Supported escapes are `\'`, `\\`, `\n`, `\r` and `\t`; anything else
/// makes the token invalid.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(String)`: The unescaped string contents.
/// - `None`: If the literal contains an unknown escape.
fn parse_text(lex: &logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];

    let mut text = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next()? {
                '\'' => text.push('\''),
                '\\' => text.push('\\'),
                'n' => text.push('\n'),
                'r' => text.push('\r'),
                't' => text.push('\t'),
                _ => return None,
            }
        } else {
            text.push(c);
        }
    }

    Some(text)
}
/// Extracts the text between the `#` markers of a date literal.
fn parse_date(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].trim().to_string()
}
/// Extracts the name between the brackets of a `[name]` parameter.
fn parse_bracket_identifier(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].trim().to_string()
}

/// Tokenizes a source string into `(Token, line)` pairs.
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// - `Ok(Vec<(Token, usize)>)`: Every recognized token paired with the line
///   it appeared on.
/// - `Err(ParseError::UnexpectedToken)`: On the first piece of input no
///   token matches.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].0, Token::Plus);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => {
                return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                         line:  lexer.extras.line, });
            },
        }
    }

    Ok(tokens)
}
