use chrono::NaiveDateTime;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code: numbers, booleans, quoted strings, `#...#` date literals and
/// the `null` keyword. It is used in the AST to represent literal expressions
/// and as a convenient container for constants during evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A single-quoted string literal, already unescaped.
    Text(String),
    /// A date literal written between `#` markers.
    Date(NaiveDateTime),
    /// The `null` literal.
    Null,
}

impl<T: Into<Self> + Clone> From<&T> for LiteralValue {
    fn from(v: &T) -> Self {
        v.clone().into()
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<NaiveDateTime> for LiteralValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Date(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all syntactic forms of the expression language: literals,
/// parameter references, unary and binary operations, the conditional
/// (`?:`) operator and function calls. Each variant carries its source line
/// for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean, date or `null`).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a named parameter, written bare (`rate`) or bracketed
    /// (`[rate]`).
    Parameter {
        /// Name of the parameter.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation, logical not, bitwise not).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic, bitwise, comparison or logical).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// The conditional operator `condition ? then : else`.
    Ternary {
        /// The condition expression.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is true.
        then_branch: Box<Self>,
        /// Expression evaluated if the condition is false.
        else_branch: Box<Self>,
        /// Line number in the source code.
        line:        usize,
    },
    /// Function call expression (e.g. `Min(a, b)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use reckon::ast::Expr;
    ///
    /// let expr = Expr::Parameter { name: "x".to_string(),
    ///                              line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Parameter { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Ternary { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators cover arithmetic, bitwise, comparison and logical forms.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition, or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`, also written `=`)
    Equal,
    /// Not equal to (`!=`, also written `<>`)
    NotEqual,
    /// Logical and (`&&`, also written `and`)
    And,
    /// Logical or (`||`, also written `or`)
    Or,
    /// Bitwise and (`&`)
    BitwiseAnd,
    /// Bitwise or (`|`)
    BitwiseOr,
    /// Bitwise exclusive or (`^`)
    BitwiseXor,
    /// Bitwise shift left (`<<`)
    LeftShift,
    /// Bitwise shift right (`>>`)
    RightShift,
}

/// Represents a unary operator.
///
/// Unary operators include negation, logical NOT, and bitwise NOT.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`, also written `not x`).
    Not,
    /// Bitwise complement (e.g. `~x`).
    BitwiseNot,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, BitwiseAnd, BitwiseOr, BitwiseXor, Div, Equal, Greater, GreaterEqual,
            LeftShift, Less, LessEqual, Mod, Mul, NotEqual, Or, RightShift, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
            BitwiseAnd => "&",
            BitwiseOr => "|",
            BitwiseXor => "^",
            LeftShift => "<<",
            RightShift => ">>",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
            Self::BitwiseNot => "~",
        };
        write!(f, "{operator}")
    }
}
