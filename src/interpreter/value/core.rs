use chrono::NaiveDateTime;
use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the operand kinds that can appear in expressions:
/// `null`, booleans, integers of several widths, floating-point numbers,
/// exact decimals, strings and dates. Values are immutable; every operator
/// produces a fresh value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value, written `null`.
    Null,
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and logical
    /// operations, and accepted wherever a condition is required.
    Boolean(bool),
    /// An unsigned 8-bit integer value.
    Byte(u8),
    /// A signed 16-bit integer value.
    Short(i16),
    /// A signed 32-bit integer value. Integer literals that fit produce this
    /// kind.
    Int(i32),
    /// A signed 64-bit integer value.
    Long(i64),
    /// A single-precision floating-point value.
    Float(f32),
    /// A double-precision floating-point value. Fractional literals produce
    /// this kind.
    Double(f64),
    /// An exact decimal value with fixed precision.
    Decimal(Decimal),
    /// A string value.
    Text(String),
    /// A date-and-time value, written between `#` markers in source.
    Date(NaiveDateTime),
}

/// Names the kind of a [`Value`] for diagnostics and coercion decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// The `null` value.
    Null,
    /// A boolean.
    Boolean,
    /// An unsigned 8-bit integer.
    Byte,
    /// A signed 16-bit integer.
    Short,
    /// A signed 32-bit integer.
    Int,
    /// A signed 64-bit integer.
    Long,
    /// A single-precision float.
    Float,
    /// A double-precision float.
    Double,
    /// An exact decimal.
    Decimal,
    /// A string.
    Text,
    /// A date-and-time.
    Date,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "integer",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::Text => "string",
            Self::Date => "date",
        };
        write!(f, "{kind}")
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Self::Byte(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Self::Short(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Self::Date(v)
    }
}

impl Value {
    /// Builds an integer value in the narrowest of the two literal kinds:
    /// `Int` when the number fits a 32-bit integer, otherwise `Long`.
    ///
    /// # Parameters
    /// - `n`: The integer magnitude.
    ///
    /// # Returns
    /// `Value::Int` or `Value::Long`.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::integer(7), Value::Int(7));
    /// assert_eq!(Value::integer(4_294_967_296), Value::Long(4_294_967_296));
    /// ```
    #[must_use]
    pub fn integer(n: i64) -> Self {
        i32::try_from(n).map_or(Self::Long(n), Self::Int)
    }

    /// Gets the [`ValueKind`] naming this value's kind.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Byte(_) => ValueKind::Byte,
            Self::Short(_) => ValueKind::Short,
            Self::Int(_) => ValueKind::Int,
            Self::Long(_) => ValueKind::Long,
            Self::Float(_) => ValueKind::Float,
            Self::Double(_) => ValueKind::Double,
            Self::Decimal(_) => ValueKind::Decimal,
            Self::Text(_) => ValueKind::Text,
            Self::Date(_) => ValueKind::Date,
        }
    }

    /// Returns `true` if the value is [`Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Text`].
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(..))
    }

    /// Returns `true` if the value is a floating-point NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        match self {
            Self::Float(r) => r.is_nan(),
            Self::Double(r) => r.is_nan(),
            _ => false,
        }
    }

    /// Converts the value to `bool` using the language's truth rules, or
    /// returns an error if the value has no boolean form.
    ///
    /// The rules are: `null` is false, numbers are true when non-zero (NaN
    /// counts as non-zero), strings are true when non-empty, booleans are
    /// themselves, and dates have no boolean form.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean form of the value.
    /// - `Err(RuntimeError::ExpectedBoolean)`: If the value is a date.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Null.as_bool(1).unwrap());
    /// assert!(Value::Int(2).as_bool(1).unwrap());
    /// assert!(!Value::Text(String::new()).as_bool(1).unwrap());
    /// ```
    pub fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Null => Ok(false),
            Self::Boolean(b) => Ok(*b),
            Self::Byte(n) => Ok(*n != 0),
            Self::Short(n) => Ok(*n != 0),
            Self::Int(n) => Ok(*n != 0),
            Self::Long(n) => Ok(*n != 0),
            Self::Float(r) => Ok(*r != 0.0),
            Self::Double(r) => Ok(*r != 0.0),
            Self::Decimal(d) => Ok(!d.is_zero()),
            Self::Text(s) => Ok(!s.is_empty()),
            Self::Date(_) => Err(RuntimeError::ExpectedBoolean { found: self.kind(),
                                                                 line }),
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Integer and decimal conversions may lose precision for very large
    /// magnitudes, matching the widening rules used by the operators.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: The numeric value as a double.
    /// - `Err(RuntimeError::ExpectedNumber)`: If the value is not numeric.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::value::core::Value;
    ///
    /// let x = Value::Int(10);
    /// let real = x.as_double(42).unwrap();
    ///
    /// assert_eq!(real, 10.0);
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn as_double(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Byte(n) => Ok(f64::from(*n)),
            Self::Short(n) => Ok(f64::from(*n)),
            Self::Int(n) => Ok(f64::from(*n)),
            Self::Long(n) => Ok(*n as f64),
            Self::Float(r) => Ok(f64::from(*r)),
            Self::Double(r) => Ok(*r),
            Self::Decimal(d) => d.to_f64().ok_or(RuntimeError::Overflow { line }),
            _ => Err(RuntimeError::ExpectedNumber { found: self.kind(),
                                                    line }),
        }
    }

    /// Converts the value to an `i64`, or returns an error if not an integer
    /// kind.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(i64)`: The integer value.
    /// - `Err(RuntimeError::ExpectedNumber)`: If not an integer kind.
    pub fn as_long(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Byte(n) => Ok(i64::from(*n)),
            Self::Short(n) => Ok(i64::from(*n)),
            Self::Int(n) => Ok(i64::from(*n)),
            Self::Long(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedNumber { found: self.kind(),
                                                    line }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Null renders as empty text, which also drives concatenation.
            Self::Null => Ok(()),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Byte(n) => write!(f, "{n}"),
            Self::Short(n) => write!(f, "{n}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Long(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r}"),
            Self::Double(r) => write!(f, "{r}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => Self::integer(*i),
            LiteralValue::Real(n) => (*n).into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Text(s) => s.clone().into(),
            LiteralValue::Date(d) => (*d).into(),
            LiteralValue::Null => Self::Null,
        }
    }
}
