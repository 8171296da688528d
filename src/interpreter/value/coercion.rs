use rust_decimal::{Decimal, prelude::FromPrimitive};

use crate::interpreter::value::core::{Value, ValueKind};

/// Result alias for coercion attempts.
pub type CoercionResult<T> = Result<T, CoercionError>;

/// Represents the ways pairing two operands for an operator family can fail.
///
/// Coercion errors carry no source position; the operator dispatcher
/// translates them into [`RuntimeError`](crate::error::RuntimeError)s with
/// the line attached. `NullOperand` in particular never reaches callers of
/// the public evaluation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercionError {
    /// One of the operands was `null`, which the arithmetic and bitwise
    /// families reject outright.
    NullOperand,
    /// No common kind exists for the two operand kinds.
    Incompatible {
        /// The kind of the left operand.
        left:  ValueKind,
        /// The kind of the right operand.
        right: ValueKind,
    },
    /// A value cannot be represented in the common kind, such as a
    /// non-finite float forced into decimal.
    OutOfRange,
}

/// Numeric widening order. Small integer kinds sit below `Int`; every
/// numeric pair promotes to the higher-ranked kind, never lower than `Int`.
const fn numeric_rank(kind: ValueKind) -> Option<u8> {
    match kind {
        ValueKind::Byte => Some(1),
        ValueKind::Short => Some(2),
        ValueKind::Int => Some(3),
        ValueKind::Long => Some(4),
        ValueKind::Float => Some(5),
        ValueKind::Double => Some(6),
        ValueKind::Decimal => Some(7),
        _ => None,
    }
}

/// Picks the common kind for a numeric pair: the higher-ranked of the two,
/// with `Int` as the floor so that `Byte`/`Short` math is done in `Int`.
fn common_numeric_kind(left: ValueKind, right: ValueKind) -> CoercionResult<ValueKind> {
    match (numeric_rank(left), numeric_rank(right)) {
        (Some(a), Some(b)) => Ok(match a.max(b).max(3) {
                                  3 => ValueKind::Int,
                                  4 => ValueKind::Long,
                                  5 => ValueKind::Float,
                                  6 => ValueKind::Double,
                                  _ => ValueKind::Decimal,
                              }),
        _ => Err(CoercionError::Incompatible { left, right }),
    }
}

/// Converts a numeric value into `target`, which must rank at least as high
/// as the value's own kind.
#[allow(clippy::cast_precision_loss)]
fn convert_numeric(value: &Value, target: ValueKind) -> CoercionResult<Value> {
    let converted = match target {
        ValueKind::Int => Value::Int(match value {
                              Value::Byte(n) => i32::from(*n),
                              Value::Short(n) => i32::from(*n),
                              Value::Int(n) => *n,
                              _ => unreachable!(),
                          }),
        ValueKind::Long => Value::Long(match value {
                               Value::Byte(n) => i64::from(*n),
                               Value::Short(n) => i64::from(*n),
                               Value::Int(n) => i64::from(*n),
                               Value::Long(n) => *n,
                               _ => unreachable!(),
                           }),
        ValueKind::Float => Value::Float(match value {
                                Value::Byte(n) => f32::from(*n),
                                Value::Short(n) => f32::from(*n),
                                Value::Int(n) => *n as f32,
                                Value::Long(n) => *n as f32,
                                Value::Float(r) => *r,
                                _ => unreachable!(),
                            }),
        ValueKind::Double => Value::Double(match value {
                                 Value::Byte(n) => f64::from(*n),
                                 Value::Short(n) => f64::from(*n),
                                 Value::Int(n) => f64::from(*n),
                                 Value::Long(n) => *n as f64,
                                 Value::Float(r) => f64::from(*r),
                                 Value::Double(r) => *r,
                                 _ => unreachable!(),
                             }),
        ValueKind::Decimal => Value::Decimal(match value {
                                  Value::Byte(n) => Decimal::from(*n),
                                  Value::Short(n) => Decimal::from(*n),
                                  Value::Int(n) => Decimal::from(*n),
                                  Value::Long(n) => Decimal::from(*n),
                                  // from_f64 keeps the digits a float actually
                                  // carries, so 0.3 widens to the decimal 0.3.
                                  Value::Float(r) => {
                                      Decimal::from_f64(f64::from(*r))
                                          .ok_or(CoercionError::OutOfRange)?
                                  },
                                  Value::Double(r) => {
                                      Decimal::from_f64(*r).ok_or(CoercionError::OutOfRange)?
                                  },
                                  Value::Decimal(d) => *d,
                                  _ => unreachable!(),
                              }),
        _ => unreachable!(),
    };
    Ok(converted)
}

/// The integer form of a single operand under the bitwise family, if it has
/// one. Booleans count as `Int` 0/1 for this family alone.
fn integerize(value: &Value) -> Option<Value> {
    match value {
        Value::Boolean(b) => Some(Value::Int(i32::from(*b))),
        Value::Byte(n) => Some(Value::Int(i32::from(*n))),
        Value::Short(n) => Some(Value::Int(i32::from(*n))),
        Value::Int(n) => Some(Value::Int(*n)),
        Value::Long(n) => Some(Value::Long(*n)),
        _ => None,
    }
}

/// Pairs two operands for the arithmetic family (`+ - * / %`).
///
/// Either operand being `null` fails with [`CoercionError::NullOperand`];
/// booleans, strings and dates have no arithmetic form and fail with
/// [`CoercionError::Incompatible`]. Numeric operands widen to their common
/// kind.
///
/// # Example
/// ```
/// use reckon::interpreter::value::{coercion::coerce_arithmetic, core::Value};
///
/// let (a, b) = coerce_arithmetic(&Value::Int(1), &Value::Double(2.5)).unwrap();
///
/// assert_eq!(a, Value::Double(1.0));
/// assert_eq!(b, Value::Double(2.5));
/// ```
pub fn coerce_arithmetic(left: &Value, right: &Value) -> CoercionResult<(Value, Value)> {
    if left.is_null() || right.is_null() {
        return Err(CoercionError::NullOperand);
    }

    let target = common_numeric_kind(left.kind(), right.kind())?;
    Ok((convert_numeric(left, target)?, convert_numeric(right, target)?))
}

/// Pairs two operands for the bitwise family (`& | ^`).
///
/// Both operands must have an integer form (booleans become `Int` 0/1 here);
/// the pair widens to `Long` when either side is `Long`, otherwise `Int`.
///
/// # Example
/// ```
/// use reckon::interpreter::value::{coercion::coerce_bitwise, core::Value};
///
/// let (a, b) = coerce_bitwise(&Value::Boolean(true), &Value::Byte(3)).unwrap();
///
/// assert_eq!(a, Value::Int(1));
/// assert_eq!(b, Value::Int(3));
/// ```
pub fn coerce_bitwise(left: &Value, right: &Value) -> CoercionResult<(Value, Value)> {
    if left.is_null() || right.is_null() {
        return Err(CoercionError::NullOperand);
    }

    match (integerize(left), integerize(right)) {
        (Some(Value::Long(a)), Some(Value::Int(b))) => {
            Ok((Value::Long(a), Value::Long(i64::from(b))))
        },
        (Some(Value::Int(a)), Some(Value::Long(b))) => {
            Ok((Value::Long(i64::from(a)), Value::Long(b)))
        },
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(CoercionError::Incompatible { left:  left.kind(),
                                               right: right.kind(), }),
    }
}

/// Prepares the operands of a shift (`<<` or `>>`).
///
/// The left operand takes its bitwise integer form and keeps that kind; the
/// right operand supplies the raw shift count, which the operator later
/// masks to the left operand's width.
pub fn coerce_shift(left: &Value, right: &Value) -> CoercionResult<(Value, i64)> {
    if left.is_null() || right.is_null() {
        return Err(CoercionError::NullOperand);
    }

    match (integerize(left), integerize(right)) {
        (Some(value), Some(Value::Int(n))) => Ok((value, i64::from(n))),
        (Some(value), Some(Value::Long(n))) => Ok((value, n)),
        _ => Err(CoercionError::Incompatible { left:  left.kind(),
                                               right: right.kind(), }),
    }
}

/// Pairs two operands for the comparison family (`== != < <= > >=`).
///
/// Same-kind strings, booleans and dates pass through unchanged; numeric
/// pairs widen to their common kind; everything else is incompatible. The
/// callers handle `null` before coercion; a `null` operand reaching this
/// point still reports [`CoercionError::NullOperand`].
///
/// # Example
/// ```
/// use reckon::interpreter::value::{coercion::coerce_comparison, core::Value};
///
/// let (a, b) = coerce_comparison(&Value::Byte(200), &Value::Long(1)).unwrap();
///
/// assert_eq!(a, Value::Long(200));
/// assert_eq!(b, Value::Long(1));
/// ```
pub fn coerce_comparison(left: &Value, right: &Value) -> CoercionResult<(Value, Value)> {
    if left.is_null() || right.is_null() {
        return Err(CoercionError::NullOperand);
    }

    match (left, right) {
        (Value::Boolean(_), Value::Boolean(_))
        | (Value::Text(_), Value::Text(_))
        | (Value::Date(_), Value::Date(_)) => Ok((left.clone(), right.clone())),
        _ => {
            let target = common_numeric_kind(left.kind(), right.kind())?;
            Ok((convert_numeric(left, target)?, convert_numeric(right, target)?))
        },
    }
}
