use std::cmp::Ordering;

use crate::interpreter::value::{coercion::{CoercionResult, coerce_comparison},
                                core::Value};

/// Tests two values for equality. This predicate is total: every pair of
/// values is either equal or not, and no pairing is an error.
///
/// `null` equals itself, the empty string, and `false`; it is unequal to
/// every number and every date (`null != 0` holds). Concrete pairs coerce
/// to a common kind first, so `1 == 1.0`; pairs with no common kind are
/// simply unequal.
///
/// # Example
/// ```
/// use reckon::interpreter::value::{comparison::values_equal, core::Value};
///
/// assert!(values_equal(&Value::Null, &Value::Null));
/// assert!(values_equal(&Value::Null, &Value::Text(String::new())));
/// assert!(values_equal(&Value::Int(1), &Value::Double(1.0)));
/// assert!(!values_equal(&Value::Null, &Value::Int(0)));
/// ```
#[must_use]
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Null, Value::Text(s)) | (Value::Text(s), Value::Null) => s.is_empty(),
        (Value::Null, Value::Boolean(b)) | (Value::Boolean(b), Value::Null) => !b,
        (Value::Null, _) | (_, Value::Null) => false,
        _ => coerce_comparison(left, right).is_ok_and(|(a, b)| a == b),
    }
}

/// Orders two values, if an ordering exists.
///
/// Three outcomes are possible: `Ok(Some(ordering))` for ordered pairs,
/// `Ok(None)` for unordered pairs (every relational operator then evaluates
/// to false), and `Err` when the two kinds have no common representation at
/// all.
///
/// `null` orders before every date, orders against strings as the empty
/// string would, and is unordered against everything else (including
/// itself). Floating NaN makes a numeric pair unordered.
///
/// # Example
/// ```
/// use std::cmp::Ordering;
///
/// use reckon::interpreter::value::{comparison::compare_values, core::Value};
///
/// let less = compare_values(&Value::Int(1), &Value::Double(2.0)).unwrap();
/// assert_eq!(less, Some(Ordering::Less));
///
/// let unordered = compare_values(&Value::Null, &Value::Int(0)).unwrap();
/// assert_eq!(unordered, None);
/// ```
pub fn compare_values(left: &Value, right: &Value) -> CoercionResult<Option<Ordering>> {
    match (left, right) {
        (Value::Null, Value::Null) => Ok(None),
        (Value::Null, Value::Date(_)) => Ok(Some(Ordering::Less)),
        (Value::Date(_), Value::Null) => Ok(Some(Ordering::Greater)),
        (Value::Null, Value::Text(s)) => Ok(Some("".cmp(s.as_str()))),
        (Value::Text(s), Value::Null) => Ok(Some(s.as_str().cmp(""))),
        (Value::Null, _) | (_, Value::Null) => Ok(None),
        _ => {
            let (a, b) = coerce_comparison(left, right)?;
            Ok(coerced_compare(&a, &b))
        },
    }
}

/// Orders a coerced same-kind pair. Floats use their partial order; every
/// other kind is totally ordered.
fn coerced_compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Boolean(a), Value::Boolean(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Long(a), Value::Long(b)) => Some(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Double(a), Value::Double(b)) => a.partial_cmp(b),
        (Value::Decimal(a), Value::Decimal(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
        _ => None,
    }
}
