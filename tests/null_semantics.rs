use reckon::{evaluate, interpreter::value::core::Value};

fn eval(source: &str) -> Value {
    evaluate(source).unwrap_or_else(|e| panic!("Expression '{source}' failed: {e}"))
}

fn assert_true(source: &str) {
    assert_eq!(eval(source), Value::Boolean(true), "expected '{source}' to hold");
}

fn assert_false(source: &str) {
    assert_eq!(eval(source),
               Value::Boolean(false),
               "expected '{source}' not to hold");
}

fn assert_error(source: &str) {
    if let Ok(value) = evaluate(source) {
        panic!("Expression '{source}' produced {value:?} but was expected to fail");
    }
}

#[test]
fn null_is_a_value_of_its_own() {
    assert_eq!(eval("null"), Value::Null);
    assert_eq!(eval("null").to_string(), "");
    assert_eq!(eval("true ? null : 1"), Value::Null);
}

#[test]
fn arithmetic_with_null_is_rejected() {
    assert_error("null + 1");
    assert_error("1 + null");
    assert_error("null - 1");
    assert_error("2 - null");
    assert_error("null * 2");
    assert_error("2 * null");
    assert_error("null / 2");
    assert_error("2 / null");
    assert_error("null % 2");
    assert_error("2 % null");
    assert_error("null + null");
    // Even text concatenation refuses a null operand.
    assert_error("'a' + null");
    assert_error("null + 'a'");
    assert_error("-null");
}

#[test]
fn bitwise_with_null_is_rejected() {
    assert_error("null & 1");
    assert_error("1 | null");
    assert_error("null ^ 1");
    assert_error("null << 1");
    assert_error("1 >> null");
    assert_error("~null");
}

#[test]
fn null_equality() {
    assert_true("null == null");
    assert_false("null != null");
    // Null equals the values that render as nothing: '' and false.
    assert_true("null == ''");
    assert_true("'' == null");
    assert_false("null != ''");
    assert_false("'' != null");
    assert_true("null == false");
    assert_false("null == true");
    assert_false("null == 0");
    assert_false("null == 0.0");
    assert_true("null != 0");
    assert_false("null == 'x'");
    assert_false("null == #2024-01-01#");
    assert_false("#2024-01-01# == null");
    assert_true("null != #2024-01-01#");
    assert_true("#2024-01-01# != null");
}

#[test]
fn null_sorts_before_dates_and_text() {
    // Null sits before every date, whichever side it stands on.
    assert_true("null < #2024-01-01#");
    assert_true("null <= #2024-01-01#");
    assert_false("null > #2024-01-01#");
    assert_false("null >= #2024-01-01#");
    assert_true("#2024-01-01# > null");
    assert_true("#2024-01-01# >= null");
    assert_false("#2024-01-01# < null");
    assert_false("#2024-01-01# <= null");
    assert_true("null < 'abc'");
    assert_true("'abc' > null");
    // Against the empty string the two sides tie.
    assert_true("null <= ''");
    assert_true("null >= ''");
    assert_false("null < ''");
}

#[test]
fn null_does_not_order_against_numbers() {
    assert_false("null < 0");
    assert_false("null > 0");
    assert_false("null <= 0");
    assert_false("null >= 0");
    assert_false("null < true");
    assert_false("null < null");
    assert_false("null <= null");
}

#[test]
fn null_is_false_in_boolean_positions() {
    assert_true("!null");
    assert_false("null && true");
    assert_false("null || false");
    assert_true("null || true");
    assert_eq!(eval("null ? 1 : 2"), Value::Int(2));
}

#[test]
fn min_max_never_pick_null_over_a_value() {
    assert_eq!(eval("Min(null, 10)"), Value::Int(10));
    assert_eq!(eval("Min(10, null)"), Value::Int(10));
    assert_eq!(eval("Max(null, 10)"), Value::Int(10));
    assert_eq!(eval("Max(10, null)"), Value::Int(10));
    assert_eq!(eval("Min(null, null)"), Value::Null);
    assert_eq!(eval("Max(null, null)"), Value::Null);
}

#[test]
fn membership_with_null_follows_equality() {
    assert_true("In(null, null)");
    assert_true("In(null, 1, '')");
    assert_false("In(null, 1, 2)");
    assert_false("In(1, null)");
}
