use chrono::NaiveDate;
use reckon::{evaluate, expression::Expression, interpreter::value::core::Value};
use rust_decimal::Decimal;

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
fn integer_literals_pick_their_width() {
    assert_eq!(eval("123"), Value::Int(123));
    assert_eq!(eval("2147483647"), Value::Int(2_147_483_647));
    assert_eq!(eval("2147483648"), Value::Long(2_147_483_648));
    assert_eq!(eval("9223372036854775807"), Value::Long(i64::MAX));
    // Too wide for any integer kind: falls back to floating point.
    assert_eq!(eval("18446744073709551616"),
               Value::Double(18_446_744_073_709_551_616.0));
    // Past even the double range the literal saturates to infinity.
    assert_eq!(eval(&"9".repeat(400)), Value::Double(f64::INFINITY));
}

#[test]
fn real_literals() {
    assert_eq!(eval("2.5"), Value::Double(2.5));
    assert_eq!(eval(".5"), Value::Double(0.5));
    assert_eq!(eval("1e3"), Value::Double(1000.0));
    assert_eq!(eval("2.5e-1"), Value::Double(0.25));
}

#[test]
fn text_literals_resolve_escapes() {
    assert_eq!(eval("'hello'"), Value::Text("hello".to_string()));
    assert_eq!(eval(r"'it\'s'"), Value::Text("it's".to_string()));
    assert_eq!(eval(r"'a\nb'"), Value::Text("a\nb".to_string()));
    assert_error(r"'bad \q escape'");
}

#[test]
fn date_literals_accept_both_separators() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
                                                   .and_hms_opt(0, 0, 0)
                                                   .unwrap();

    assert_eq!(eval("#2024-01-15#"), Value::Date(date));
    assert_eq!(eval("# 2024/01/15 #"), Value::Date(date));
    assert_true("#2024-01-15 10:30:00# > #2024-01-15#");
    assert_error("#not a date#");
}

#[test]
fn integer_arithmetic_truncates_and_wraps() {
    assert_eq!(eval("2 + 3 * 4"), Value::Int(14));
    assert_eq!(eval("(2 + 3) * 4"), Value::Int(20));
    assert_eq!(eval("10 / 4"), Value::Int(2));
    assert_eq!(eval("10 % 3"), Value::Int(1));
    assert_eq!(eval("2147483647 + 1"), Value::Int(-2_147_483_648));
    assert_eq!(eval("9223372036854775807 + 1"), Value::Long(i64::MIN));
}

#[test]
fn mixed_arithmetic_widens_operands() {
    assert_eq!(eval("1 + 2.5"), Value::Double(3.5));
    assert_eq!(eval("10 / 4.0"), Value::Double(2.5));
    assert_eq!(eval("2147483648 * 2"), Value::Long(4_294_967_296));
}

#[test]
fn division_by_zero() {
    assert_error("1 / 0");
    assert_error("1 % 0");
    // Floating point division by zero is not an error.
    assert_eq!(eval("1.0 / 0"), Value::Double(f64::INFINITY));
    assert_true("0.0 / 0 != 0.0 / 0");
}

#[test]
fn checked_division_reports_overflow() {
    assert_error("(-9223372036854775807 - 1) / -1");
    assert_error("(-9223372036854775807 - 1) % -1");
}

#[test]
fn addition_concatenates_text() {
    assert_eq!(eval("'reck' + 'on'"), Value::Text("reckon".to_string()));
    assert_eq!(eval("'n = ' + 4"), Value::Text("n = 4".to_string()));
    assert_eq!(eval("4 + ' legs'"), Value::Text("4 legs".to_string()));
    assert_eq!(eval("'pi = ' + 3.5"), Value::Text("pi = 3.5".to_string()));
    // Only `+` crosses over to text; the other operators do not.
    assert_error("'a' - 'b'");
    assert_error("'a' * 2");
}

#[test]
fn equality_coerces_numeric_kinds_only() {
    assert_true("1 == 1.0");
    assert_true("2 = 2");
    assert_true("1 <> 2");
    assert_false("'2' == 2");
    assert_false("true == 1");
    assert_true("'abc' == 'abc'");
    assert_false("'abc' == 'abd'");
    assert_true("true == true");
    assert_false("true == false");
}

#[test]
fn relational_operators_follow_each_kind() {
    assert_true("2 < 3");
    assert_true("3 >= 3");
    assert_true("2.5 > 2");
    assert_true("'abc' < 'abd'");
    assert_true("#2024-01-01# < #2024-06-15#");
    assert_error("'2' < 3");
}

#[test]
fn nan_never_orders() {
    assert_false("0.0 / 0 < 1");
    assert_false("0.0 / 0 >= 1");
    assert_false("0.0 / 0 == 0.0 / 0");
}

#[test]
fn bitwise_operators_work_on_integers() {
    assert_eq!(eval("3 & 5"), Value::Int(1));
    assert_eq!(eval("6 | 3"), Value::Int(7));
    assert_eq!(eval("6 ^ 3"), Value::Int(5));
    assert_eq!(eval("4294967296 | 1"), Value::Long(4_294_967_297));
    // Booleans join in as 0 and 1.
    assert_eq!(eval("true & true"), Value::Int(1));
    assert_error("2.5 & 1");
    assert_error("'a' | 1");
}

#[test]
fn shifts_mask_the_count() {
    assert_eq!(eval("1 << 5"), Value::Int(32));
    assert_eq!(eval("256 >> 4"), Value::Int(16));
    // A 32-bit left operand only sees the low five bits of the count.
    assert_eq!(eval("1 << 33"), Value::Int(2));
    assert_error("1 << 0.5");
}

#[test]
fn logical_operators_short_circuit() {
    assert_false("false && 1 / 0 == 0");
    assert_true("true || 1 / 0 == 0");
    assert_true("1 < 2 && 2 < 3");
    assert_true("false or true");
    assert_true("not false and true");
    // Non-boolean operands are read for their truthiness.
    assert_true("2 && 'yes'");
}

#[test]
fn unary_operators() {
    assert_eq!(eval("-5"), Value::Int(-5));
    assert_eq!(eval("--5"), Value::Int(5));
    assert_eq!(eval("- 2.5"), Value::Double(-2.5));
    assert_eq!(eval("!true"), Value::Boolean(false));
    assert_eq!(eval("!''"), Value::Boolean(true));
    assert_eq!(eval("~5"), Value::Int(-6));
    assert_eq!(eval("~~5"), Value::Int(5));
    assert_error("~true");
    assert_error("~2.5");
}

#[test]
fn conditional_operator_evaluates_one_branch() {
    assert_eq!(eval("1 < 2 ? 'yes' : 'no'"), Value::Text("yes".to_string()));
    assert_eq!(eval("(false ? 1 : 2)"), Value::Int(2));
    // Nested conditionals associate to the right.
    assert_eq!(eval("false ? 1 : false ? 2 : 3"), Value::Int(3));
    assert_eq!(eval("true ? 1 : 1 / 0"), Value::Int(1));
    assert_eq!(eval("false ? 1 / 0 : 42"), Value::Int(42));
    assert_eq!(eval("'x' ? 1 : 2"), Value::Int(1));
    assert_error("#2024-01-01# ? 1 : 2");
}

#[test]
fn parameters_bind_and_rebind() {
    let mut expression = Expression::new("[x] * 2 + [y]").unwrap();
    expression.set_parameter("x", 20);
    expression.set_parameter("y", 2);

    assert_eq!(expression.evaluate().unwrap(), Value::Int(42));

    expression.set_parameter("y", 10);

    assert_eq!(expression.evaluate().unwrap(), Value::Int(50));
}

#[test]
fn bare_identifiers_are_parameters_too() {
    let mut expression = Expression::new("price + 1").unwrap();
    expression.set_parameter("price", 9);

    assert_eq!(expression.evaluate().unwrap(), Value::Int(10));
}

#[test]
fn bracket_names_can_hold_spaces() {
    let mut expression = Expression::new("[unit price] * [count]").unwrap();
    expression.set_parameter("unit price", 3);
    expression.set_parameter("count", 4);

    assert_eq!(expression.evaluate().unwrap(), Value::Int(12));
}

#[test]
fn unbound_parameter_is_an_error() {
    let expression = Expression::new("[missing] + 1").unwrap();

    assert!(expression.evaluate().is_err());
}

#[test]
fn decimal_parameters_stay_exact() {
    let mut expression = Expression::new("[price] * 3").unwrap();
    expression.set_parameter("price", Decimal::new(1050, 2));

    assert_eq!(expression.evaluate().unwrap(),
               Value::Decimal(Decimal::new(3150, 2)));

    let mut expression = Expression::new("[a] + [b] == 0.3").unwrap();
    expression.set_parameter("a", Decimal::new(1, 1));
    expression.set_parameter("b", Decimal::new(2, 1));

    assert_eq!(expression.evaluate().unwrap(), Value::Boolean(true));
}

#[test]
fn text_parameters_join_concatenation() {
    let mut expression = Expression::new("'Hello, ' + [name] + '!'").unwrap();
    expression.set_parameter("name", "Ada");

    assert_eq!(expression.evaluate().unwrap(),
               Value::Text("Hello, Ada!".to_string()));
}

#[test]
fn malformed_input_is_rejected() {
    assert_error("");
    assert_error("1 +");
    assert_error("(1 + 2");
    assert_error("1 ? 2");
    assert_error("1 + 2 3");
    assert_error("@");
}
