use reckon::{
    evaluate,
    interpreter::{evaluator::function::core::BUILTIN_FUNCTIONS, value::core::Value},
};

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
fn absolute_value_keeps_the_kind() {
    assert_eq!(eval("Abs(-5)"), Value::Int(5));
    assert_eq!(eval("Abs(3)"), Value::Int(3));
    assert_eq!(eval("Abs(-5.5)"), Value::Double(5.5));
    assert_eq!(eval("Abs(4294967296 * -1)"), Value::Long(4_294_967_296));
    assert_error("Abs('x')");
    // The most negative long has no positive counterpart.
    assert_error("Abs(-9223372036854775807 - 1)");
}

#[test]
fn rounding_goes_away_from_zero_on_halves() {
    assert_eq!(eval("Round(2.5)"), Value::Double(3.0));
    assert_eq!(eval("Round(-2.5)"), Value::Double(-3.0));
    assert_eq!(eval("Round(3.2)"), Value::Double(3.0));
    assert_eq!(eval("Round(1.449, 1)"), Value::Double(1.4));
    assert_eq!(eval("Round(7, 2)"), Value::Double(7.0));
    assert_error("Round(1.0, 16)");
    assert_error("Round(1.0, -1)");
    assert_error("Round(1.0, 0.5)");
}

#[test]
fn simple_math_builtins() {
    assert_eq!(eval("Sqrt(9)"), Value::Double(3.0));
    assert_eq!(eval("Pow(2, 10)"), Value::Double(1024.0));
    assert_eq!(eval("Exp(0)"), Value::Double(1.0));
    assert_eq!(eval("Floor(2.7)"), Value::Double(2.0));
    assert_eq!(eval("Ceiling(2.1)"), Value::Double(3.0));
    assert_eq!(eval("Truncate(-2.7)"), Value::Double(-2.0));
    assert_true("Sqrt(2) > 1.41 && Sqrt(2) < 1.42");
}

#[test]
fn trigonometry_at_known_points() {
    assert_eq!(eval("Sin(0)"), Value::Double(0.0));
    assert_eq!(eval("Cos(0)"), Value::Double(1.0));
    assert_eq!(eval("Tan(0)"), Value::Double(0.0));
    assert_eq!(eval("Asin(0)"), Value::Double(0.0));
    assert_eq!(eval("Acos(1)"), Value::Double(0.0));
    assert_eq!(eval("Atan(0)"), Value::Double(0.0));
}

#[test]
fn logarithms() {
    assert_eq!(eval("Log(1)"), Value::Double(0.0));
    assert_eq!(eval("Log10(1)"), Value::Double(0.0));
    assert_eq!(eval("Round(Log(8, 2))"), Value::Double(3.0));
    assert_true("Log(100, 10) > 1.99 && Log(100, 10) < 2.01");
}

#[test]
fn sign_of_each_numeric_kind() {
    assert_eq!(eval("Sign(-42)"), Value::Int(-1));
    assert_eq!(eval("Sign(0)"), Value::Int(0));
    assert_eq!(eval("Sign(11)"), Value::Int(1));
    assert_eq!(eval("Sign(-0.5)"), Value::Int(-1));
    assert_eq!(eval("Sign(0.0)"), Value::Int(0));
    assert_eq!(eval("Sign(9223372036854775807)"), Value::Int(1));
    assert_error("Sign(0.0 / 0)");
    assert_error("Sign('x')");
}

#[test]
fn min_max_return_the_coerced_winner() {
    assert_eq!(eval("Min(3, 2.5)"), Value::Double(2.5));
    assert_eq!(eval("Min(2, 10)"), Value::Int(2));
    assert_eq!(eval("Max(2, 10)"), Value::Int(10));
    assert_eq!(eval("Max('a', 'b')"), Value::Text("b".to_string()));
    assert_true("Min(#2024-01-01#, #2023-01-01#) == #2023-01-01#");
    // An unordered comparison means NaN is present, and NaN wins.
    assert_true("Min(0.0 / 0, 1) != Min(0.0 / 0, 1)");
    assert_error("Min('a', 1)");
}

#[test]
fn membership_uses_operator_equality() {
    assert_true("In('b', 'a', 'b', 'c')");
    assert_false("In(1, 2, 3)");
    assert_true("In(1.0, 3, 2, 1)");
    assert_false("In('1', 1)");
    assert_error("In(1)");
}

#[test]
fn conditional_function_skips_the_untaken_branch() {
    assert_eq!(eval("If(true, 1, 1 / 0)"), Value::Int(1));
    assert_eq!(eval("If(false, 1 / 0, 42)"), Value::Int(42));
    assert_eq!(eval("If(1 > 2, 'big', 'small')"),
               Value::Text("small".to_string()));
    assert_error("If(true, 1)");
}

#[test]
fn function_names_ignore_case() {
    assert_eq!(eval("min(1, 2)"), Value::Int(1));
    assert_eq!(eval("SQRT(4)"), Value::Double(2.0));
    assert_eq!(eval("if(false, 1, 2)"), Value::Int(2));
}

#[test]
fn arity_is_checked() {
    assert_error("Min(1)");
    assert_error("Max(1, 2, 3)");
    assert_error("Sqrt()");
    assert_error("Sqrt(1, 2)");
    assert_error("Log(1, 2, 3)");
}

#[test]
fn unknown_function_is_an_error() {
    assert_error("Frobnicate(1)");
    assert_error("Sqrt('x')");
}

#[test]
fn every_listed_builtin_resolves() {
    // No builtin takes zero arguments, so the complaint must be about the
    // count, never about the name.
    for name in BUILTIN_FUNCTIONS {
        let error = evaluate(&format!("{name}()")).unwrap_err().to_string();

        assert!(!error.contains("Unknown function"),
                "builtin '{name}' did not resolve: {error}");
    }
}
