use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{builtin, min_max},
            utils::check_arity,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line
/// number. It returns the computed value wrapped in `EvalResult`.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "Abs"      => { arity: Arity::Exact(1), func: builtin::abs },
    "Acos"     => { arity: Arity::Exact(1), func: builtin::acos },
    "Asin"     => { arity: Arity::Exact(1), func: builtin::asin },
    "Atan"     => { arity: Arity::Exact(1), func: builtin::atan },
    "Ceiling"  => { arity: Arity::Exact(1), func: builtin::ceiling },
    "Cos"      => { arity: Arity::Exact(1), func: builtin::cos },
    "Exp"      => { arity: Arity::Exact(1), func: builtin::exp },
    "Floor"    => { arity: Arity::Exact(1), func: builtin::floor },
    "In"       => { arity: Arity::AtLeast(2), func: builtin::in_list },
    "Log"      => { arity: Arity::OneOf(&[1, 2]), func: builtin::log },
    "Log10"    => { arity: Arity::Exact(1), func: builtin::log10 },
    "Max"      => { arity: Arity::Exact(2), func: |args, line| min_max::min_max("Max", args, line) },
    "Min"      => { arity: Arity::Exact(2), func: |args, line| min_max::min_max("Min", args, line) },
    "Pow"      => { arity: Arity::Exact(2), func: builtin::pow },
    "Round"    => { arity: Arity::OneOf(&[1, 2]), func: builtin::round },
    "Sign"     => { arity: Arity::Exact(1), func: builtin::sign },
    "Sin"      => { arity: Arity::Exact(1), func: builtin::sin },
    "Sqrt"     => { arity: Arity::Exact(1), func: builtin::sqrt },
    "Tan"      => { arity: Arity::Exact(1), func: builtin::tan },
    "Truncate" => { arity: Arity::Exact(1), func: builtin::truncate },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::AtLeast(m) => n >= *m,
        }
    }
}

impl Context {
    /// Evaluates a function call expression.
    ///
    /// The conditional builtin `If` is handled before anything else because
    /// only one of its branches may run. Every other function receives its
    /// arguments eagerly evaluated, in source order.
    ///
    /// # Parameters
    /// - `name`: Function name as written in the source.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup, arity or evaluation fails.
    pub(crate) fn eval_function_call(&self,
                                     name: &str,
                                     arguments: &[Expr],
                                     line: usize)
                                     -> EvalResult<Value> {
        if name.eq_ignore_ascii_case("If") {
            return self.eval_conditional(arguments, line);
        }

        let mut args = Vec::with_capacity(arguments.len());

        for expr in arguments {
            args.push(self.eval(expr)?);
        }

        Self::eval_function(name, &args, line)
    }

    /// Evaluates the conditional builtin `If(condition, then, else)`.
    ///
    /// Only the branch the condition selects is evaluated, so the branch
    /// not taken may fail without consequence.
    fn eval_conditional(&self, arguments: &[Expr], line: usize) -> EvalResult<Value> {
        check_arity(arguments, 3, line)?;

        if self.eval(&arguments[0])?.as_bool(line)? {
            self.eval(&arguments[1])
        } else {
            self.eval(&arguments[2])
        }
    }

    /// Looks up a builtin by name and executes it.
    ///
    /// Names match case-insensitively, so `min`, `Min` and `MIN` all reach
    /// the same builtin. Arity is verified before the call.
    ///
    /// # Errors
    /// - Unknown function name.
    /// - Wrong number of arguments.
    fn eval_function(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
        if let Some(builtin) = BUILTIN_TABLE.iter()
                                            .find(|b| b.name.eq_ignore_ascii_case(name))
        {
            if !builtin.arity.check(args.len()) {
                return Err(RuntimeError::ArgumentCountMismatch { line });
            }
            return (builtin.func)(args, line);
        }

        Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                            line })
    }
}
