use crate::interpreter::value::core::ValueKind;

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Referenced a parameter that has no bound value.
    UnknownParameter {
        /// The name of the parameter.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called an unknown function.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A binary operator was applied to operand kinds that do not support it,
    /// including any arithmetic or bitwise use of `null`.
    InvalidOperation {
        /// The operator symbol.
        op:    String,
        /// The kind of the left operand.
        left:  ValueKind,
        /// The kind of the right operand.
        right: ValueKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A unary operator was applied to an operand kind that does not support
    /// it.
    InvalidUnaryOperation {
        /// The operator symbol.
        op:      String,
        /// The kind of the operand.
        operand: ValueKind,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An ordering comparison was attempted between kinds with no common
    /// representation.
    Incomparable {
        /// The kind of the left operand.
        left:  ValueKind,
        /// The kind of the right operand.
        right: ValueKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Attempted integer or decimal division (or modulo) by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic result fell outside the representable range of its kind.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A boolean value was expected, but the value has no boolean form.
    ExpectedBoolean {
        /// The kind of the offending value.
        found: ValueKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// The kind of the offending value.
        found: ValueKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownParameter { name, line } => {
                write!(f, "Error on line {line}: Unknown parameter '{name}'.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { line } => {
                write!(f, "Error on line {line}: Argument count mismatch.")
            },
            Self::InvalidOperation { op, left, right, line } => write!(f,
                                                                      "Error on line {line}: Operator '{op}' cannot be applied to operands of kind '{left}' and '{right}'."),
            Self::InvalidUnaryOperation { op, operand, line } => write!(f,
                                                                       "Error on line {line}: Operator '{op}' cannot be applied to an operand of kind '{operand}'."),
            Self::Incomparable { left, right, line } => write!(f,
                                                               "Error on line {line}: Values of kind '{left}' and '{right}' cannot be ordered against each other."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Arithmetic overflow while trying to compute result."),
            Self::ExpectedBoolean { found, line } => {
                write!(f, "Error on line {line}: Expected boolean, found '{found}'.")
            },
            Self::ExpectedNumber { found, line } => {
                write!(f, "Error on line {line}: Expected number, found '{found}'.")
            },
            Self::InvalidArgument { details, line } => {
                write!(f, "Error on line {line}: Invalid argument: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
