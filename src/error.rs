//! Error types for the Lispify interpreter

use thiserror::Error;

/// Lispify interpreter errors
///
/// One enum covers both boundaries: the scanner and parser return these
/// through `Result`, while the evaluator carries them inside
/// [`Value::Error`](crate::runtime::Value::Error) so a failing expression
/// reduces to a value instead of unwinding.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Scan and parse errors
    /// Syntax error encountered while scanning source text
    ///
    /// **Triggered by:** a character outside the language's alphabet
    /// **Example:** `(+ 1 #)` (`#` is not a delimiter, digit, or symbol char)
    #[error("Syntax error at line {line}, column {col}: {message}")]
    Syntax {
        /// Line number where the error occurred
        line: usize,
        /// Column number where the error occurred
        col: usize,
        /// Error description
        message: String,
    },

    /// Unexpected end of input during parsing
    ///
    /// **Example:** `(+ 1 2` (missing closing parenthesis)
    #[error("Unexpected end of input")]
    UnexpectedEof,

    /// Unexpected token encountered during parsing
    #[error("Unexpected token: expected {expected}, got {got}")]
    UnexpectedToken {
        /// Expected token description
        expected: String,
        /// Actual token received
        got: String,
    },

    // Read errors
    /// Numeric literal that does not fit the numeric representation
    ///
    /// **Triggered by:** a literal that fails to parse or overflows to
    /// a non-finite double
    #[error("Invalid number '{literal}'")]
    BadNumber {
        /// The offending literal text
        literal: String,
    },

    // Evaluation errors
    /// Lookup miss in the symbol environment
    ///
    /// **Triggered by:** using a symbol before it is bound
    /// **Prevention:** bind it first with `(def {name} value)`
    #[error("Unbound symbol '{name}'")]
    UnboundSymbol {
        /// Symbol name
        name: String,
    },

    /// Builtin invoked with the wrong number of arguments
    #[error("Function '{function}' passed wrong number of arguments: got {got}, expected {expected}")]
    WrongArgCount {
        /// Builtin name
        function: String,
        /// Expected argument count
        expected: usize,
        /// Actual argument count
        got: usize,
    },

    /// Builtin invoked with an argument of the wrong type
    #[error("Function '{function}' passed incorrect type for argument {index}: got {got}, expected {expected}")]
    WrongArgType {
        /// Builtin name
        function: String,
        /// Zero-based argument position
        index: usize,
        /// Expected type name
        expected: String,
        /// Actual type name
        got: String,
    },

    /// `head` or `tail` applied to an empty Q-Expression
    #[error("Function '{function}' passed an empty Q-Expression")]
    EmptyList {
        /// Builtin name
        function: String,
    },

    /// Division or modulo by zero
    ///
    /// **Example:** `(/ 10 0)`, `(% 5 0)`
    #[error("Division by zero")]
    DivisionByZero,

    /// Call-expression head evaluated to something other than a function
    ///
    /// **Example:** `(1 2 3)` (`1` is not callable)
    #[error("First element is not a function")]
    NotAFunction,

    /// Dispatch miss for a call routed around the environment.
    /// Not produced while every symbol resolves through
    /// [`Environment::get`](crate::runtime::Environment::get).
    #[error("Unknown function '{name}'")]
    UnknownFunction {
        /// Function name
        name: String,
    },
}

/// Result type for Lispify operations
pub type Result<T> = std::result::Result<T, Error>;
