// ABOUTME: Error types for evaluation failures in the Lisp interpreter

use thiserror::Error;

/// Failures raised by builtins and the evaluator's application protocol.
/// These are never thrown: every site that can produce one converts it
/// to a first-class `Value::Error` before it reaches the rest of the
/// program, via `Display`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Function '{function}' passed incorrect type for argument {position}. Got {actual}, Expected {expected}.")]
    TypeMismatch {
        function: String,
        expected: &'static str,
        actual: &'static str,
        position: usize,
    },

    #[error("Function '{function}' passed incorrect number of arguments. Got {actual}, Expected {expected}.")]
    ArityMismatch {
        function: String,
        expected: usize,
        actual: usize,
    },

    #[error("Function '{function}' passed too many arguments for symbols. Got {actual}, Expected {expected}.")]
    TooManyArgumentsForSymbols {
        function: String,
        expected: usize,
        actual: usize,
    },

    #[error("Function passed too many arguments. Got {actual}, Expected {expected}.")]
    TooManyArguments { expected: usize, actual: usize },

    #[error("Function '{function}' passed {{}} for argument {position}.")]
    EmptyArgument { function: String, position: usize },

    #[error("Function '{function}' cannot define non-symbol. Received {actual}, Expected Symbol.")]
    CannotDefineNonSymbol {
        function: String,
        actual: &'static str,
    },

    #[error("Cannot define non-symbol. Received {actual}, Expected Symbol.")]
    LambdaNonSymbolParam { actual: &'static str },

    #[error("Function format invalid. Symbol '&' not followed by 1 or more symbols")]
    VariadicMissingSymbols,

    #[error("Function format invalid. Symbol '&' not followed by single symbol.")]
    VariadicNotSingleSymbol,

    #[error("S-Expression starts with incorrect type. Got {actual}, Expected Function.")]
    NotCallable { actual: &'static str },

    #[error("Division By Zero")]
    DivisionByZero,

    #[error("Invalid Number")]
    InvalidNumber,

    #[error("{0}")]
    Custom(String),
}

impl EvalError {
    pub fn type_error(
        function: &str,
        expected: &'static str,
        actual: &'static str,
        position: usize,
    ) -> Self {
        EvalError::TypeMismatch {
            function: function.to_string(),
            expected,
            actual,
            position,
        }
    }

    pub fn arity_error(function: &str, expected: usize, actual: usize) -> Self {
        EvalError::ArityMismatch {
            function: function.to_string(),
            expected,
            actual,
        }
    }

    pub fn empty_argument(function: &str, position: usize) -> Self {
        EvalError::EmptyArgument {
            function: function.to_string(),
            position,
        }
    }

    pub fn custom(message: impl Into<String>) -> Self {
        EvalError::Custom(message.into())
    }
}
