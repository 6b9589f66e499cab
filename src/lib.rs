//! # Lispify
//!
//! A small Lisp dialect built on two kinds of list: parenthesized
//! **S-Expressions**, which evaluate as calls, and brace-delimited
//! **Q-Expressions**, which stay quoted until a builtin asks for them.
//! Numbers are double-precision floats, errors are ordinary values, and a
//! single mutable environment carries `def` bindings from one line to the
//! next.
//!
//! ## Quick Start
//!
//! ```rust
//! use lispify::{Evaluator, Value};
//!
//! # fn main() -> lispify::Result<()> {
//! let mut evaluator = Evaluator::new();
//!
//! let result = evaluator.eval_source("(+ 1 (* 2 3))")?;
//! assert_eq!(result, Value::Number(7.0));
//!
//! // Definitions persist across lines
//! evaluator.eval_source("(def {x y} 10 32)")?;
//! let result = evaluator.eval_source("(+ x y)")?;
//! assert_eq!(result, Value::Number(42.0));
//! # Ok(())
//! # }
//! ```
//!
//! ## Language Overview
//!
//! - **Atoms**: numbers (`42`, `-2.5`) and symbols (`x`, `head`, `+`)
//! - **S-Expressions**: `(+ 1 2)` evaluates children left to right, then
//!   applies the head as a function
//! - **Q-Expressions**: `{1 2 3}` is inert data until `eval` re-tags it
//! - **List builtins**: `list`, `head`, `tail`, `join`, `eval`, `len`
//! - **Arithmetic**: `+ - * / % ^` over floats (`%` and `^` truncate their
//!   operands to integers)
//! - **Definition**: `(def {a b} 1 2)` binds symbols globally
//!
//! Runtime failures never unwind: they reduce to error values, and the
//! first error produced inside a call-expression is the whole result.
//!
//! ```rust
//! use lispify::{Error, Evaluator, Value};
//!
//! # fn main() -> lispify::Result<()> {
//! let mut evaluator = Evaluator::new();
//! let result = evaluator.eval_source("(/ 10 0)")?;
//! assert_eq!(result, Value::Error(Error::DivisionByZero));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Line → Scanner → Tokens → Parser → Syntax Tree → Reader → Value → Evaluator → Value
//! ```
//!
//! - [`Scanner`] - tokenizes one line of source
//! - [`Parser`] - builds the syntax tree
//! - [`read`] - translates the tree into runtime [`Value`]s
//! - [`Evaluator`] - reduces values against the [`Environment`]
//! - [`Builtin`] - the trait native operations implement

pub mod builtins;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;

// Re-export main types
pub use builtins::Builtin;
pub use error::{Error, Result};
pub use lexer::{Scanner, Token, TokenKind};
pub use parser::{Expr, Parser};
pub use runtime::{evaluate, read, Environment, Evaluator, Value};

/// Version of the Lispify interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
