use crate::error::{Error, Result};
use crate::lexer::Scanner;
use crate::parser::Parser;
use crate::runtime::{read, Environment, Value};

/// Tree-walking evaluator that owns the process-wide environment
///
/// The environment persists across calls, which is what makes a sequence
/// of top-level evaluations behave like one session: a `def` on one line
/// is visible on the next.
pub struct Evaluator {
    /// Symbol environment; persists for the life of the evaluator
    pub env: Environment,
}

impl Evaluator {
    /// Creates an evaluator with every builtin bound
    pub fn new() -> Self {
        Evaluator {
            env: Environment::with_builtins(),
        }
    }

    /// Reduces one value to its final form
    pub fn eval(&mut self, value: Value) -> Value {
        evaluate(&mut self.env, value)
    }

    /// Runs one line of source through scan, parse, read, and eval
    ///
    /// Scan and parse failures come back as `Err`; everything after that
    /// boundary reports failure as an error *value*.
    pub fn eval_source(&mut self, source: &str) -> Result<Value> {
        let tokens = Scanner::new(source).scan_tokens()?;
        let tree = Parser::new(tokens).parse()?;

        Ok(evaluate(&mut self.env, read(&tree)))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Recursively reduces `value` within `env`
///
/// Symbols resolve through the environment; call-expressions reduce child
/// by child; numbers, errors, functions, and quoted lists are
/// self-evaluating.
pub fn evaluate(env: &mut Environment, value: Value) -> Value {
    match value {
        Value::Symbol(name) => match env.get(&name) {
            Ok(bound) => bound,
            Err(err) => Value::Error(err),
        },
        Value::SExpr(items) => eval_sexpr(env, items),
        other => other,
    }
}

/// Reduces a call-expression
///
/// Children evaluate left to right. The first child to produce an error
/// ends the whole expression with that error; siblings after it never run,
/// so an erroring line cannot leave partial side effects behind.
fn eval_sexpr(env: &mut Environment, items: Vec<Value>) -> Value {
    let mut evaluated = Vec::with_capacity(items.len());

    for item in items {
        let result = evaluate(env, item);
        if result.is_error() {
            return result;
        }
        evaluated.push(result);
    }

    if evaluated.is_empty() {
        return Value::SExpr(evaluated);
    }

    if evaluated.len() == 1 {
        return evaluated.remove(0);
    }

    let head = evaluated.remove(0);
    let args = evaluated;

    match head {
        Value::Function(builtin) => match builtin.call(env, args) {
            Ok(value) => value,
            Err(err) => Value::Error(err),
        },
        _ => Value::Error(Error::NotAFunction),
    }
}
