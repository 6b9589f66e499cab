//! Quoted-list builtins: `list`, `head`, `tail`, `eval`, `join`, `len`

use crate::error::{Error, Result};
use crate::runtime::{evaluate, Environment, Value};

use super::Builtin;

/// Registers the list builtins
pub fn register(env: &mut Environment) {
    super::register(env, ListFn);
    super::register(env, HeadFn);
    super::register(env, TailFn);
    super::register(env, EvalFn);
    super::register(env, JoinFn);
    super::register(env, LenFn);
}

/// Unwraps a single Q-Expression argument, enforcing arity and type
fn expect_one_qexpr(function: &str, mut args: Vec<Value>) -> Result<Vec<Value>> {
    if args.len() != 1 {
        return Err(Error::WrongArgCount {
            function: function.to_string(),
            expected: 1,
            got: args.len(),
        });
    }

    match args.remove(0) {
        Value::QExpr(items) => Ok(items),
        other => Err(Error::WrongArgType {
            function: function.to_string(),
            index: 0,
            expected: "Q-Expression".to_string(),
            got: other.type_name().to_string(),
        }),
    }
}

/// `list` - re-tags its arguments as a quoted list
///
/// Usage: `(list 1 2 3)` returns `{1 2 3}`. Never fails.
pub struct ListFn;

impl Builtin for ListFn {
    fn name(&self) -> &str {
        "list"
    }

    fn description(&self) -> &str {
        "Collect arguments into a Q-Expression"
    }

    fn call(&self, _env: &mut Environment, args: Vec<Value>) -> Result<Value> {
        Ok(Value::QExpr(args))
    }
}

/// `head` - quoted list of only the first element
///
/// Usage: `(head {1 2 3})` returns `{1}`.
pub struct HeadFn;

impl Builtin for HeadFn {
    fn name(&self) -> &str {
        "head"
    }

    fn description(&self) -> &str {
        "First element of a Q-Expression"
    }

    fn call(&self, _env: &mut Environment, args: Vec<Value>) -> Result<Value> {
        let mut items = expect_one_qexpr(self.name(), args)?;

        if items.is_empty() {
            return Err(Error::EmptyList {
                function: self.name().to_string(),
            });
        }

        items.truncate(1);
        Ok(Value::QExpr(items))
    }
}

/// `tail` - quoted list with the first element removed
///
/// Usage: `(tail {1 2 3})` returns `{2 3}`.
pub struct TailFn;

impl Builtin for TailFn {
    fn name(&self) -> &str {
        "tail"
    }

    fn description(&self) -> &str {
        "Q-Expression minus its first element"
    }

    fn call(&self, _env: &mut Environment, args: Vec<Value>) -> Result<Value> {
        let mut items = expect_one_qexpr(self.name(), args)?;

        if items.is_empty() {
            return Err(Error::EmptyList {
                function: self.name().to_string(),
            });
        }

        items.remove(0);
        Ok(Value::QExpr(items))
    }
}

/// `eval` - evaluates a quoted list as a call-expression
///
/// Usage: `(eval {+ 1 2})` returns `3`.
pub struct EvalFn;

impl Builtin for EvalFn {
    fn name(&self) -> &str {
        "eval"
    }

    fn description(&self) -> &str {
        "Evaluate a Q-Expression as an S-Expression"
    }

    fn call(&self, env: &mut Environment, args: Vec<Value>) -> Result<Value> {
        let items = expect_one_qexpr(self.name(), args)?;

        Ok(evaluate(env, Value::SExpr(items)))
    }
}

/// `join` - concatenates quoted lists left to right
///
/// Usage: `(join {1} {2 3})` returns `{1 2 3}`.
pub struct JoinFn;

impl Builtin for JoinFn {
    fn name(&self) -> &str {
        "join"
    }

    fn description(&self) -> &str {
        "Concatenate Q-Expressions"
    }

    fn call(&self, _env: &mut Environment, args: Vec<Value>) -> Result<Value> {
        for (index, arg) in args.iter().enumerate() {
            if !matches!(arg, Value::QExpr(_)) {
                return Err(Error::WrongArgType {
                    function: self.name().to_string(),
                    index,
                    expected: "Q-Expression".to_string(),
                    got: arg.type_name().to_string(),
                });
            }
        }

        let mut joined = Vec::new();
        for arg in args {
            if let Value::QExpr(items) = arg {
                joined.extend(items);
            }
        }

        Ok(Value::QExpr(joined))
    }
}

/// `len` - element count of a quoted list
///
/// Usage: `(len {1 2 3})` returns `3`.
pub struct LenFn;

impl Builtin for LenFn {
    fn name(&self) -> &str {
        "len"
    }

    fn description(&self) -> &str {
        "Element count of a Q-Expression"
    }

    fn call(&self, _env: &mut Environment, args: Vec<Value>) -> Result<Value> {
        let items = expect_one_qexpr(self.name(), args)?;

        Ok(Value::Number(items.len() as f64))
    }
}
