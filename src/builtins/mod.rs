//! Native builtin operations
//!
//! Provides the trait builtins implement, the registration entry point
//! that installs the complete table into an environment, and `def`.

pub mod lists;
pub mod math;

use crate::error::{Error, Result};
use crate::runtime::{Environment, Value};

pub use math::Op;

/// Native operation callable as the head of a call-expression
///
/// Implementations validate their arguments before touching the
/// environment; a failing call has no side effects. Failures are returned
/// as `Err` and surfaced by the evaluator as error values.
pub trait Builtin: Send + Sync {
    /// Name the operation is bound to in the environment
    fn name(&self) -> &str;

    /// Short human-readable description
    fn description(&self) -> &str;

    /// Executes the operation
    fn call(&self, env: &mut Environment, args: Vec<Value>) -> Result<Value>;
}

/// Binds a single builtin under its own name
pub fn register<B: Builtin + 'static>(env: &mut Environment, builtin: B) {
    let name = builtin.name().to_string();
    env.put(&name, Value::function(builtin));
}

/// Installs the complete builtin table into `env`
pub fn register_all(env: &mut Environment) {
    lists::register(env);
    math::register(env);
    register(env, DefFn);

    tracing::debug!(count = env.len(), "registered builtins");
}

/// `def` - binds symbols to values in the environment
///
/// Usage: `(def {x y} 1 2)` binds `x` to `1` and `y` to `2` and returns `()`.
/// The binding list is checked in full before anything is bound, so a bad
/// `def` leaves the environment untouched.
pub struct DefFn;

impl Builtin for DefFn {
    fn name(&self) -> &str {
        "def"
    }

    fn description(&self) -> &str {
        "Bind symbols to values"
    }

    fn call(&self, env: &mut Environment, args: Vec<Value>) -> Result<Value> {
        let mut args = args.into_iter();

        let symbols = match args.next() {
            Some(Value::QExpr(items)) => items,
            Some(other) => {
                return Err(Error::WrongArgType {
                    function: self.name().to_string(),
                    index: 0,
                    expected: "Q-Expression".to_string(),
                    got: other.type_name().to_string(),
                })
            }
            None => {
                return Err(Error::WrongArgCount {
                    function: self.name().to_string(),
                    expected: 1,
                    got: 0,
                })
            }
        };
        let values: Vec<Value> = args.collect();

        let mut names = Vec::with_capacity(symbols.len());
        for (index, symbol) in symbols.iter().enumerate() {
            match symbol {
                Value::Symbol(name) => names.push(name.clone()),
                other => {
                    return Err(Error::WrongArgType {
                        function: self.name().to_string(),
                        index,
                        expected: "Symbol".to_string(),
                        got: other.type_name().to_string(),
                    })
                }
            }
        }

        if names.len() != values.len() {
            return Err(Error::WrongArgCount {
                function: self.name().to_string(),
                expected: names.len(),
                got: values.len(),
            });
        }

        for (name, value) in names.into_iter().zip(values) {
            tracing::debug!("binding '{}'", name);
            env.put(&name, value);
        }

        Ok(Value::empty_sexpr())
    }
}
