use crate::error::{Error, Result};
use crate::runtime::Value;

/// One symbol bound to an owned value
#[derive(Debug, Clone)]
struct Binding {
    name: String,
    value: Value,
}

/// Symbol environment threaded through every evaluation
///
/// An insertion-ordered list of bindings with linear-scan lookup. Names are
/// unique: re-binding a name overwrites its slot in place, so iteration
/// order reflects first definition. Created once at startup, pre-populated
/// with the builtins, and mutated only by `def` for the rest of the run.
#[derive(Debug, Clone)]
pub struct Environment {
    bindings: Vec<Binding>,
}

impl Environment {
    /// Creates an empty environment
    pub fn new() -> Self {
        Environment {
            bindings: Vec::new(),
        }
    }

    /// Creates an environment pre-populated with every builtin
    pub fn with_builtins() -> Self {
        let mut env = Environment::new();
        crate::builtins::register_all(&mut env);
        env
    }

    /// Looks up a binding by name, returning a clone of the stored value
    ///
    /// The clone matters: callers hold their result by value, so later
    /// mutation of the environment never reaches into it.
    pub fn get(&self, name: &str) -> Result<Value> {
        self.bindings
            .iter()
            .find(|binding| binding.name == name)
            .map(|binding| binding.value.clone())
            .ok_or_else(|| Error::UnboundSymbol {
                name: name.to_string(),
            })
    }

    /// Binds `value` to `name`, overwriting any existing binding in place
    pub fn put(&mut self, name: &str, value: Value) {
        if let Some(binding) = self
            .bindings
            .iter_mut()
            .find(|binding| binding.name == name)
        {
            binding.value = value;
        } else {
            self.bindings.push(Binding {
                name: name.to_string(),
                value,
            });
        }
    }

    /// Returns true if `name` is bound
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.iter().any(|binding| binding.name == name)
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if nothing is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Binding names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|binding| binding.name.as_str())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
