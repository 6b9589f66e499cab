use std::fmt;
use std::sync::Arc;

use crate::builtins::Builtin;
use crate::error::Error;

/// Runtime value representation
///
/// Exactly one variant is active per value. Call-expressions and quoted
/// lists own their children outright; sharing a value means cloning it,
/// so no two containers ever alias the same child.
#[derive(Clone)]
pub enum Value {
    /// Numeric literal or arithmetic result
    Number(f64),
    /// First-class failure value; reported to the caller, never thrown
    Error(Error),
    /// Identifier naming a variable or operator
    Symbol(String),
    /// Native builtin operation
    Function(Arc<dyn Builtin>),
    /// Unevaluated parenthesized call-expression
    SExpr(Vec<Value>),
    /// Opaque quoted list; never auto-evaluated, manipulated only
    /// through the list builtins
    QExpr(Vec<Value>),
}

impl Value {
    /// Creates an error value
    pub fn error(err: Error) -> Self {
        Value::Error(err)
    }

    /// Creates a symbol value
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Wraps a native builtin as a function value
    pub fn function(builtin: impl Builtin + 'static) -> Self {
        Value::Function(Arc::new(builtin))
    }

    /// Creates a call-expression from child values
    pub fn sexpr(items: Vec<Value>) -> Self {
        Value::SExpr(items)
    }

    /// Creates a quoted list from child values
    pub fn qexpr(items: Vec<Value>) -> Self {
        Value::QExpr(items)
    }

    /// The empty call-expression, returned by definitions and
    /// produced by evaluating `()`
    pub fn empty_sexpr() -> Self {
        Value::SExpr(Vec::new())
    }

    /// Returns the type name as shown in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::Function(_) => "Function",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
        }
    }

    /// Returns true if this value carries an error
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, items: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{}", open)?;

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }

    write!(f, "{}", close)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(err) => write!(f, "Error: {}", err),
            Value::Symbol(name) => write!(f, "{}", name),
            Value::Function(_) => write!(f, "<function>"),
            Value::SExpr(items) => write_seq(f, items, '(', ')'),
            Value::QExpr(items) => write_seq(f, items, '{', '}'),
        }
    }
}

// Manual Debug: function values print their bound name, not the trait object
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Error(err) => f.debug_tuple("Error").field(err).finish(),
            Value::Symbol(name) => f.debug_tuple("Symbol").field(name).finish(),
            Value::Function(builtin) => f.debug_tuple("Function").field(&builtin.name()).finish(),
            Value::SExpr(items) => f.debug_tuple("SExpr").field(items).finish(),
            Value::QExpr(items) => f.debug_tuple("QExpr").field(items).finish(),
        }
    }
}

// Manual equality: functions compare by identity (same registered builtin)
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Arc::ptr_eq(a, b),
            (Value::SExpr(a), Value::SExpr(b)) => a == b,
            (Value::QExpr(a), Value::QExpr(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Number(1.0).type_name(), "Number");
        assert_eq!(Value::symbol("x").type_name(), "Symbol");
        assert_eq!(Value::empty_sexpr().type_name(), "S-Expression");
        assert_eq!(Value::qexpr(vec![]).type_name(), "Q-Expression");
        assert_eq!(Value::error(Error::DivisionByZero).type_name(), "Error");
    }

    #[test]
    fn test_display_atoms() {
        assert_eq!(Value::Number(7.0).to_string(), "7");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::symbol("head").to_string(), "head");
        assert_eq!(
            Value::error(Error::DivisionByZero).to_string(),
            "Error: Division by zero"
        );
    }

    #[test]
    fn test_display_sequences() {
        let value = Value::sexpr(vec![
            Value::symbol("+"),
            Value::Number(1.0),
            Value::qexpr(vec![Value::Number(2.0), Value::Number(3.0)]),
        ]);
        assert_eq!(value.to_string(), "(+ 1 {2 3})");
        assert_eq!(Value::empty_sexpr().to_string(), "()");
        assert_eq!(Value::qexpr(vec![]).to_string(), "{}");
    }

    #[test]
    fn test_equality_is_structural_for_data() {
        assert_eq!(Value::Number(3.0), Value::Number(3.0));
        assert_ne!(Value::Number(3.0), Value::symbol("3"));
        assert_eq!(
            Value::qexpr(vec![Value::Number(1.0)]),
            Value::qexpr(vec![Value::Number(1.0)])
        );
    }

    #[test]
    fn test_function_equality_is_identity() {
        let mut env = crate::runtime::Environment::with_builtins();
        let head = env.get("head").unwrap();
        let tail = env.get("tail").unwrap();
        assert_eq!(head, env.get("head").unwrap());
        assert_ne!(head, tail);

        // Re-binding replaces the stored value; the clone we hold is unaffected
        env.put("head", Value::Number(0.0));
        assert_eq!(env.get("head").unwrap(), Value::Number(0.0));
        assert_eq!(head.type_name(), "Function");
    }

    #[test]
    fn test_is_error() {
        assert!(Value::error(Error::NotAFunction).is_error());
        assert!(!Value::Number(0.0).is_error());
    }
}
