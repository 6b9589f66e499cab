//! Translation of the parser's syntax tree into runtime values

use crate::error::Error;
use crate::parser::Expr;
use crate::runtime::Value;

/// Converts one syntax node into an owned value tree
///
/// Children are read recursively in source order. A bad numeric literal
/// does not abort the read: the error value is embedded where the literal
/// sat, and evaluation surfaces it from there.
pub fn read(expr: &Expr) -> Value {
    match expr {
        Expr::Number { literal } => read_number(literal),
        Expr::Symbol { name } => Value::Symbol(name.clone()),
        Expr::SExpr(children) => Value::SExpr(children.iter().map(read).collect()),
        Expr::QExpr(children) => Value::QExpr(children.iter().map(read).collect()),
    }
}

/// Converts a numeric literal, requiring a finite result
///
/// A literal too large for a double parses to infinity; that counts as a
/// bad number, same as text that fails to parse at all.
fn read_number(literal: &str) -> Value {
    match literal.parse::<f64>() {
        Ok(n) if n.is_finite() => Value::Number(n),
        _ => Value::Error(Error::BadNumber {
            literal: literal.to_string(),
        }),
    }
}
