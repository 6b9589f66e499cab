use serde::{Deserialize, Serialize};

/// Syntax tree node produced by the parser
///
/// This is the shape of one parsed expression before any evaluation.
/// Numeric literals stay as source text; the reader owns the conversion
/// into runtime numbers so an overflowing literal surfaces as an error
/// value at read time instead of a parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Numeric literal, e.g. `42` or `-2.5`
    Number {
        /// The literal exactly as written in the source
        literal: String,
    },

    /// Symbol naming a variable or operator, e.g. `head` or `+`
    Symbol {
        /// Symbol name
        name: String,
    },

    /// Parenthesized call-expression: `(+ 1 2)`
    SExpr(Vec<Expr>),

    /// Brace-delimited quoted list: `{1 2 3}`
    QExpr(Vec<Expr>),
}

impl Expr {
    /// Creates a numeric literal node
    pub fn number(literal: impl Into<String>) -> Self {
        Expr::Number {
            literal: literal.into(),
        }
    }

    /// Creates a symbol node
    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            Expr::number("1.5"),
            Expr::Number {
                literal: "1.5".to_string()
            }
        );
        assert_eq!(
            Expr::symbol("join"),
            Expr::Symbol {
                name: "join".to_string()
            }
        );
    }
}
