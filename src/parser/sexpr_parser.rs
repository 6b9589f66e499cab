use super::ast::Expr;
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};

/// Recursive-descent parser: token stream to syntax tree
///
/// A whole input line parses to an implicit root [`Expr::SExpr`] holding
/// every top-level expression on the line, so `+ 1 2` typed at the prompt
/// is the same call-expression as `(+ 1 2)`.
pub struct Parser {
    /// Token stream from the scanner, terminated by `Eof`
    tokens: Vec<Token>,
    /// Current position in the stream
    current: usize,
}

impl Parser {
    /// Creates a parser over a scanned token stream
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, current: 0 }
    }

    /// Parses the whole input into the implicit root expression
    pub fn parse(&mut self) -> Result<Expr> {
        let mut exprs = Vec::new();

        while !self.check(&TokenKind::Eof) {
            exprs.push(self.parse_expr()?);
        }

        Ok(Expr::SExpr(exprs))
    }

    fn parse_expr(&mut self) -> Result<Expr> {
        let token = self.advance().clone();

        match token.kind {
            TokenKind::Number(literal) => Ok(Expr::Number { literal }),
            TokenKind::Symbol(name) => Ok(Expr::Symbol { name }),
            TokenKind::LeftParen => Ok(Expr::SExpr(self.parse_list(TokenKind::RightParen)?)),
            TokenKind::LeftBrace => Ok(Expr::QExpr(self.parse_list(TokenKind::RightBrace)?)),
            kind @ (TokenKind::RightParen | TokenKind::RightBrace) => Err(Error::UnexpectedToken {
                expected: "an expression".to_string(),
                got: kind.to_string(),
            }),
            TokenKind::Eof => Err(Error::UnexpectedEof),
        }
    }

    /// Parses expressions until `closer`, consuming the closer itself
    fn parse_list(&mut self, closer: TokenKind) -> Result<Vec<Expr>> {
        let mut items = Vec::new();

        loop {
            if self.check(&TokenKind::Eof) {
                return Err(Error::UnexpectedEof);
            }

            if self.check(&closer) {
                self.advance();
                return Ok(items);
            }

            items.push(self.parse_expr()?);
        }
    }

    fn check(&self, kind: &TokenKind) -> bool {
        self.peek().kind == *kind
    }

    fn advance(&mut self) -> &Token {
        let token = &self.tokens[self.current];
        if token.kind != TokenKind::Eof {
            self.current += 1;
        }
        token
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }
}
