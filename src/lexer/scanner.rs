use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// Scanner for Lispify source text
///
/// Produces a flat token stream for the parser. Numeric literals are kept
/// as raw text; the reader converts them so an out-of-range literal becomes
/// an error value rather than a scan failure.
pub struct Scanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of the current token
    start: usize,
    /// Column where the current token starts (1-indexed)
    start_column: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
}

/// Characters allowed in a symbol, matching the language's symbol alphabet
fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-' | '*' | '/' | '\\' | '=' | '<' | '>' | '!' | '&' | '%' | '^')
}

impl Scanner {
    /// Creates a new scanner from source code
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            start_column: 1,
            current: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scans all tokens from source code and returns them as a vector
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_column = self.column;
            self.scan_token()?;
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            String::new(),
            self.line,
            self.column,
        ));

        Ok(self.tokens.clone())
    }

    fn scan_token(&mut self) -> Result<()> {
        let c = self.advance();

        match c {
            // Whitespace
            ' ' | '\r' | '\t' => {}
            '\n' => {
                self.line += 1;
                self.column = 1;
            }

            // Semicolon starts a line comment
            ';' => self.skip_line_comment(),

            // Expression delimiters
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),

            // A minus glued to a digit is a negative number, otherwise a symbol
            '-' if self.peek().is_ascii_digit() => self.scan_number(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_symbol_char(c) => self.scan_symbol(),

            c => {
                return Err(Error::Syntax {
                    line: self.line,
                    col: self.start_column,
                    message: format!("unexpected character '{}'", c),
                })
            }
        }

        Ok(())
    }

    /// Scans a numeric literal: digits with an optional fractional part
    fn scan_number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let literal = self.lexeme();
        self.add_token(TokenKind::Number(literal));
    }

    /// Scans a symbol over the symbol alphabet
    fn scan_symbol(&mut self) {
        while is_symbol_char(self.peek()) {
            self.advance();
        }

        let name = self.lexeme();
        self.add_token(TokenKind::Symbol(name));
    }

    fn skip_line_comment(&mut self) {
        while self.peek() != '\n' && !self.is_at_end() {
            self.advance();
        }
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme = self.lexeme();
        self.tokens
            .push(Token::new(kind, lexeme, self.line, self.start_column));
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        self.column += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.source.len() {
            '\0'
        } else {
            self.source[self.current + 1]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}
