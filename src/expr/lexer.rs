use std::fmt;

use super::ast::Function;
use crate::error::LexError;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    /// A run of letters. `function` is set when the name is a built-in.
    Identifier {
        name: String,
        function: Option<Function>,
    },
    /// One of `+ - * / ^ ( )`.
    Operator(char),
    /// `;` or end of input.
    End,
    Unknown(char),
}

impl Token {
    pub fn is_operator(&self, c: char) -> bool {
        matches!(self, Token::Operator(op) if *op == c)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "'{}'", n),
            Token::Identifier { name, .. } => write!(f, "'{}'", name),
            Token::Operator(c) | Token::Unknown(c) => write!(f, "'{}'", c),
            Token::End => write!(f, "end of input"),
        }
    }
}

/// Scanner over formula text with a single token of pushback.
pub struct Lexer<'a> {
    source: &'a str,
    position: usize,
    pushed_back: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            position: 0,
            pushed_back: None,
        }
    }

    /// Returns `token` on the next call to [`Lexer::next_token`].
    pub fn push_back(&mut self, token: Token) -> Result<(), LexError> {
        if self.pushed_back.is_some() {
            return Err(LexError::PushbackOccupied);
        }
        self.pushed_back = Some(token);
        Ok(())
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if let Some(token) = self.pushed_back.take() {
            return Ok(token);
        }

        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump(c);
        }

        let c = match self.peek() {
            None => return Ok(Token::End),
            Some(c) => c,
        };

        match c {
            ';' => {
                self.bump(c);
                Ok(Token::End)
            }
            'a'..='z' | 'A'..='Z' => Ok(self.identifier()),
            '0'..='9' | '.' => self.number(),
            '+' | '-' | '*' | '/' | '^' | '(' | ')' => {
                self.bump(c);
                Ok(Token::Operator(c))
            }
            _ => {
                self.bump(c);
                Ok(Token::Unknown(c))
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.position + offset).copied()
    }

    fn bump(&mut self, c: char) {
        self.position += c.len_utf8();
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.position;
        while let Some(b'0'..=b'9') = self.peek_at(0) {
            self.position += 1;
        }
        self.position - start
    }

    fn identifier(&mut self) -> Token {
        let start = self.position;
        while let Some(c) = self.peek() {
            if !c.is_ascii_alphabetic() {
                break;
            }
            self.bump(c);
        }
        let name = &self.source[start..self.position];
        Token::Identifier {
            name: name.to_string(),
            function: Function::from_name(name),
        }
    }

    fn number(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        self.skip_digits();
        if self.peek_at(0) == Some(b'.') {
            self.position += 1;
            self.skip_digits();
        }

        // exponent only when digits follow: "2e" is 2 followed by identifier e
        if let Some(b'e' | b'E') = self.peek_at(0) {
            let sign = matches!(self.peek_at(1), Some(b'+' | b'-')) as usize;
            if let Some(b'0'..=b'9') = self.peek_at(1 + sign) {
                self.position += 1 + sign;
                self.skip_digits();
            }
        }

        let lexeme = &self.source[start..self.position];
        lexeme
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| LexError::MalformedNumber(lexeme.to_string()))
    }
}
