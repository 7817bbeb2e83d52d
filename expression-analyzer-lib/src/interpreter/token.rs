use serde::Serialize;
use std::fmt;
use std::fmt::Formatter;

/// The category of a token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl TokenKind {
    /// The upper-case name used when listing tokens to callers.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::LParen => "LPAR",
            TokenKind::RParen => "RPAR",
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The decoded value of a numeric literal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NumberLiteral {
    Integer(f64),
    Decimal(f64),
}

impl NumberLiteral {
    pub fn value(&self) -> f64 {
        match self {
            NumberLiteral::Integer(value) | NumberLiteral::Decimal(value) => *value,
        }
    }

    pub fn is_decimal(&self) -> bool {
        matches!(self, NumberLiteral::Decimal(_))
    }
}

/// A discrete part of an expression
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    position: usize,
    number: Option<NumberLiteral>,
}

impl Token {
    pub fn new_number(lexeme: String, position: usize, literal: NumberLiteral) -> Token {
        Token {
            kind: TokenKind::Number,
            lexeme,
            position,
            number: Some(literal),
        }
    }

    /// Creates a single-character token such as an operator or parenthesis.
    pub fn new_symbol(kind: TokenKind, position: usize) -> Token {
        let lexeme = match kind {
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Number => "",
        };
        Token {
            kind,
            lexeme: lexeme.to_string(),
            position,
            number: None,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Character offset of the first character of the lexeme.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Character offset just past the end of the lexeme.
    pub fn end_position(&self) -> usize {
        self.position + self.lexeme.chars().count()
    }

    pub fn number(&self) -> Option<NumberLiteral> {
        self.number
    }

    pub fn summary(&self) -> TokenSummary {
        TokenSummary {
            kind: self.kind.name().to_string(),
            value: self.lexeme.clone(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

/// A token as it is reported to callers: its kind name and source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenSummary {
    pub kind: String,
    pub value: String,
}

impl fmt::Display for TokenSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.value)
    }
}
