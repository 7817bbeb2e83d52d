use std::fmt;
use std::fmt::Formatter;
use thiserror::Error;

/// Failure to split the input into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("incomplete decimal number '{lexeme}' at position {position}: expected a digit after '.'")]
    IncompleteDecimal { lexeme: String, position: usize },
    #[error("number '{lexeme}' at position {position} is too large to represent")]
    NumberOutOfRange { lexeme: String, position: usize },
}

impl LexError {
    pub fn position(&self) -> usize {
        match self {
            LexError::InvalidCharacter { position, .. }
            | LexError::IncompleteDecimal { position, .. }
            | LexError::NumberOutOfRange { position, .. } => *position,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    EmptyExpression,
    UnexpectedToken,
    UnexpectedEnd,
    UnmatchedOpeningParenthesis,
    UnmatchedClosingParenthesis,
    NestingTooDeep,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let description = match self {
            SyntaxErrorKind::EmptyExpression => "empty expression",
            SyntaxErrorKind::UnexpectedToken => "unexpected token",
            SyntaxErrorKind::UnexpectedEnd => "unexpected end of input",
            SyntaxErrorKind::UnmatchedOpeningParenthesis => "unmatched '('",
            SyntaxErrorKind::UnmatchedClosingParenthesis => "unmatched ')'",
            SyntaxErrorKind::NestingTooDeep => "expression nested too deeply",
        };
        f.write_str(description)
    }
}

/// A violation of the expression grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at position {position}: expected {expected}, found {found}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub position: usize,
    pub expected: String,
    pub found: String,
}

impl SyntaxError {
    pub(crate) fn new(
        kind: SyntaxErrorKind,
        position: usize,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> SyntaxError {
        SyntaxError {
            kind,
            position,
            expected: expected.into(),
            found: found.into(),
        }
    }
}

/// Failure while computing the value of a well-formed tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("division by zero: cannot divide {dividend} by 0")]
    DivisionByZero { dividend: f64 },
    #[error("overflow: {left} {operator} {right} is too large to represent")]
    Overflow {
        left: f64,
        operator: &'static str,
        right: f64,
    },
}

/// Any failure of the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
