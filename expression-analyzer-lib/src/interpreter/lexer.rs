use crate::interpreter::error::LexError;
use crate::interpreter::token::{NumberLiteral, Token, TokenKind};
use std::iter::{Enumerate, Peekable};
use std::str::Chars;

/// Splits the given expression into tokens.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in the order they appear.
///
/// # Examples
///
/// ```
/// use expression_analyzer::interpreter::lexer::tokenize;
/// use expression_analyzer::interpreter::token::TokenKind;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("2 * 4.5")?;
/// let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind()).collect();
/// assert_eq!(kinds, [TokenKind::Number, TokenKind::Star, TokenKind::Number]);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(expression);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

struct Lexer<'a> {
    input: Peekable<Enumerate<Chars<'a>>>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().enumerate().peekable(),
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let (position, character) = match self.input.next() {
            Some(next) => next,
            None => return Ok(None),
        };
        let token = match character {
            '+' => Token::new_symbol(TokenKind::Plus, position),
            '-' => Token::new_symbol(TokenKind::Minus, position),
            '*' => Token::new_symbol(TokenKind::Star, position),
            '/' => Token::new_symbol(TokenKind::Slash, position),
            '(' => Token::new_symbol(TokenKind::LParen, position),
            ')' => Token::new_symbol(TokenKind::RParen, position),
            digit if digit.is_ascii_digit() => self.read_number(digit, position)?,
            character => {
                return Err(LexError::InvalidCharacter {
                    character,
                    position,
                })
            }
        };
        Ok(Some(token))
    }

    fn skip_whitespace(&mut self) {
        while self
            .input
            .next_if(|(_, character)| is_whitespace(*character))
            .is_some()
        {}
    }

    fn read_number(&mut self, first_digit: char, position: usize) -> Result<Token, LexError> {
        let mut lexeme = String::from(first_digit);
        self.read_digits(&mut lexeme);

        let is_decimal = self.input.next_if(|(_, character)| *character == '.').is_some();
        if is_decimal {
            lexeme.push('.');
            if !self.read_digits(&mut lexeme) {
                return Err(LexError::IncompleteDecimal { lexeme, position });
            }
        }

        let value = match lexeme.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => return Err(LexError::NumberOutOfRange { lexeme, position }),
        };
        let literal = if is_decimal {
            NumberLiteral::Decimal(value)
        } else {
            NumberLiteral::Integer(value)
        };
        Ok(Token::new_number(lexeme, position, literal))
    }

    /// Appends consecutive digits to the lexeme. Returns whether any were read.
    fn read_digits(&mut self, lexeme: &mut String) -> bool {
        let length_before = lexeme.len();
        while let Some((_, digit)) = self
            .input
            .next_if(|(_, character)| character.is_ascii_digit())
        {
            lexeme.push(digit);
        }
        lexeme.len() > length_before
    }
}

fn is_whitespace(character: char) -> bool {
    matches!(character, ' ' | '\t' | '\n' | '\r' | '\x0C')
}
