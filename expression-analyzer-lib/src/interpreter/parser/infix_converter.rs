use crate::interpreter::error::{SyntaxError, SyntaxErrorKind};
use crate::interpreter::operator::{Associativity, BinaryOperator, UnaryOperator};
use crate::interpreter::token::{Token, TokenKind};

const EXPECTED_OPERAND: &str = "a number, '-' or '('";
const EXPECTED_OPERATOR_IN_GROUP: &str = "an operator or ')'";
const EXPECTED_OPERATOR: &str = "an operator or end of input";
const END_OF_INPUT: &str = "end of input";

/// An operand or operator in postfix order, tagged with the position of its token.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum PostfixItem {
    Operand {
        value: f64,
        position: usize,
    },
    Unary {
        operator: UnaryOperator,
        position: usize,
    },
    Binary {
        operator: BinaryOperator,
        position: usize,
    },
}

impl PostfixItem {
    fn binding(&self) -> Option<(u8, Associativity)> {
        match self {
            PostfixItem::Operand { .. } => None,
            PostfixItem::Unary { operator, .. } => {
                Some((operator.precedence(), operator.associativity()))
            }
            PostfixItem::Binary { operator, .. } => {
                Some((operator.precedence(), operator.associativity()))
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum StackEntry {
    OpenParenthesis { position: usize },
    Operator(PostfixItem),
}

/// Reorders infix tokens into postfix order using the shunting-yard algorithm.
///
/// Tokens are checked as they arrive: each one must be valid in the position it appears in
/// (an operand where an operand is required, an operator or `)` after a complete operand),
/// so every input the grammar rejects is reported here, before any tree is built.
pub(crate) fn infix_to_postfix(tokens: &[Token]) -> Result<Vec<PostfixItem>, SyntaxError> {
    if tokens.is_empty() {
        return Err(SyntaxError::new(
            SyntaxErrorKind::EmptyExpression,
            0,
            EXPECTED_OPERAND,
            END_OF_INPUT,
        ));
    }

    let mut operators: Vec<StackEntry> = Vec::new();
    let mut output: Vec<PostfixItem> = Vec::new();
    let mut expecting_operand = true;

    for token in tokens {
        let position = token.position();
        if expecting_operand {
            match token.kind() {
                TokenKind::Number => {
                    let value = token.number().map(|literal| literal.value()).ok_or_else(|| {
                        unexpected_token(token, EXPECTED_OPERAND)
                    })?;
                    output.push(PostfixItem::Operand { value, position });
                    expecting_operand = false;
                }
                TokenKind::LParen => operators.push(StackEntry::OpenParenthesis { position }),
                kind => match UnaryOperator::from_token(kind) {
                    Some(operator) => parse_operator_token(
                        &mut operators,
                        &mut output,
                        PostfixItem::Unary { operator, position },
                    ),
                    None => return Err(unexpected_token(token, EXPECTED_OPERAND)),
                },
            }
        } else {
            match token.kind() {
                TokenKind::RParen => parse_closing_parenthesis_token(&mut operators, &mut output, token)?,
                kind => match BinaryOperator::from_token(kind) {
                    Some(operator) => {
                        parse_operator_token(
                            &mut operators,
                            &mut output,
                            PostfixItem::Binary { operator, position },
                        );
                        expecting_operand = true;
                    }
                    None => {
                        let expected = if has_open_parenthesis(&operators) {
                            EXPECTED_OPERATOR_IN_GROUP
                        } else {
                            EXPECTED_OPERATOR
                        };
                        return Err(unexpected_token(token, expected));
                    }
                },
            }
        }
    }

    if expecting_operand {
        let end_position = tokens.last().map_or(0, Token::end_position);
        return Err(SyntaxError::new(
            SyntaxErrorKind::UnexpectedEnd,
            end_position,
            EXPECTED_OPERAND,
            END_OF_INPUT,
        ));
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut Vec<StackEntry>,
    output: &mut Vec<PostfixItem>,
) -> Result<(), SyntaxError> {
    while let Some(entry) = operators.pop() {
        match entry {
            StackEntry::OpenParenthesis { position } => {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnmatchedOpeningParenthesis,
                    position,
                    "')'",
                    END_OF_INPUT,
                ));
            }
            StackEntry::Operator(operator) => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<StackEntry>,
    output: &mut Vec<PostfixItem>,
    token: &Token,
) -> Result<(), SyntaxError> {
    loop {
        match operators.pop() {
            None => {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnmatchedClosingParenthesis,
                    token.position(),
                    EXPECTED_OPERATOR,
                    describe_token(token),
                ));
            }
            // Found the matching parenthesis, discard it.
            Some(StackEntry::OpenParenthesis { .. }) => return Ok(()),
            Some(StackEntry::Operator(operator)) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut Vec<StackEntry>,
    output: &mut Vec<PostfixItem>,
    item: PostfixItem,
) {
    if let Some((precedence, associativity)) = item.binding() {
        while let Some(StackEntry::Operator(other_operator)) = operators.last() {
            let other_precedence = match other_operator.binding() {
                Some((other_precedence, _)) => other_precedence,
                None => break,
            };
            if other_precedence < precedence
                || (other_precedence == precedence && associativity == Associativity::Right)
            {
                break;
            }
            output.push(*other_operator);
            operators.pop();
        }
    }

    operators.push(StackEntry::Operator(item));
}

fn has_open_parenthesis(operators: &[StackEntry]) -> bool {
    operators
        .iter()
        .any(|entry| matches!(entry, StackEntry::OpenParenthesis { .. }))
}

fn unexpected_token(token: &Token, expected: &str) -> SyntaxError {
    SyntaxError::new(
        SyntaxErrorKind::UnexpectedToken,
        token.position(),
        expected,
        describe_token(token),
    )
}

fn describe_token(token: &Token) -> String {
    match token.kind() {
        TokenKind::Number => format!("number '{}'", token.lexeme()),
        _ => format!("'{}'", token.lexeme()),
    }
}
