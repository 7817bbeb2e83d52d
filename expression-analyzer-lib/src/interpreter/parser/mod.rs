mod infix_converter;

pub(crate) use crate::interpreter::parser::infix_converter::PostfixItem;

use crate::interpreter::error::{AnalysisError, SyntaxError};
use crate::interpreter::lexer;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::syntax::expression_tree;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;

/// Parses the given tokens into an equivalent expression tree,
/// which is easier to evaluate and render than the flat token sequence.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use expression_analyzer::interpreter::lexer::tokenize;
/// use expression_analyzer::interpreter::parser::parse;
///
/// let infix_tokens = tokenize("8 - 3 - 2")?;
/// let tree = parse(&infix_tokens)?;
/// assert_eq!(tree.to_infix(), "8 - 3 - 2");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(infix_tokens: &[Token]) -> Result<Node, SyntaxError> {
    let postfix_items = infix_to_postfix(infix_tokens)?;
    let end_position = infix_tokens.last().map_or(0, Token::end_position);
    let tree = expression_tree::new_tree(postfix_items, end_position)?;
    Ok(tree)
}

/// Tokenizes and parses the given text in one step.
///
/// # Examples
///
/// ```
/// use expression_analyzer::interpreter::parser::parse_expression;
///
/// assert!(parse_expression("(2 + 3) * 4").is_ok());
/// assert!(parse_expression("(2 + 3").is_err());
/// ```
pub fn parse_expression(expression: &str) -> Result<Node, AnalysisError> {
    let tokens = lexer::tokenize(expression)?;
    let tree = parse(&tokens)?;
    Ok(tree)
}
