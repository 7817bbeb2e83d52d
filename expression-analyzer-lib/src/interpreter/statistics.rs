use crate::interpreter::token::{Token, TokenKind};
use serde::Serialize;

/// Counts of the tokens of an expression.
///
/// Parentheses are counted in neither bucket, so `total_tokens` is always
/// `total_numbers + total_operators`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct TokenStatistics {
    pub total_tokens: usize,
    pub total_numbers: usize,
    pub total_integers: usize,
    pub total_decimals: usize,
    pub total_operators: usize,
}

/// Tallies the given tokens.
///
/// # Examples
///
/// ```
/// use expression_analyzer::interpreter::lexer::tokenize;
/// use expression_analyzer::interpreter::statistics::collect_stats;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let statistics = collect_stats(&tokenize("3 + 4.5 * 2")?);
/// assert_eq!(statistics.total_decimals, 1);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn collect_stats(tokens: &[Token]) -> TokenStatistics {
    let mut statistics = TokenStatistics::default();
    for token in tokens {
        match (token.kind(), token.number()) {
            (TokenKind::Number, Some(literal)) => {
                statistics.total_numbers += 1;
                if literal.is_decimal() {
                    statistics.total_decimals += 1;
                } else {
                    statistics.total_integers += 1;
                }
            }
            (kind, _) if kind.is_operator() => statistics.total_operators += 1,
            _ => {}
        }
    }
    statistics.total_tokens = statistics.total_numbers + statistics.total_operators;
    statistics
}
