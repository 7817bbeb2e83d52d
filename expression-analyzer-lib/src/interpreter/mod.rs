pub mod error;
pub mod evaluator;
pub mod lexer;
mod operator;
pub mod parser;
pub mod renderer;
pub mod statistics;
pub mod syntax;
pub mod token;

pub use crate::interpreter::operator::{BinaryOperator, UnaryOperator};

use crate::interpreter::error::AnalysisError;
use crate::interpreter::evaluator::evaluate;
use crate::interpreter::renderer::{render, render_structure, RenderedNode};
use crate::interpreter::statistics::{collect_stats, TokenStatistics};
use crate::interpreter::token::{Token, TokenSummary};
use itertools::Itertools;
use serde::Serialize;

/// Everything learned about one expression: its value or the reason it has none,
/// its tokens and their statistics, and its rendered tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub expression: String,
    pub value: Option<f64>,
    pub error: Option<String>,
    pub tokens: Vec<TokenSummary>,
    #[serde(flatten)]
    pub statistics: TokenStatistics,
    pub tree: Option<String>,
    pub structure: Option<RenderedNode>,
    pub normalized: Option<String>,
}

impl Analysis {
    fn new(expression: &str) -> Analysis {
        Analysis {
            expression: expression.to_string(),
            value: None,
            error: None,
            tokens: Vec::new(),
            statistics: TokenStatistics::default(),
            tree: None,
            structure: None,
            normalized: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Lists the tokens as `KIND(lexeme)`, separated by spaces.
    pub fn format_tokens(&self) -> String {
        self.tokens.iter().join(" ")
    }
}

/// Runs the whole pipeline on the given expression.
///
/// The expression is tokenized once. Token statistics are available whenever
/// tokenizing succeeds, and the tree whenever parsing succeeds, even if the
/// expression then fails to evaluate.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The analysis of the expression. Failures are reported in `error`.
///
/// # Examples
///
/// ```
/// use expression_analyzer::interpreter::process;
///
/// let analysis = process("3 + 4.5 * 2");
/// assert_eq!(analysis.value, Some(12.0));
/// assert_eq!(analysis.statistics.total_tokens, 5);
///
/// let analysis = process("5 / 0");
/// assert_eq!(analysis.value, None);
/// assert!(analysis.tree.is_some());
/// ```
pub fn process(expression: &str) -> Analysis {
    let mut analysis = Analysis::new(expression);

    let tokens = match lexer::tokenize(expression) {
        Ok(tokens) => tokens,
        Err(error) => {
            analysis.error = Some(error.to_string());
            return analysis;
        }
    };
    analysis.tokens = tokens.iter().map(Token::summary).collect();
    analysis.statistics = collect_stats(&tokens);

    let tree = match parser::parse(&tokens) {
        Ok(tree) => tree,
        Err(error) => {
            analysis.error = Some(error.to_string());
            return analysis;
        }
    };
    analysis.tree = Some(render(&tree));
    analysis.structure = Some(render_structure(&tree));
    analysis.normalized = Some(tree.to_infix());

    match evaluate(&tree) {
        Ok(value) => analysis.value = Some(value),
        Err(error) => analysis.error = Some(error.to_string()),
    }
    analysis
}

/// Calculates the value of the given expression.
///
/// # Examples
///
/// ```
/// use expression_analyzer::interpreter::calculate;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// assert_eq!(calculate("8 - 3 - 2")?, 3.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn calculate(expression: &str) -> Result<f64, AnalysisError> {
    let tree = parser::parse_expression(expression)?;
    let value = evaluate(&tree)?;
    Ok(value)
}
