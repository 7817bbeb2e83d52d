use crate::interpreter::error::EvalError;
use crate::interpreter::syntax::expression_tree::Node;

/// Computes the numeric value of the given expression tree.
///
/// The left operand of a binary operation is always evaluated before the right one.
///
/// # Arguments
///
/// * `node`: The root of the tree to evaluate.
///
/// returns: The value of the expression, or the reason it has none.
///
/// # Examples
///
/// ```
/// use expression_analyzer::interpreter::evaluator::evaluate;
/// use expression_analyzer::interpreter::parser::parse_expression;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tree = parse_expression("2 + 3 * 4")?;
/// assert_eq!(evaluate(&tree)?, 14.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(node: &Node) -> Result<f64, EvalError> {
    match node {
        Node::Number(value) => Ok(*value),
        Node::BinaryOperation {
            operator,
            left_operand,
            right_operand,
        } => {
            let left_value = evaluate(left_operand)?;
            let right_value = evaluate(right_operand)?;
            operator.evaluate(left_value, right_value)
        }
        Node::UnaryOperation { operator, operand } => {
            let value = evaluate(operand)?;
            Ok(operator.evaluate(value))
        }
    }
}
