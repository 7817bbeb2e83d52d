use crate::interpreter::error::{SyntaxError, SyntaxErrorKind};
use crate::interpreter::operator::{Associativity, BinaryOperator, UnaryOperator};
use crate::interpreter::parser::PostfixItem;
use crate::interpreter::renderer;
use crate::interpreter::syntax::syntax_visitor::SyntaxVisitor;
use std::fmt;
use std::fmt::{Display, Formatter};

pub(crate) const NUMBER_DISPLAY_NAME: &str = "número";

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Terminal symbols (leaves)
    Number(f64),
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
    UnaryOperation {
        operator: UnaryOperator,
        operand: Box<Node>,
    },
}

impl Node {
    pub fn new_number(value: f64) -> Node {
        Node::Number(value)
    }

    pub fn new_binary_operation(
        operator: BinaryOperator,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub fn new_binary_addition(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary_operation(BinaryOperator::Add, left_operand, right_operand)
    }

    pub fn new_binary_subtraction(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary_operation(BinaryOperator::Subtract, left_operand, right_operand)
    }

    pub fn new_binary_multiplication(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary_operation(BinaryOperator::Multiply, left_operand, right_operand)
    }

    pub fn new_binary_division(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary_operation(BinaryOperator::Divide, left_operand, right_operand)
    }

    pub fn new_unary_operation(operator: UnaryOperator, operand: Node) -> Node {
        Node::UnaryOperation {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn new_negation(operand: Node) -> Node {
        Self::new_unary_operation(UnaryOperator::Negate, operand)
    }

    pub fn as_binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Node::BinaryOperation { operator, .. } => Some(*operator),
            Node::Number(_) | Node::UnaryOperation { .. } => None,
        }
    }

    /// Localized name of the node kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Node::Number(_) => NUMBER_DISPLAY_NAME,
            Node::BinaryOperation { operator, .. } => operator.display_name(),
            Node::UnaryOperation { operator, .. } => operator.display_name(),
        }
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::Number(value) => visitor.visit_number(*value),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
            Node::UnaryOperation { operator, operand } => {
                visitor.visit_unary_operation(operator, operand)
            }
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = renderer::render(self);
        f.write_str(&text)
    }
}

/// Maximum number of operators on any root-to-leaf path of a parsed tree.
///
/// Evaluation, rendering and infix conversion recurse once per level.
pub const MAX_NESTING_DEPTH: usize = 512;

/// A subtree under construction, together with the operator depth of its deepest leaf.
struct Subtree {
    node: Node,
    depth: usize,
}

/// Generates an expression tree based off of the given items.
///
/// # Arguments
///
/// * `postfix_items`: Operands and operators, ordered in postfix notation.
/// * `end_position`: Position just past the last token, reported when the items run out.
///
/// returns: The root of the generated expression tree, or an error if it would be
/// deeper than [`MAX_NESTING_DEPTH`].
pub(crate) fn new_tree(
    postfix_items: Vec<PostfixItem>,
    end_position: usize,
) -> Result<Node, SyntaxError> {
    let mut operands: Vec<Subtree> = Vec::new();

    for item in postfix_items {
        match item {
            PostfixItem::Operand { value, .. } => operands.push(Subtree {
                node: Node::new_number(value),
                depth: 0,
            }),
            PostfixItem::Unary { operator, position } => {
                let operand = pop_operand(&mut operands, position, operator.symbol())?;
                let depth = checked_depth(operand.depth, position)?;
                operands.push(Subtree {
                    node: Node::new_unary_operation(operator, operand.node),
                    depth,
                });
            }
            PostfixItem::Binary { operator, position } => {
                let right_operand = pop_operand(&mut operands, position, operator.symbol())?;
                let left_operand = pop_operand(&mut operands, position, operator.symbol())?;
                let depth = checked_depth(left_operand.depth.max(right_operand.depth), position)?;
                operands.push(Subtree {
                    node: Node::new_binary_operation(
                        operator,
                        left_operand.node,
                        right_operand.node,
                    ),
                    depth,
                });
            }
        }
    }

    let root = operands.pop().ok_or_else(|| {
        SyntaxError::new(
            SyntaxErrorKind::EmptyExpression,
            0,
            "an expression",
            "end of input",
        )
    })?;
    if !operands.is_empty() {
        return Err(SyntaxError::new(
            SyntaxErrorKind::UnexpectedToken,
            end_position,
            "a single expression",
            format!("{} unconnected operands", operands.len() + 1),
        ));
    }
    Ok(root.node)
}

/// Depth of an operator node whose deepest operand has `operand_depth`.
fn checked_depth(operand_depth: usize, position: usize) -> Result<usize, SyntaxError> {
    let depth = operand_depth + 1;
    if depth > MAX_NESTING_DEPTH {
        return Err(SyntaxError::new(
            SyntaxErrorKind::NestingTooDeep,
            position,
            format!("at most {} nested operations", MAX_NESTING_DEPTH),
            format!("{} nested operations", depth),
        ));
    }
    Ok(depth)
}

fn pop_operand(
    operands: &mut Vec<Subtree>,
    position: usize,
    operator_symbol: &str,
) -> Result<Subtree, SyntaxError> {
    operands.pop().ok_or_else(|| {
        SyntaxError::new(
            SyntaxErrorKind::UnexpectedEnd,
            position,
            format!("an operand for '{}'", operator_symbol),
            "no operand",
        )
    })
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Node {
    /// Regenerates the expression in canonical infix form, using only the parentheses
    /// needed to keep the structure of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use expression_analyzer::interpreter::parser::parse_expression;
    /// # use anyhow::Result;
    ///
    /// # fn main() -> Result<()> {
    /// let tree = parse_expression("((2)+3)*(4)")?;
    /// assert_eq!(tree.to_infix(), "(2 + 3) * 4");
    /// # Ok::<(), anyhow::Error>(()) }
    /// ```
    pub fn to_infix(&self) -> String {
        let mut text = String::new();
        self.build_expression(&mut text);
        text
    }

    fn build_expression(&self, text: &mut String) {
        match self {
            Node::Number(value) => text.push_str(&value.to_string()),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => {
                left_operand.build_operand(self, Side::Left, text);
                text.push(' ');
                text.push_str(operator.symbol());
                text.push(' ');
                right_operand.build_operand(self, Side::Right, text);
            }
            Node::UnaryOperation { operator, operand } => {
                text.push_str(operator.symbol());
                operand.build_operand(self, Side::Right, text);
            }
        }
    }

    fn build_operand(&self, parent_node: &Node, side: Side, text: &mut String) {
        let parenthesize = self.needs_parentheses(parent_node, side);
        if parenthesize {
            text.push('(');
        }
        self.build_expression(text);
        if parenthesize {
            text.push(')');
        }
    }

    fn needs_parentheses(&self, parent_node: &Node, side: Side) -> bool {
        let operator = match self.as_binary_operator() {
            Some(operator) => operator,
            // Numbers and negations bind at least as tightly as any parent.
            None => return false,
        };
        match parent_node {
            Node::UnaryOperation { .. } => true,
            Node::BinaryOperation {
                operator: parent_operator,
                ..
            } => {
                // When a child operator has lower precedence, it and its operands needs
                // to be wrapped in parentheses.
                if parent_operator.precedence_gt(&operator) {
                    return true;
                }
                operator.precedence_eq(parent_operator)
                    && side == Side::Right
                    && parent_operator.associativity() == Associativity::Left
            }
            Node::Number(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple_postfix_returns_correct_tree() {
        let items = create_simple_postfix_items();
        let expected_tree = create_simple_tree();

        let actual_tree = new_tree(items, 3).unwrap();

        assert_eq!(actual_tree, expected_tree);
    }

    #[test]
    fn complex_postfix_returns_correct_tree() {
        let items = create_complex_postfix_items();
        let expected_tree = create_complex_tree();

        let actual_tree = new_tree(items, 13).unwrap();

        assert_eq!(actual_tree, expected_tree);
    }

    #[test]
    fn empty_postfix_returns_err() {
        let error = new_tree(vec![], 0).unwrap_err();

        assert_eq!(error.kind, SyntaxErrorKind::EmptyExpression);
    }

    #[test]
    fn missing_operand_returns_err() {
        let items = vec![
            PostfixItem::Operand {
                value: 1.0,
                position: 0,
            },
            PostfixItem::Binary {
                operator: BinaryOperator::Add,
                position: 1,
            },
        ];

        let error = new_tree(items, 2).unwrap_err();

        assert_eq!(error.kind, SyntaxErrorKind::UnexpectedEnd);
        assert_eq!(error.position, 1);
    }

    #[test]
    fn leftover_operands_returns_err() {
        let items = vec![
            PostfixItem::Operand {
                value: 1.0,
                position: 0,
            },
            PostfixItem::Operand {
                value: 2.0,
                position: 2,
            },
        ];

        let error = new_tree(items, 3).unwrap_err();

        assert_eq!(error.kind, SyntaxErrorKind::UnexpectedToken);
    }

    #[test]
    fn tree_at_nesting_limit_is_built() {
        let items = create_negation_chain_items(MAX_NESTING_DEPTH);

        let tree = new_tree(items, MAX_NESTING_DEPTH + 1).unwrap();

        assert!(matches!(tree, Node::UnaryOperation { .. }));
    }

    #[test]
    fn tree_beyond_nesting_limit_returns_err() {
        let items = create_negation_chain_items(MAX_NESTING_DEPTH + 1);

        let error = new_tree(items, MAX_NESTING_DEPTH + 2).unwrap_err();

        assert_eq!(error.kind, SyntaxErrorKind::NestingTooDeep);
        assert_eq!(error.position, 0);
        assert_eq!(
            error.found,
            format!("{} nested operations", MAX_NESTING_DEPTH + 1)
        );
    }

    #[test]
    fn print_succeeds() {
        let tree = create_complex_tree();

        print!("{}", tree);
    }

    #[test]
    fn display_names_are_looked_up_from_node_kind() {
        assert_eq!(Node::new_number(1.0).display_name(), "número");
        assert_eq!(create_simple_tree().display_name(), "suma");
        assert_eq!(
            Node::new_negation(Node::new_number(1.0)).display_name(),
            "negativo"
        );
    }

    #[test]
    fn simple_tree_converts_back_to_simple_expression() {
        let tree = create_simple_tree();

        assert_eq!(tree.to_infix(), "1 + 2");
    }

    #[test]
    fn complex_tree_converts_back_to_complex_expression() {
        let tree = create_complex_tree();

        assert_eq!(tree.to_infix(), "1 + (2 + 3) * -4.5");
    }

    #[parameterized(
    tree = {
    Node::new_binary_subtraction(
        Node::new_binary_subtraction(Node::new_number(8.0), Node::new_number(3.0)),
        Node::new_number(2.0),
    ),
    Node::new_binary_subtraction(
        Node::new_number(8.0),
        Node::new_binary_subtraction(Node::new_number(3.0), Node::new_number(2.0)),
    ),
    Node::new_binary_division(
        Node::new_number(8.0),
        Node::new_binary_multiplication(Node::new_number(2.0), Node::new_number(2.0)),
    ),
    Node::new_negation(Node::new_negation(Node::new_number(5.0))),
    Node::new_negation(Node::new_binary_addition(Node::new_number(1.0), Node::new_number(2.0))),
    Node::new_binary_subtraction(Node::new_number(2.0), Node::new_negation(Node::new_number(3.0))),
    },
    expected_infix = {
    "8 - 3 - 2",
    "8 - (3 - 2)",
    "8 / (2 * 2)",
    "--5",
    "-(1 + 2)",
    "2 - -3",
    }
    )]
    fn tree_converts_to_minimally_parenthesized_expression(tree: Node, expected_infix: &str) {
        pretty_assertions::assert_eq!(tree.to_infix(), expected_infix);
    }

    /// Postfix items of `count` prefix minus signs in front of `1`.
    fn create_negation_chain_items(count: usize) -> Vec<PostfixItem> {
        let mut items = vec![PostfixItem::Operand {
            value: 1.0,
            position: count,
        }];
        items.extend((0..count).rev().map(|position| PostfixItem::Unary {
            operator: UnaryOperator::Negate,
            position,
        }));
        items
    }

    fn create_simple_tree() -> Node {
        let one = Node::new_number(1.0);
        let two = Node::new_number(2.0);
        Node::new_binary_addition(one, two)
    }

    fn create_simple_postfix_items() -> Vec<PostfixItem> {
        // 1 + 2 (but in postfix notation)
        vec![
            PostfixItem::Operand {
                value: 1.0,
                position: 0,
            },
            PostfixItem::Operand {
                value: 2.0,
                position: 2,
            },
            PostfixItem::Binary {
                operator: BinaryOperator::Add,
                position: 1,
            },
        ]
    }

    fn create_complex_postfix_items() -> Vec<PostfixItem> {
        // 1 + (2 + 3) * -4.5 (but in postfix notation)
        vec![
            PostfixItem::Operand {
                value: 1.0,
                position: 0,
            },
            PostfixItem::Operand {
                value: 2.0,
                position: 3,
            },
            PostfixItem::Operand {
                value: 3.0,
                position: 5,
            },
            PostfixItem::Binary {
                operator: BinaryOperator::Add,
                position: 4,
            },
            PostfixItem::Operand {
                value: 4.5,
                position: 10,
            },
            PostfixItem::Unary {
                operator: UnaryOperator::Negate,
                position: 9,
            },
            PostfixItem::Binary {
                operator: BinaryOperator::Multiply,
                position: 8,
            },
            PostfixItem::Binary {
                operator: BinaryOperator::Add,
                position: 1,
            },
        ]
    }

    fn create_complex_tree() -> Node {
        let one = Node::new_number(1.0);
        let two = Node::new_number(2.0);
        let three = Node::new_number(3.0);
        let four_and_a_half = Node::new_number(4.5);
        let second_plus = Node::new_binary_addition(two, three);
        let star = Node::new_binary_multiplication(second_plus, Node::new_negation(four_and_a_half));
        Node::new_binary_addition(one, star)
    }
}
