use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::syntax::expression_tree::{Node, NUMBER_DISPLAY_NAME};
use crate::interpreter::syntax::syntax_visitor::{
    walk_binary_operation, walk_unary_operation, SyntaxVisitor,
};
use ptree::print_config::StyleWhen;
use ptree::{write_tree_with, PrintConfig, Style, TreeItem};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::io;

/// A node of a rendered tree: the localized label of an expression node and the
/// rendered operands below it, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedNode {
    pub label: String,
    pub children: Vec<RenderedNode>,
}

impl RenderedNode {
    fn new(label: String) -> RenderedNode {
        RenderedNode {
            label,
            children: Vec::new(),
        }
    }
}

impl TreeItem for RenderedNode {
    type Child = RenderedNode;

    fn write_self<W: io::Write>(&self, f: &mut W, style: &Style) -> io::Result<()> {
        write!(f, "{}", style.paint(&self.label))
    }

    fn children(&self) -> Cow<[Self::Child]> {
        Cow::from(&self.children[..])
    }
}

impl Display for RenderedNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let config = PrintConfig {
            styled: StyleWhen::Never,
            ..PrintConfig::default()
        };
        let mut buffer: Vec<u8> = Vec::new();
        write_tree_with(self, &mut buffer, &config).map_err(|_| fmt::Error)?;
        let text = std::str::from_utf8(&buffer).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}

/// Describes the structure of the given tree with localized node names, one node per line.
///
/// # Examples
///
/// ```
/// use expression_analyzer::interpreter::parser::parse_expression;
/// use expression_analyzer::interpreter::renderer::render;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tree = parse_expression("(2 + 3) * 4")?;
/// let rendered = render(&tree);
/// assert_eq!(rendered.lines().next(), Some("multiplicación"));
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn render(node: &Node) -> String {
    render_structure(node).to_string()
}

/// Builds the nested form of the rendering, for callers that want to lay it out themselves.
pub fn render_structure(node: &Node) -> RenderedNode {
    let mut visitor = TreeBuilderVisitor {
        root: RenderedNode::new(node_label(node)),
        open_nodes: Vec::new(),
    };
    match node {
        Node::Number(_) => {}
        Node::BinaryOperation {
            left_operand,
            right_operand,
            ..
        } => walk_binary_operation(&mut visitor, left_operand, right_operand),
        Node::UnaryOperation { operand, .. } => walk_unary_operation(&mut visitor, operand),
    }
    visitor.root
}

fn node_label(node: &Node) -> String {
    match node {
        Node::Number(value) => number_label(*value),
        Node::BinaryOperation { .. } | Node::UnaryOperation { .. } => {
            node.display_name().to_string()
        }
    }
}

fn number_label(value: f64) -> String {
    format!("{} {}", NUMBER_DISPLAY_NAME, value)
}

/// Collects the descendants of `root`; nodes still being filled sit on `open_nodes`.
struct TreeBuilderVisitor {
    root: RenderedNode,
    open_nodes: Vec<RenderedNode>,
}

impl TreeBuilderVisitor {
    fn begin_child(&mut self, label: String) {
        self.open_nodes.push(RenderedNode::new(label));
    }

    fn end_child(&mut self) {
        if let Some(finished) = self.open_nodes.pop() {
            self.add_finished_child(finished);
        }
    }

    fn add_empty_child(&mut self, label: String) {
        self.add_finished_child(RenderedNode::new(label));
    }

    fn add_finished_child(&mut self, child: RenderedNode) {
        let parent = self.open_nodes.last_mut().unwrap_or(&mut self.root);
        parent.children.push(child);
    }
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_number(&mut self, value: f64) {
        self.add_empty_child(number_label(value));
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.begin_child(operator.display_name().to_string());
        walk_binary_operation(self, left_operand, right_operand);
        self.end_child();
    }
    fn visit_unary_operation(&mut self, operator: &UnaryOperator, operand: &Node) {
        self.begin_child(operator.display_name().to_string());
        walk_unary_operation(self, operand);
        self.end_child();
    }
}
