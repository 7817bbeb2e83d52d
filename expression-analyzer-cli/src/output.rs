use anyhow::{Context, Result};
use expression_analyzer::interpreter::Analysis;

const MISSING_TREE: &str = "No se pudo construir el árbol debido a un error.";

/// Formats the analysis for reading in a terminal.
pub fn format_text(analysis: &Analysis, include_tree: bool) -> String {
    let statistics = &analysis.statistics;
    let mut lines = vec![format!("expression: {}", analysis.expression)];

    match (&analysis.error, analysis.value) {
        (Some(error), _) => lines.push(format!("error: {}", error)),
        (None, Some(value)) => lines.push(format!("result: {}", value)),
        (None, None) => {}
    }
    if let Some(normalized) = &analysis.normalized {
        lines.push(format!("normalized: {}", normalized));
    }
    lines.push(format!("tokens: {}", analysis.format_tokens()));
    lines.push(format!(
        "statistics: {} tokens, {} numbers ({} integers, {} decimals), {} operators",
        statistics.total_tokens,
        statistics.total_numbers,
        statistics.total_integers,
        statistics.total_decimals,
        statistics.total_operators
    ));
    if include_tree {
        lines.push("tree:".to_string());
        let tree = analysis.tree.as_deref().unwrap_or(MISSING_TREE);
        lines.push(tree.trim_end().to_string());
    }

    lines.join("\n")
}

pub fn format_json(analysis: &Analysis) -> Result<String> {
    serde_json::to_string_pretty(analysis).context("Failed to serialize analysis to JSON")
}
