mod output;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use expression_analyzer::interpreter::process;
use log::{debug, info, warn};
use std::io;
use std::io::{BufRead, Write};

/// Evaluates arithmetic expressions and shows their tokens and parse trees
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expressions to analyze. Read from standard input, one per line, when omitted.
    /// Put `--` before an expression that starts with '-'
    expressions: Vec<String>,
    /// Print each analysis as a JSON document
    #[clap(long)]
    json: bool,
    /// Leave the parse tree out of the text output
    #[clap(long)]
    no_tree: bool,
    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let expressions = if args.expressions.is_empty() {
        read_expressions(io::stdin().lock())?
    } else {
        args.expressions.clone()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut all_succeeded = true;
    for (index, expression) in expressions.iter().enumerate() {
        info!("Analyzing {:?}", expression);
        let analysis = process(expression);
        debug!("Tokens: {}", analysis.format_tokens());
        debug!("Statistics: {:?}", analysis.statistics);
        if let Some(error) = &analysis.error {
            warn!("Analysis of {:?} failed: {}", expression, error);
            all_succeeded = false;
        }

        let text = if args.json {
            output::format_json(&analysis)?
        } else {
            output::format_text(&analysis, !args.no_tree)
        };
        if index > 0 && !args.json {
            writeln!(out).context("Failed to write to standard output")?;
        }
        writeln!(out, "{}", text).context("Failed to write to standard output")?;
    }
    out.flush().context("Failed to write to standard output")?;

    if !all_succeeded {
        std::process::exit(1);
    }
    Ok(())
}

/// Reads one expression per non-blank line.
fn read_expressions(input: impl BufRead) -> Result<Vec<String>> {
    let mut expressions = Vec::new();
    for line in input.lines() {
        let line = line.context("Failed to read expressions from standard input")?;
        if !line.trim().is_empty() {
            expressions.push(line);
        }
    }
    Ok(expressions)
}
