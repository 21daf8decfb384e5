//! Subcommand implementations
//!
//! Each command takes its already-read input and writes to `out`, so the
//! binary entry point only deals with files and stdio.

use anyhow::{Context, Result};
use kbqa_answers::{AnswerPayload, escape_markup, qald::QaldDocument};
use kbqa_sparql::SparqlFormatter;
use std::io::{Read, Write};
use std::path::Path;

/// Output options shared by all commands
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Escape `<` and `>` in printed queries
    pub escape_markup: bool,
}

impl OutputOptions {
    fn render_query(&self, formatter: &SparqlFormatter, query: &str) -> String {
        let formatted = formatter.format(query);
        if self.escape_markup {
            escape_markup(&formatted)
        } else {
            formatted
        }
    }
}

/// Reads a file, or stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {:?}", path)),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Prints a formatted raw query
pub fn run_query(
    formatter: &SparqlFormatter,
    options: OutputOptions,
    input: &str,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "{}", options.render_query(formatter, input))?;
    Ok(())
}

/// Prints the question, answers and formatted query of an answer payload
pub fn run_payload(
    formatter: &SparqlFormatter,
    options: OutputOptions,
    input: &str,
    out: &mut impl Write,
) -> Result<()> {
    let payload = AnswerPayload::from_json(input).context("Failed to parse answer payload")?;
    tracing::info!(answers = payload.answers.len(), "Loaded answer payload");

    writeln!(out, "\"{}\"", payload.question)?;
    writeln!(out)?;
    for answer in &payload.answers {
        writeln!(out, "  - {answer}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", options.render_query(formatter, &payload.query))?;
    Ok(())
}

/// Converts a QALD document into an answer payload and prints it as JSON
///
/// Without an explicit question, the last question's text in `language`
/// is used.
pub fn run_qald(
    formatter: &SparqlFormatter,
    options: OutputOptions,
    input: &str,
    question: Option<&str>,
    language: &str,
    out: &mut impl Write,
) -> Result<()> {
    let document = QaldDocument::from_json(input).context("Failed to parse QALD document")?;

    let question = match question {
        Some(question) => question.to_string(),
        None => document
            .questions
            .last()
            .and_then(|q| q.text(language))
            .unwrap_or_default()
            .to_string(),
    };

    let mut payload = AnswerPayload::from_qald(question, &document)
        .context("Failed to extract answers from QALD document")?;
    payload.query = options.render_query(formatter, &payload.query);

    serde_json::to_writer_pretty(&mut *out, &payload).context("Failed to write payload")?;
    writeln!(out)?;
    Ok(())
}

/// Prints every stage's intermediate text under its stage name
pub fn run_stages(
    formatter: &SparqlFormatter,
    options: OutputOptions,
    input: &str,
    out: &mut impl Write,
) -> Result<()> {
    for output in formatter.format_stages(input) {
        let text = if options.escape_markup {
            escape_markup(&output.text)
        } else {
            output.text
        };
        writeln!(out, "== {} ==", output.stage)?;
        writeln!(out, "{text}")?;
    }
    Ok(())
}
