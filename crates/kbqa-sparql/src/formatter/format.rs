//! SPARQL Formatter - Core Formatting Logic
//!
//! Runs a query through every [`Stage`] of the pipeline in order.
//! Formatting never fails: arbitrary text, including unbalanced braces
//! and the empty string, always produces a result.
//!
//! The output is not a fixed point. Formatting already formatted text
//! inserts further line breaks and indentation.
//!
//! # Example
//!
//! ```
//! use kbqa_sparql::formatter::{SparqlFormatter, FormatterConfig};
//!
//! let formatter = SparqlFormatter::new(FormatterConfig::default());
//! let formatted = formatter.format("select ?x where { ?x a ?y . } limit 10");
//! assert_eq!(formatted, "SELECT ?x\nWHERE {\n    ?x a ?y .\n}\nLIMIT 10");
//! ```

use super::config::FormatterConfig;
use super::indent::indent;
use super::stages::Stage;

/// Text produced by one stage of the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutput {
    /// Stage that produced `text`
    pub stage: Stage,
    /// Text after the stage was applied
    pub text: String,
}

/// SPARQL Formatter with configurable options
#[derive(Debug, Clone, Default)]
pub struct SparqlFormatter {
    config: FormatterConfig,
}

impl SparqlFormatter {
    /// Creates a new formatter with the given configuration
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Formats the given query text
    pub fn format(&self, query: &str) -> String {
        let mut text = query.to_string();
        for stage in Stage::PIPELINE {
            text = self.apply_stage(stage, &text);
        }

        tracing::debug!(
            input_len = query.len(),
            output_len = text.len(),
            "Formatted SPARQL query"
        );
        text
    }

    /// Formats the given query text, keeping the output of every stage
    ///
    /// The last entry's text equals [`SparqlFormatter::format`]'s result.
    pub fn format_stages(&self, query: &str) -> Vec<StageOutput> {
        let mut outputs = Vec::with_capacity(Stage::PIPELINE.len());
        let mut text = query.to_string();
        for stage in Stage::PIPELINE {
            text = self.apply_stage(stage, &text);
            tracing::trace!(stage = stage.name(), len = text.len(), "Applied stage");
            outputs.push(StageOutput {
                stage,
                text: text.clone(),
            });
        }
        outputs
    }

    fn apply_stage(&self, stage: Stage, text: &str) -> String {
        match stage {
            Stage::Indent => self.indent_logged(text),
            _ => stage.apply(text, &self.config),
        }
    }

    fn indent_logged(&self, text: &str) -> String {
        let indented = indent(text, self.config.indent_width());
        if indented.clipped > 0 {
            tracing::warn!(
                clipped = indented.clipped,
                "Unbalanced closing braces in query; indentation clipped at zero"
            );
        }
        if indented.depth > 0 {
            tracing::debug!(depth = indented.depth, "Query leaves braces open");
        }
        indented.text
    }
}

/// Formats a query with default settings (convenience function)
///
/// # Example
///
/// ```
/// use kbqa_sparql::formatter::format_query;
///
/// let formatted = format_query("select ?s where { ?s ?p ?o }");
/// assert!(formatted.contains("WHERE {"));
/// ```
pub fn format_query(query: &str) -> String {
    SparqlFormatter::default().format(query)
}

/// Formats a query with custom configuration (convenience function)
pub fn format_query_with_config(query: &str, config: FormatterConfig) -> String {
    SparqlFormatter::new(config).format(query)
}
