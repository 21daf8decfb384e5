//! SPARQL Formatting Module
//!
//! This module pretty-prints SPARQL query text for display. It is a
//! sequence of textual substitutions followed by a brace-depth
//! indentation pass; the input is never parsed or validated.
//!
//! # Quick Start
//!
//! ```
//! use kbqa_sparql::formatter::{format_query, FormatterConfig, SparqlFormatter};
//!
//! // Simple formatting with defaults
//! let formatted = format_query("select ?x where { ?x a ?y . }");
//!
//! // Custom configuration
//! let config = FormatterConfig::default().with_indent_width(2);
//! let formatter = SparqlFormatter::new(config);
//! let formatted = formatter.format("select ?x where { ?x a ?y . }");
//! ```

mod config;
mod format;
mod indent;
mod keywords;
mod stages;

#[cfg(test)]
mod tests;

pub use config::{FormatterConfig, KeywordCasing};
pub use format::{SparqlFormatter, StageOutput, format_query, format_query_with_config};
pub use indent::{Indented, indent};
pub use keywords::{KEYWORDS, uppercase_keywords};
pub use stages::{Stage, strip_blank_lines};
