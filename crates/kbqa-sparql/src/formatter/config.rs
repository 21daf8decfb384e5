//! SPARQL Formatter Configuration
//!
//! Configurable options for query formatting: indentation width, the
//! alignment padding after `;` clause separators, and how keywords are
//! upper-cased.
//!
//! # Example
//!
//! ```
//! use kbqa_sparql::formatter::{FormatterConfig, KeywordCasing};
//!
//! let config = FormatterConfig::default()
//!     .with_indent_width(2)
//!     .with_keyword_casing(KeywordCasing::EveryWord);
//!
//! assert_eq!(config.indent_width(), 2);
//! assert_eq!(config.keyword_casing(), KeywordCasing::EveryWord);
//! ```

use serde::{Deserialize, Serialize};

/// How lowercase keywords are upper-cased
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeywordCasing {
    /// Only the first lowercase occurrence of each keyword-list entry is
    /// replaced, wherever it appears (including inside other words).
    ///
    /// This is what the answer page has always rendered; a query such as
    /// `limit 1 ... limit 2` keeps its second `limit` lowercase.
    #[default]
    FirstOccurrence,
    /// Every lowercase occurrence that stands as a whole word is replaced.
    EveryWord,
}

/// Configuration for SPARQL formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Number of spaces for each brace nesting level
    indent_width: usize,
    /// Spaces inserted after the line break that follows a `;`
    clause_padding: usize,
    /// Keyword upper-casing mode
    keyword_casing: KeywordCasing,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            clause_padding: 5,
            keyword_casing: KeywordCasing::FirstOccurrence,
        }
    }
}

impl FormatterConfig {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation width (spaces per nesting level)
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Sets the padding that aligns clauses continued after `;`
    pub fn with_clause_padding(mut self, padding: usize) -> Self {
        self.clause_padding = padding;
        self
    }

    /// Sets the keyword casing mode
    pub fn with_keyword_casing(mut self, casing: KeywordCasing) -> Self {
        self.keyword_casing = casing;
        self
    }

    /// Returns the indentation width
    pub fn indent_width(&self) -> usize {
        self.indent_width
    }

    /// Returns the clause padding
    pub fn clause_padding(&self) -> usize {
        self.clause_padding
    }

    /// Returns the keyword casing mode
    pub fn keyword_casing(&self) -> KeywordCasing {
        self.keyword_casing
    }

    /// Creates a compact configuration (two-space indent, no clause padding)
    pub fn compact() -> Self {
        Self {
            indent_width: 2,
            clause_padding: 0,
            keyword_casing: KeywordCasing::FirstOccurrence,
        }
    }
}
