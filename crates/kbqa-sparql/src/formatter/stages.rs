//! Formatting stages
//!
//! Formatting is an ordered list of named text transformations. Each
//! [`Stage`] can be applied on its own, which is how the tests pin down
//! the behaviour of individual substitutions.

use super::config::FormatterConfig;
use super::indent::indent;
use super::keywords::uppercase_keywords;
use regex::{NoExpand, Regex};
use std::sync::LazyLock;
use strum::{Display, IntoStaticStr};

// Only literal spaces are collapsed around tokens; tabs and newlines are kept.
static OPEN_BRACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *\{ *").expect("valid regex"));

static CLOSE_BRACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *\} *").expect("valid regex"));

// A dot with no adjacent space (IRIs, prefixed names, decimals) is left alone.
static TERMINATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" +\.|\. +").expect("valid regex"));

static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" +;|; +").expect("valid regex"));

static WHERE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *WHERE *").expect("valid regex"));

static UNION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *UNION *").expect("valid regex"));

static LIMIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *LIMIT *").expect("valid regex"));

static ORDER_BY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *ORDER BY *").expect("valid regex"));

static GROUP_BY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *GROUP BY *").expect("valid regex"));

static HAVING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *HAVING *").expect("valid regex"));

static OFFSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *OFFSET *").expect("valid regex"));

/// A single named step of the formatting pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    /// Upper-case lowercase keywords
    UppercaseKeywords,
    /// `{` ends its line
    OpenBrace,
    /// `}` starts its own line and is followed by a space
    CloseBrace,
    /// A spaced `.` becomes ` .` and ends its line
    StatementTerminator,
    /// A spaced `;` becomes ` ;`, ends its line and pads the next one
    ClauseSeparator,
    /// `WHERE` starts its own line
    Where,
    /// `UNION` is surrounded by single spaces
    Union,
    /// `LIMIT` starts its own line
    Limit,
    /// `ORDER BY` starts its own line
    OrderBy,
    /// `GROUP BY` starts its own line
    GroupBy,
    /// `HAVING` starts its own line
    Having,
    /// `OFFSET` starts its own line
    Offset,
    /// Lines are indented by brace depth
    Indent,
    /// Empty and whitespace-only lines are removed
    StripBlankLines,
}

impl Stage {
    /// All stages in the order [`SparqlFormatter`](super::SparqlFormatter) applies them
    pub const PIPELINE: [Stage; 14] = [
        Stage::UppercaseKeywords,
        Stage::OpenBrace,
        Stage::CloseBrace,
        Stage::StatementTerminator,
        Stage::ClauseSeparator,
        Stage::Where,
        Stage::Union,
        Stage::Limit,
        Stage::OrderBy,
        Stage::GroupBy,
        Stage::Having,
        Stage::Offset,
        Stage::Indent,
        Stage::StripBlankLines,
    ];

    /// Returns the snake_case name of the stage
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Applies this stage to `text`
    pub fn apply(&self, text: &str, config: &FormatterConfig) -> String {
        match self {
            Stage::UppercaseKeywords => uppercase_keywords(text, config.keyword_casing()),
            Stage::OpenBrace => substitute(&OPEN_BRACE_REGEX, text, "{\n"),
            Stage::CloseBrace => substitute(&CLOSE_BRACE_REGEX, text, "\n} "),
            Stage::StatementTerminator => substitute(&TERMINATOR_REGEX, text, " .\n"),
            Stage::ClauseSeparator => {
                let replacement = format!(" ;\n{}", " ".repeat(config.clause_padding()));
                substitute(&SEPARATOR_REGEX, text, &replacement)
            }
            Stage::Where => substitute(&WHERE_REGEX, text, "\nWHERE "),
            Stage::Union => substitute(&UNION_REGEX, text, " UNION "),
            Stage::Limit => substitute(&LIMIT_REGEX, text, "\nLIMIT "),
            Stage::OrderBy => substitute(&ORDER_BY_REGEX, text, "\nORDER BY "),
            Stage::GroupBy => substitute(&GROUP_BY_REGEX, text, "\nGROUP BY "),
            Stage::Having => substitute(&HAVING_REGEX, text, "\nHAVING "),
            Stage::Offset => substitute(&OFFSET_REGEX, text, "\nOFFSET "),
            Stage::Indent => indent(text, config.indent_width()).text,
            Stage::StripBlankLines => strip_blank_lines(text),
        }
    }
}

fn substitute(regex: &Regex, text: &str, replacement: &str) -> String {
    regex.replace_all(text, NoExpand(replacement)).into_owned()
}

/// Removes lines that are empty or contain only whitespace
pub fn strip_blank_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
