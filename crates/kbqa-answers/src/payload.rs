//! Answer payload returned to the answer page

use crate::error::AnswerResult;
use crate::escape::escape_markup;
use crate::qald::{QaldDocument, extract_bindings, format_bindings};
use kbqa_sparql::SparqlFormatter;
use serde::{Deserialize, Serialize};

/// A question together with its answers and the query that produced them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerPayload {
    pub question: String,
    pub answers: Vec<String>,
    pub query: String,
}

impl AnswerPayload {
    pub fn new(
        question: impl Into<String>,
        answers: Vec<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answers,
            query: query.into(),
        }
    }

    /// Builds a payload for `question` from a QALD result document
    pub fn from_qald(question: impl Into<String>, document: &QaldDocument) -> AnswerResult<Self> {
        let (bindings, query) = extract_bindings(document)?;
        let answers = format_bindings(&bindings);
        Ok(Self::new(question, answers, query))
    }

    /// Parses a payload from its JSON form
    pub fn from_json(json: &str) -> AnswerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the query pretty-printed by `formatter`
    pub fn formatted_query(&self, formatter: &SparqlFormatter) -> String {
        formatter.format(&self.query)
    }

    /// Returns the pretty-printed query, escaped for a markup context
    pub fn display_query(&self, formatter: &SparqlFormatter) -> String {
        escape_markup(&self.formatted_query(formatter))
    }
}
