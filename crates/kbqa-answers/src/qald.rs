//! QALD result documents
//!
//! The question-answering approaches answer in the QALD JSON format: a
//! list of questions, each carrying the generated SPARQL and one or more
//! SPARQL result sets (or a boolean for ASK queries). This module reads
//! those documents and turns their bindings into display labels.

use crate::error::{AnswerError, AnswerResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label shown when a document carries no bindings at all
pub const NO_ANSWER: &str = "No answer found";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QaldDocument {
    #[serde(default)]
    pub questions: Vec<QaldQuestion>,
}

impl QaldDocument {
    pub fn from_json(json: &str) -> AnswerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QaldQuestion {
    #[serde(default)]
    pub question: Vec<QaldQuestionText>,
    #[serde(default)]
    pub query: QaldQuery,
    #[serde(default)]
    pub answers: Vec<QaldAnswer>,
}

impl QaldQuestion {
    /// Returns the question text in `language`, if present
    pub fn text(&self, language: &str) -> Option<&str> {
        self.question
            .iter()
            .find(|text| text.language == language)
            .map(|text| text.string.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaldQuestionText {
    pub language: String,
    pub string: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QaldQuery {
    #[serde(default)]
    pub sparql: String,
}

/// One SPARQL result: either a variable result set or an ASK boolean
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QaldAnswer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<QaldHead>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<QaldResults>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boolean: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QaldHead {
    #[serde(default)]
    pub vars: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QaldResults {
    #[serde(default)]
    pub bindings: Vec<HashMap<String, QaldTerm>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaldTerm {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// A single result value and its RDF term type (`uri`, `literal`, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub kind: String,
    pub value: String,
}

impl Binding {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Human-readable label: the last IRI segment for resources, the raw value otherwise
    ///
    /// `http://dbpedia.org/resource/Leipzig_University` becomes `Leipzig University`.
    pub fn label(&self) -> String {
        if self.kind == "uri" {
            let segment = self.value.rsplit('/').next().unwrap_or(&self.value);
            segment.replace('_', " ")
        } else {
            self.value.clone()
        }
    }
}

impl QaldAnswer {
    /// Flattens this answer into bindings, variable by variable
    ///
    /// Rows that leave a variable unbound contribute nothing for it.
    pub fn bindings(&self) -> Vec<Binding> {
        if let Some(value) = self.boolean {
            return vec![Binding::new("", value.to_string())];
        }

        let (Some(head), Some(results)) = (&self.head, &self.results) else {
            return Vec::new();
        };

        let mut bindings = Vec::new();
        for var in &head.vars {
            for row in &results.bindings {
                match row.get(var) {
                    Some(term) => bindings.push(Binding::new(&term.kind, &term.value)),
                    None => tracing::debug!(var = %var, "Skipping unbound variable in result row"),
                }
            }
        }
        bindings
    }
}

/// Collects every binding of every answer and the SPARQL of the last question
pub fn extract_bindings(document: &QaldDocument) -> AnswerResult<(Vec<Binding>, String)> {
    let last = document.questions.last().ok_or(AnswerError::NoQuestions)?;

    let bindings: Vec<Binding> = document
        .questions
        .iter()
        .flat_map(|question| question.answers.iter())
        .flat_map(QaldAnswer::bindings)
        .collect();

    tracing::debug!(
        questions = document.questions.len(),
        bindings = bindings.len(),
        "Extracted QALD bindings"
    );

    Ok((bindings, last.query.sparql.clone()))
}

/// Turns bindings into display labels; no bindings yield [`NO_ANSWER`]
pub fn format_bindings(bindings: &[Binding]) -> Vec<String> {
    if bindings.is_empty() {
        return vec![NO_ANSWER.to_string()];
    }
    bindings.iter().map(Binding::label).collect()
}
