//! KBQA Answers - answer payloads for display
//!
//! This crate provides the record the question-answering endpoint returns
//! to the answer page, the extraction of that record from a QALD result
//! document, and the markup escaping applied before the query is shown.

mod error;
mod escape;
mod payload;
pub mod qald;

pub use error::{AnswerError, AnswerResult};
pub use escape::escape_markup;
pub use payload::AnswerPayload;
pub use qald::{Binding, NO_ANSWER, extract_bindings, format_bindings};
