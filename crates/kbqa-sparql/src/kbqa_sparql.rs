//! KBQA SPARQL - query text formatting for display
//!
//! This crate turns the raw SPARQL returned by a question-answering
//! endpoint into indented, line-broken text suitable for a preformatted
//! block:
//! - Keyword casing normalization
//! - Line breaks around braces, statement terminators and clause separators
//! - Brace-depth indentation

pub mod formatter;

pub use formatter::*;
