//! Markup escaping for query display

/// Escapes angle brackets so query text can be placed inside markup.
///
/// IRIs such as `<http://dbpedia.org/resource/Berlin>` would otherwise be
/// read as tags. Only `<` and `>` are replaced.
pub fn escape_markup(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}
