use crate::lexicon::types::LexiconField;

/// Escapes a value for use inside a double-quoted formula string literal.
pub fn escape_literal(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Builds a case-insensitive substring filter over the concatenation of the
/// searchable columns. Returns `None` for a blank query.
pub fn contains_filter(raw_query: &str) -> Option<String> {
    let query = raw_query.trim();
    if query.is_empty() {
        return None;
    }

    let columns = [
        LexiconField::Ctpv,
        LexiconField::Canonical,
        LexiconField::Shortcode,
        LexiconField::Definition,
    ];
    let concat = columns
        .iter()
        .map(|field| format!("\"\" & {{{}}}", field.column()))
        .collect::<Vec<_>>()
        .join(", \" \", ");

    Some(format!(
        "FIND(LOWER(\"{}\"), LOWER(CONCATENATE({}))) > 0",
        escape_literal(query),
        concat
    ))
}
