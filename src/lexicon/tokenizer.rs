/// Splits a raw query into lowercase search terms.
///
/// Order is preserved and duplicates are kept; a repeated term simply scores twice.
pub fn tokenize_query(query: &str) -> Vec<String> {
    query
        .trim()
        .to_lowercase()
        .split_whitespace()
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
