use super::types::{FieldWeights, LexiconEntry};

/// Score of a single field against a single term.
///
/// A term that is not contained in the field contributes nothing. Containment
/// earns the field weight, an exact match earns it twice, and a prefix that is
/// not an exact match earns one and a half times.
pub fn field_score(lower_field: &str, term: &str, weight: f64) -> f64 {
    if !lower_field.contains(term) {
        return 0.0;
    }

    let mut score = weight;
    if lower_field == term {
        score += weight;
    } else if lower_field.starts_with(term) {
        score += weight * 0.5;
    }
    score
}

/// Sum of the weighted field scores of `entry` for every query term.
pub fn score_entry(entry: &LexiconEntry, terms: &[String], weights: &FieldWeights) -> f64 {
    weights
        .iter()
        .filter_map(|(field, weight)| {
            let value = entry.field(field);
            (!value.is_empty()).then(|| (value.to_lowercase(), weight))
        })
        .map(|(lower, weight)| {
            terms
                .iter()
                .fold(0.0, |acc, term| acc + field_score(&lower, term, weight))
        })
        .fold(0.0, |acc, score| acc + score)
}

/// Orders entries by descending relevance to `terms`.
///
/// With no terms the entries come back untouched. Otherwise the sort is stable,
/// so equal scores keep fetch order, and zero-score entries are kept at the tail.
pub fn rank(entries: Vec<LexiconEntry>, terms: &[String], weights: &FieldWeights) -> Vec<LexiconEntry> {
    if terms.is_empty() {
        return entries;
    }

    let mut scored: Vec<(LexiconEntry, f64)> = entries
        .into_iter()
        .map(|entry| {
            let score = score_entry(&entry, terms, weights);
            (entry, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.into_iter().map(|(entry, _)| entry).collect()
}
