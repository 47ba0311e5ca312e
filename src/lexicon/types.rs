use serde::{Deserialize, Serialize};

use super::normalize::{to_text, CellValue};
use std::collections::HashMap;

/// The searchable columns of a lexicon row.
///
/// Each variant knows the column name used by the row store and the key it
/// is serialized under in API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexiconField {
    Canonical,
    Shortcode,
    Ctpv,
    Definition,
}

impl LexiconField {
    pub const ALL: [LexiconField; 4] = [
        LexiconField::Canonical,
        LexiconField::Shortcode,
        LexiconField::Ctpv,
        LexiconField::Definition,
    ];

    /// Column name in the row store.
    pub fn column(self) -> &'static str {
        match self {
            LexiconField::Canonical => "Canonical Term",
            LexiconField::Shortcode => "Shortcode",
            LexiconField::Ctpv => "ctpv",
            LexiconField::Definition => "Definition",
        }
    }
}

/// One glossary row with every field already normalized to plain text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub canonical: String,
    pub shortcode: String,
    pub ctpv: String,
    pub definition: String,
}

impl LexiconEntry {
    /// Builds an entry from raw store cells. Columns that are missing from
    /// the record normalize to empty text.
    pub fn from_cells(cells: &HashMap<String, CellValue>) -> Self {
        let text = |field: LexiconField| {
            cells
                .get(field.column())
                .map(to_text)
                .unwrap_or_default()
        };

        Self {
            canonical: text(LexiconField::Canonical),
            shortcode: text(LexiconField::Shortcode),
            ctpv: text(LexiconField::Ctpv),
            definition: text(LexiconField::Definition),
        }
    }

    pub fn field(&self, field: LexiconField) -> &str {
        match field {
            LexiconField::Canonical => &self.canonical,
            LexiconField::Shortcode => &self.shortcode,
            LexiconField::Ctpv => &self.ctpv,
            LexiconField::Definition => &self.definition,
        }
    }
}

/// Static per-field importance used by the ranker.
///
/// Order matters only for iteration; a field that is not listed is never scored.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldWeights {
    weights: Vec<(LexiconField, f64)>,
}

impl FieldWeights {
    pub fn new(weights: Vec<(LexiconField, f64)>) -> Self {
        Self { weights }
    }

    pub fn iter(&self) -> impl Iterator<Item = (LexiconField, f64)> + '_ {
        self.weights.iter().copied()
    }
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self::new(vec![
            (LexiconField::Canonical, 5.0),
            (LexiconField::Shortcode, 4.0),
            (LexiconField::Ctpv, 3.0),
            (LexiconField::Definition, 1.0),
        ])
    }
}

/// A row as it appears in the response body.
///
/// `definition` is `None` for deployments that do not project it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconRow {
    pub canonical: String,
    pub shortcode: String,
    pub ctpv: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

impl LexiconRow {
    pub fn project(entry: LexiconEntry, include_definition: bool) -> Self {
        Self {
            canonical: entry.canonical,
            shortcode: entry.shortcode,
            ctpv: entry.ctpv,
            definition: include_definition.then_some(entry.definition),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LexiconParams {
    pub q: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LexiconResponse {
    pub count: usize,
    pub lexicon: Vec<LexiconRow>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
