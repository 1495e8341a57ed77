//! Row labels of the detail page's key/value table.
//!
//! Labels are site- and language-specific vocabulary, so they live in a
//! table that can be swapped for a JSON file instead of being hard-wired
//! into the extractor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The metadata slot a table row fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ReleaseDate,
    MovieLength,
    Actresses,
    Directors,
    Series,
    Maker,
    Label,
    Genres,
    Code,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEntry {
    pub label: String,
    pub field: Field,
}

#[derive(Debug, Error)]
pub enum LabelsError {
    #[error("invalid label table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("label table is empty")]
    Empty,
}

/// Priority-ordered label → field table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLabels {
    entries: Vec<LabelEntry>,
}

const DEFAULT_LABELS: [(&str, Field); 10] = [
    ("開始日", Field::ReleaseDate),
    ("発売日", Field::ReleaseDate),
    ("収録時間", Field::MovieLength),
    ("出演者", Field::Actresses),
    ("監督", Field::Directors),
    ("シリーズ", Field::Series),
    ("メーカー", Field::Maker),
    ("レーベル", Field::Label),
    ("ジャンル", Field::Genres),
    ("品番", Field::Code),
];

impl FieldLabels {
    pub fn new(entries: Vec<LabelEntry>) -> Result<Self, LabelsError> {
        if entries.is_empty() {
            return Err(LabelsError::Empty);
        }
        Ok(Self { entries })
    }

    /// Parse `[{"label": "品番", "field": "code"}, ...]`.
    pub fn from_json(raw: &str) -> Result<Self, LabelsError> {
        Self::new(serde_json::from_str(raw)?)
    }

    /// The field of the first entry whose label occurs in `cell_text`.
    pub fn lookup(&self, cell_text: &str) -> Option<Field> {
        self.entries
            .iter()
            .find(|entry| cell_text.contains(entry.label.as_str()))
            .map(|entry| entry.field)
    }

    pub fn entries(&self) -> &[LabelEntry] {
        &self.entries
    }
}

impl Default for FieldLabels {
    fn default() -> Self {
        Self {
            entries: DEFAULT_LABELS
                .iter()
                .map(|(label, field)| LabelEntry {
                    label: label.to_string(),
                    field: *field,
                })
                .collect(),
        }
    }
}
