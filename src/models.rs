use serde::{Deserialize, Serialize};

/// One normalized statement row. `date` stays as the raw cell text; date
/// interpretation is deferred to `dates::resolve` so rows with odd date
/// strings survive ingestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub date: String,
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub category: Option<String>,
}

/// One `KEYWORD => CATEGORY` line, normalized: keyword lowercased, category
/// uppercased. List order is the only match priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub keyword: String,
    pub category: String,
}

/// Per-ingestion mapping from logical field to column index, built from a
/// detected header row or the fixed fallback layout for headerless files.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub date: Option<usize>,
    pub debit: Option<usize>,
    pub credit: Option<usize>,
    pub description: Option<usize>,
    /// Headerless files take the last column as description when the row is
    /// shorter than the fixed layout expects.
    pub description_falls_back: bool,
}
