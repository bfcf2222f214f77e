use csv::StringRecord;

use crate::models::{ColumnMap, Transaction};

// Logical-field aliases, matched case-insensitively against header cells.
// Listed in lookup priority: the first alias present in the row wins.
const DATE_ALIASES: &[&str] = &["effective date", "eff date", "date", "value date", "posted date"];
const DEBIT_ALIASES: &[&str] = &["debit amount", "debit"];
const CREDIT_ALIASES: &[&str] = &["credit amount", "credit"];
const DESC_ALIASES: &[&str] = &["long description", "long desc", "description", "details", "narrative"];

// Fixed layout for headerless exports: at least 10 columns with
// date/debit/description at these positions, no credit column.
const FALLBACK_DATE_COL: usize = 2;
const FALLBACK_DEBIT_COL: usize = 5;
const FALLBACK_DESC_COL: usize = 9;

/// Parse an amount cell. Strips every character that is not a digit, minus
/// sign, comma, or period, drops thousands-separating commas, and parses the
/// remainder. A cell with no usable digits parses to `0.0` — indistinguishable
/// from an explicit zero, and filtered identically downstream.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '-' | ',' | '.'))
        .collect();
    let cleaned = cleaned.replace(',', "");
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return 0.0;
    }
    cleaned.parse().unwrap_or(0.0)
}

fn is_header_row(record: &StringRecord) -> bool {
    const MARKERS: &[&str] = &["date", "debit", "credit", "description", "long"];
    record.iter().any(|cell| {
        let cell = cell.to_lowercase();
        MARKERS.iter().any(|m| cell.contains(m))
    })
}

fn find_column(record: &StringRecord, aliases: &[&str]) -> Option<usize> {
    for alias in aliases {
        let hit = record
            .iter()
            .position(|cell| cell.trim().eq_ignore_ascii_case(alias));
        if hit.is_some() {
            return hit;
        }
    }
    None
}

impl ColumnMap {
    pub fn from_header(record: &StringRecord) -> Self {
        Self {
            date: find_column(record, DATE_ALIASES),
            debit: find_column(record, DEBIT_ALIASES),
            credit: find_column(record, CREDIT_ALIASES),
            description: find_column(record, DESC_ALIASES),
            description_falls_back: false,
        }
    }

    pub fn headerless() -> Self {
        Self {
            date: Some(FALLBACK_DATE_COL),
            debit: Some(FALLBACK_DEBIT_COL),
            credit: None,
            description: Some(FALLBACK_DESC_COL),
            description_falls_back: true,
        }
    }

    fn cell<'a>(&self, record: &'a StringRecord, index: Option<usize>) -> &'a str {
        index.and_then(|i| record.get(i)).unwrap_or("")
    }

    fn description_cell<'a>(&self, record: &'a StringRecord) -> &'a str {
        match self.description {
            Some(i) if i < record.len() => &record[i],
            // Short headerless rows fall back to the last column.
            _ if self.description_falls_back => record.iter().last().unwrap_or(""),
            _ => "",
        }
    }
}

/// Parse raw delimited text into transactions.
///
/// Quoted fields (including `""` escapes and embedded commas) are handled by
/// the csv reader; unreadable records and whitespace-only rows are skipped. A
/// row is retained only when its amount is nonzero and at least one of
/// date/description is non-blank, so malformed amounts are silently dropped
/// rather than reported.
pub fn ingest(raw_text: &str) -> Vec<Transaction> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw_text.as_bytes());

    let mut records = Vec::new();
    for result in rdr.records() {
        let Ok(record) = result else { continue };
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        records.push(record);
    }

    let Some(first) = records.first() else {
        return Vec::new();
    };
    let (map, data_start) = if is_header_row(first) {
        (ColumnMap::from_header(first), 1)
    } else {
        (ColumnMap::headerless(), 0)
    };

    let mut transactions = Vec::new();
    for record in &records[data_start..] {
        let date = map.cell(record, map.date).trim();
        let description = map.description_cell(record).trim();
        let debit = parse_amount(map.cell(record, map.debit));
        let credit = parse_amount(map.cell(record, map.credit));
        // Debits are positive expenses, credits negative.
        let amount = debit - credit;
        if amount == 0.0 {
            continue;
        }
        if date.is_empty() && description.is_empty() {
            continue;
        }
        transactions.push(Transaction {
            date: date.to_string(),
            description: description.to_string(),
            amount,
            category: None,
        });
    }
    transactions
}
