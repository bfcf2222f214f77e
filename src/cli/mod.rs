pub mod categorize;
pub mod import;
pub mod list;
pub mod report;
pub mod rules;

use clap::{Parser, Subcommand};

use crate::error::{PennyError, Result};
use crate::store::JsonFileStore;

#[derive(Parser)]
#[command(
    name = "penny",
    about = "Bank-statement categorizer: CSV in, keyword rules, category totals out."
)]
pub struct Cli {
    /// Path to the state file (default: ~/.config/penny/store.json)
    #[arg(long, global = true)]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ingest a bank CSV export, replacing the current transaction set.
    Import {
        /// Path to the CSV file
        file: String,
    },
    /// Manage KEYWORD => CATEGORY rules.
    Rules {
        #[command(subcommand)]
        command: RulesCommands,
    },
    /// Re-run the rules over the transactions in the active period.
    Categorize,
    /// Category totals for the active view.
    Report {
        /// Month filter: YYYY-MM (sticky until cleared with --all)
        #[arg(long)]
        month: Option<String>,
        /// Category filter (sticky until cleared with --all)
        #[arg(long)]
        category: Option<String>,
        /// Clear the active filters first
        #[arg(long)]
        all: bool,
    },
    /// Debit/credit summary for the active view.
    Period {
        /// Month filter: YYYY-MM (sticky until cleared with --all)
        #[arg(long)]
        month: Option<String>,
        /// Clear the active filters first
        #[arg(long)]
        all: bool,
    },
    /// List the transactions in the active view.
    List {
        /// Month filter: YYYY-MM (sticky until cleared with --all)
        #[arg(long)]
        month: Option<String>,
        /// Category filter (sticky until cleared with --all)
        #[arg(long)]
        category: Option<String>,
        /// Clear the active filters first
        #[arg(long)]
        all: bool,
    },
}

#[derive(Subcommand)]
pub enum RulesCommands {
    /// Add a rule, or replace the category of an existing keyword.
    Add {
        /// Keyword phrase to match against descriptions
        keyword: String,
        /// Category to assign
        category: String,
    },
    /// List the parsed rules in priority order.
    List,
    /// Replace the whole rule set from a rule-definition file.
    Load {
        /// Path to the rule text file (one KEYWORD => CATEGORY per line)
        file: String,
    },
}

pub(crate) fn open_store(path: &Option<String>) -> JsonFileStore {
    match path {
        Some(p) => JsonFileStore::new(p),
        None => JsonFileStore::new(JsonFileStore::default_path()),
    }
}

/// Validate and zero-pad a `YYYY-MM` month key.
pub(crate) fn parse_month_key(raw: &str) -> Result<String> {
    if let Some((y, m)) = raw.split_once('-') {
        if y.len() == 4 {
            if let (Ok(year), Ok(month)) = (y.parse::<i32>(), m.parse::<u32>()) {
                if (1..=12).contains(&month) {
                    return Ok(format!("{year:04}-{month:02}"));
                }
            }
        }
    }
    Err(PennyError::InvalidMonth(raw.to_string()))
}
