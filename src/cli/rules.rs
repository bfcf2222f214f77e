use comfy_table::{Cell, Table};

use crate::cli::open_store;
use crate::error::{PennyError, Result};
use crate::session::Session;

pub fn add(keyword: &str, category: &str, store_path: &Option<String>) -> Result<()> {
    if keyword.trim().is_empty() || category.trim().is_empty() {
        return Err(PennyError::Other(
            "keyword and category must be non-empty".to_string(),
        ));
    }
    let store = open_store(store_path);
    let mut session = Session::restore(&store);
    session.upsert_rule(keyword, category);
    session.recategorize();
    session.persist(&store);
    println!("Rule set: '{}' \u{2192} {}", keyword.trim(), category.trim().to_uppercase());
    Ok(())
}

pub fn list(store_path: &Option<String>) -> Result<()> {
    let store = open_store(store_path);
    let session = Session::restore(&store);

    if session.rules().is_empty() {
        println!("No rules defined. Add one with `penny rules add <keyword> <category>`.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Priority", "Keyword", "Category"]);
    for (i, rule) in session.rules().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&rule.keyword),
            Cell::new(&rule.category),
        ]);
    }
    println!("Rules (first match wins)\n{table}");
    Ok(())
}

pub fn load(file: &str, store_path: &Option<String>) -> Result<()> {
    let text = std::fs::read_to_string(file)?;
    let store = open_store(store_path);
    let mut session = Session::restore(&store);
    session.set_rule_text(&text);
    session.recategorize();
    session.persist(&store);
    println!("Loaded {} rules from {file}", session.rules().len());
    Ok(())
}
