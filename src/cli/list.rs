use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::report::apply_filters;
use crate::cli::open_store;
use crate::error::Result;
use crate::fmt::amount;
use crate::report::{period_label, title_case};
use crate::session::Session;

pub fn run(
    month: Option<String>,
    category: Option<String>,
    all: bool,
    store_path: &Option<String>,
) -> Result<()> {
    let store = open_store(store_path);
    let mut session = Session::restore(&store);
    apply_filters(&mut session, month, category, all)?;
    session.recategorize();

    let view = session.view();
    if view.is_empty() {
        println!("No transactions in the active view.");
        session.persist(&store);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Description", "Amount", "Category"]);
    let mut net = 0.0;
    for txn in &view {
        net += txn.amount;
        // Debits (money out) red, credits green.
        let amt = if txn.amount > 0.0 {
            amount(txn.amount).red().to_string()
        } else {
            amount(txn.amount.abs()).green().to_string()
        };
        let category = txn.category.as_deref().map(title_case).unwrap_or_default();
        table.add_row(vec![
            Cell::new(&txn.date),
            Cell::new(&txn.description),
            Cell::new(amt),
            Cell::new(category),
        ]);
    }
    let mut label = period_label(session.month_filter());
    if let Some(category) = session.category_filter() {
        label = format!("{label}, {}", title_case(category));
    }
    println!(
        "Transactions ({label}) \u{2014} {} rows, net {}\n{table}",
        view.len(),
        amount(net)
    );
    session.persist(&store);
    Ok(())
}
