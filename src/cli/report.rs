use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::{open_store, parse_month_key};
use crate::error::Result;
use crate::fmt::amount;
use crate::report;
use crate::session::Session;

pub(crate) fn apply_filters(
    session: &mut Session,
    month: Option<String>,
    category: Option<String>,
    all: bool,
) -> Result<()> {
    if all {
        session.set_month_filter(None);
        session.set_category_filter(None);
    }
    if let Some(m) = month {
        session.set_month_filter(Some(parse_month_key(&m)?));
    }
    if let Some(c) = category {
        session.set_category_filter(Some(c.trim().to_uppercase()));
    }
    Ok(())
}

pub fn totals(
    month: Option<String>,
    category: Option<String>,
    all: bool,
    store_path: &Option<String>,
) -> Result<()> {
    let store = open_store(store_path);
    let mut session = Session::restore(&store);
    apply_filters(&mut session, month, category, all)?;
    session.recategorize();
    let totals = session.totals();
    println!(
        "{}",
        report::category_report("Spending by Category", session.month_filter(), &totals)
    );
    session.persist(&store);
    Ok(())
}

pub fn period(month: Option<String>, all: bool, store_path: &Option<String>) -> Result<()> {
    let store = open_store(store_path);
    let mut session = Session::restore(&store);
    apply_filters(&mut session, month, None, all)?;
    session.recategorize();
    let p = session.period();

    let mut table = Table::new();
    table.set_header(vec!["", "Amount"]);
    table.add_row(vec![Cell::new("Debits".red()), Cell::new(amount(p.debits))]);
    table.add_row(vec![Cell::new("Credits".green()), Cell::new(amount(p.credits))]);
    let net_label = if p.net >= 0.0 { "Net".red() } else { "Net".green() };
    table.add_row(vec![Cell::new(net_label), Cell::new(amount(p.net))]);
    println!(
        "Period Summary ({}) \u{2014} {} transactions\n{table}",
        report::period_label(session.month_filter()),
        p.count
    );
    session.persist(&store);
    Ok(())
}
