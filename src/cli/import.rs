use crate::categorize::categorize;
use crate::cli::open_store;
use crate::error::Result;
use crate::ingest::ingest;
use crate::session::Session;

pub fn run(file: &str, store_path: &Option<String>) -> Result<()> {
    let raw = std::fs::read_to_string(file)?;
    let mut transactions = ingest(&raw);

    let store = open_store(store_path);
    let mut session = Session::restore(&store);
    // A fresh import categorizes everything, regardless of the sticky filter.
    categorize(transactions.iter_mut(), session.rules());
    session.replace_transactions(transactions);
    session.persist(&store);

    println!(
        "Imported {} transactions from {file}",
        session.transactions().len()
    );
    Ok(())
}
