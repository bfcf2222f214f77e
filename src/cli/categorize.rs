use crate::categorize::UNCATEGORISED;
use crate::cli::open_store;
use crate::error::Result;
use crate::session::Session;

pub fn run(store_path: &Option<String>) -> Result<()> {
    let store = open_store(store_path);
    let mut session = Session::restore(&store);
    session.recategorize();
    session.persist(&store);

    let view = session.view();
    let uncategorised = view
        .iter()
        .filter(|t| t.category.as_deref() == Some(UNCATEGORISED))
        .count();
    println!(
        "Categorized {} transactions ({} uncategorised)",
        view.len(),
        uncategorised
    );
    Ok(())
}
