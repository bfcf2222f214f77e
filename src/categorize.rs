use crate::models::{Rule, Transaction};
use crate::rules::matches;

pub const UNCATEGORISED: &str = "UNCATEGORISED";

// Small card swipes at petrol-station kiosks are almost always the attached
// cafe, not fuel. Inclusive boundary: 2.00 still reclassifies.
const PETROL_CATEGORY: &str = "PETROL";
const COFFEE_CATEGORY: &str = "COFFEE";
const SMALL_PETROL_MAX: f64 = 2.0;

/// Assign a category to every transaction in the iterator: first matching
/// rule wins, no match means `UNCATEGORISED`. The category is recomputed from
/// scratch each pass (never read back), so repeated runs with the same rules
/// are idempotent.
pub fn categorize<'a, I>(transactions: I, rules: &[Rule])
where
    I: IntoIterator<Item = &'a mut Transaction>,
{
    for txn in transactions {
        let description = txn.description.to_lowercase();
        let mut category = rules
            .iter()
            .find(|rule| matches(&description, &rule.keyword))
            .map(|rule| rule.category.clone())
            .unwrap_or_else(|| UNCATEGORISED.to_string());
        if category.eq_ignore_ascii_case(PETROL_CATEGORY) && txn.amount.abs() <= SMALL_PETROL_MAX {
            category = COFFEE_CATEGORY.to_string();
        }
        txn.category = Some(category);
    }
}
