use crate::aggregate::{category_totals, period_totals, CategoryTotals, PeriodTotals};
use crate::categorize::categorize;
use crate::dates;
use crate::models::{Rule, Transaction};
use crate::rules;
use crate::store::Store;

const KEY_TRANSACTIONS: &str = "transactions";
const KEY_RULES: &str = "rules";
const KEY_MONTH_FILTER: &str = "filter.month";
const KEY_CATEGORY_FILTER: &str = "filter.category";

/// Owned process state: the current transaction set, the rule text plus its
/// parsed form, and the active filters. Single caller, single-threaded; every
/// operation is synchronous and runs to completion.
#[derive(Default)]
pub struct Session {
    transactions: Vec<Transaction>,
    rules: Vec<Rule>,
    rule_text: String,
    month_filter: Option<String>,
    category_filter: Option<String>,
}

impl Session {
    /// Rebuild a session from the store. Anything missing or unreadable
    /// falls back to the empty default.
    pub fn restore(store: &dyn Store) -> Self {
        let mut session = Self::default();
        if let Some(json) = store.load(KEY_TRANSACTIONS) {
            session.transactions = serde_json::from_str(&json).unwrap_or_default();
        }
        if let Some(text) = store.load(KEY_RULES) {
            session.set_rule_text(&text);
        }
        session.month_filter = store.load(KEY_MONTH_FILTER);
        session.category_filter = store.load(KEY_CATEGORY_FILTER);
        session
    }

    /// Write the session through the storage port. Fire-and-forget: the
    /// store swallows failures and nothing propagates back.
    pub fn persist(&self, store: &dyn Store) {
        if let Ok(json) = serde_json::to_string(&self.transactions) {
            store.save(KEY_TRANSACTIONS, &json);
        }
        store.save(KEY_RULES, &self.rule_text);
        match &self.month_filter {
            Some(month) => store.save(KEY_MONTH_FILTER, month),
            None => store.remove(KEY_MONTH_FILTER),
        }
        match &self.category_filter {
            Some(category) => store.save(KEY_CATEGORY_FILTER, category),
            None => store.remove(KEY_CATEGORY_FILTER),
        }
    }

    /// Swap in a freshly ingested transaction set. The replacement is
    /// wholesale; there is no partial state and no per-row deletion path.
    pub fn replace_transactions(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Replace the whole rule text; the parsed list is rebuilt from scratch.
    pub fn set_rule_text(&mut self, text: &str) {
        self.rule_text = text.to_string();
        self.rules = rules::parse_rules(text);
    }

    /// Add or replace the rule for `keyword`.
    pub fn upsert_rule(&mut self, keyword: &str, category: &str) {
        let text = rules::upsert_rule(&self.rule_text, keyword, category);
        self.set_rule_text(&text);
    }

    pub fn month_filter(&self) -> Option<&str> {
        self.month_filter.as_deref()
    }

    pub fn category_filter(&self) -> Option<&str> {
        self.category_filter.as_deref()
    }

    pub fn set_month_filter(&mut self, month: Option<String>) {
        self.month_filter = month;
    }

    pub fn set_category_filter(&mut self, category: Option<String>) {
        self.category_filter = category;
    }

    fn in_month(txn: &Transaction, month: &str) -> bool {
        // Unresolvable dates are excluded from any month-keyed view but the
        // transaction itself stays in the collection.
        dates::resolve(&txn.date).map(dates::month_key).as_deref() == Some(month)
    }

    /// Full categorization pass over the month-filtered subset. Transactions
    /// outside the active month keep their previous category.
    pub fn recategorize(&mut self) {
        let month = self.month_filter.clone();
        let subset = self
            .transactions
            .iter_mut()
            .filter(|txn| month.as_deref().map_or(true, |m| Self::in_month(txn, m)));
        categorize(subset, &self.rules);
    }

    /// The currently active subset: month filter, then category filter.
    pub fn view(&self) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| {
                self.month_filter
                    .as_deref()
                    .map_or(true, |m| Self::in_month(txn, m))
            })
            .filter(|txn| {
                self.category_filter.as_deref().map_or(true, |wanted| {
                    txn.category
                        .as_deref()
                        .is_some_and(|c| c.eq_ignore_ascii_case(wanted))
                })
            })
            .collect()
    }

    pub fn totals(&self) -> CategoryTotals {
        category_totals(self.view())
    }

    pub fn period(&self) -> PeriodTotals {
        period_totals(self.view())
    }
}
