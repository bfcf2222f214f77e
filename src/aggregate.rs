use std::cmp::Ordering;

use crate::categorize::UNCATEGORISED;
use crate::models::Transaction;

pub struct CategoryRow {
    pub category: String,
    pub total: f64,
    pub pct: f64,
}

pub struct CategoryTotals {
    /// Sorted by total descending; equal totals keep first-seen order.
    pub rows: Vec<CategoryRow>,
    pub grand_total: f64,
}

pub struct PeriodTotals {
    pub debits: f64,
    pub credits: f64,
    pub net: f64,
    pub count: usize,
}

/// Group the supplied transactions by uppercase category and sum signed
/// amounts. Blank or missing categories count as `UNCATEGORISED`. Percentages
/// are of the grand total, `0` when the grand total is zero. The caller is
/// expected to have filtered the subset already.
pub fn category_totals<'a, I>(transactions: I) -> CategoryTotals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut groups: Vec<(String, f64)> = Vec::new();
    for txn in transactions {
        let category = txn
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORISED)
            .to_uppercase();
        match groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, total)) => *total += txn.amount,
            None => groups.push((category, txn.amount)),
        }
    }

    // Stable sort: ties retain grouping (insertion) order; no secondary key
    // is defined.
    groups.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let grand_total: f64 = groups.iter().map(|(_, total)| total).sum();
    let rows = groups
        .into_iter()
        .map(|(category, total)| CategoryRow {
            category,
            total,
            pct: if grand_total != 0.0 {
                total / grand_total * 100.0
            } else {
                0.0
            },
        })
        .collect();

    CategoryTotals { rows, grand_total }
}

/// Debit/credit split over the supplied transactions: debits are the sum of
/// positive amounts, credits the absolute sum of the rest, net their
/// difference.
pub fn period_totals<'a, I>(transactions: I) -> PeriodTotals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut debits = 0.0;
    let mut credits = 0.0;
    let mut count = 0;
    for txn in transactions {
        if txn.amount > 0.0 {
            debits += txn.amount;
        } else {
            credits += txn.amount.abs();
        }
        count += 1;
    }
    PeriodTotals {
        debits,
        credits,
        net: debits - credits,
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(category: Option<&str>, amount: f64) -> Transaction {
        Transaction {
            date: "01/12/2024".to_string(),
            description: "x".to_string(),
            amount,
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn test_category_totals_groups_and_sorts_descending() {
        let txns = vec![
            txn(Some("COFFEE"), 4.0),
            txn(Some("GROCERIES"), 80.0),
            txn(Some("COFFEE"), 6.0),
        ];
        let totals = category_totals(&txns);
        assert_eq!(totals.rows.len(), 2);
        assert_eq!(totals.rows[0].category, "GROCERIES");
        assert_eq!(totals.rows[0].total, 80.0);
        assert_eq!(totals.rows[1].category, "COFFEE");
        assert_eq!(totals.rows[1].total, 10.0);
        assert_eq!(totals.grand_total, 90.0);
    }

    #[test]
    fn test_grand_total_equals_row_sum_and_amount_sum() {
        let txns = vec![
            txn(Some("A"), 10.0),
            txn(Some("B"), -3.5),
            txn(None, 7.25),
        ];
        let totals = category_totals(&txns);
        let row_sum: f64 = totals.rows.iter().map(|r| r.total).sum();
        let amount_sum: f64 = txns.iter().map(|t| t.amount).sum();
        assert!((totals.grand_total - row_sum).abs() < 1e-9);
        assert!((totals.grand_total - amount_sum).abs() < 1e-9);
    }

    #[test]
    fn test_percentages_sum_to_100() {
        let txns = vec![
            txn(Some("A"), 30.0),
            txn(Some("B"), 50.0),
            txn(Some("C"), 20.0),
        ];
        let totals = category_totals(&txns);
        let pct_sum: f64 = totals.rows.iter().map(|r| r.pct).sum();
        assert!((pct_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_grand_total_yields_zero_percentages() {
        let txns = vec![txn(Some("A"), 10.0), txn(Some("B"), -10.0)];
        let totals = category_totals(&txns);
        assert_eq!(totals.grand_total, 0.0);
        assert!(totals.rows.iter().all(|r| r.pct == 0.0));
    }

    #[test]
    fn test_blank_and_missing_categories_group_as_uncategorised() {
        let txns = vec![txn(None, 5.0), txn(Some("  "), 5.0), txn(Some("uncategorised"), 5.0)];
        let totals = category_totals(&txns);
        assert_eq!(totals.rows.len(), 1);
        assert_eq!(totals.rows[0].category, "UNCATEGORISED");
        assert_eq!(totals.rows[0].total, 15.0);
    }

    #[test]
    fn test_equal_totals_keep_insertion_order() {
        let txns = vec![
            txn(Some("ZEBRA"), 10.0),
            txn(Some("APPLE"), 10.0),
            txn(Some("MANGO"), 10.0),
        ];
        let totals = category_totals(&txns);
        let names: Vec<&str> = totals.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, vec!["ZEBRA", "APPLE", "MANGO"]);
    }

    #[test]
    fn test_empty_set() {
        let txns: Vec<Transaction> = Vec::new();
        let totals = category_totals(&txns);
        assert!(totals.rows.is_empty());
        assert_eq!(totals.grand_total, 0.0);
    }

    #[test]
    fn test_period_totals() {
        let txns = vec![
            txn(Some("A"), 100.0),
            txn(Some("B"), 25.5),
            txn(Some("C"), -40.0),
        ];
        let p = period_totals(&txns);
        assert_eq!(p.debits, 125.5);
        assert_eq!(p.credits, 40.0);
        assert_eq!(p.net, 85.5);
        assert_eq!(p.count, 3);
    }

    #[test]
    fn test_period_totals_empty() {
        let txns: Vec<Transaction> = Vec::new();
        let p = period_totals(&txns);
        assert_eq!(p.debits, 0.0);
        assert_eq!(p.credits, 0.0);
        assert_eq!(p.net, 0.0);
        assert_eq!(p.count, 0);
    }
}
