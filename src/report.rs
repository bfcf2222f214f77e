use chrono::NaiveDate;

use crate::aggregate::CategoryTotals;

// The category report is a compatibility contract: fixed separator, fixed
// amount/percent column widths, category column sized to content.
const AMOUNT_WIDTH: usize = 10;
const PCT_WIDTH: usize = 6;

/// Render category totals as the fixed-width plain-text table:
/// title + `=` underline, `Category | Amount | %` header, one row per
/// category, blank line, then a TOTAL row pinned at 100%.
pub fn category_report(title: &str, month_key: Option<&str>, totals: &CategoryTotals) -> String {
    let heading = format!("{title} ({})", period_label(month_key));
    let category_width = totals
        .rows
        .iter()
        .map(|row| title_case(&row.category).chars().count())
        .chain(["Category".len()])
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&heading);
    out.push('\n');
    out.push_str(&"=".repeat(heading.chars().count()));
    out.push('\n');
    out.push_str(&table_row(category_width, "Category", "Amount", "%"));
    out.push('\n');
    for row in &totals.rows {
        out.push_str(&table_row(
            category_width,
            &title_case(&row.category),
            &format!("{:.2}", row.total),
            &format!("{:.1}%", row.pct),
        ));
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&table_row(
        category_width,
        "TOTAL",
        &format!("{:.2}", totals.grand_total),
        "100%",
    ));
    out
}

fn table_row(category_width: usize, category: &str, amount: &str, pct: &str) -> String {
    format!(
        "{category:<cat$} | {amount:>amt$} | {pct:>pw$}",
        cat = category_width,
        amt = AMOUNT_WIDTH,
        pw = PCT_WIDTH
    )
}

/// `"2024-12"` renders as `December 2024`; no month-key means `All months`.
/// A malformed key falls back to itself rather than erroring.
pub fn period_label(month_key: Option<&str>) -> String {
    let Some(key) = month_key else {
        return "All months".to_string();
    };
    let Some((year, month)) = key.split_once('-') else {
        return key.to_string();
    };
    let (Ok(year), Ok(month)) = (year.parse::<i32>(), month.parse::<u32>()) else {
        return key.to_string();
    };
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date.format("%B %Y").to_string(),
        None => key.to_string(),
    }
}

/// `"COFFEE SHOP"` -> `"Coffee Shop"`.
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::category_totals;
    use crate::models::Transaction;

    fn txn(category: &str, amount: f64) -> Transaction {
        Transaction {
            date: "01/12/2024".to_string(),
            description: "x".to_string(),
            amount,
            category: Some(category.to_string()),
        }
    }

    #[test]
    fn test_period_label() {
        assert_eq!(period_label(Some("2024-12")), "December 2024");
        assert_eq!(period_label(Some("2023-01")), "January 2023");
        assert_eq!(period_label(None), "All months");
        assert_eq!(period_label(Some("garbage")), "garbage");
        assert_eq!(period_label(Some("2024-13")), "2024-13");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("COFFEE"), "Coffee");
        assert_eq!(title_case("EATING OUT"), "Eating Out");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_category_report_layout() {
        let txns = vec![txn("GROCERIES", 146.0), txn("COFFEE", 54.0)];
        let totals = category_totals(&txns);
        let report = category_report("Spending by Category", Some("2024-12"), &totals);
        let expected = "\
Spending by Category (December 2024)
====================================
Category  |     Amount |      %
Groceries |     146.00 |  73.0%
Coffee    |      54.00 |  27.0%

TOTAL     |     200.00 |   100%";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_category_report_underline_matches_heading() {
        let txns = vec![txn("A", 1.0)];
        let totals = category_totals(&txns);
        let report = category_report("T", None, &totals);
        let mut lines = report.lines();
        let heading = lines.next().unwrap();
        let underline = lines.next().unwrap();
        assert_eq!(heading, "T (All months)");
        assert_eq!(underline.chars().count(), heading.chars().count());
        assert!(underline.chars().all(|c| c == '='));
    }

    #[test]
    fn test_category_report_column_widens_for_long_names() {
        let txns = vec![txn("SUBSCRIPTIONS AND MEMBERSHIPS", 10.0)];
        let totals = category_totals(&txns);
        let report = category_report("Spending", None, &totals);
        let header = report.lines().nth(2).unwrap();
        // "Subscriptions And Memberships" is 29 chars, so the category column
        // pads to 29 and the first separator sits at byte 30.
        assert!(header.starts_with("Category"));
        assert_eq!(header.find('|'), Some(30));
    }

    #[test]
    fn test_category_report_empty_set() {
        let txns: Vec<Transaction> = Vec::new();
        let totals = category_totals(&txns);
        let report = category_report("Spending", None, &totals);
        assert!(report.contains("TOTAL"));
        assert!(report.ends_with("0.00 |   100%"));
    }
}
