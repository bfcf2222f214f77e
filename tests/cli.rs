use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE_CSV: &str = "\
Date,Description,Debit Amount,Credit Amount
01/12/2024,COFFEE CORNER,4.50,
05/12/2024,WOOLWORTHS METRO,80.00,
15/11/2024,SHELL SERVICE STATION,1.80,
20/11/2024,REFUND,,10.00
";

const SAMPLE_RULES: &str = "\
# spending rules
coffee => COFFEE
woolworths => GROCERIES
shell => PETROL
";

fn penny(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("penny").unwrap();
    cmd.arg("--store").arg(store);
    cmd
}

fn setup(dir: &Path) -> std::path::PathBuf {
    let store = dir.join("store.json");
    let csv = dir.join("statement.csv");
    let rules = dir.join("rules.txt");
    std::fs::write(&csv, SAMPLE_CSV).unwrap();
    std::fs::write(&rules, SAMPLE_RULES).unwrap();

    penny(&store)
        .args(["import", csv.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 4 transactions"));
    penny(&store)
        .args(["rules", "load", rules.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 3 rules"));
    store
}

#[test]
fn test_import_and_report_all_months() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup(dir.path());

    // The 1.80 petrol swipe reclassifies to coffee: 4.50 + 1.80 = 6.30.
    penny(&store)
        .args(["report", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spending by Category (All months)"))
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("6.30"))
        .stdout(predicate::str::contains("TOTAL"));
}

#[test]
fn test_month_filter_is_sticky() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup(dir.path());

    penny(&store)
        .args(["report", "--month", "2024-12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(December 2024)"))
        .stdout(predicate::str::contains("84.50"));

    // The filter persists into the next invocation.
    penny(&store)
        .args(["period"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(December 2024)"))
        .stdout(predicate::str::contains("2 transactions"));

    penny(&store)
        .args(["report", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(All months)"));
}

#[test]
fn test_rules_add_recategorizes() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup(dir.path());

    penny(&store)
        .args(["rules", "add", "refund", "INCOME"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'refund' \u{2192} INCOME"));

    penny(&store)
        .args(["list", "--all", "--category", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("REFUND"))
        .stdout(predicate::str::contains("1 rows"));
}

#[test]
fn test_rules_list_shows_priority_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup(dir.path());

    penny(&store)
        .args(["rules", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("first match wins"))
        .stdout(predicate::str::contains("coffee"))
        .stdout(predicate::str::contains("GROCERIES"));
}

#[test]
fn test_invalid_month_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup(dir.path());

    penny(&store)
        .args(["report", "--month", "december"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month"));
}

#[test]
fn test_import_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");
    penny(&store)
        .args(["import", "no-such-file.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
