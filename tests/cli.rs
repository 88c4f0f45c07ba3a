use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pairbudget(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pairbudget").unwrap();
    cmd.env("PAIR_BUDGET_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn add(data_dir: &TempDir, args: &[&str]) {
    pairbudget(data_dir).arg("add").args(args).assert().success();
}

#[test]
fn test_no_command_prints_hint() {
    let temp = TempDir::new().unwrap();
    pairbudget(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("pairbudget --help"));
}

#[test]
fn test_add_then_list() {
    let temp = TempDir::new().unwrap();
    add(&temp, &["Groceries", "45.50", "-o", "partner2", "-d", "2026-01-10"]);

    pairbudget(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Partner 2"));

    assert!(temp.path().join("data").join("budgetEntries.json").exists());
}

#[test]
fn test_empty_list_message() {
    let temp = TempDir::new().unwrap();
    pairbudget(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet"));
}

#[test]
fn test_summary_totals() {
    let temp = TempDir::new().unwrap();
    add(&temp, &["Salary", "3000", "-t", "income", "-o", "partner2"]);
    add(&temp, &["Gas", "150.50", "-o", "partner1"]);

    pairbudget(&temp)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("$3000.00"))
        .stdout(predicate::str::contains("$150.50"))
        .stdout(predicate::str::contains("$2849.50"))
        .stdout(predicate::str::contains("(surplus)"));

    pairbudget(&temp)
        .args(["summary", "--scope", "partner1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-$150.50"))
        .stdout(predicate::str::contains("(deficit)"));
}

#[test]
fn test_chart_covers_fourteen_days() {
    let temp = TempDir::new().unwrap();
    add(&temp, &["Lunch", "12", "-d", "2026-01-15"]);
    add(&temp, &["Groceries", "99", "-d", "2026-01-01"]);
    add(&temp, &["Too old", "7", "-d", "2025-12-31"]);

    pairbudget(&temp)
        .args(["chart", "--kind", "expense", "--date", "2026-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-01-01 to 2026-01-15"))
        .stdout(predicate::str::contains("1/2 "))
        .stdout(predicate::str::contains("1/15"))
        .stdout(predicate::str::contains("$99.00"))
        .stdout(predicate::str::contains("$7.00").not())
        .stdout(predicate::str::contains("1/1 ").not());
}

#[test]
fn test_delete_unknown_id_is_a_no_op() {
    let temp = TempDir::new().unwrap();
    pairbudget(&temp)
        .args(["delete", "12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing deleted"));
}

#[test]
fn test_invalid_amount_fails() {
    let temp = TempDir::new().unwrap();
    pairbudget(&temp)
        .args(["add", "Coffee", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    pairbudget(&temp)
        .args(["add", "Coffee", "0"])
        .assert()
        .failure();
}

#[test]
fn test_settings_set_and_show() {
    let temp = TempDir::new().unwrap();
    pairbudget(&temp)
        .args(["settings", "set", "partner1", "--name", "Alex", "--color", "#112233"])
        .assert()
        .success();

    pairbudget(&temp)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alex"))
        .stdout(predicate::str::contains("#112233"))
        .stdout(predicate::str::contains("Partner 2"));

    pairbudget(&temp)
        .args(["settings", "set", "partner2", "--color", "pink"])
        .assert()
        .failure();
}

#[test]
fn test_export_json_to_stdout() {
    let temp = TempDir::new().unwrap();
    add(&temp, &["Rent", "1200", "-o", "partner2", "-d", "2026-01-01"]);

    pairbudget(&temp)
        .args(["export", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("partner2"));
}

#[test]
fn test_history_records_add() {
    let temp = TempDir::new().unwrap();
    add(&temp, &["Coffee", "4.50", "-d", "2026-01-05"]);

    pairbudget(&temp)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"));
}

#[test]
fn test_config_set_changes_currency() {
    let temp = TempDir::new().unwrap();
    pairbudget(&temp)
        .args(["config", "set", "--currency", "€"])
        .assert()
        .success();
    assert!(temp.path().join("config.json").exists());

    add(&temp, &["Salary", "10", "-t", "income"]);
    pairbudget(&temp)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("€10.00"));

    pairbudget(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: €"));
}
