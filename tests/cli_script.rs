use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ledger_view_cli").unwrap();
    cmd.env("LEDGER_VIEW_HOME", home.path())
        .env("LEDGER_VIEW_CLI_SCRIPT", "1")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let home = TempDir::new().unwrap();
    let input = "\
# seed two entries
add 50.00 income Food 2024-01-01
add 20.00 expense Food 2024-01-02 \"Weekly shop\"
summary
list
exit
";

    cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Added income +$50.00 (Food) on Jan 1, 2024"))
        .stdout(contains("Current balance : $30.00"))
        .stdout(contains("Weekly shop"));

    let entries = fs::read_to_string(home.path().join("data").join("entries.json")).unwrap();
    assert!(entries.contains("\"Weekly shop\""));
}

#[test]
fn state_is_restored_on_the_next_run() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("category add Gifts\nadd 40 income Gifts - Birthday\n")
        .assert()
        .success();

    cli(&home)
        .write_stdin("category list\nfilter Gifts\nlist\n")
        .assert()
        .success()
        .stdout(contains("Gifts"))
        .stdout(contains("Transactions in Gifts (1 of 1)"))
        .stdout(contains("+$40.00"));
}

#[test]
fn empty_filter_shows_placeholder_and_bad_input_is_reported() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("add 5 expense Food\nfilter Transport\nlist\nadd 5 expense Fodo\nadd abc income Food\n")
        .assert()
        .success()
        .stdout(contains("No transactions found"))
        .stdout(contains("did you mean `Food`"))
        .stdout(contains("Invalid entry"));
}

#[test]
fn unknown_command_gets_a_suggestion() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("sumary\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `sumary`"))
        .stdout(contains("Suggestion: `summary`?"));
}

#[test]
fn corrupt_record_aborts_startup() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("categories.json"), "{oops").unwrap();

    cli(&home)
        .write_stdin("list\n")
        .assert()
        .failure()
        .stderr(contains("corrupt"))
        .stdout(contains("Transactions").not());
}
