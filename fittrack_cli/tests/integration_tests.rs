//! Integration tests for the fittrack binary.
//!
//! These tests verify end-to-end behavior including:
//! - Workout logging and streak reporting
//! - Delete flows with confirmation skipping
//! - Calculator output
//! - Draft/template workflow
//! - Recovery from corrupted snapshots

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fittrack"))
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal fitness tracker"));
}

#[test]
fn test_workout_log_creates_snapshot() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["workout", "log", "2024-01-01"])
        .args(["--name", "Push Day"])
        .args(["--exercise", "Bench Press"])
        .args(["--exercise", "Overhead Press"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout logged"));

    let ledger = fs::read_to_string(data_dir.join("ledger.json")).expect("Failed to read ledger");
    assert!(ledger.contains("Push Day"));
    assert!(ledger.contains("2024-01-01"));
}

#[test]
fn test_consecutive_days_grow_the_streak() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    for date in ["2024-01-01", "2024-01-02", "2024-01-03"] {
        cli()
            .args(["workout", "log", date, "--name", "Daily"])
            .arg("--data-dir")
            .arg(&data_dir)
            .assert()
            .success();
    }

    cli()
        .arg("streak")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Current streak:  3 days"))
        .stdout(predicate::str::contains("Longest streak:  3 days"))
        .stdout(predicate::str::contains("Last workout:    2024-01-03"));
}

#[test]
fn test_deleting_first_day_resets_streak() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    for date in ["2024-01-01", "2024-01-02"] {
        cli()
            .args(["workout", "log", date, "--name", "Daily"])
            .arg("--data-dir")
            .arg(&data_dir)
            .assert()
            .success();
    }

    cli()
        .args(["workout", "delete", "2024-01-01", "--yes"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout deleted"))
        .stdout(predicate::str::contains("Current streak:  1 days"))
        .stdout(predicate::str::contains("Longest streak:  1 days"))
        .stdout(predicate::str::contains("Workout days:    1"));
}

#[test]
fn test_declining_confirmation_leaves_state_untouched() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["workout", "log", "2024-01-01", "--name", "Daily"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    // Answer "n" to the confirmation prompt
    cli()
        .args(["workout", "delete", "2024-01-01"])
        .arg("--data-dir")
        .arg(&data_dir)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Left unchanged"));

    cli()
        .arg("streak")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout days:    1"));
}

#[test]
fn test_blank_workout_name_is_a_noop() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["workout", "log", "2024-01-01", "--name", "   "])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("not logged"));

    assert!(!data_dir.join("ledger.json").exists());
}

#[test]
fn test_measurement_roundtrip() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["measure", "set", "2024-02-01", "--weight", "72.5"])
        .args(["--height", "175", "--body-fat", "18"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Measurement recorded"));

    cli()
        .args(["measure", "list"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-02-01"))
        .stdout(predicate::str::contains("72.5 kg"));
}

#[test]
fn test_invalid_measurement_weight_is_declined() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["measure", "set", "2024-02-01", "--weight", "0"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("not recorded"));

    assert!(!data_dir.join("ledger.json").exists());
}

#[test]
fn test_pr_add_and_list() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["pr", "add", "2024-03-01"])
        .args(["--exercise", "Deadlift", "--weight", "180", "--reps", "3"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("PR added"));

    cli()
        .args(["pr", "list"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Deadlift"))
        .stdout(predicate::str::contains("180 kg × 3"));
}

#[test]
fn test_calc_known_values() {
    // BMR 1648.75 -> 1649, TDEE 2556, lose at 0.5 kg/week -> 2006
    cli()
        .args(["calc", "--weight", "70", "--height", "175", "--age", "30"])
        .args(["--gender", "male", "--activity", "moderate"])
        .args(["--goal", "lose", "--rate", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BMR:          1649 kcal/day"))
        .stdout(predicate::str::contains("TDEE:         2556 kcal/day"))
        .stdout(predicate::str::contains("Recommended:  2006 kcal/day"));
}

#[test]
fn test_calc_us_units_with_feet() {
    cli()
        .args(["calc", "--weight", "154.3", "--feet", "5", "--inches", "9"])
        .args(["--age", "30", "--gender", "male", "--units", "us"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TDEE:"));
}

#[test]
fn test_calories_add_and_total() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["calories", "add", "--food", "Oatmeal", "--calories", "350"])
        .args(["--date", "2024-05-01"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("350 kcal total for 2024-05-01"));

    cli()
        .args(["calories", "add", "--food", "Chicken", "--calories", "520"])
        .args(["--date", "2024-05-01"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("870 kcal total for 2024-05-01"));

    cli()
        .args(["calories", "list", "--date", "2024-05-01"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Oatmeal"))
        .stdout(predicate::str::contains("Total: 870 kcal"));
}

#[test]
fn test_draft_template_log_workflow() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["draft", "name", "Push Day"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    cli()
        .args(["draft", "add", "bench-press"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Bench Press"));

    cli()
        .args(["draft", "save"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Template saved"));

    // Pull the template id out of the persisted snapshot
    let templates: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(data_dir.join("templates.json")).unwrap())
            .unwrap();
    let id = templates[0]["id"].as_str().unwrap().to_string();

    cli()
        .args(["template", "log", &id, "2024-06-01"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout logged"))
        .stdout(predicate::str::contains("Current streak:  1 days"));

    let ledger = fs::read_to_string(data_dir.join("ledger.json")).unwrap();
    assert!(ledger.contains("Push Day"));
    assert!(ledger.contains("Bench Press"));
}

#[test]
fn test_empty_draft_save_is_declined() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["draft", "save"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("not saved"));

    assert!(!data_dir.join("templates.json").exists());
}

#[test]
fn test_corrupted_ledger_recovers_to_default() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("ledger.json"), "{ not json }").unwrap();

    cli()
        .arg("streak")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Current streak:  0 days"));
}

#[test]
fn test_export_writes_csv() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["measure", "set", "2024-02-01", "--weight", "72.5"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    cli()
        .arg("export")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 measurement rows"));

    let csv = fs::read_to_string(data_dir.join("measurements.csv")).unwrap();
    assert!(csv.contains("2024-02-01"));
    assert!(csv.contains("72.5"));
}
