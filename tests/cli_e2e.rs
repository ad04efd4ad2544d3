//! End-to-end CLI tests for chatstat.
//!
//! These tests run the actual binary against a small export and check what
//! lands on stdout, stderr and in output files.
//!
//! # Test Categories
//!
//! - **Analyses**: Every subcommand produces the expected rows
//! - **Output formats**: CSV, JSON, JSONL to stdout and to files
//! - **Filters**: Sender and date-range flags
//! - **Error handling**: Proper error messages for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const EXPORT: &str = "\
12/1/23, 4:00 PM - Messages and calls are end-to-end encrypted.
12/1/23, 4:05 PM - Alice: pizza tonight was great 😀
12/1/23, 4:06 PM - Bob: <Media omitted>
13/1/23, 9:15 AM - Bob: terrible pizza honestly
13/1/23, 9:20 AM - Carol: guitar practice later
14/1/23, 8:00 PM - Alice: guitar lesson was awesome 😀
15/2/23, 7:45 PM - Bob: chess club tomorrow
16/2/23, 7:45 AM - Alice: chess is boring; really
";

/// Creates a temporary directory holding `chat.txt`.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("chat.txt"), EXPORT).unwrap();
    dir
}

fn chatstat_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatstat"));
    Command::from_std(cmd)
}

fn input(dir: &TempDir) -> String {
    dir.path().join("chat.txt").to_str().unwrap().to_string()
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

/// Runs a subcommand against the fixture and returns stdout.
fn run_ok(args: &[&str]) -> String {
    let fixtures = setup_fixtures();
    let input = input(&fixtures);
    let mut argv = vec![args[0], input.as_str()];
    argv.extend_from_slice(&args[1..]);

    let assert = chatstat_cmd().args(&argv).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

// ============================================================================
// Analyses
// ============================================================================

mod analyses {
    use super::*;

    #[test]
    fn test_stats_overall_csv() {
        let out = run_ok(&["stats"]);
        let mut lines = out.lines();
        assert_eq!(
            lines.next(),
            Some(
                "total_messages;total_words;media_messages;links;emojis;deleted_messages;edited_messages;shared_contacts;shared_locations"
            )
        );
        assert!(lines.next().unwrap().starts_with("7;"));
    }

    #[test]
    fn test_stats_for_user_json() {
        let out = run_ok(&["stats", "--user", "Alice", "-f", "json"]);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["total_messages"], 3);
        assert_eq!(parsed[0]["emojis"], 2);
    }

    #[test]
    fn test_busiest() {
        let out = run_ok(&["busiest", "-n", "1"]);
        assert_eq!(out, "rank;sender;count\ntop;Alice;3\nbottom;Carol;1\n");
    }

    #[test]
    fn test_activity_cells() {
        let out = run_ok(&["activity"]);
        assert!(out.starts_with("date;sender;count\n"));
        assert!(out.contains("2023-01-12;Alice;1\n"));
        assert!(out.contains("2023-01-12;Carol;0\n"));
    }

    #[test]
    fn test_months() {
        let out = run_ok(&["months"]);
        assert_eq!(out, "label;count\nJanuary;5\nFebruary;2\n");
    }

    #[test]
    fn test_weekdays() {
        let out = run_ok(&["weekdays"]);
        assert_eq!(
            out,
            "label;count\nMonday;0\nTuesday;0\nWednesday;1\nThursday;3\nFriday;2\nSaturday;1\nSunday;0\n"
        );
    }

    #[test]
    fn test_heatmap_rows() {
        let out = run_ok(&["heatmap", "-u", "Alice"]);
        assert!(out.starts_with("day;night;morning;afternoon;evening\n"));
        assert!(out.contains("Thursday;0;1;1;0\n"));
        assert!(out.contains("Saturday;0;0;0;1\n"));
        assert_eq!(out.lines().count(), 8);
    }

    #[test]
    fn test_compare_with_range() {
        let out = run_ok(&[
            "compare", "-s", "Alice", "-s", "Bob", "--from", "2023-01-12", "--to", "2023-01-13",
        ]);
        assert_eq!(out, "label;count\nBob;2\nAlice;1\n");
    }

    #[test]
    fn test_monthly_and_daily() {
        let monthly = run_ok(&["monthly"]);
        assert!(monthly.contains("2023;1;January-2023;5\n"));
        assert!(monthly.contains("2023;2;February-2023;2\n"));

        let daily = run_ok(&["daily", "-u", "Bob", "-f", "jsonl"]);
        assert_eq!(daily.lines().count(), 3);
        assert!(daily.lines().next().unwrap().contains("\"2023-01-12\""));
    }

    #[test]
    fn test_sentiment() {
        let out = run_ok(&["sentiment"]);
        assert_eq!(out, "positive;neutral;negative\n2;3;2\n");

        let trend = run_ok(&["sentiment", "--trend", "-f", "json"]);
        let parsed: serde_json::Value = serde_json::from_str(&trend).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_keywords() {
        let out = run_ok(&["keywords", "-k", "2"]);
        assert!(out.starts_with("keyword;weight\n"));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_topics() {
        let out = run_ok(&["topics", "-n", "2", "--terms", "2"]);
        assert!(out.starts_with("topic\n"));
        assert!(out.contains("Topic 1: "));
        assert!(out.contains("Topic 2: "));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_users_and_search() {
        assert_eq!(run_ok(&["users"]), "user\nOverall\nAlice\nBob\nCarol\n");
        assert_eq!(run_ok(&["users", "--search", "b"]), "user\nBob\n");
    }

    #[test]
    fn test_emojis() {
        assert_eq!(run_ok(&["emojis"]), "label;count\n😀;2\n");
    }
}

// ============================================================================
// Output Files
// ============================================================================

mod output_files {
    use super::*;

    #[test]
    fn test_output_file_jsonl() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "heatmap.jsonl");

        chatstat_cmd()
            .args([
                "heatmap",
                input(&fixtures).as_str(),
                "-f",
                "jsonl",
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Saved 7 rows"));

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 7);
        for line in content.lines() {
            serde_json::from_str::<serde_json::Value>(line).unwrap();
        }
    }

    #[test]
    fn test_output_file_csv() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "stats.csv");

        chatstat_cmd()
            .args(["stats", input(&fixtures).as_str(), "-o", output.to_str().unwrap()])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("total_messages;"));
    }

    #[test]
    fn test_verbose_logs_to_stderr() {
        let fixtures = setup_fixtures();
        chatstat_cmd()
            .args(["stats", input(&fixtures).as_str(), "-v"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("total_messages;"))
            .stderr(predicate::str::contains("parsed transcript"));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_missing_file() {
        let fixtures = setup_fixtures();
        let missing = output_path(&fixtures, "missing.txt");
        chatstat_cmd()
            .args(["stats", missing.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("IO error"));
    }

    #[test]
    fn test_invalid_date_flag() {
        let fixtures = setup_fixtures();
        chatstat_cmd()
            .args(["daily", input(&fixtures).as_str(), "--from", "2023/01/01"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid date"));
    }

    #[test]
    fn test_insufficient_data_for_keywords() {
        let fixtures = setup_fixtures();
        chatstat_cmd()
            .args(["keywords", input(&fixtures).as_str(), "-u", "Carol"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Insufficient data for TF-IDF"));
    }

    #[test]
    fn test_unknown_format() {
        let fixtures = setup_fixtures();
        chatstat_cmd()
            .args(["stats", input(&fixtures).as_str(), "-f", "xml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown format"));
    }

    #[test]
    fn test_compare_needs_sender() {
        let fixtures = setup_fixtures();
        chatstat_cmd()
            .args(["compare", input(&fixtures).as_str()])
            .assert()
            .failure();
    }

    #[test]
    fn test_invalid_utf8_file() {
        let fixtures = setup_fixtures();
        let path = output_path(&fixtures, "binary.txt");
        fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();
        chatstat_cmd()
            .args(["stats", path.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("UTF-8"));
    }

    #[test]
    fn test_help_lists_examples() {
        chatstat_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("EXAMPLES"))
            .stdout(predicate::str::contains("keywords"));
    }
}
