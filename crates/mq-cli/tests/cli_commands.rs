//! Integration tests for the `mq` CLI commands.

#![allow(deprecated)] // Command::cargo_bin: macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A question file with one question per difficulty; 'a' is always
/// correct.
fn full_pool(dir: &TempDir) -> std::path::PathBuf {
    let records: Vec<String> = (1..=12)
        .map(|d| {
            format!(
                r#"{{"question": "Level {d}?", "a": "right", "b": "wrong", "c": "wrong", "d": "wrong", "answer": "a", "difficulty": {d}}}"#
            )
        })
        .collect();
    let path = dir.path().join("questions.json");
    fs::write(&path, format!("[{}]", records.join(","))).unwrap();
    path
}

fn mq() -> Command {
    Command::cargo_bin("mq").unwrap()
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_reports_full_coverage() {
    let dir = TempDir::new().unwrap();
    let pool = full_pool(&dir);
    mq().arg("check")
        .arg(&pool)
        .assert()
        .success()
        .stdout(predicate::str::contains("12 questions loaded"))
        .stdout(predicate::str::contains("All checks passed"));
}

#[test]
fn check_missing_file_fails() {
    mq().arg("check")
        .arg("/no/such/questions.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn check_incomplete_pool_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("thin.json");
    fs::write(
        &path,
        r#"[{"question": "Q?", "a": "r", "b": "w", "answer": "a", "difficulty": 1}]"#,
    )
    .unwrap();
    mq().arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("No questions at difficulty"));
}

#[test]
fn check_malformed_json_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    mq().arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed question file"));
}

// ---------------------------------------------------------------------------
// scores
// ---------------------------------------------------------------------------

#[test]
fn scores_empty_board() {
    let dir = TempDir::new().unwrap();
    mq().arg("scores")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No scores yet."));
}

#[test]
fn scores_clear_empties_the_board() {
    let dir = TempDir::new().unwrap();
    let pool = full_pool(&dir);

    // Lose at round 2 to get an entry on the board.
    mq().arg("play")
        .arg("--questions")
        .arg(&pool)
        .arg("--data-dir")
        .arg(dir.path())
        .write_stdin("a\nb\nZsofi\nquit\n")
        .assert()
        .success();

    mq().arg("scores")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Zsofi"));

    mq().arg("scores")
        .arg("--data-dir")
        .arg(dir.path())
        .arg("--clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Leaderboard cleared."));

    mq().arg("scores")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No scores yet."));
}

// ---------------------------------------------------------------------------
// play (piped, untimed)
// ---------------------------------------------------------------------------

#[test]
fn play_round_one_loss_records_no_score() {
    let dir = TempDir::new().unwrap();
    let pool = full_pool(&dir);
    mq().arg("play")
        .arg("--questions")
        .arg(&pool)
        .arg("--data-dir")
        .arg(dir.path())
        .write_stdin("b\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrong!"))
        .stdout(predicate::str::contains("You leave with nothing."));

    mq().arg("scores")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No scores yet."));
}

#[test]
fn play_win_the_grand_prize() {
    let dir = TempDir::new().unwrap();
    let pool = full_pool(&dir);
    let answers = "a\n".repeat(12);
    mq().arg("play")
        .arg("--questions")
        .arg(&pool)
        .arg("--data-dir")
        .arg(dir.path())
        .write_stdin(format!("{answers}Winner\nquit\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("grand prize: 10.000.000 Ft"))
        .stdout(predicate::str::contains("Winner with 10.000.000 Ft"));
}

#[test]
fn play_empty_name_becomes_anonymous() {
    let dir = TempDir::new().unwrap();
    let pool = full_pool(&dir);
    mq().arg("play")
        .arg("--questions")
        .arg(&pool)
        .arg("--data-dir")
        .arg(dir.path())
        .write_stdin("a\nb\n\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Anonymous with 1.000 Ft"));
}

#[test]
fn play_quit_saves_and_resume_reports_round() {
    let dir = TempDir::new().unwrap();
    let pool = full_pool(&dir);

    mq().arg("play")
        .arg("--questions")
        .arg(&pool)
        .arg("--data-dir")
        .arg(dir.path())
        .write_stdin("a\na\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Game saved."));

    mq().arg("play")
        .arg("--questions")
        .arg(&pool)
        .arg("--data-dir")
        .arg(dir.path())
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Resuming a saved game at round 3."));
}

#[test]
fn play_missing_question_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    mq().arg("play")
        .arg("--questions")
        .arg(dir.path().join("nope.json"))
        .arg("--data-dir")
        .arg(dir.path())
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("question file not found"));
}

#[test]
fn play_lifelines_report_their_effects() {
    let dir = TempDir::new().unwrap();
    let pool = full_pool(&dir);
    mq().arg("play")
        .arg("--questions")
        .arg(&pool)
        .arg("--data-dir")
        .arg(dir.path())
        .write_stdin("fifty\nvote\nswap\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("eliminated"))
        .stdout(predicate::str::contains("The audience has voted"))
        .stdout(predicate::str::contains("new question"));
}
