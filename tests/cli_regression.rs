// Regression tests for the `kata` binary's transcript and exit status.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn runs_all_suites_and_exits_cleanly() {
    let mut cmd = Command::cargo_bin("kata").unwrap();
    cmd.args(["--color", "never"]);
    cmd.assert().success().stdout(
        contains("\n--- monthly_price ---\n✓ charges 10000 cents for basic\n")
            .and(contains("--- prototype chains ---"))
            .and(contains(" failed\n"))
            .and(contains("charges 50000 cents for enterprise").not()),
    );
}

#[test]
fn submit_flag_runs_submission_cases() {
    let mut cmd = Command::cargo_bin("kata").unwrap();
    cmd.args(["-s", "--color", "never", "pricing"]);
    cmd.assert().success().stdout(
        contains("✓ charges 50000 cents for enterprise")
            .and(contains("4 passed, 0 failed"))
            .and(contains("--- MessageLog ---").not()),
    );
}

#[test]
fn long_submit_flag_is_accepted() {
    let mut cmd = Command::cargo_bin("kata").unwrap();
    cmd.args(["--submit", "--color", "never", "nullability"]);
    cmd.assert()
        .success()
        .stdout(contains("✓ has no total until every counter is known"));
}

#[test]
fn unknown_flags_are_rejected() {
    let mut cmd = Command::cargo_bin("kata").unwrap();
    cmd.arg("--bogus");
    cmd.assert().failure().stderr(contains("--bogus"));
}
