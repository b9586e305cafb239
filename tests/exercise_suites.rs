//! The bundled exercise suites pass, with and without submission cases.

use kata::config::RunConfig;
use kata::exercises::{self, Exercise};
use kata::output::NullReporter;
use kata::Suite;

fn run(config: &RunConfig) -> kata::Report {
    let mut suite = Suite::new(NullReporter);
    exercises::run_selected(&mut suite, config).expect("exercise suites are well formed");
    suite.finish()
}

#[test]
fn every_regular_case_passes() {
    let report = run(&RunConfig::default());
    let failures: Vec<_> = report
        .cases()
        .filter(|c| !c.outcome.is_pass())
        .map(|c| format!("{}: {:?}", c.description, c.outcome.message()))
        .collect();
    assert!(failures.is_empty(), "{:#?}", failures);
}

#[test]
fn submit_mode_adds_cases_and_they_pass() {
    let regular = run(&RunConfig::default()).summary();
    let submitted = run(&RunConfig {
        with_submit: true,
        ..RunConfig::default()
    })
    .summary();

    assert!(submitted.total_tests() > regular.total_tests());
    assert!(!submitted.has_failures());
}

#[test]
fn filter_selects_suites_by_name() {
    let report = run(&RunConfig {
        filter: Some("loops".to_string()),
        ..RunConfig::default()
    });
    let names: Vec<_> = report.groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["max_messages_within_budget", "primes_up_to"]);
}

#[test]
fn exercises_run_in_lesson_order() {
    let names: Vec<_> = Exercise::ALL.iter().map(|e| e.name()).collect();
    assert_eq!(
        names,
        ["nullability", "pricing", "contacts", "messages", "prototypes", "loops"]
    );
}
