//! Test groups and cases.
//!
//! ```rust
//! use kata::{assert, output::NullReporter, Suite};
//!
//! let mut suite = Suite::new(NullReporter);
//! suite
//!     .describe("Math", |g| {
//!         g.it("adds", || assert::strict_equal(1 + 1, 2));
//!         g.it("bad", || assert::strict_equal(1 + 1, 3));
//!         Ok(())
//!     })
//!     .unwrap();
//! let report = suite.finish();
//! assert_eq!(report.summary().failed, 1);
//! ```
//!
//! Groups and cases run immediately, in declaration order. A case's failure
//! (an `Err` or a panic) is recorded and never leaves [`Group::it`]. An `Err`
//! returned from a [`Suite::describe`] body is a wiring mistake and is handed
//! back to the caller.

use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use crate::errors::{CaseResult, KataError};
use crate::output::Reporter;
use crate::report::{CaseRecord, Outcome, Report};

pub struct Suite<R: Reporter> {
    report: Report,
    reporter: R,
}

impl<R: Reporter> Suite<R> {
    pub fn new(reporter: R) -> Self {
        Self {
            report: Report::new(),
            reporter,
        }
    }

    /// Declares a group and runs `body` to completion before returning.
    pub fn describe<F>(&mut self, name: &str, body: F) -> CaseResult
    where
        F: FnOnce(&mut Group<'_, R>) -> CaseResult,
    {
        if name.trim().is_empty() {
            return Err(KataError::structure("describe: group name must not be empty"));
        }
        debug!(group = name, "group started");
        self.reporter.group_started(name);
        self.report.open_group(name);

        let mut group = Group { suite: self };
        body(&mut group)
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Ends the run, letting the reporter print its summary.
    pub fn finish(mut self) -> Report {
        let summary = self.report.summary();
        debug!(passed = summary.passed, failed = summary.failed, "run finished");
        self.reporter.run_finished(&summary);
        self.report
    }
}

/// Handle given to a `describe` body for declaring cases.
pub struct Group<'s, R: Reporter> {
    suite: &'s mut Suite<R>,
}

impl<'s, R: Reporter> Group<'s, R> {
    /// Runs `action` once and records its outcome.
    pub fn it<F>(&mut self, description: &str, action: F)
    where
        F: FnOnce() -> CaseResult,
    {
        let outcome = if description.trim().is_empty() {
            Outcome::Failed(KataError::structure("it: case description must not be empty"))
        } else {
            match panic::catch_unwind(AssertUnwindSafe(action)) {
                Ok(Ok(())) => Outcome::Passed,
                Ok(Err(err)) => Outcome::Failed(err),
                Err(payload) => Outcome::Failed(KataError::from_panic(payload)),
            }
        };
        debug!(case = description, passed = outcome.is_pass(), "case finished");

        let record = CaseRecord {
            description: description.to_string(),
            outcome,
        };
        self.suite.reporter.case_finished(&record);
        self.suite.report.push_case(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert;
    use crate::output::{ConsoleReporter, NullReporter};
    use termcolor::NoColor;

    #[test]
    fn failing_case_does_not_stop_siblings() {
        let mut suite = Suite::new(NullReporter);
        suite
            .describe("g", |g| {
                g.it("fails", || assert::strict_equal(1, 2));
                g.it("panics", || panic!("boom"));
                g.it("passes", || Ok(()));
                Ok(())
            })
            .unwrap();

        let report = suite.finish();
        let outcomes: Vec<_> = report.cases().map(|c| c.outcome.message()).collect();
        assert_eq!(
            outcomes,
            vec![Some("Expected 2, but got 1"), Some("panicked: boom"), None]
        );
    }

    #[test]
    fn describe_body_errors_propagate() {
        let mut suite = Suite::new(NullReporter);
        let result = suite.describe("wiring", |g| {
            g.it("before", || Ok(()));
            assert::strict_equal("a", "b")?;
            g.it("never declared", || Ok(()));
            Ok(())
        });

        assert_eq!(result.unwrap_err().message(), "Expected b, but got a");
        assert_eq!(suite.report().groups[0].cases.len(), 1);
    }

    #[test]
    fn empty_names_are_structural_errors() {
        let mut suite = Suite::new(NullReporter);
        let err = suite.describe("  ", |_| Ok(())).unwrap_err();
        assert_eq!(err.kind(), crate::errors::ErrorKind::Structure);
        assert!(suite.report().groups.is_empty());

        suite
            .describe("g", |g| {
                g.it("", || Ok(()));
                Ok(())
            })
            .unwrap();
        let case = &suite.report().groups[0].cases[0];
        assert_eq!(
            case.outcome.message(),
            Some("it: case description must not be empty")
        );
    }

    #[test]
    fn console_output_streams_in_declaration_order() {
        let mut console = ConsoleReporter::new(NoColor::new(Vec::new()));
        {
            let mut suite = Suite::new(&mut console);
            suite
                .describe("first", |g| {
                    g.it("one", || Ok(()));
                    g.it("two", || Ok(()));
                    Ok(())
                })
                .unwrap();
            suite
                .describe("second", |g| {
                    g.it("three", || Ok(()));
                    Ok(())
                })
                .unwrap();
        }
        let out = String::from_utf8(console.into_inner().into_inner()).unwrap();
        assert_eq!(
            out,
            "\n--- first ---\n✓ one\n✓ two\n\n--- second ---\n✓ three\n"
        );
    }
}
