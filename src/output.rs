//! Handles all user-facing output for a run.
//!
//! The harness talks to a [`Reporter`]; the console transcript is produced by
//! [`ConsoleReporter`], which writes to any `termcolor::WriteColor` so tests can
//! capture it with `termcolor::NoColor<Vec<u8>>`.

use std::io;

use difference::{Changeset, Difference};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::errors::KataError;
use crate::report::{CaseRecord, Outcome, Report, Summary};

const PASS_MARKER: &str = "✓";
const FAIL_MARKER: &str = "✗";

/// Receives harness events in execution order.
pub trait Reporter {
    fn group_started(&mut self, name: &str);
    fn case_finished(&mut self, case: &CaseRecord);
    fn run_finished(&mut self, _summary: &Summary) {}
}

impl<T: Reporter + ?Sized> Reporter for &mut T {
    fn group_started(&mut self, name: &str) {
        (**self).group_started(name);
    }

    fn case_finished(&mut self, case: &CaseRecord) {
        (**self).case_finished(case);
    }

    fn run_finished(&mut self, summary: &Summary) {
        (**self).run_finished(summary);
    }
}

/// A reporter that discards everything; the [`Report`] is still built.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn group_started(&mut self, _name: &str) {}
    fn case_finished(&mut self, _case: &CaseRecord) {}
}

/// Writes the console transcript.
pub struct ConsoleReporter<W: WriteColor> {
    out: W,
}

impl<W: WriteColor> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_header(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out)?;
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        write!(self.out, "--- {} ---", name)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    fn write_case(&mut self, case: &CaseRecord) -> io::Result<()> {
        match &case.outcome {
            Outcome::Passed => {
                self.marker(PASS_MARKER, Color::Green)?;
                writeln!(self.out, " {}", case.description)
            }
            Outcome::Failed(err) => {
                self.marker(FAIL_MARKER, Color::Red)?;
                writeln!(self.out, " {}", case.description)?;
                writeln!(self.out, "  Error: {}", err.message())?;
                self.write_diff(err)
            }
        }
    }

    fn marker(&mut self, marker: &str, color: Color) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(self.out, "{}", marker)?;
        self.out.reset()
    }

    // Single-line mismatches are already readable from the error line.
    fn write_diff(&mut self, err: &KataError) -> io::Result<()> {
        let KataError::Assertion {
            expected: Some(expected),
            actual: Some(actual),
            ..
        } = err
        else {
            return Ok(());
        };
        if !expected.contains('\n') && !actual.contains('\n') {
            return Ok(());
        }
        writeln!(self.out, "  Diff:")?;
        let changeset = Changeset::new(expected, actual, "\n");
        for diff in &changeset.diffs {
            match diff {
                Difference::Same(x) => {
                    self.out.reset()?;
                    writeln!(self.out, "    {}", x)?;
                }
                Difference::Rem(x) => {
                    self.out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                    writeln!(self.out, "  - {}", x)?;
                }
                Difference::Add(x) => {
                    self.out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                    writeln!(self.out, "  + {}", x)?;
                }
            }
        }
        self.out.reset()
    }

    fn write_summary(&mut self, summary: &Summary) -> io::Result<()> {
        writeln!(self.out)?;
        let color = if summary.has_failures() {
            Color::Red
        } else {
            Color::Green
        };
        self.out
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(self.out, "{}", summary)?;
        self.out.reset()?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

// Console write failures are not test failures; they are dropped like any
// other broken pipe on stdout.
impl<W: WriteColor> Reporter for ConsoleReporter<W> {
    fn group_started(&mut self, name: &str) {
        let _ = self.write_header(name);
    }

    fn case_finished(&mut self, case: &CaseRecord) {
        let _ = self.write_case(case);
    }

    fn run_finished(&mut self, summary: &Summary) {
        let _ = self.write_summary(summary);
    }
}

/// Replays a finished report through a reporter.
pub fn render_report(report: &Report, reporter: &mut dyn Reporter) {
    for group in &report.groups {
        reporter.group_started(&group.name);
        for case in &group.cases {
            reporter.case_finished(case);
        }
    }
    reporter.run_finished(&report.summary());
}
