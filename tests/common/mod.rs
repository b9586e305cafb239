//! Shared helpers for driving a suite and capturing its transcript.

use kata::output::ConsoleReporter;
use kata::{CaseResult, Report, Suite};
use termcolor::NoColor;

pub type Capture = ConsoleReporter<NoColor<Vec<u8>>>;

/// Runs `body` against a fresh suite and returns the report, the plain-text
/// transcript, and whatever `body` returned.
pub fn run_captured<F>(body: F) -> (Report, String, CaseResult)
where
    F: FnOnce(&mut Suite<&mut Capture>) -> CaseResult,
{
    let mut console = ConsoleReporter::new(NoColor::new(Vec::new()));
    let (report, result) = {
        let mut suite = Suite::new(&mut console);
        let result = body(&mut suite);
        (suite.finish(), result)
    };
    let transcript = String::from_utf8(console.into_inner().into_inner())
        .expect("transcript is valid UTF-8");
    (report, transcript, result)
}
