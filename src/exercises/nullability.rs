//! Explicitly empty values.

use crate::assert;
use crate::config::RunConfig;
use crate::errors::CaseResult;
use crate::harness::Suite;
use crate::output::Reporter;

/// Delivery counters that have not been loaded yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageCounters {
    pub sent: Option<u32>,
    pub delivered: Option<u32>,
    pub failed: Option<u32>,
}

impl MessageCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all counters, or `None` while any of them is still unknown.
    pub fn total(&self) -> Option<u32> {
        Some(self.sent? + self.delivered? + self.failed?)
    }
}

pub fn suite<R: Reporter>(suite: &mut Suite<R>, config: &RunConfig) -> CaseResult {
    suite.describe("message counters", |g| {
        let counters = MessageCounters::new();
        g.it("starts with sent set to null", || {
            assert::strict_equal(counters.sent, None)
        });
        g.it("starts with delivered set to null", || {
            assert::strict_equal(counters.delivered, None)
        });
        g.it("starts with failed set to null", || {
            assert::strict_equal(counters.failed, None)
        });
        if config.with_submit {
            g.it("has no total until every counter is known", || {
                assert::strict_equal(counters.total(), None)?;
                let partial = MessageCounters {
                    sent: Some(3),
                    ..counters
                };
                assert::strict_equal(partial.total(), None)?;
                let known = MessageCounters {
                    sent: Some(3),
                    delivered: Some(2),
                    failed: Some(1),
                };
                assert::strict_equal(known.total(), Some(6))
            });
        }
        Ok(())
    })
}
