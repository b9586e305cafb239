//! Counters shared by every message created through one log.

use crate::assert;
use crate::config::RunConfig;
use crate::errors::{CaseResult, KataError};
use crate::harness::Suite;
use crate::output::Reporter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub recipient: String,
    pub sender: String,
    pub body: String,
}

/// Tracks how many messages were created and their combined body length.
#[derive(Debug, Default)]
pub struct MessageLog {
    num_messages: usize,
    total_messages_length: usize,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, recipient: &str, sender: &str, body: &str) -> Message {
        self.num_messages += 1;
        self.total_messages_length += body.chars().count();
        Message {
            recipient: recipient.to_string(),
            sender: sender.to_string(),
            body: body.to_string(),
        }
    }

    pub fn num_messages(&self) -> usize {
        self.num_messages
    }

    pub fn total_messages_length(&self) -> usize {
        self.total_messages_length
    }

    /// Mean body length rounded to two decimals; `None` before any message.
    pub fn average_message_length(&self) -> Option<f64> {
        if self.num_messages == 0 {
            return None;
        }
        let average = self.total_messages_length as f64 / self.num_messages as f64;
        Some((average * 100.0).round() / 100.0)
    }
}

pub fn suite<R: Reporter>(suite: &mut Suite<R>, config: &RunConfig) -> CaseResult {
    suite.describe("MessageLog", |g| {
        g.it("counts every created message", || {
            let mut log = MessageLog::new();
            log.create("Ana", "Bo", "Hi");
            log.create("Bo", "Ana", "Hello there");
            assert::strict_equal(log.num_messages(), 2)?;
            assert::strict_equal(log.total_messages_length(), 13)
        });
        g.it("averages body lengths to two decimals", || {
            let mut log = MessageLog::new();
            for body in ["a", "bb", "bb"] {
                log.create("Ana", "Bo", body);
            }
            let average = log
                .average_message_length()
                .ok_or_else(|| KataError::raised("no messages were logged"))?;
            assert::strict_equal(average, 1.67)
        });
        if config.with_submit {
            g.it("has no average before the first message", || {
                assert::strict_equal(MessageLog::new().average_message_length(), None)
            });
            g.it("keeps each message's own fields", || {
                let mut log = MessageLog::new();
                let message = log.create("Ana", "Bo", "ping");
                assert::strict_equal(message.recipient.as_str(), "Ana")?;
                assert::strict_equal(message.sender.as_str(), "Bo")?;
                assert::strict_equal(message.body.as_str(), "ping")
            });
        }
        Ok(())
    })
}
