//! Structured record of a run.
//!
//! The harness appends to a [`Report`] as groups and cases execute; reporters
//! consume it. Insertion order is report order.

use crate::errors::KataError;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Passed,
    Failed(KataError),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    /// The failure message, if the case failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Passed => None,
            Outcome::Failed(err) => Some(err.message()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseRecord {
    pub description: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupRecord {
    pub name: String,
    pub cases: Vec<CaseRecord>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub groups: Vec<GroupRecord>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn open_group(&mut self, name: &str) {
        self.groups.push(GroupRecord {
            name: name.to_string(),
            cases: Vec::new(),
        });
    }

    /// Appends a case to the most recently opened group.
    pub(crate) fn push_case(&mut self, record: CaseRecord) {
        if let Some(group) = self.groups.last_mut() {
            group.cases.push(record);
        }
    }

    pub fn cases(&self) -> impl Iterator<Item = &CaseRecord> {
        self.groups.iter().flat_map(|g| g.cases.iter())
    }

    pub fn summary(&self) -> Summary {
        self.cases().fold(Summary::default(), |mut acc, case| {
            if case.outcome.is_pass() {
                acc.passed += 1;
            } else {
                acc.failed += 1;
            }
            acc
        })
    }
}

/// Pass/fail counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn total_tests(&self) -> usize {
        self.passed + self.failed
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} passed, {} failed", self.passed, self.failed)
    }
}
