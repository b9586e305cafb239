//! Exercise functions and the suites that check them.
//!
//! Each exercise module exposes its functions plus a `suite` driver. Drivers
//! always run their regular cases; submission cases only run when
//! [`RunConfig::with_submit`] is set.

use tracing::debug;

use crate::config::RunConfig;
use crate::errors::CaseResult;
use crate::harness::Suite;
use crate::output::Reporter;

pub mod contacts;
pub mod loops;
pub mod messages;
pub mod nullability;
pub mod pricing;
pub mod prototypes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exercise {
    Nullability,
    Pricing,
    Contacts,
    Messages,
    Prototypes,
    Loops,
}

impl Exercise {
    /// Every exercise, in lesson order.
    pub const ALL: [Exercise; 6] = [
        Exercise::Nullability,
        Exercise::Pricing,
        Exercise::Contacts,
        Exercise::Messages,
        Exercise::Prototypes,
        Exercise::Loops,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Exercise::Nullability => "nullability",
            Exercise::Pricing => "pricing",
            Exercise::Contacts => "contacts",
            Exercise::Messages => "messages",
            Exercise::Prototypes => "prototypes",
            Exercise::Loops => "loops",
        }
    }

    pub fn run<R: Reporter>(&self, suite: &mut Suite<R>, config: &RunConfig) -> CaseResult {
        match self {
            Exercise::Nullability => nullability::suite(suite, config),
            Exercise::Pricing => pricing::suite(suite, config),
            Exercise::Contacts => contacts::suite(suite, config),
            Exercise::Messages => messages::suite(suite, config),
            Exercise::Prototypes => prototypes::suite(suite, config),
            Exercise::Loops => loops::suite(suite, config),
        }
    }
}

/// Runs every exercise the config selects, stopping at the first wiring error.
pub fn run_selected<R: Reporter>(suite: &mut Suite<R>, config: &RunConfig) -> CaseResult {
    for exercise in Exercise::ALL.iter().filter(|e| config.selects(e.name())) {
        debug!(exercise = exercise.name(), submit = config.with_submit, "running exercise");
        exercise.run(suite, config)?;
    }
    Ok(())
}
