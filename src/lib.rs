pub use crate::errors::{CaseResult, ErrorKind, KataError};
pub use crate::harness::{Group, Suite};
pub use crate::report::{CaseRecord, GroupRecord, Outcome, Report, Summary};

pub mod assert;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exercises;
pub mod harness;
pub mod output;
pub mod report;
pub mod strict;
