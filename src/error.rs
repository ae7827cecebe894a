use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The single error kind at the crate boundary.
///
/// Compilation has exactly one required precondition: at least one subject.
/// The remaining variants are raised by `AccessRequest::new` when the
/// hostlist breaks its shape invariants.
#[derive(Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValidationError {
    #[error("both users and groups empty")]
    NoSubjects,

    #[error("hostlist must contain at least one host")]
    EmptyHostList,

    #[error("hostlist entry {0} is empty")]
    EmptyHostEntry(usize),
}
