//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// These cover malformed caller input only. Failures of external sources
/// are represented at the application boundary, not here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Company name must be at least 2 characters.")]
    InvalidCompanyName,

    #[error("At least one company name is required for comparison.")]
    EmptyCompanyList,
}
