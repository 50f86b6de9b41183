//! Company name value object

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A validated company name (Value Object)
///
/// Construction enforces the caller-input contract: trimmed, at least two
/// characters. Validation happens before any I/O is performed on behalf of
/// a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyName {
    name: String,
}

impl CompanyName {
    /// Validate and create a company name
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into().trim().to_string();
        if name.chars().count() < 2 {
            return Err(DomainError::InvalidCompanyName);
        }
        Ok(Self { name })
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Consume and return the inner name
    pub fn into_inner(self) -> String {
        self.name
    }
}

impl std::fmt::Display for CompanyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
