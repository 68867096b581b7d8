//! Validated alias newtype
//!
//! Aliases are the stable identifiers of types and properties. They are kept
//! exactly as the CMS supplied them and compared case-insensitively.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for aliases
const MAX_ALIAS_LENGTH: usize = 255;

/// A validated type or property alias (non-empty, <=255 chars).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alias(String);

impl Alias {
    /// Create a new validated alias.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The alias is empty or whitespace only
    /// - The alias exceeds 255 characters
    pub fn new(alias: impl Into<String>) -> Result<Self, DomainError> {
        let alias = alias.into();
        if alias.trim().is_empty() {
            return Err(DomainError::validation("Alias cannot be empty"));
        }
        if alias.chars().count() > MAX_ALIAS_LENGTH {
            return Err(DomainError::validation(format!(
                "Alias cannot exceed {} characters",
                MAX_ALIAS_LENGTH
            )));
        }
        Ok(Self(alias))
    }

    /// Returns the alias as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used for case-insensitive grouping.
    pub fn key(&self) -> String {
        self.0.to_lowercase()
    }

    /// Case-insensitive comparison against another alias or plain string.
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Alias {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Alias {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Alias> for String {
    fn from(alias: Alias) -> String {
        alias.0
    }
}

impl AsRef<str> for Alias {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
