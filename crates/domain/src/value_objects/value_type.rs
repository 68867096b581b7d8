use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime value type of a property, as reported by the published model.
///
/// An opaque token meaningful to the code generator downstream (e.g.
/// `"System.String"` or `"IEnumerable<IPublishedContent>"`). The builder never
/// interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelValueType(String);

impl ModelValueType {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ModelValueType {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ModelValueType {
    fn from(value: String) -> Self {
        Self(value)
    }
}
