use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer identifier of a content type, as assigned by the CMS.
///
/// Parent references use the same id space; any value that is not positive
/// (`0` or the CMS's `-1` root marker) means "no parent".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentTypeId(i32);

impl ContentTypeId {
    /// The root marker used for types without a parent.
    pub const ROOT: Self = Self(0);

    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Returns true when this id can refer to another type.
    ///
    /// Non-positive ids are root markers.
    pub fn is_type_reference(self) -> bool {
        self.0 > 0
    }
}

impl Default for ContentTypeId {
    fn default() -> Self {
        Self::ROOT
    }
}

impl fmt::Display for ContentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ContentTypeId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<ContentTypeId> for i32 {
    fn from(value: ContentTypeId) -> Self {
        value.0
    }
}
