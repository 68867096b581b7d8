//! Item kind and definition category enumerations

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Kind of item a built type model describes.
///
/// `Element` is cross-cutting: a content, media or member type that the
/// published model reports as an element becomes an element model regardless
/// of which collection it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Content,
    Media,
    Member,
    Element,
}

impl ItemKind {
    /// Get the lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Media => "media",
            Self::Member => "member",
            Self::Element => "element",
        }
    }

    /// The definition collection this kind is built from, if any.
    ///
    /// Elements have no collection of their own.
    pub fn category(&self) -> Option<DefinitionCategory> {
        match self {
            Self::Content => Some(DefinitionCategory::Content),
            Self::Media => Some(DefinitionCategory::Media),
            Self::Member => Some(DefinitionCategory::Member),
            Self::Element => None,
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Content => write!(f, "Content"),
            Self::Media => write!(f, "Media"),
            Self::Member => write!(f, "Member"),
            Self::Element => write!(f, "Element"),
        }
    }
}

impl std::str::FromStr for ItemKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "content" => Ok(Self::Content),
            "media" => Ok(Self::Media),
            "member" => Ok(Self::Member),
            "element" => Ok(Self::Element),
            _ => Err(DomainError::parse(format!("Unknown item kind: {}", s))),
        }
    }
}

/// Collection a raw type definition belongs to in the CMS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionCategory {
    Content,
    Media,
    Member,

    /// Unrecognised category (for forward compatibility)
    #[serde(other)]
    Unknown,
}

impl DefinitionCategory {
    /// All categories a build pulls definitions from, in build order.
    pub const BUILDABLE: [DefinitionCategory; 3] = [Self::Content, Self::Media, Self::Member];

    /// The item kind models of this category get unless classified as elements.
    pub fn item_kind(&self) -> Option<ItemKind> {
        match self {
            Self::Content => Some(ItemKind::Content),
            Self::Media => Some(ItemKind::Media),
            Self::Member => Some(ItemKind::Member),
            Self::Unknown => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Media => "media",
            Self::Member => "member",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for DefinitionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_kind_parses_case_insensitively() {
        assert_eq!("Media".parse::<ItemKind>().unwrap(), ItemKind::Media);
        assert_eq!(" element ".parse::<ItemKind>().unwrap(), ItemKind::Element);
        assert!("folder".parse::<ItemKind>().is_err());
    }

    #[test]
    fn element_has_no_category() {
        assert_eq!(ItemKind::Element.category(), None);
        assert_eq!(
            ItemKind::Member.category(),
            Some(DefinitionCategory::Member)
        );
    }

    #[test]
    fn unknown_category_deserializes_from_unrecognised_values() {
        let category: DefinitionCategory = serde_json::from_str("\"folder\"").unwrap();
        assert_eq!(category, DefinitionCategory::Unknown);
        assert_eq!(category.item_kind(), None);

        let category: DefinitionCategory = serde_json::from_str("\"media\"").unwrap();
        assert_eq!(category.item_kind(), Some(ItemKind::Media));
    }
}
