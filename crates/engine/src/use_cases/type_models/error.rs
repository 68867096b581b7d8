//! Build failures.
//!
//! Every failure aborts the whole build. Only [`BuildError::AliasConflict`] is
//! something a CMS user can fix (by renaming a type); the other variants mean
//! the definitions and the resolver disagree, which is a host bug.

use std::fmt;

use modelgraph_domain::{Alias, ContentTypeId, ItemKind};

use crate::infrastructure::ports::SourceError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// The resolver had no answer for a type or property the definitions declare.
    #[error("Internal error: could not get published {}.", describe_target(.type_alias, .property_alias))]
    ResolverInconsistency {
        type_alias: String,
        property_alias: Option<String>,
    },

    /// A kind or category outside content, media and member.
    #[error("Internal error: unsupported kind \"{kind}\"{}.", describe_owner(.type_alias))]
    UnsupportedKind {
        kind: String,
        type_alias: Option<String>,
    },

    /// A composition id with no model in the same build.
    #[error("Internal error: composition type {composition_id} of type \"{type_alias}\" does not exist.")]
    DanglingComposition {
        type_alias: String,
        composition_id: ContentTypeId,
    },

    /// Two definitions of the same build share an id.
    #[error("Internal error: type id {id} is used by more than one type (\"{type_alias}\").")]
    DuplicateTypeId {
        id: ContentTypeId,
        type_alias: String,
    },

    /// Two or more models share an alias, ignoring case.
    #[error("{0}")]
    AliasConflict(AliasConflict),
}

impl BuildError {
    pub fn unclassified(type_alias: &Alias) -> Self {
        Self::ResolverInconsistency {
            type_alias: type_alias.to_string(),
            property_alias: None,
        }
    }

    pub fn unresolved_property(type_alias: &Alias, property_alias: &Alias) -> Self {
        Self::ResolverInconsistency {
            type_alias: type_alias.to_string(),
            property_alias: Some(property_alias.to_string()),
        }
    }

    pub fn unsupported_kind(kind: impl ToString, type_alias: Option<&Alias>) -> Self {
        Self::UnsupportedKind {
            kind: kind.to_string(),
            type_alias: type_alias.map(ToString::to_string),
        }
    }

    /// True for internal-consistency faults, false for the user-facing alias conflict.
    pub fn is_internal(&self) -> bool {
        !matches!(self, Self::AliasConflict(_))
    }
}

fn describe_target(type_alias: &str, property_alias: &Option<String>) -> String {
    match property_alias {
        Some(property_alias) => format!("property type {}.{}", type_alias, property_alias),
        None => format!("content type {}", type_alias),
    }
}

fn describe_owner(type_alias: &Option<String>) -> String {
    match type_alias {
        Some(type_alias) => format!(" for type \"{}\"", type_alias),
        None => String::new(),
    }
}

/// Models sharing one case-insensitive alias, in build order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasConflict {
    alias: String,
    types: Vec<(ItemKind, Alias)>,
}

impl AliasConflict {
    pub fn new(alias: impl Into<String>, types: Vec<(ItemKind, Alias)>) -> Self {
        Self {
            alias: alias.into(),
            types,
        }
    }

    /// The shared alias, lower-cased.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Kind and alias of every conflicting model.
    pub fn types(&self) -> &[(ItemKind, Alias)] {
        &self.types
    }
}

impl fmt::Display for AliasConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types = self
            .types
            .iter()
            .map(|(kind, alias)| format!("{}:\"{}\"", kind, alias))
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "Alias \"{}\" is used by types {}. Aliases have to be unique. \
             One of the aliases must be modified in order to build models.",
            self.alias, types
        )
    }
}

/// Failure of a type model use case: either fetching definitions or building.
#[derive(Debug, thiserror::Error)]
pub enum TypeModelError {
    #[error("Definition source error: {0}")]
    Source(#[from] SourceError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

impl TypeModelError {
    /// The alias conflict, if that is what failed.
    pub fn alias_conflict(&self) -> Option<&AliasConflict> {
        match self {
            Self::Build(BuildError::AliasConflict(conflict)) => Some(conflict),
            _ => None,
        }
    }
}
