//! Type model use cases.
//!
//! Fetch definitions from the [`DefinitionSource`] and build them into a
//! [`TypeModelSet`], either across all collections or one collection at a time.

mod aliases;
mod builder;
mod error;
mod mixins;

use std::sync::Arc;

use modelgraph_domain::{ContentTypeModel, DefinitionCategory, ItemKind, TypeModelSet};

use crate::infrastructure::ports::{DefinitionSource, TypeResolver};

pub use aliases::ensure_distinct_aliases;
pub use builder::TypeModelBuilder;
pub use error::{AliasConflict, BuildError, TypeModelError};

/// Container for type model use cases.
pub struct TypeModelUseCases {
    pub ops: Arc<TypeModelOps>,
}

impl TypeModelUseCases {
    pub fn new(ops: Arc<TypeModelOps>) -> Self {
        Self { ops }
    }
}

/// Type model operations.
pub struct TypeModelOps {
    source: Arc<dyn DefinitionSource>,
    builder: TypeModelBuilder,
}

impl TypeModelOps {
    pub fn new(source: Arc<dyn DefinitionSource>, resolver: Arc<dyn TypeResolver>) -> Self {
        Self {
            source,
            builder: TypeModelBuilder::new(resolver),
        }
    }

    /// Content, media and member types built together, aliases unique across all.
    pub fn all_types(&self) -> Result<TypeModelSet, TypeModelError> {
        let content = self.source.definitions(DefinitionCategory::Content)?;
        let media = self.source.definitions(DefinitionCategory::Media)?;
        let member = self.source.definitions(DefinitionCategory::Member)?;

        self.builder
            .build_all(&content, &media, &member)
            .inspect_err(log_build_failure)
            .map_err(TypeModelError::from)
    }

    pub fn content_types(&self) -> Result<TypeModelSet, TypeModelError> {
        self.types_of(ItemKind::Content)
    }

    pub fn media_types(&self) -> Result<TypeModelSet, TypeModelError> {
        self.types_of(ItemKind::Media)
    }

    pub fn member_types(&self) -> Result<TypeModelSet, TypeModelError> {
        self.types_of(ItemKind::Member)
    }

    /// Types of one collection, built on their own.
    pub fn types_of(&self, kind: ItemKind) -> Result<TypeModelSet, TypeModelError> {
        let Some(category) = kind.category() else {
            return Err(BuildError::unsupported_kind(kind, None).into());
        };
        let definitions = self.source.definitions(category)?;

        self.builder
            .build_one_kind(kind, &definitions)
            .inspect_err(log_build_failure)
            .map_err(TypeModelError::from)
    }

    /// Check an already-built list of models for alias collisions.
    pub fn ensure_distinct_aliases(&self, models: &[ContentTypeModel]) -> Result<(), BuildError> {
        ensure_distinct_aliases(models)
    }
}

fn log_build_failure(err: &BuildError) {
    if err.is_internal() {
        tracing::error!(error = %err, "Type model build failed on inconsistent definitions");
    } else {
        tracing::warn!(error = %err, "Type model build rejected definitions");
    }
}
