//! Type model builder - turns raw definitions into a validated model graph.
//!
//! A build runs four passes over one snapshot of definitions:
//!
//! 1. convert every definition to a [`ContentTypeModel`], asking the resolver
//!    for the item kind and each property's value type
//! 2. link every model to its base type
//! 3. record mixin edges, then flag composed types and their ancestors
//! 4. reject aliases that collide case-insensitively
//!
//! Any failure aborts the build; there is no partial result.

use std::sync::Arc;

use modelgraph_domain::{
    ContentTypeId, ContentTypeModel, ItemKind, PropertyModel, RawTypeDefinition, TypeModelSet,
};

use super::aliases::ensure_distinct_aliases;
use super::error::BuildError;
use super::mixins::{discover_mixins, mark_mixins};
use crate::infrastructure::ports::TypeResolver;

/// Definitions of one collection, tagged with the kind they build into.
type Batch<'a> = (ItemKind, &'a [RawTypeDefinition]);

/// Builds [`TypeModelSet`]s from raw definitions.
///
/// Stateless apart from the injected resolver; every call builds a fresh set
/// and calls may run concurrently.
pub struct TypeModelBuilder {
    resolver: Arc<dyn TypeResolver>,
}

impl TypeModelBuilder {
    pub fn new(resolver: Arc<dyn TypeResolver>) -> Self {
        Self { resolver }
    }

    /// Build content, media and member types together.
    ///
    /// Base types, mixins and alias uniqueness are resolved across all three
    /// collections.
    pub fn build_all(
        &self,
        content: &[RawTypeDefinition],
        media: &[RawTypeDefinition],
        member: &[RawTypeDefinition],
    ) -> Result<TypeModelSet, BuildError> {
        self.build(&[
            (ItemKind::Content, content),
            (ItemKind::Media, media),
            (ItemKind::Member, member),
        ])
    }

    /// Build the types of a single collection.
    ///
    /// Wiring and alias checks only see `definitions`. `kind` must be
    /// content, media or member.
    pub fn build_one_kind(
        &self,
        kind: ItemKind,
        definitions: &[RawTypeDefinition],
    ) -> Result<TypeModelSet, BuildError> {
        if kind.category().is_none() {
            return Err(BuildError::unsupported_kind(kind, None));
        }
        self.build(&[(kind, definitions)])
    }

    fn build(&self, batches: &[Batch<'_>]) -> Result<TypeModelSet, BuildError> {
        let mut set = TypeModelSet::new();
        for &(kind, definitions) in batches {
            tracing::debug!(kind = %kind, count = definitions.len(), "Converting type definitions");
            for definition in definitions {
                let model = self.convert(kind, definition)?;
                set.try_push(model).map_err(|rejected| BuildError::DuplicateTypeId {
                    id: rejected.id(),
                    type_alias: rejected.alias().to_string(),
                })?;
            }
        }

        wire_base_types(&mut set);

        let definitions = batches.iter().flat_map(|&(_, definitions)| definitions);
        let composed = discover_mixins(&mut set, definitions)?;
        mark_mixins(&mut set, &composed);

        ensure_distinct_aliases(set.as_slice())?;

        tracing::debug!(
            types = set.len(),
            mixin_edges = composed.len(),
            "Built type model graph"
        );
        Ok(set)
    }

    /// Step 1: one model per definition, properties resolved.
    fn convert(
        &self,
        kind: ItemKind,
        definition: &RawTypeDefinition,
    ) -> Result<ContentTypeModel, BuildError> {
        let item_kind = match self.resolver.classify(definition) {
            Some(ItemKind::Element) => ItemKind::Element,
            Some(_) => kind,
            None => return Err(BuildError::unclassified(definition.alias())),
        };

        let mut model = ContentTypeModel::new(
            definition.id(),
            definition.alias().clone(),
            definition.parent_id(),
            item_kind,
        )
        .with_name(definition.name())
        .with_description(definition.description().map(str::to_string))
        .with_variations(definition.variations());

        for property in definition.properties() {
            let value_type = self
                .resolver
                .resolve_property(definition, property.alias().as_str())
                .ok_or_else(|| {
                    BuildError::unresolved_property(definition.alias(), property.alias())
                })?;

            model = model.with_property(
                PropertyModel::new(property.alias().clone(), value_type)
                    .with_name(property.name())
                    .with_description(property.description().map(str::to_string))
                    .with_variations(property.variations()),
            );
        }

        Ok(model)
    }
}

/// Step 2: link models to parents that are models of the same build.
///
/// A positive parent id with no matching model is a container folder and
/// leaves the model unparented.
fn wire_base_types(set: &mut TypeModelSet) {
    let links: Vec<(ContentTypeId, Option<ContentTypeId>)> = set
        .iter()
        .filter(|model| model.parent_id().is_type_reference())
        .map(|model| {
            let parent_id = model.parent_id();
            (model.id(), set.contains(parent_id).then_some(parent_id))
        })
        .collect();

    for (id, base_type) in links {
        if base_type.is_none() {
            tracing::debug!(type_id = %id, "Parent is not a type, treating as container");
        }
        if let Some(model) = set.get_mut(id) {
            model.set_base_type(base_type);
        }
    }
}
