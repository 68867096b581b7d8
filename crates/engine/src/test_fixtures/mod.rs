//! Shared fixtures for engine tests.

use std::collections::HashSet;

use modelgraph_domain::{
    Alias, ContentTypeId, DefinitionCategory, ItemKind, ModelValueType, RawTypeDefinition,
};

use crate::infrastructure::ports::TypeResolver;

pub fn id(value: i32) -> ContentTypeId {
    ContentTypeId::new(value)
}

pub fn alias(value: &str) -> Alias {
    Alias::new(value).expect("fixture alias should be valid")
}

pub fn content_type(type_id: i32, type_alias: &str) -> RawTypeDefinition {
    RawTypeDefinition::new(id(type_id), alias(type_alias), DefinitionCategory::Content)
}

pub fn media_type(type_id: i32, type_alias: &str) -> RawTypeDefinition {
    RawTypeDefinition::new(id(type_id), alias(type_alias), DefinitionCategory::Media)
}

pub fn member_type(type_id: i32, type_alias: &str) -> RawTypeDefinition {
    RawTypeDefinition::new(id(type_id), alias(type_alias), DefinitionCategory::Member)
}

/// Deterministic resolver: every property resolves to `"<type>.<property>"`.
///
/// Types listed with `with_elements` classify as elements; properties listed
/// with `without_property` do not resolve.
#[derive(Debug, Default)]
pub struct FixedResolver {
    elements: HashSet<ContentTypeId>,
    missing: HashSet<(String, String)>,
}

impl FixedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements(mut self, ids: impl IntoIterator<Item = ContentTypeId>) -> Self {
        self.elements.extend(ids);
        self
    }

    pub fn without_property(mut self, type_alias: &str, property_alias: &str) -> Self {
        self.missing
            .insert((type_alias.to_string(), property_alias.to_string()));
        self
    }
}

impl TypeResolver for FixedResolver {
    fn classify(&self, definition: &RawTypeDefinition) -> Option<ItemKind> {
        if self.elements.contains(&definition.id()) {
            Some(ItemKind::Element)
        } else {
            Some(ItemKind::Content)
        }
    }

    fn resolve_property(
        &self,
        definition: &RawTypeDefinition,
        property_alias: &str,
    ) -> Option<ModelValueType> {
        let key = (
            definition.alias().to_string(),
            property_alias.to_string(),
        );
        if self.missing.contains(&key) {
            return None;
        }
        Some(ModelValueType::new(format!("{}.{}", key.0, key.1)))
    }
}
