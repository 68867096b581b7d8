//! Raw content-type definitions as supplied by the CMS.
//!
//! These are read-only input to the model builder. They mirror what the
//! hosting system stores for a content, media or member type: identity,
//! parent, ordered properties and the ids of the types it is composed of.

use serde::{Deserialize, Serialize};

use crate::ids::ContentTypeId;
use crate::types::DefinitionCategory;
use crate::value_objects::{Alias, Variations};

/// A property declared directly on a raw type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPropertyDefinition {
    alias: Alias,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    variations: Variations,
}

impl RawPropertyDefinition {
    pub fn new(alias: Alias) -> Self {
        Self {
            name: alias.as_str().to_string(),
            alias,
            description: None,
            variations: Variations::Nothing,
        }
    }

    // Read accessors
    pub fn alias(&self) -> &Alias {
        &self.alias
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn variations(&self) -> Variations {
        self.variations
    }

    // Builder methods
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_variations(mut self, variations: Variations) -> Self {
        self.variations = variations;
        self
    }
}

/// A composition-capable type definition (content, media or member type).
///
/// # Invariants
///
/// - `id` is unique among all definitions handed to one build
/// - `compositions` lists every type this one is composed of, which in the
///   CMS includes its direct parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTypeDefinition {
    id: ContentTypeId,
    alias: Alias,
    #[serde(default)]
    parent_id: ContentTypeId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    variations: Variations,
    category: DefinitionCategory,
    #[serde(default)]
    properties: Vec<RawPropertyDefinition>,
    #[serde(default)]
    compositions: Vec<ContentTypeId>,
}

impl RawTypeDefinition {
    /// Create a root definition with no properties and no compositions.
    ///
    /// The display name defaults to the alias.
    pub fn new(id: ContentTypeId, alias: Alias, category: DefinitionCategory) -> Self {
        Self {
            id,
            name: alias.as_str().to_string(),
            alias,
            parent_id: ContentTypeId::ROOT,
            description: None,
            variations: Variations::Nothing,
            category,
            properties: Vec::new(),
            compositions: Vec::new(),
        }
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    pub fn id(&self) -> ContentTypeId {
        self.id
    }

    pub fn alias(&self) -> &Alias {
        &self.alias
    }

    pub fn parent_id(&self) -> ContentTypeId {
        self.parent_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn variations(&self) -> Variations {
        self.variations
    }

    pub fn category(&self) -> DefinitionCategory {
        self.category
    }

    pub fn properties(&self) -> &[RawPropertyDefinition] {
        &self.properties
    }

    /// Ids of the types this definition is composed of, in declaration order.
    pub fn compositions(&self) -> &[ContentTypeId] {
        &self.compositions
    }

    /// Find a declared property by alias (case-insensitive).
    pub fn property(&self, alias: &str) -> Option<&RawPropertyDefinition> {
        self.properties.iter().find(|p| p.alias.matches(alias))
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    pub fn with_parent(mut self, parent_id: ContentTypeId) -> Self {
        self.parent_id = parent_id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_variations(mut self, variations: Variations) -> Self {
        self.variations = variations;
        self
    }

    pub fn with_category(mut self, category: DefinitionCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_property(mut self, property: RawPropertyDefinition) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_composition(mut self, id: ContentTypeId) -> Self {
        self.compositions.push(id);
        self
    }

    pub fn with_compositions(mut self, ids: impl IntoIterator<Item = ContentTypeId>) -> Self {
        self.compositions.extend(ids);
        self
    }
}
