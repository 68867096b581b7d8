//! Built type models
//!
//! A [`ContentTypeModel`] is the code-generation view of one raw definition:
//! its identity copied verbatim, its resolved item kind, its properties with
//! resolved value types, and links to its base type and mixins.
//!
//! Links are stored as ids and resolved against the owning
//! [`TypeModelSet`](super::TypeModelSet), never as live references.

use serde::Serialize;

use crate::ids::ContentTypeId;
use crate::types::ItemKind;
use crate::value_objects::{Alias, ModelValueType, Variations};

/// A property of a built type model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyModel {
    alias: Alias,
    name: String,
    description: Option<String>,
    variations: Variations,
    model_value_type: ModelValueType,
}

impl PropertyModel {
    pub fn new(alias: Alias, model_value_type: ModelValueType) -> Self {
        Self {
            name: alias.as_str().to_string(),
            alias,
            description: None,
            variations: Variations::Nothing,
            model_value_type,
        }
    }

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

    pub fn model_value_type(&self) -> &ModelValueType {
        &self.model_value_type
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_variations(mut self, variations: Variations) -> Self {
        self.variations = variations;
        self
    }
}

/// A node of the type model graph.
///
/// # Invariants
///
/// - `is_parent` is true iff `base_type` is set
/// - `mixin_types` never contains the direct parent and holds each id once
/// - `is_mixin` only ever goes from false to true
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentTypeModel {
    // Identity (copied from the raw definition)
    id: ContentTypeId,
    alias: Alias,
    parent_id: ContentTypeId,
    name: String,
    description: Option<String>,
    variations: Variations,

    // Classification
    item_kind: ItemKind,

    // Graph links
    base_type: Option<ContentTypeId>,
    is_parent: bool,
    is_mixin: bool,
    mixin_types: Vec<ContentTypeId>,

    properties: Vec<PropertyModel>,
}

impl ContentTypeModel {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create an unlinked model. Base type and mixins are wired afterwards,
    /// once every model of the build exists.
    pub fn new(
        id: ContentTypeId,
        alias: Alias,
        parent_id: ContentTypeId,
        item_kind: ItemKind,
    ) -> Self {
        Self {
            id,
            name: alias.as_str().to_string(),
            alias,
            parent_id,
            description: None,
            variations: Variations::Nothing,
            item_kind,
            base_type: None,
            is_parent: false,
            is_mixin: false,
            mixin_types: Vec::new(),
            properties: Vec::new(),
        }
    }

    // =========================================================================
    // Identity Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> ContentTypeId {
        self.id
    }

    #[inline]
    pub fn alias(&self) -> &Alias {
        &self.alias
    }

    #[inline]
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

    #[inline]
    pub fn item_kind(&self) -> ItemKind {
        self.item_kind
    }

    // =========================================================================
    // Graph Accessors
    // =========================================================================

    /// Id of the base type, when the parent is itself a model of this build.
    #[inline]
    pub fn base_type(&self) -> Option<ContentTypeId> {
        self.base_type
    }

    /// True when the parent id resolved to a model of the same build.
    #[inline]
    pub fn is_parent(&self) -> bool {
        self.is_parent
    }

    /// True when some type composes this one, directly or through a descendant.
    #[inline]
    pub fn is_mixin(&self) -> bool {
        self.is_mixin
    }

    /// Ids of the types composed into this one, excluding the direct parent.
    pub fn mixin_types(&self) -> &[ContentTypeId] {
        &self.mixin_types
    }

    pub fn properties(&self) -> &[PropertyModel] {
        &self.properties
    }

    /// Find a property by alias (case-insensitive).
    pub fn property(&self, alias: &str) -> Option<&PropertyModel> {
        self.properties.iter().find(|p| p.alias.matches(alias))
    }

    // =========================================================================
    // Builder Methods (for construction)
    // =========================================================================

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_variations(mut self, variations: Variations) -> Self {
        self.variations = variations;
        self
    }

    pub fn with_property(mut self, property: PropertyModel) -> Self {
        self.properties.push(property);
        self
    }

    // =========================================================================
    // Graph wiring (used while a build assembles the set)
    // =========================================================================

    /// Link this model to its base type. `None` leaves it unparented.
    pub fn set_base_type(&mut self, base_type: Option<ContentTypeId>) {
        self.base_type = base_type;
        self.is_parent = base_type.is_some();
    }

    /// Record a composed type. Returns false if it was already recorded or is
    /// the direct parent.
    pub fn add_mixin_type(&mut self, id: ContentTypeId) -> bool {
        if id == self.parent_id || self.mixin_types.contains(&id) {
            return false;
        }
        self.mixin_types.push(id);
        true
    }

    /// Flag this model as taking part in a composition. Returns true if the
    /// flag was newly set.
    pub fn mark_as_mixin(&mut self) -> bool {
        !std::mem::replace(&mut self.is_mixin, true)
    }
}
