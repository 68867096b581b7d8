//! Type model set - the owning collection produced by a build
//!
//! Every model of a build lives here, in input order. Base types and mixins
//! are id handles; the set resolves them on demand, so a handle is only ever
//! meaningful against the set that produced it.

use std::collections::{HashMap, HashSet};

use serde::{Serialize, Serializer};

use super::type_model::ContentTypeModel;
use crate::ids::ContentTypeId;
use crate::types::ItemKind;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeModelSet {
    models: Vec<ContentTypeModel>,
    index: HashMap<ContentTypeId, usize>,
}

impl TypeModelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a model, keeping input order.
    ///
    /// Fails, handing the model back, if a model with the same id is already
    /// in the set.
    pub fn try_push(&mut self, model: ContentTypeModel) -> Result<(), ContentTypeModel> {
        if self.index.contains_key(&model.id()) {
            return Err(model);
        }
        self.index.insert(model.id(), self.models.len());
        self.models.push(model);
        Ok(())
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn contains(&self, id: ContentTypeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn get(&self, id: ContentTypeId) -> Option<&ContentTypeModel> {
        self.index.get(&id).map(|&i| &self.models[i])
    }

    /// Mutable access while a build is wiring the graph.
    pub fn get_mut(&mut self, id: ContentTypeId) -> Option<&mut ContentTypeModel> {
        self.index.get(&id).map(|&i| &mut self.models[i])
    }

    /// Find a model by alias (case-insensitive).
    pub fn by_alias(&self, alias: &str) -> Option<&ContentTypeModel> {
        self.models.iter().find(|m| m.alias().matches(alias))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentTypeModel> {
        self.models.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = ContentTypeId> + '_ {
        self.models.iter().map(|m| m.id())
    }

    pub fn of_kind(&self, kind: ItemKind) -> impl Iterator<Item = &ContentTypeModel> + '_ {
        self.models.iter().filter(move |m| m.item_kind() == kind)
    }

    pub fn as_slice(&self) -> &[ContentTypeModel] {
        &self.models
    }

    pub fn into_models(self) -> Vec<ContentTypeModel> {
        self.models
    }

    // =========================================================================
    // Graph navigation
    // =========================================================================

    /// The model's base type, resolved against this set.
    pub fn base_type(&self, model: &ContentTypeModel) -> Option<&ContentTypeModel> {
        model.base_type().and_then(|id| self.get(id))
    }

    /// The model's mixins, resolved against this set, in declaration order.
    pub fn mixin_types<'a>(
        &'a self,
        model: &'a ContentTypeModel,
    ) -> impl Iterator<Item = &'a ContentTypeModel> + 'a {
        model.mixin_types().iter().filter_map(move |&id| self.get(id))
    }

    /// Models whose base type is `id`.
    pub fn children_of(&self, id: ContentTypeId) -> impl Iterator<Item = &ContentTypeModel> + '_ {
        self.models
            .iter()
            .filter(move |m| m.base_type() == Some(id))
    }

    /// Walk up the base type chain, nearest ancestor first.
    ///
    /// Stops at the first model already visited, so a malformed parent cycle
    /// terminates.
    pub fn ancestors<'a>(&'a self, model: &ContentTypeModel) -> Ancestors<'a> {
        let mut seen = HashSet::new();
        seen.insert(model.id());
        Ancestors {
            set: self,
            next: model.base_type(),
            seen,
        }
    }
}

impl<'a> IntoIterator for &'a TypeModelSet {
    type Item = &'a ContentTypeModel;
    type IntoIter = std::slice::Iter<'a, ContentTypeModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}

impl Serialize for TypeModelSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.models.serialize(serializer)
    }
}

/// Iterator over a model's base type chain. See [`TypeModelSet::ancestors`].
pub struct Ancestors<'a> {
    set: &'a TypeModelSet,
    next: Option<ContentTypeId>,
    seen: HashSet<ContentTypeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a ContentTypeModel;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;
        if !self.seen.insert(id) {
            return None;
        }
        let model = self.set.get(id)?;
        self.next = model.base_type();
        Some(model)
    }
}
