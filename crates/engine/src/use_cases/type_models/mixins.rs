//! Mixin discovery and marking.
//!
//! Edges are collected first, against a graph whose base types are already
//! wired; flags are computed afterwards in a single marking pass.

use std::collections::HashSet;

use modelgraph_domain::{ContentTypeId, RawTypeDefinition, TypeModelSet};

use super::error::BuildError;

/// Record every composition edge that is not the definition's direct parent.
///
/// Returns the composed ids, one entry per recorded edge.
pub(super) fn discover_mixins<'a>(
    set: &mut TypeModelSet,
    definitions: impl IntoIterator<Item = &'a RawTypeDefinition>,
) -> Result<Vec<ContentTypeId>, BuildError> {
    let mut composed = Vec::new();

    for definition in definitions {
        if definition.category().item_kind().is_none() {
            return Err(BuildError::unsupported_kind(
                definition.category(),
                Some(definition.alias()),
            ));
        }

        for &composition_id in definition.compositions() {
            if !set.contains(composition_id) {
                return Err(BuildError::DanglingComposition {
                    type_alias: definition.alias().to_string(),
                    composition_id,
                });
            }

            if composition_id == definition.parent_id() {
                continue;
            }

            if let Some(model) = set.get_mut(definition.id()) {
                if model.add_mixin_type(composition_id) {
                    composed.push(composition_id);
                }
            }
        }
    }

    Ok(composed)
}

/// Flag every composed type and each of its ancestors as a mixin.
///
/// A model is visited at most once: once it is marked, its ancestors already
/// are too.
pub(super) fn mark_mixins(set: &mut TypeModelSet, composed: &[ContentTypeId]) {
    let mut marked = HashSet::new();

    for &target in composed {
        let mut next = Some(target);
        while let Some(id) = next {
            if !marked.insert(id) {
                break;
            }
            let Some(model) = set.get_mut(id) else {
                break;
            };
            model.mark_as_mixin();
            next = model.base_type();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{alias, content_type, id};
    use modelgraph_domain::{ContentTypeModel, DefinitionCategory, ItemKind};

    fn linked_set(links: &[(i32, &str, i32)]) -> TypeModelSet {
        let mut set = TypeModelSet::new();
        for &(type_id, type_alias, parent) in links {
            let mut model =
                ContentTypeModel::new(id(type_id), alias(type_alias), id(parent), ItemKind::Content);
            if parent > 0 {
                model.set_base_type(Some(id(parent)));
            }
            set.try_push(model).unwrap();
        }
        set
    }

    #[test]
    fn skips_direct_parent_and_repeats() {
        let mut set = linked_set(&[(1, "base", 0), (2, "seo", 0), (3, "page", 1)]);
        let definitions = vec![content_type(3, "page")
            .with_parent(id(1))
            .with_compositions([id(1), id(2), id(2)])];

        let composed = discover_mixins(&mut set, &definitions).unwrap();

        assert_eq!(composed, vec![id(2)]);
        assert_eq!(set.get(id(3)).unwrap().mixin_types(), &[id(2)]);
    }

    #[test]
    fn unknown_category_is_unsupported() {
        let mut set = linked_set(&[(1, "folder", 0)]);
        let definitions =
            vec![content_type(1, "folder").with_category(DefinitionCategory::Unknown)];

        let err = discover_mixins(&mut set, &definitions).unwrap_err();

        assert_eq!(
            err,
            BuildError::unsupported_kind(DefinitionCategory::Unknown, Some(&alias("folder")))
        );
    }

    #[test]
    fn marking_stops_at_already_marked_ancestors() {
        let mut set = linked_set(&[(1, "root", 0), (2, "a", 1), (3, "b", 1), (4, "other", 0)]);

        mark_mixins(&mut set, &[id(2), id(3), id(2)]);

        let flags: Vec<bool> = set.iter().map(|m| m.is_mixin()).collect();
        assert_eq!(flags, vec![true, true, true, false]);
    }

    #[test]
    fn marking_terminates_on_parent_cycles() {
        let mut set = linked_set(&[(1, "a", 2), (2, "b", 1)]);

        mark_mixins(&mut set, &[id(1)]);

        assert!(set.iter().all(|m| m.is_mixin()));
    }
}
