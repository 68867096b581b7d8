//! JSON snapshot of a CMS's type definitions and published model.
//!
//! A snapshot stands in for a live CMS: it carries the raw definitions and
//! enough of the published model (which types are elements, which value type
//! each property has) to serve both ports.
//!
//! ```json
//! {
//!   "types": [
//!     { "id": 1051, "alias": "home", "category": "content",
//!       "properties": [{ "alias": "title" }], "compositions": [1060] }
//!   ],
//!   "element_types": [1070],
//!   "value_types": { "home": { "title": "string" } }
//! }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use modelgraph_domain::{
    ContentTypeId, DefinitionCategory, ItemKind, ModelValueType, RawTypeDefinition,
};

use crate::infrastructure::ports::{DefinitionSource, SourceError, TypeResolver};

#[derive(Debug, Deserialize)]
struct SnapshotDocument {
    #[serde(default)]
    types: Vec<RawTypeDefinition>,
    #[serde(default)]
    element_types: Vec<ContentTypeId>,
    #[serde(default)]
    value_types: HashMap<String, HashMap<String, ModelValueType>>,
}

/// In-memory snapshot serving definitions and published-model answers.
#[derive(Debug, Clone, Default)]
pub struct JsonSnapshot {
    types: Vec<RawTypeDefinition>,
    element_types: HashSet<ContentTypeId>,
    /// Type alias -> property alias -> value type, keys as written
    value_types: HashMap<String, HashMap<String, ModelValueType>>,
}

/// Exact key first, then the first key equal ignoring case.
///
/// Types whose aliases differ only by case keep separate tables, so the alias
/// check reports them instead of one shadowing the other.
fn lookup<'a, V>(map: &'a HashMap<String, V>, key: &str) -> Option<&'a V> {
    map.get(key).or_else(|| {
        let key = key.to_lowercase();
        map.iter()
            .find(|(candidate, _)| candidate.to_lowercase() == key)
            .map(|(_, value)| value)
    })
}

impl JsonSnapshot {
    /// Read and parse a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| SourceError::io(path.display(), e))?;
        let snapshot = Self::from_json_str(&json)?;

        if snapshot.is_empty() {
            tracing::warn!(path = %path.display(), "Snapshot contains no type definitions");
        }
        tracing::info!(
            path = %path.display(),
            types = snapshot.len(),
            elements = snapshot.element_types.len(),
            "Loaded definition snapshot"
        );
        Ok(snapshot)
    }

    pub fn from_json_str(json: &str) -> Result<Self, SourceError> {
        let document: SnapshotDocument =
            serde_json::from_str(json).map_err(SourceError::serialization)?;

        let unrecognised = document
            .types
            .iter()
            .filter(|t| t.category() == DefinitionCategory::Unknown)
            .count();
        if unrecognised > 0 {
            tracing::warn!(
                count = unrecognised,
                "Snapshot contains types of unrecognised category, they will not be built"
            );
        }

        Ok(Self {
            types: document.types,
            element_types: document.element_types.into_iter().collect(),
            value_types: document.value_types,
        })
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl DefinitionSource for JsonSnapshot {
    fn definitions(
        &self,
        category: DefinitionCategory,
    ) -> Result<Vec<RawTypeDefinition>, SourceError> {
        Ok(self
            .types
            .iter()
            .filter(|t| t.category() == category)
            .cloned()
            .collect())
    }
}

impl TypeResolver for JsonSnapshot {
    fn classify(&self, definition: &RawTypeDefinition) -> Option<ItemKind> {
        if self.element_types.contains(&definition.id()) {
            return Some(ItemKind::Element);
        }
        definition.category().item_kind()
    }

    fn resolve_property(
        &self,
        definition: &RawTypeDefinition,
        property_alias: &str,
    ) -> Option<ModelValueType> {
        let properties = lookup(&self.value_types, definition.alias().as_str())?;
        lookup(properties, property_alias).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "types": [
            { "id": 1, "alias": "page", "category": "content",
              "properties": [{ "alias": "pageTitle", "name": "Title" }] },
            { "id": 2, "alias": "heroBlock", "category": "content" },
            { "id": 3, "alias": "image", "category": "media" },
            { "id": 4, "alias": "legacy", "category": "document_blueprint" }
        ],
        "element_types": [2],
        "value_types": { "Page": { "PageTitle": "string" } }
    }"#;

    #[test]
    fn serves_definitions_by_category() {
        let snapshot = JsonSnapshot::from_json_str(SNAPSHOT).unwrap();

        let content = snapshot.definitions(DefinitionCategory::Content).unwrap();
        let aliases: Vec<&str> = content.iter().map(|t| t.alias().as_str()).collect();
        assert_eq!(aliases, vec!["page", "heroBlock"]);

        assert_eq!(
            snapshot.definitions(DefinitionCategory::Media).unwrap().len(),
            1
        );
        assert!(snapshot
            .definitions(DefinitionCategory::Member)
            .unwrap()
            .is_empty());
        assert_eq!(snapshot.len(), 4);
    }

    #[test]
    fn classifies_elements_and_categories() {
        let snapshot = JsonSnapshot::from_json_str(SNAPSHOT).unwrap();
        let content = snapshot.definitions(DefinitionCategory::Content).unwrap();
        let media = snapshot.definitions(DefinitionCategory::Media).unwrap();
        let unknown = snapshot.definitions(DefinitionCategory::Unknown).unwrap();

        assert_eq!(snapshot.classify(&content[0]), Some(ItemKind::Content));
        assert_eq!(snapshot.classify(&content[1]), Some(ItemKind::Element));
        assert_eq!(snapshot.classify(&media[0]), Some(ItemKind::Media));
        assert_eq!(snapshot.classify(&unknown[0]), None);
    }

    #[test]
    fn resolves_value_types_ignoring_case() {
        let snapshot = JsonSnapshot::from_json_str(SNAPSHOT).unwrap();
        let page = &snapshot.definitions(DefinitionCategory::Content).unwrap()[0];

        assert_eq!(
            snapshot.resolve_property(page, "pageTitle"),
            Some(ModelValueType::new("string"))
        );
        assert_eq!(snapshot.resolve_property(page, "missing"), None);
    }

    #[test]
    fn aliases_differing_by_case_keep_their_own_value_types() {
        let snapshot = JsonSnapshot::from_json_str(
            r#"{
                "types": [
                    { "id": 1, "alias": "Foo", "category": "content",
                      "properties": [{ "alias": "a" }] },
                    { "id": 2, "alias": "foo", "category": "media",
                      "properties": [{ "alias": "b" }] }
                ],
                "value_types": { "Foo": { "a": "string" }, "foo": { "b": "int" } }
            }"#,
        )
        .unwrap();
        let upper = &snapshot.definitions(DefinitionCategory::Content).unwrap()[0];
        let lower = &snapshot.definitions(DefinitionCategory::Media).unwrap()[0];

        assert_eq!(
            snapshot.resolve_property(upper, "a"),
            Some(ModelValueType::new("string"))
        );
        assert_eq!(
            snapshot.resolve_property(lower, "b"),
            Some(ModelValueType::new("int"))
        );
        assert_eq!(snapshot.resolve_property(upper, "b"), None);
    }

    #[test]
    fn rejects_malformed_documents() {
        let err = JsonSnapshot::from_json_str(r#"{ "types": [{ "id": 1 }] }"#).unwrap_err();
        assert!(matches!(err, SourceError::Serialization(_)));

        let err = JsonSnapshot::from_json_str(
            r#"{ "types": [{ "id": 1, "alias": "", "category": "content" }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, SourceError::Serialization(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let snapshot = JsonSnapshot::load(file.path()).unwrap();
        assert_eq!(snapshot.len(), 4);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonSnapshot::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }
}
