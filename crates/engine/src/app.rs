//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{DefinitionSource, TypeResolver};
use crate::infrastructure::snapshot::JsonSnapshot;
use crate::use_cases;

/// Main application state.
///
/// Holds the use cases built on the injected ports.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub type_models: use_cases::TypeModelUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(source: Arc<dyn DefinitionSource>, resolver: Arc<dyn TypeResolver>) -> Self {
        let type_models = use_cases::TypeModelUseCases::new(Arc::new(
            use_cases::type_models::TypeModelOps::new(source, resolver),
        ));

        Self {
            use_cases: UseCases { type_models },
        }
    }

    /// Create an App whose definitions and published model both come from one snapshot.
    pub fn from_snapshot(snapshot: JsonSnapshot) -> Self {
        let snapshot = Arc::new(snapshot);
        Self::new(snapshot.clone(), snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelgraph_domain::{Alias, ItemKind};

    const SNAPSHOT: &str = r#"{
        "types": [
            { "id": 1, "alias": "base", "category": "content" },
            { "id": 2, "alias": "seo", "category": "content",
              "properties": [{ "alias": "metaTitle" }] },
            { "id": 3, "alias": "article", "category": "content", "parent_id": 1,
              "compositions": [1, 2] },
            { "id": 4, "alias": "quote", "category": "content" },
            { "id": 10, "alias": "image", "category": "media" },
            { "id": 20, "alias": "customer", "category": "member" }
        ],
        "element_types": [4],
        "value_types": { "seo": { "metaTitle": "string" } }
    }"#;

    fn app() -> App {
        App::from_snapshot(JsonSnapshot::from_json_str(SNAPSHOT).unwrap())
    }

    #[test]
    fn builds_the_whole_graph_from_a_snapshot() {
        let set = app().use_cases.type_models.ops.all_types().unwrap();

        assert_eq!(set.len(), 6);

        let article = set.by_alias("article").unwrap();
        assert_eq!(set.base_type(article).unwrap().alias().as_str(), "base");
        let mixins: Vec<&str> = set
            .mixin_types(article)
            .map(|m| m.alias().as_str())
            .collect();
        assert_eq!(mixins, vec!["seo"]);

        let seo = set.by_alias("seo").unwrap();
        assert!(seo.is_mixin());
        assert_eq!(
            seo.property("metaTitle").unwrap().model_value_type().as_str(),
            "string"
        );

        assert!(!set.by_alias("base").unwrap().is_mixin());
        assert_eq!(set.by_alias("quote").unwrap().item_kind(), ItemKind::Element);
        assert_eq!(set.of_kind(ItemKind::Media).count(), 1);
    }

    #[test]
    fn builds_a_single_collection_from_a_snapshot() {
        let app = app();
        let members = app.use_cases.type_models.ops.member_types().unwrap();

        assert_eq!(members.len(), 1);
        assert_eq!(members.iter().next().unwrap().alias().as_str(), "customer");
    }

    #[test]
    fn aliases_differing_by_case_are_an_alias_conflict() {
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
        let app = App::from_snapshot(snapshot);

        let err = app.use_cases.type_models.ops.all_types().unwrap_err();

        let conflict = err.alias_conflict().expect("alias conflict");
        assert_eq!(conflict.alias(), "foo");
        assert_eq!(
            conflict.types(),
            &[
                (ItemKind::Content, Alias::new("Foo").unwrap()),
                (ItemKind::Media, Alias::new("foo").unwrap()),
            ]
        );
    }
}
