//! Ports onto the hosting CMS's published model.

use modelgraph_domain::{ItemKind, ModelValueType, RawTypeDefinition};

/// Classification and property resolution supplied by the hosting system.
///
/// Given a raw definition, the published model knows whether the type is an
/// element and which runtime value type each of its properties has. Both
/// answers are expected to exist for every declared type and property; a
/// `None` means the resolver and the raw definitions disagree.
#[cfg_attr(test, mockall::automock)]
pub trait TypeResolver: Send + Sync {
    /// Item kind of the published type.
    fn classify(&self, definition: &RawTypeDefinition) -> Option<ItemKind>;

    /// Runtime value type of a property declared on `definition`.
    fn resolve_property(
        &self,
        definition: &RawTypeDefinition,
        property_alias: &str,
    ) -> Option<ModelValueType>;
}
