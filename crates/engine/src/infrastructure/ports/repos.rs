//! Definition source port.

use modelgraph_domain::{DefinitionCategory, RawTypeDefinition};

use super::error::SourceError;

/// Supplies the raw content, media and member type definitions.
#[cfg_attr(test, mockall::automock)]
pub trait DefinitionSource: Send + Sync {
    /// All definitions of one category, in the order the CMS lists them.
    fn definitions(
        &self,
        category: DefinitionCategory,
    ) -> Result<Vec<RawTypeDefinition>, SourceError>;
}
