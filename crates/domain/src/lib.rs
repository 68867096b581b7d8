pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod types;
pub mod value_objects;

// Re-export built models
pub use aggregates::{Ancestors, ContentTypeModel, PropertyModel, TypeModelSet};

// Re-export raw input definitions
pub use entities::{RawPropertyDefinition, RawTypeDefinition};

pub use error::DomainError;

// Re-export ID types
pub use ids::ContentTypeId;

// Re-export vocabulary types
pub use types::{DefinitionCategory, ItemKind};

// Re-export value objects
pub use value_objects::{Alias, ModelValueType, Variations};
