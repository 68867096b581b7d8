//! Domain entities - input definitions with identity

mod raw_definition;

pub use raw_definition::{RawPropertyDefinition, RawTypeDefinition};
