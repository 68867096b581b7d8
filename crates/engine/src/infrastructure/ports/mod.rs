//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Raw definitions (could swap a JSON snapshot -> a live CMS connection)
//! - The published model that classifies types and resolves property value types

mod error;
mod external;
mod repos;

pub use error::SourceError;
pub use external::TypeResolver;
pub use repos::DefinitionSource;

#[cfg(test)]
pub use external::MockTypeResolver;
#[cfg(test)]
pub use repos::MockDefinitionSource;
