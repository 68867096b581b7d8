//! modelgraph engine library.
//!
//! Builds the content-type model graph from raw CMS definitions.
//!
//! ## Structure
//!
//! - `use_cases/` - The type model builder and the operations built on it
//! - `infrastructure/` - Ports plus the snapshot and settings adapters
//! - `output` - Command-line rendering of a built graph
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod output;
pub mod use_cases;

/// Test fixtures shared by the engine's unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
pub use use_cases::type_models::{
    AliasConflict, BuildError, TypeModelBuilder, TypeModelError,
};
