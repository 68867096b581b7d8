//! # Shared vocabulary types
//!
//! Pure enumerations used by raw definitions, built models and the engine.
//! No I/O, no side effects; everything is serializable.

mod item_kind;
pub use item_kind::{DefinitionCategory, ItemKind};
