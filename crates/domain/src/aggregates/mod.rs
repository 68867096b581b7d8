//! Aggregate roots - domain objects that own their related data
//!
//! [`TypeModelSet`] owns every [`ContentTypeModel`] of a build. Models refer
//! to each other by id only; the set is the single place those ids resolve.
//!
//! # Rustic DDD Principles
//!
//! | Pattern | Rustic Equivalent |
//! |---------|-------------------|
//! | Object graph with back-references | Ids resolved against an owning set |
//! | Aggregate root guards | Ownership (borrow checker enforces) |
//! | Factory pattern | `::new()` + builder pattern |

pub mod type_model;
pub mod type_model_set;

pub use type_model::{ContentTypeModel, PropertyModel};
pub use type_model_set::{Ancestors, TypeModelSet};
