//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod type_models;

pub use type_models::TypeModelUseCases;
