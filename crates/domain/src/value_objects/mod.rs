//! Value objects - Immutable objects defined by their attributes

mod alias;
mod value_type;
mod variations;

pub use alias::Alias;
pub use value_type::ModelValueType;
pub use variations::Variations;
