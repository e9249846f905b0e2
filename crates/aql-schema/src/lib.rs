//! Structural schemas for AQL builder arguments.
//!
//! A [`Schema`] is a literal description of an accepted argument shape. The
//! validator is closed-world: every present key must be declared, every
//! declared key is optional, and arrays must be non-empty and homogeneous.

pub mod schema;
pub mod types;
pub mod validate;

pub use schema::Schema;
pub use types::{Primitive, Shape};
pub use validate::{MismatchKind, PathSegment, SchemaMismatch, SchemaPath, is_valid, validate};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        schema::Schema,
        types::{Primitive, Shape},
        validate::{is_valid, validate},
    };
}
