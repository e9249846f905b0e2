//! Core of the AQL builder: domains, the fluent `DomainQuery`, its rendered
//! query string, and the diagnostics side channel used for rejected
//! arguments.
#![warn(unreachable_pub)]

pub mod domain;
pub mod obs;
pub mod query;

// test
#[cfg(test)]
pub(crate) mod test_support;

pub use aql_schema as schema;

///
/// CONSTANTS
///

/// Log target used for every diagnostic emitted by the builder.
pub const LOG_TARGET: &str = "aql";

///
/// Prelude
///
/// Prelude contains only the query vocabulary. Sinks and schema internals
/// stay behind their modules.
///

pub mod prelude {
    pub use crate::{
        domain::Domain,
        query::{DomainQuery, IntoFields, SortSpec},
    };
    pub use serde_json::{Value, json};
}
