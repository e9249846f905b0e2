//! ## Crate layout
//! - `core`: domains, the fluent `DomainQuery` builder, and diagnostics.
//! - `schema`: structural schemas and the validator behind the builder.
//! - `client`: HTTP submission (`client` feature, on by default).
//!
//! Every accessor returns a fresh builder, so state never leaks between
//! call sites:
//!
//! ```ignore
//! let query = aql::items()
//!     .find(Some(json!({ "repo": "libs-release-local" })))
//!     .include(["name", "path"])
//!     .limit(10);
//!
//! let results = client.submit(&query).await?;
//! ```

pub use aql_core as core;
pub use aql_schema as schema;

#[cfg(feature = "client")]
pub use aql_client as client;

use aql_core::{domain::Domain, query::DomainQuery};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Domain accessors
//

/// Fresh builder over `domain`.
#[must_use]
pub fn domain(domain: Domain) -> DomainQuery {
    DomainQuery::new(domain)
}

/// Fresh `items` builder.
#[must_use]
pub fn items() -> DomainQuery {
    domain(Domain::Items)
}

/// Fresh `builds` builder.
#[must_use]
pub fn builds() -> DomainQuery {
    domain(Domain::Builds)
}

/// Fresh `archive.entries` builder.
#[must_use]
pub fn archives() -> DomainQuery {
    domain(Domain::ArchiveEntries)
}

///
/// Prelude
///

pub mod prelude {
    #[cfg(feature = "client")]
    pub use crate::client::{AqlClient, AqlResponse, ClientConfig, ClientError, Transform};
    pub use crate::{
        archives, builds,
        core::{
            domain::Domain,
            query::{DomainQuery, IntoFields, SortSpec},
        },
        domain, items,
    };
    pub use serde_json::{Value, json};
}
