//! HTTP submission for AQL queries.
//!
//! An [`AqlClient`] is initialized once from a [`ClientConfig`] and then only
//! read. It renders a `DomainQuery`, forwards the string as the request body
//! through a [`Transport`], and turns the response body into a value with the
//! configured [`Transform`].

pub mod client;
pub mod config;
pub mod error;
pub mod response;
pub mod transport;

pub use client::AqlClient;
pub use config::{ClientConfig, Transform};
pub use error::{ClientError, ConfigError};
pub use response::{AqlResponse, ResultRange};
pub use transport::{FnTransport, HttpTransport, Transport};

/// Path of the AQL search endpoint below an Artifactory base URL.
pub const AQL_ENDPOINT: &str = "api/search/aql";
