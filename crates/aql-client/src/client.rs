#[cfg(test)]
mod tests;

use crate::{
    config::ClientConfig,
    error::ClientError,
    transport::{HttpTransport, Transport},
};
use aql_core::query::DomainQuery;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{any::Any, fmt, sync::Arc};
use tracing::debug;

///
/// AqlClient
///
/// Submission entry point. Built once from a config; cloning shares the
/// underlying transport.
///

#[derive(Clone)]
pub struct AqlClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl AqlClient {
    /// Build a client with the default HTTP transport.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::from_config(&config)?;

        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Build a client over a caller-supplied transport.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Render `query`, send it, and transform the response body.
    pub async fn submit(&self, query: &DomainQuery) -> Result<Value, ClientError> {
        let body = query.query();
        debug!(domain = %query.domain(), query = %body, "submitting AQL query");

        let raw = self.transport.execute(body).await?;

        self.config.transform.apply(raw)
    }

    /// Submit and deserialize the transformed result into `T`.
    pub async fn submit_as<T: DeserializeOwned>(&self, query: &DomainQuery) -> Result<T, ClientError> {
        let value = self.submit(query).await?;

        Ok(serde_json::from_value(value)?)
    }

    /// Submit a dynamically-typed argument.
    ///
    /// A `DomainQuery`, a `&'static DomainQuery`, or one behind a `Box` or
    /// `Arc` is accepted. Any other input fails with
    /// [`ClientError::InvalidQuery`] before the transport is touched.
    pub async fn submit_any(&self, input: &(dyn Any + Send + Sync)) -> Result<Value, ClientError> {
        let query = as_domain_query(input).ok_or(ClientError::InvalidQuery)?;

        self.submit(query).await
    }
}

fn as_domain_query(input: &(dyn Any + Send + Sync)) -> Option<&DomainQuery> {
    if let Some(query) = input.downcast_ref::<DomainQuery>() {
        return Some(query);
    }
    if let Some(query) = input.downcast_ref::<&'static DomainQuery>() {
        return Some(*query);
    }
    if let Some(query) = input.downcast_ref::<Box<DomainQuery>>() {
        return Some(&**query);
    }

    input
        .downcast_ref::<Arc<DomainQuery>>()
        .map(|query| &**query)
}

impl fmt::Debug for AqlClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AqlClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
