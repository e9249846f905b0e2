//! Request execution.
//!
//! A transport takes the rendered query as the request body and returns the
//! raw response body. It owns every network concern (method, headers,
//! timeouts); the client never retries or interprets failures.

use crate::{
    config::ClientConfig,
    error::{ClientError, ConfigError},
};
use async_trait::async_trait;
use reqwest::{
    Method, Url,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use std::future::Future;
use tracing::debug;

///
/// Transport
///

#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, body: String) -> Result<String, ClientError>;
}

///
/// HttpTransport
/// `reqwest`-backed transport sending the query as a plain-text body.
///

#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: Url,
    method: Method,
}

impl HttpTransport {
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let url = config.parsed_url()?;
        let method = config.parsed_method()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, header_value(CONTENT_TYPE.as_str(), &config.content_type)?);
        for (name, value) in &config.headers {
            let key = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ConfigError::InvalidHeader { name: name.clone() })?;
            headers.insert(key, header_value(name, value)?);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout() {
            if timeout.is_zero() {
                return Err(ConfigError::ZeroTimeout.into());
            }
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        Ok(Self {
            client: builder.build()?,
            url,
            method,
        })
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|_| ConfigError::InvalidHeader {
        name: name.to_string(),
    })
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, body: String) -> Result<String, ClientError> {
        debug!(method = %self.method, url = %self.url, "sending AQL query");

        let response = self
            .client
            .request(self.method.clone(), self.url.clone())
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status { status, body: text });
        }

        debug!(%status, bytes = text.len(), "AQL response received");

        Ok(text)
    }
}

///
/// FnTransport
/// Adapts an async closure into a transport, for tests and custom stacks.
///

pub struct FnTransport<F> {
    f: F,
}

impl<F> FnTransport<F> {
    pub const fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F, Fut> Transport for FnTransport<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<String, ClientError>> + Send + 'static,
{
    async fn execute(&self, body: String) -> Result<String, ClientError> {
        (self.f)(body).await
    }
}
