use crate::{
    AQL_ENDPOINT,
    error::{BoxError, ClientError, ConfigError},
};
use reqwest::{Method, Url};
use serde::Deserialize;
use serde_json::Value;
use std::{collections::BTreeMap, fmt, path::Path, sync::Arc, time::Duration};

pub const DEFAULT_METHOD: &str = "POST";
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

///
/// ClientConfig
///
/// Transport configuration, supplied once when the client is built.
///
/// ```toml
/// url = "https://repo.example.com/artifactory/api/search/aql"
/// method = "POST"
/// transform = "json"
/// timeout_ms = 30000
///
/// [headers]
/// X-JFrog-Art-Api = "..."
/// ```
///

#[derive(Clone, Debug, Deserialize)]
pub struct ClientConfig {
    pub url: String,

    #[serde(default = "default_method")]
    pub method: String,

    #[serde(default)]
    pub transform: Transform,

    #[serde(default = "default_content_type")]
    pub content_type: String,

    #[serde(default)]
    pub timeout_ms: Option<u64>,

    #[serde(default)]
    pub user_agent: Option<String>,

    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

fn default_method() -> String {
    DEFAULT_METHOD.to_string()
}

fn default_content_type() -> String {
    DEFAULT_CONTENT_TYPE.to_string()
}

impl ClientConfig {
    /// Config for a full AQL endpoint url, everything else defaulted.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: default_method(),
            transform: Transform::default(),
            content_type: default_content_type(),
            timeout_ms: None,
            user_agent: None,
            headers: BTreeMap::new(),
        }
    }

    /// Config for an Artifactory base url; the AQL endpoint path is appended.
    #[must_use]
    pub fn for_artifactory(base: &str) -> Self {
        Self::new(format!("{}/{AQL_ENDPOINT}", base.trim_end_matches('/')))
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&text)
    }

    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Request timeout, kept at millisecond precision.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Parse the configured method; names are case-insensitive.
    pub fn parsed_method(&self) -> Result<Method, ConfigError> {
        Method::from_bytes(self.method.to_ascii_uppercase().as_bytes()).map_err(|_| {
            ConfigError::InvalidMethod {
                method: self.method.clone(),
            }
        })
    }

    pub fn parsed_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.url).map_err(|err| ConfigError::InvalidUrl {
            url: self.url.clone(),
            reason: err.to_string(),
        })
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Signature of a code-supplied response transform.
pub type TransformFn = dyn Fn(String) -> Result<Value, BoxError> + Send + Sync;

///
/// Transform
///
/// Turns a successful response body into the submission result.
/// `Json` is the default; `Custom` can only be set in code.
///

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    #[default]
    Json,
    Text,
    #[serde(skip)]
    Custom(Arc<TransformFn>),
}

impl Transform {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(String) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    pub fn apply(&self, body: String) -> Result<Value, ClientError> {
        match self {
            Self::Json => Ok(serde_json::from_str(&body)?),
            Self::Text => Ok(Value::String(body)),
            Self::Custom(f) => f(body).map_err(ClientError::Transform),
        }
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("Json"),
            Self::Text => f.write_str("Text"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
