use aql::prelude::*;
use clap::{Args, Parser, Subcommand};
use std::{path::PathBuf, time::Duration};
use thiserror::Error as ThisError;

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(
    name = "aql",
    version,
    about = "Build and submit Artifactory Query Language queries"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print the rendered query string.
    Render(QueryArgs),

    /// Submit the query and print the JSON result.
    Submit {
        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        target: TargetArgs,
    },
}

///
/// QueryArgs
/// Builder calls expressed as flags; applied in builder order.
///

#[derive(Debug, Args)]
pub(crate) struct QueryArgs {
    /// items, builds, archive.entries (or archives)
    pub(crate) domain: Domain,

    /// Criteria object as JSON, e.g. '{"repo":"libs-release-local"}'
    #[arg(long, value_parser = parse_json)]
    pub(crate) find: Option<Value>,

    /// Field to include; repeatable
    #[arg(long, short = 'i')]
    pub(crate) include: Vec<String>,

    /// Sort object as JSON, e.g. '{"$desc":["created"]}'
    #[arg(long, value_parser = parse_json)]
    pub(crate) sort: Option<Value>,

    #[arg(long)]
    pub(crate) limit: Option<u64>,

    #[arg(long)]
    pub(crate) offset: Option<u64>,
}

impl QueryArgs {
    pub(crate) fn build(&self) -> DomainQuery {
        let mut query = domain(self.domain).find(self.find.clone());
        if !self.include.is_empty() {
            query = query.include(self.include.as_slice());
        }
        if let Some(sort) = &self.sort {
            query = query.sort(sort.clone());
        }
        if let Some(limit) = self.limit {
            query = query.limit(limit);
        }
        if let Some(offset) = self.offset {
            query = query.offset(offset);
        }

        query
    }
}

fn parse_json(s: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(s)
}

///
/// TargetArgs
/// Where and how to submit. `--url` overrides the url from `--config`.
///

#[derive(Debug, Args)]
pub(crate) struct TargetArgs {
    /// Full AQL endpoint url
    #[arg(long, env = "AQL_URL")]
    pub(crate) url: Option<String>,

    /// TOML client config file
    #[arg(long, env = "AQL_CONFIG")]
    pub(crate) config: Option<PathBuf>,

    /// HTTP method override
    #[arg(long)]
    pub(crate) method: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub(crate) timeout: Option<u64>,

    /// Print the response body as-is instead of parsing JSON
    #[arg(long)]
    pub(crate) raw: bool,
}

impl TargetArgs {
    pub(crate) fn resolve(&self) -> Result<ClientConfig, CliError> {
        let mut config = match (&self.config, &self.url) {
            (Some(path), _) => ClientConfig::load(path)?,
            (None, Some(url)) => ClientConfig::new(url.clone()),
            (None, None) => return Err(CliError::MissingTarget),
        };

        if let (Some(_), Some(url)) = (&self.config, &self.url) {
            config.url.clone_from(url);
        }
        if let Some(method) = &self.method {
            config = config.with_method(method.clone());
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if self.raw {
            config = config.with_transform(Transform::Text);
        }

        Ok(config)
    }
}

///
/// CliError
///

#[derive(Debug, ThisError)]
pub(crate) enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Config(#[from] aql::client::ConfigError),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no AQL endpoint: pass --url, --config, or set AQL_URL")]
    MissingTarget,

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
