use serde::Deserialize;
use serde_json::Value;

///
/// AqlResponse
///
/// Envelope Artifactory wraps around AQL results. Use it with
/// `AqlClient::submit_as` when the default JSON transform is configured.
///

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AqlResponse<T = Value> {
    pub results: Vec<T>,

    #[serde(default)]
    pub range: ResultRange,
}

impl<T> AqlResponse<T> {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

///
/// ResultRange
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct ResultRange {
    #[serde(default)]
    pub start_pos: u64,

    #[serde(default)]
    pub end_pos: u64,

    #[serde(default)]
    pub total: u64,

    #[serde(default)]
    pub limit: Option<u64>,
}
