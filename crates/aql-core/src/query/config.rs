use crate::domain::Domain;
use serde_json::Value;

///
/// QueryConfig
///
/// Accumulated clause state of one `DomainQuery`.
/// Only the builder mutates it; rendering reads it.
///
/// Invariants:
/// - `fields` holds no duplicates and keeps first-seen order
/// - `sort` always matches the sort schema
/// - `limit` and `offset` are non-negative integers
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueryConfig {
    pub(crate) domain: Domain,
    pub(crate) criteria: Option<Value>,
    pub(crate) fields: Vec<String>,
    pub(crate) sort: Option<Value>,
    pub(crate) limit: Option<u64>,
    pub(crate) offset: Option<u64>,
}

impl QueryConfig {
    #[must_use]
    pub const fn new(domain: Domain) -> Self {
        Self {
            domain,
            criteria: None,
            fields: Vec::new(),
            sort: None,
            limit: None,
            offset: None,
        }
    }

    #[must_use]
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    #[must_use]
    pub const fn criteria(&self) -> Option<&Value> {
        self.criteria.as_ref()
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[must_use]
    pub const fn sort(&self) -> Option<&Value> {
        self.sort.as_ref()
    }

    #[must_use]
    pub const fn limit(&self) -> Option<u64> {
        self.limit
    }

    #[must_use]
    pub const fn offset(&self) -> Option<u64> {
        self.offset
    }

    // Append a field unless it is already projected.
    pub(crate) fn push_field(&mut self, name: String) {
        if !self.fields.contains(&name) {
            self.fields.push(name);
        }
    }
}
