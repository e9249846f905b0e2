mod config;
mod fields;
mod render;
mod sort;

use crate::{
    domain::Domain,
    obs::{self, DiagnosticEvent, QueryOp, RejectReason},
};
use aql_schema::{Schema, validate};
use serde_json::Value;
use std::fmt;

pub use config::QueryConfig;
pub use fields::IntoFields;
pub use sort::SortSpec;

///
/// SCHEMAS
///

/// `include` argument: a non-empty list of field names.
pub static FIELDS_SCHEMA: Schema = Schema::Array(&Schema::TEXT);

/// `sort` argument: optional `$asc` / `$desc` lists of field names.
pub static SORT_SCHEMA: Schema = Schema::Object(&[
    (SortSpec::ASC_KEY, Schema::Array(&Schema::TEXT)),
    (SortSpec::DESC_KEY, Schema::Array(&Schema::TEXT)),
]);

/// `limit` / `offset` argument.
pub static COUNT_SCHEMA: Schema = Schema::NUMBER;

///
/// DomainQuery
///
/// Fluent AQL query builder over one domain.
///
/// Mutators take and return `self`. A rejected argument never interrupts the
/// chain: it is reported through the diagnostics sink and the previous state
/// is kept.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DomainQuery {
    config: QueryConfig,
}

impl DomainQuery {
    #[must_use]
    pub const fn new(domain: Domain) -> Self {
        Self {
            config: QueryConfig::new(domain),
        }
    }

    #[must_use]
    pub const fn domain(&self) -> Domain {
        self.config.domain
    }

    #[must_use]
    pub const fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Set the criteria filter, replacing any previous one.
    ///
    /// Falsy values (`null`, `false`, `0`, `""`) and `None` leave the current
    /// criteria untouched. The criteria object itself is not validated.
    #[must_use]
    pub fn find(mut self, criteria: Option<Value>) -> Self {
        if let Some(criteria) = criteria.filter(is_truthy) {
            self.config.criteria = Some(criteria);
        }

        self
    }

    /// Project one or more fields. Names already projected are skipped.
    #[must_use]
    pub fn include(mut self, fields: impl IntoFields) -> Self {
        let provided = fields.into_fields();

        match validate(&provided, &FIELDS_SCHEMA) {
            Ok(()) => {
                for name in fields::field_names(provided) {
                    self.config.push_field(name);
                }
            }
            Err(mismatch) => self.reject(QueryOp::Include, provided, &FIELDS_SCHEMA, mismatch.into()),
        }

        self
    }

    /// Set the sort spec, replacing any previous one.
    #[must_use]
    pub fn sort(mut self, spec: impl Into<Value>) -> Self {
        let provided = spec.into();

        match validate(&provided, &SORT_SCHEMA) {
            Ok(()) => self.config.sort = Some(provided),
            Err(mismatch) => self.reject(QueryOp::Sort, provided, &SORT_SCHEMA, mismatch.into()),
        }

        self
    }

    /// Bound the number of returned rows.
    #[must_use]
    pub fn limit(mut self, n: impl Into<Value>) -> Self {
        let provided = n.into();

        match count(&provided) {
            Ok(limit) => self.config.limit = Some(limit),
            Err(reason) => self.reject(QueryOp::Limit, provided, &COUNT_SCHEMA, reason),
        }

        self
    }

    /// Skip the first `n` rows. Zero is stored but not rendered.
    #[must_use]
    pub fn offset(mut self, n: impl Into<Value>) -> Self {
        let provided = n.into();

        match count(&provided) {
            Ok(offset) => self.config.offset = Some(offset),
            Err(reason) => self.reject(QueryOp::Offset, provided, &COUNT_SCHEMA, reason),
        }

        self
    }

    /// Render the current configuration as an AQL query string.
    #[must_use]
    pub fn query(&self) -> String {
        self.config.to_string()
    }

    fn reject(&self, op: QueryOp, provided: Value, schema: &'static Schema, reason: RejectReason) {
        obs::record(&DiagnosticEvent::InvalidArgument {
            domain: self.config.domain,
            op,
            provided,
            schema,
            reason,
        });
    }
}

impl fmt::Display for DomainQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.config, f)
    }
}

// Count arguments must be numbers, and among numbers only non-negative
// integers that fit in u64.
fn count(value: &Value) -> Result<u64, RejectReason> {
    validate(value, &COUNT_SCHEMA)?;

    value.as_u64().ok_or(RejectReason::NotCount)
}

// JavaScript truthiness over JSON values.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
