use crate::domain::Domain;
use aql_schema::{Schema, SchemaMismatch};
use derive_more::Display;
use serde_json::Value;
use thiserror::Error as ThisError;

///
/// QueryOp
/// Builder operation that validated an argument.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum QueryOp {
    #[display("include")]
    Include,
    #[display("sort")]
    Sort,
    #[display("limit")]
    Limit,
    #[display("offset")]
    Offset,
}

impl QueryOp {
    /// Human-facing summary used as the warning message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Include => "Field configuration is not valid",
            Self::Sort => "Sort configuration is not valid",
            Self::Limit => "Limit configuration is not valid",
            Self::Offset => "Offset configuration is not valid",
        }
    }
}

///
/// RejectReason
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum RejectReason {
    #[error("expected a non-negative integer")]
    NotCount,

    #[error(transparent)]
    Schema(#[from] SchemaMismatch),
}

///
/// DiagnosticEvent
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DiagnosticEvent {
    /// A mutator argument failed validation; the builder state is unchanged.
    InvalidArgument {
        domain: Domain,
        op: QueryOp,
        provided: Value,
        schema: &'static Schema,
        reason: RejectReason,
    },
}

impl DiagnosticEvent {
    #[must_use]
    pub const fn op(&self) -> QueryOp {
        match self {
            Self::InvalidArgument { op, .. } => *op,
        }
    }

    #[must_use]
    pub const fn provided(&self) -> &Value {
        match self {
            Self::InvalidArgument { provided, .. } => provided,
        }
    }
}
