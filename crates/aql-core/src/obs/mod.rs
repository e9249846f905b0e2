//! Observability: the side channel for rejected builder arguments.
//!
//! Builder mutators never fail. A rejected argument becomes a
//! [`DiagnosticEvent`] routed through the active [`DiagnosticSink`]; the
//! default sink logs it with `tracing` at WARN level.

pub(crate) mod event;
pub(crate) mod sink;

// re-exports
pub use event::{DiagnosticEvent, QueryOp, RejectReason};
pub use sink::{DiagnosticSink, TracingSink, with_diagnostic_sink};

pub(crate) use sink::record;
