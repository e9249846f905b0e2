//! Diagnostics sink boundary.
//!
//! Builder code MUST NOT call `tracing` directly for rejected arguments.
//! All of them flow through `record`, which dispatches to a scoped
//! override when one is installed and to `TracingSink` otherwise.

use crate::{LOG_TARGET, obs::event::DiagnosticEvent};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn DiagnosticSink>>> = RefCell::new(None);
}

///
/// DiagnosticSink
///

pub trait DiagnosticSink {
    fn record(&self, event: &DiagnosticEvent);
}

///
/// TracingSink
/// Default sink: one structured WARN event per rejected argument.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: &DiagnosticEvent) {
        match event {
            DiagnosticEvent::InvalidArgument {
                domain,
                op,
                provided,
                schema,
                reason,
            } => {
                tracing::warn!(
                    target: LOG_TARGET,
                    %domain,
                    %op,
                    %provided,
                    %schema,
                    %reason,
                    "{}",
                    op.message(),
                );
            }
        }
    }
}

pub(crate) fn record(event: &DiagnosticEvent) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match sink {
        Some(sink) => sink.record(event),
        None => TracingSink.record(event),
    }
}

/// Run a closure with a temporary diagnostics sink override.
///
/// The override is thread-local and restored when `f` returns or unwinds,
/// so nested overrides behave like a stack.
pub fn with_diagnostic_sink<T>(sink: Rc<dyn DiagnosticSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn DiagnosticSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::Domain,
        obs::{QueryOp, RejectReason},
        test_support::CaptureSink,
    };
    use aql_schema::Schema;
    use serde_json::json;

    fn event(op: QueryOp) -> DiagnosticEvent {
        DiagnosticEvent::InvalidArgument {
            domain: Domain::Items,
            op,
            provided: json!("5"),
            schema: &Schema::NUMBER,
            reason: RejectReason::NotCount,
        }
    }

    #[test]
    fn override_receives_events_inside_scope_only() {
        let sink = Rc::new(CaptureSink::default());

        with_diagnostic_sink(sink.clone(), || record(&event(QueryOp::Limit)));
        record(&event(QueryOp::Offset));

        assert_eq!(sink.events(), vec![event(QueryOp::Limit)]);
    }

    #[test]
    fn nested_overrides_restore_outer_sink() {
        let outer = Rc::new(CaptureSink::default());
        let inner = Rc::new(CaptureSink::default());

        with_diagnostic_sink(outer.clone(), || {
            with_diagnostic_sink(inner.clone(), || record(&event(QueryOp::Sort)));
            record(&event(QueryOp::Include));
        });

        assert_eq!(inner.events(), vec![event(QueryOp::Sort)]);
        assert_eq!(outer.events(), vec![event(QueryOp::Include)]);
    }

    #[test]
    fn override_is_restored_after_panic() {
        let sink = Rc::new(CaptureSink::default());

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            with_diagnostic_sink(sink.clone(), || panic!("boom"));
        }));
        assert!(result.is_err());

        let after = SINK_OVERRIDE.with(|cell| cell.borrow().is_none());
        assert!(after);
    }
}
