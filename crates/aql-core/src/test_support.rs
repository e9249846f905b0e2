//! Test-only helpers: a capturing diagnostics sink and a clause splitter
//! that reads a rendered query back into its parts.

use crate::{
    domain::Domain,
    obs::{DiagnosticEvent, DiagnosticSink, with_diagnostic_sink},
};
use serde_json::Value;
use std::{cell::RefCell, rc::Rc};

///
/// CaptureSink
///

#[derive(Debug, Default)]
pub(crate) struct CaptureSink {
    events: RefCell<Vec<DiagnosticEvent>>,
}

impl CaptureSink {
    pub(crate) fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.borrow().clone()
    }
}

impl DiagnosticSink for CaptureSink {
    fn record(&self, event: &DiagnosticEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Run `f` with a fresh capturing sink and return its result and events.
pub(crate) fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<DiagnosticEvent>) {
    let sink = Rc::new(CaptureSink::default());
    let out = with_diagnostic_sink(sink.clone(), f);

    (out, sink.events())
}

///
/// ParsedQuery
///

#[derive(Debug, Default, Eq, PartialEq)]
pub(crate) struct ParsedQuery {
    pub(crate) domain: Option<Domain>,
    pub(crate) criteria: Option<Value>,
    pub(crate) fields: Vec<String>,
    pub(crate) sort: Option<Value>,
    pub(crate) offset: Option<u64>,
    pub(crate) limit: Option<u64>,
}

/// Split a rendered query into its clauses. Panics on malformed input.
pub(crate) fn parse_query(query: &str) -> ParsedQuery {
    let (domain, mut rest) = query.split_once(".find(").expect("find clause");
    let mut parsed = ParsedQuery {
        domain: Some(domain.parse().expect("known domain")),
        ..ParsedQuery::default()
    };

    if let Some(tail) = rest.strip_prefix(')') {
        rest = tail;
    } else {
        let (criteria, tail) = json_value(rest);
        parsed.criteria = Some(criteria);
        rest = tail.strip_prefix(')').expect("closing find paren");
    }

    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix(".include(") {
            let mut tail = tail;
            loop {
                let (field, after) = json_value(tail);
                parsed
                    .fields
                    .push(field.as_str().expect("string field").to_string());
                if let Some(after) = after.strip_prefix(", ") {
                    tail = after;
                } else {
                    tail = after.strip_prefix(')').expect("closing include paren");
                    break;
                }
            }
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix(".sort(") {
            let (sort, after) = json_value(tail);
            parsed.sort = Some(sort);
            rest = after.strip_prefix(')').expect("closing sort paren");
        } else if let Some(tail) = rest.strip_prefix(".offset(") {
            let (n, after) = number(tail);
            parsed.offset = Some(n);
            rest = after;
        } else if let Some(tail) = rest.strip_prefix(".limit(") {
            let (n, after) = number(tail);
            parsed.limit = Some(n);
            rest = after;
        } else {
            panic!("unexpected clause: {rest}");
        }
    }

    parsed
}

// Read one self-delimited JSON value (object, array, string) off the front.
fn json_value(input: &str) -> (Value, &str) {
    let mut stream = serde_json::Deserializer::from_str(input).into_iter::<Value>();
    let value = stream
        .next()
        .expect("json value present")
        .expect("valid json value");
    let end = stream.byte_offset();

    (value, &input[end..])
}

// Read `<digits>)` off the front.
fn number(input: &str) -> (u64, &str) {
    let (digits, rest) = input.split_once(')').expect("closing paren");

    (digits.parse().expect("integer clause"), rest)
}
