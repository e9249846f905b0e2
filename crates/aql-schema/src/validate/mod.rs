
use crate::{schema::Schema, types::Shape};
use serde_json::Value;
use std::fmt;
use thiserror::Error as ThisError;

///
/// is_valid
/// True when `value` structurally matches `schema`.
///

#[must_use]
pub fn is_valid(value: &Value, schema: &Schema) -> bool {
    validate(value, schema).is_ok()
}

///
/// validate
///
/// Walk `value` against `schema` and report the first mismatch with its
/// path. Rules:
/// - shapes must be equal; there is no coercion and `null` never matches
/// - primitives match on kind alone
/// - arrays must be non-empty and every element must match the element schema
/// - every key present in an object must be declared; declared keys are optional
///

pub fn validate(value: &Value, schema: &Schema) -> Result<(), SchemaMismatch> {
    let mut path = Vec::new();

    walk(value, schema, &mut path)
}

fn walk(value: &Value, schema: &Schema, path: &mut Vec<PathSegment>) -> Result<(), SchemaMismatch> {
    let found = Shape::of(value);
    let expected = schema.shape();
    if found != expected {
        return Err(SchemaMismatch::at(
            path,
            MismatchKind::Shape { expected, found },
        ));
    }

    match (value, schema) {
        (Value::Array(items), Schema::Array(element)) => {
            if items.is_empty() {
                return Err(SchemaMismatch::at(path, MismatchKind::EmptyArray));
            }
            for (i, item) in items.iter().enumerate() {
                path.push(PathSegment::Index(i));
                walk(item, element, path)?;
                path.pop();
            }

            Ok(())
        }
        (Value::Object(map), Schema::Object(_)) => {
            for (key, item) in map {
                let Some(entry) = schema.entry(key) else {
                    return Err(SchemaMismatch::at(
                        path,
                        MismatchKind::UnknownKey { key: key.clone() },
                    ));
                };
                path.push(PathSegment::Field(key.clone()));
                walk(item, entry, path)?;
                path.pop();
            }

            Ok(())
        }
        _ if found.is_primitive() => Ok(()),
        _ => Err(SchemaMismatch::at(
            path,
            MismatchKind::Shape { expected, found },
        )),
    }
}

///
/// PathSegment
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

///
/// SchemaPath
/// Location of a mismatch inside the validated value; empty means the root.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SchemaPath(Vec<PathSegment>);

impl SchemaPath {
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }
}

impl fmt::Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }

        for (i, seg) in self.0.iter().enumerate() {
            match seg {
                PathSegment::Field(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }

        Ok(())
    }
}

///
/// SchemaMismatch
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{kind} at {path}")]
pub struct SchemaMismatch {
    pub path: SchemaPath,
    pub kind: MismatchKind,
}

impl SchemaMismatch {
    fn at(path: &[PathSegment], kind: MismatchKind) -> Self {
        Self {
            path: SchemaPath(path.to_vec()),
            kind,
        }
    }
}

///
/// MismatchKind
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum MismatchKind {
    #[error("array must not be empty")]
    EmptyArray,

    #[error("expected {expected}, found {found}")]
    Shape { expected: Shape, found: Shape },

    #[error("unknown key `{key}`")]
    UnknownKey { key: String },
}
