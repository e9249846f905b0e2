use crate::types::{Primitive, Shape};
use std::fmt::{self, Write as _};

///
/// Schema
///
/// Literal description of an accepted argument shape.
///
/// Schemas are compile-time constants: nested schemas are borrowed for
/// `'static`, so a whole tree can live in a `static` and be referenced from
/// diagnostics without cloning.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Schema {
    Primitive(Primitive),
    Array(&'static Self),
    Object(&'static [(&'static str, Self)]),
}

impl Schema {
    pub const BOOL: Self = Self::Primitive(Primitive::Bool);
    pub const NUMBER: Self = Self::Primitive(Primitive::Number);
    pub const TEXT: Self = Self::Primitive(Primitive::Text);

    /// Shape a value must have to match this schema at the top level.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Primitive(primitive) => primitive.shape(),
            Self::Array(_) => Shape::Array,
            Self::Object(_) => Shape::Object,
        }
    }

    /// Look up the schema declared for an object key.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&'static Self> {
        match *self {
            Self::Object(entries) => entries
                .iter()
                .find_map(|(name, schema)| (*name == key).then_some(schema)),
            _ => None,
        }
    }
}

// Renders the schema as the JSON-ish literal it describes, e.g.
// `{"$asc":["string"],"$desc":["string"]}`.
impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(Primitive::Text) => f.write_str("\"string\""),
            Self::Primitive(Primitive::Number) => f.write_char('0'),
            Self::Primitive(Primitive::Bool) => f.write_str("true"),
            Self::Array(element) => write!(f, "[{element}]"),
            Self::Object(entries) => {
                f.write_char('{')?;
                for (i, (key, schema)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    let key = serde_json::to_string(key).map_err(|_| fmt::Error)?;
                    write!(f, "{key}:{schema}")?;
                }
                f.write_char('}')
            }
        }
    }
}
