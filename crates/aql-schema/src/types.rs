use derive_more::Display;
use serde_json::Value;

///
/// Primitive
/// Leaf kinds a schema can declare. The schema only fixes the kind, never
/// the value.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Primitive {
    #[display("bool")]
    Bool,
    #[display("number")]
    Number,
    #[display("string")]
    Text,
}

impl Primitive {
    /// Runtime shape a value must have to satisfy this primitive.
    #[must_use]
    pub const fn shape(self) -> Shape {
        match self {
            Self::Bool => Shape::Bool,
            Self::Number => Shape::Number,
            Self::Text => Shape::String,
        }
    }
}

///
/// Shape
///
/// Runtime tag of a JSON value. Arrays are told apart from generic objects;
/// `null` has its own tag so it never matches a declared schema.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Shape {
    #[display("null")]
    Null,
    #[display("bool")]
    Bool,
    #[display("number")]
    Number,
    #[display("string")]
    String,
    #[display("array")]
    Array,
    #[display("object")]
    Object,
}

impl Shape {
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// True for the leaf shapes a [`Primitive`] can describe.
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        matches!(self, Self::Bool | Self::Number | Self::String)
    }
}
