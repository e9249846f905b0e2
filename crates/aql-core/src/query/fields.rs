use serde_json::Value;

///
/// IntoFields
///
/// Arguments accepted by `DomainQuery::include`.
///
/// Every form lowers to a JSON array that is then checked against the field
/// list schema: a single name becomes a one-element list, lists are taken
/// as-is, and a dynamic `Value` that is not an array is wrapped.
///

pub trait IntoFields {
    fn into_fields(self) -> Value;
}

impl IntoFields for &str {
    fn into_fields(self) -> Value {
        Value::Array(vec![Value::from(self)])
    }
}

impl IntoFields for String {
    fn into_fields(self) -> Value {
        Value::Array(vec![Value::from(self)])
    }
}

impl IntoFields for &String {
    fn into_fields(self) -> Value {
        self.as_str().into_fields()
    }
}

impl<T: Into<String>> IntoFields for Vec<T> {
    fn into_fields(self) -> Value {
        self.into_iter().map(|name| Value::String(name.into())).collect()
    }
}

impl<T: Into<String>, const N: usize> IntoFields for [T; N] {
    fn into_fields(self) -> Value {
        self.into_iter().map(|name| Value::String(name.into())).collect()
    }
}

impl<T: AsRef<str>> IntoFields for &[T] {
    fn into_fields(self) -> Value {
        self.iter()
            .map(|name| Value::from(name.as_ref()))
            .collect()
    }
}

impl IntoFields for Value {
    fn into_fields(self) -> Value {
        match self {
            Self::Array(_) => self,
            other => Self::Array(vec![other]),
        }
    }
}

// Names out of a list that already passed the field schema.
pub(crate) fn field_names(list: Value) -> Vec<String> {
    match list {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(name) => Some(name),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
