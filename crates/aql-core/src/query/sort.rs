use serde_json::{Map, Value};

///
/// SortSpec
///
/// Typed form of the `{"$asc": [...], "$desc": [...]}` sort argument.
/// Empty directions are left out of the JSON form.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SortSpec {
    asc: Vec<String>,
    desc: Vec<String>,
}

impl SortSpec {
    pub const ASC_KEY: &'static str = "$asc";
    pub const DESC_KEY: &'static str = "$desc";

    #[must_use]
    pub const fn new() -> Self {
        Self {
            asc: Vec::new(),
            desc: Vec::new(),
        }
    }

    /// Append an ascending sort field.
    #[must_use]
    pub fn asc(mut self, field: impl Into<String>) -> Self {
        self.asc.push(field.into());
        self
    }

    /// Append a descending sort field.
    #[must_use]
    pub fn desc(mut self, field: impl Into<String>) -> Self {
        self.desc.push(field.into());
        self
    }
}

impl From<SortSpec> for Value {
    fn from(spec: SortSpec) -> Self {
        let mut map = Map::new();
        if !spec.asc.is_empty() {
            map.insert(SortSpec::ASC_KEY.to_string(), Self::from(spec.asc));
        }
        if !spec.desc.is_empty() {
            map.insert(SortSpec::DESC_KEY.to_string(), Self::from(spec.desc));
        }

        Self::Object(map)
    }
}
