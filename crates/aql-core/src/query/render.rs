//! Rendering of a `QueryConfig` into the AQL query string.
//!
//! Grammar, clauses in fixed order:
//! `<domain>.find(<criteria>)[.include(..)][.sort(..)][.offset(n)][.limit(n)]`
//!
//! Invariants:
//! - clause order never depends on the order the builder was called in
//! - JSON literals are compact and keep input key order
//! - `offset` is emitted only when > 0; `limit` whenever it is set

use crate::query::config::QueryConfig;
use std::fmt::{self, Write as _};

impl fmt::Display for QueryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.find(", self.domain)?;
        if let Some(criteria) = &self.criteria {
            write!(f, "{criteria}")?;
        }
        f.write_char(')')?;

        if !self.fields.is_empty() {
            f.write_str(".include(")?;
            for (i, field) in self.fields.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                let literal = serde_json::to_string(field).map_err(|_| fmt::Error)?;
                f.write_str(&literal)?;
            }
            f.write_char(')')?;
        }

        if let Some(sort) = &self.sort {
            write!(f, ".sort({sort})")?;
        }

        if let Some(offset) = self.offset.filter(|offset| *offset > 0) {
            write!(f, ".offset({offset})")?;
        }

        if let Some(limit) = self.limit {
            write!(f, ".limit({limit})")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{domain::Domain, query::config::QueryConfig};
    use serde_json::json;

    #[test]
    fn bare_config_renders_empty_find() {
        let config = QueryConfig::new(Domain::ArchiveEntries);

        assert_eq!(config.to_string(), "archive.entries.find()");
    }

    #[test]
    fn all_clauses_render_in_fixed_order() {
        let mut config = QueryConfig::new(Domain::Builds);
        config.limit = Some(10);
        config.offset = Some(20);
        config.sort = Some(json!({ "$desc": ["created"] }));
        config.fields = vec!["name".to_string(), "number".to_string()];
        config.criteria = Some(json!({ "name": { "$match": "app-*" } }));

        assert_eq!(
            config.to_string(),
            r#"builds.find({"name":{"$match":"app-*"}}).include("name", "number").sort({"$desc":["created"]}).offset(20).limit(10)"#
        );
    }

    #[test]
    fn field_literals_are_json_escaped() {
        let mut config = QueryConfig::new(Domain::Items);
        config.fields = vec!["say \"hi\"".to_string(), "back\\slash".to_string()];

        assert_eq!(
            config.to_string(),
            r#"items.find().include("say \"hi\"", "back\\slash")"#
        );
    }

    #[test]
    fn zero_offset_is_omitted_but_zero_limit_is_kept() {
        let mut config = QueryConfig::new(Domain::Items);
        config.offset = Some(0);
        config.limit = Some(0);

        assert_eq!(config.to_string(), "items.find().limit(0)");
    }
}
