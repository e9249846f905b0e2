use crate::query::DomainQuery;
use derive_more::Display;
use std::str::FromStr;
use thiserror::Error as ThisError;

///
/// Domain
///
/// Queryable record category. The display form is the wire name that opens
/// every rendered query.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Domain {
    #[display("items")]
    Items,
    #[display("builds")]
    Builds,
    #[display("archive.entries")]
    ArchiveEntries,
}

impl Domain {
    pub const ALL: [Self; 3] = [Self::Items, Self::Builds, Self::ArchiveEntries];

    /// Wire name used as the query prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Items => "items",
            Self::Builds => "builds",
            Self::ArchiveEntries => "archive.entries",
        }
    }

    /// Start a fresh, empty query over this domain.
    #[must_use]
    pub fn query(self) -> DomainQuery {
        DomainQuery::new(self)
    }
}

// `archives` is the accessor name for `archive.entries`, so both parse.
impl FromStr for Domain {
    type Err = UnknownDomain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "items" => Ok(Self::Items),
            "builds" => Ok(Self::Builds),
            "archive.entries" | "archives" => Ok(Self::ArchiveEntries),
            other => Err(UnknownDomain {
                name: other.to_string(),
            }),
        }
    }
}

///
/// UnknownDomain
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown AQL domain `{name}` (expected items, builds or archive.entries)")]
pub struct UnknownDomain {
    pub name: String,
}
