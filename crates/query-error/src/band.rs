//! Numeric code bands, one per subsystem.

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// A contiguous range of codes reserved for one subsystem.
///
/// Consumers may match on ranges, so the bounds here are part of the
/// compatibility contract.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Band {
    Service,
    Admin,
    Parse,
    Plan,
    Authorization,
    SystemDatastore,
    CouchbaseDatastore,
    CouchbaseViewIndex,
    FileDatastore,
    OtherDatastore,
}

impl Band {
    /// Inclusive `(start, end)` bounds of the band.
    pub const fn range(self) -> (u32, u32) {
        match self {
            Band::Service => (1000, 1999),
            Band::Admin => (2000, 2999),
            Band::Parse => (3000, 3999),
            Band::Plan => (4000, 4999),
            Band::Authorization => (10000, 10999),
            Band::SystemDatastore => (11000, 11999),
            Band::CouchbaseDatastore => (12000, 12999),
            Band::CouchbaseViewIndex => (13000, 13999),
            Band::FileDatastore => (15000, 15999),
            Band::OtherDatastore => (16000, 16999),
        }
    }

    pub const fn includes(self, code: u32) -> bool {
        let (start, end) = self.range();
        code >= start && code <= end
    }

    /// Find the band a code falls in. Unassigned gaps return `None`.
    pub const fn of(code: u32) -> Option<Band> {
        match code {
            1000..=1999 => Some(Band::Service),
            2000..=2999 => Some(Band::Admin),
            3000..=3999 => Some(Band::Parse),
            4000..=4999 => Some(Band::Plan),
            10000..=10999 => Some(Band::Authorization),
            11000..=11999 => Some(Band::SystemDatastore),
            12000..=12999 => Some(Band::CouchbaseDatastore),
            13000..=13999 => Some(Band::CouchbaseViewIndex),
            15000..=15999 => Some(Band::FileDatastore),
            16000..=16999 => Some(Band::OtherDatastore),
            _ => None,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Band::Service => "Service/API request errors",
            Band::Admin => "Admin (clustering and accounting) errors",
            Band::Parse => "Parse errors",
            Band::Plan => "Plan errors",
            Band::Authorization => "Authorization",
            Band::SystemDatastore => "System-internal datastore",
            Band::CouchbaseDatastore => "Couchbase-backed datastore",
            Band::CouchbaseViewIndex => "Couchbase view-index subsystem",
            Band::FileDatastore => "File-backed datastore",
            Band::OtherDatastore => "Generic/other/mock datastore",
        }
    }

    /// Dotted prefix every key in this band starts with.
    pub const fn key_prefix(self) -> &'static str {
        match self {
            Band::Service => "service.",
            Band::Admin => "admin.",
            Band::Parse => "parse.",
            Band::Plan => "plan.",
            Band::Authorization
            | Band::SystemDatastore
            | Band::CouchbaseDatastore
            | Band::CouchbaseViewIndex
            | Band::FileDatastore
            | Band::OtherDatastore => "datastore.",
        }
    }
}
