use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Outcome of a WHOIS resolution for one registered domain.
///
/// Parsed and freetext extraction are mutually exclusive by
/// construction: a record that parses never falls through to freetext
/// counting, so the two WHOIS signals can never fire together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhoisResolution {
    /// The structured record named an administrative country.
    Parsed(String),
    /// Structured parsing failed; country mentions counted in the raw
    /// record text instead.
    Freetext(Vec<(String, u32)>),
    /// The record was retrieved but yielded nothing usable.
    Empty,
    /// The domain was never resolved.
    Absent,
}

/// Access to cached WHOIS resolutions keyed by registered domain.
pub trait IWhoisLookup: Send + Sync {
    fn lookup(&self, registered_domain: &str) -> WhoisResolution;
}

/// In-memory WHOIS table.
#[derive(Debug, Default, Clone)]
pub struct WhoisTable {
    entries: HashMap<String, WhoisResolution>,
}

impl WhoisTable {
    pub fn new(entries: HashMap<String, WhoisResolution>) -> Self {
        Self { entries }
    }

    pub fn insert(&mut self, domain: impl Into<String>, resolution: WhoisResolution) {
        self.entries.insert(domain.into(), resolution);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IWhoisLookup for WhoisTable {
    fn lookup(&self, registered_domain: &str) -> WhoisResolution {
        self.entries
            .get(registered_domain)
            .cloned()
            .unwrap_or(WhoisResolution::Absent)
    }
}
